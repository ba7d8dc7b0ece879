//! English answer pack

use super::{AnswerPack, GuidedAnswer, KeywordRule};

pub(super) static PACK: AnswerPack = AnswerPack {
    probe_acknowledgement: "English API connection successful! 🇬🇧",
    guided: &[
        GuidedAnswer {
            question: "What are the eligibility requirements for the Digital Technology route?",
            answer: ELIGIBILITY_REQUIREMENTS,
        },
        GuidedAnswer {
            question: "How does the Tech Nation application process work? Please include all costs.",
            answer: PROCESS_AND_FEES,
        },
        GuidedAnswer {
            question: "What documents and evidence do I need to prepare?",
            answer: DOCUMENTS_AND_EVIDENCE,
        },
        GuidedAnswer {
            question: "How long does the whole process take?",
            answer: TIMELINE,
        },
    ],
    keyword_rules: &[KeywordRule {
        keywords: &["eligibility", "eligible", "qualify", "资格"],
        answer: ELIGIBILITY_SUMMARY,
    }],
    general_overview: GENERAL_OVERVIEW,
};

const ELIGIBILITY_REQUIREMENTS: &str = r#"UK Global Talent visa eligibility requirements:

1. Who can apply

Technical applicants (developers, engineers, data scientists, etc.) are eligible whether or not they work at a tech company.

Business applicants (product managers, investors, commercial leads, etc.) are eligible only if they work at a digital technology company.

Usually not eligible: non-technical roles at non-tech companies, outsourcing, consulting, service delivery, and management roles at traditional large corporates.

2. Examples of qualifying skills

Technical skills:

Software engineers (frontend, backend, DevOps, systems, mobile, games, blockchain, AI/ML, cyber security, UX/UI, VR/AR, etc.)

Data scientists / data engineers

CTO, VP Engineering or similar leadership at a fast-growing tech company

Business skills:

Leading significant venture capital investment (£25m+)

Commercial or operational lead at a product-led tech company

Product managers, SaaS or enterprise sales leaders, performance marketing specialists

CEO / COO / CIO / head of operations at a small or medium tech company

Senior VC / PE analysts with a track record of investments

3. Skills that are not recognised

Outsourcing, consulting (technical or management), ERP, systems administration

Routine management roles at large corporates

Junior investment roles without a supporting track record

Non-product service companies (agencies, outsourcing firms, etc.)

4. Definition

Digital technology / product-led company = the majority of revenue comes from digital products, platforms, services or hardware it builds itself.
(General consulting, outsourcing and service-delivery-led companies do not count.)

5. Routes

Exceptional Talent: recognised as a leader in digital technology within the last 5 years. Meet the mandatory criterion plus 2 optional criteria, with supporting evidence (innovation, industry recognition, significant contributions, academic output, etc.).

Exceptional Promise: recognised as having the potential to become a leader (usually fewer than 5 years in tech). Same criteria, assessed for an early-career applicant.

Next step: confirm that your responsibilities are genuinely core digital technology work rather than a supporting or user role. For more information contact info@sagefyai.com"#;

const PROCESS_AND_FEES: &str = r#"Tech Nation application process and costs:

📋 Two-stage application

Stage 1: Tech Nation endorsement
• Apply to: Tech Nation (independent technical assessor)
• Fee: £561 (non-refundable)
• Processing: 8-12 weeks standard, 3-5 weeks fast track (+£500-£1,500)
• How: online portal submission
• Requirement: a complete evidence pack and all documents

Stage 2: Home Office visa application
• Apply to: UK Home Office (UKVI)
• Fee: £205
• Processing: 3 weeks (outside the UK), 8 weeks (inside the UK)
• Precondition: Tech Nation endorsement must be granted first
• Also required: biometrics appointment, health checks where applicable

💰 Cost breakdown

Main applicant:
• Tech Nation endorsement: £561
• Home Office visa fee: £205
• Immigration Health Surcharge (5 years): £5,175
• Main applicant total: £5,941

Dependants (partner and children):
• Visa fee per person: £205
• Health surcharge per person (5 years): £5,175
• Per dependant: £5,380

Optional speed-ups:
• Tech Nation fast track: £500-£1,500
• Home Office priority service: £500-£800

📅 Planning:
1. Preparing materials: 3-6 months
2. Tech Nation decision: 8-12 weeks
3. Home Office decision: 3-8 weeks
4. Overall: 6-10 months

💡 Saving money: use standard processing and submit a complete pack to avoid reapplying."#;

const DOCUMENTS_AND_EVIDENCE: &str = r#"Documents and evidence checklist:

📄 Mandatory documents (every applicant)

1. Passport or national identity card
2. CV (maximum 3 pages)
   • Focus on your career in digital technology
   • Include quantified achievements and impact
3. Personal statement (maximum 1,000 words)
   • Explain how you meet the criteria
   • Describe your specific work in digital technology
   • Set out your plans in the UK
4. Letters of recommendation (3)
   • From well-known professionals in digital technology
   • Recommenders must know your work and achievements
   • Written specifically for this application, including the recommender's credentials

📂 Evidence portfolio (up to 10 items, covering at least 2 criteria)

Criterion 1 - External recognition:
• Mainstream media coverage and interviews about your work
• Keynote invitations at major technology conferences
• Industry awards and honours
• Expert panels and advisory roles
• Expert citations in industry reports

Criterion 2 - Technical expertise:
• Open-source contribution metrics (GitHub stars, forks, downloads)
• Technical papers in recognised journals or conferences
• Granted technology patents
• Peer recognition and citations
• Leadership of significant technical projects

Criterion 3 - Academic contribution or commercial success:
• Research papers and their citations
• Product launch metrics and user data
• Revenue growth and business results you were directly responsible for
• Significant commercial agreements and partnerships
• Successful fundraising or investment outcomes

Criterion 4 - Innovation:
• New technologies or methodologies you developed
• Major improvements to existing technology
• Leadership of digital transformation projects
• Delivery of innovative solutions
• Technical breakthroughs with industry impact

📋 Evidence quality:
• External recognition > internal recognition
• Quantified data > qualitative description
• Recent evidence > historical achievements (prefer the last 5 years)
• Third-party verification > self-declaration
For more information contact info@sagefyai.com"#;

const TIMELINE: &str = r#"UK Global Talent visa timeline:

⏰ Preparation: 3-6 months

Gathering materials: 2-4 months
• Map out career achievements and quantified results
• Collect media coverage and award certificates
• Organise open-source contributions and patent documents
• Prepare commercial success stories and data

Recommendation letters: 1-2 months
• Identify and approach 3 suitable recommenders
• Wait for tailored letters to be written
• Check letter quality and completeness

Writing: 2-4 weeks
• Personal statement (under 1,000 words)
• Polish the CV (under 3 pages)
• Complete the online application forms

📋 Official processing

Tech Nation endorsement:
• Standard: 8-12 weeks
• Fast track: 3-5 weeks (extra £500-£1,500)
• Outcome: endorsed / refused (after a refusal you must wait 6 months to reapply)

Home Office visa:
• Applying from outside the UK: 3 weeks
• Applying from inside the UK: 8 weeks
• Priority: 1 week (extra £500-£800)
• Biometrics appointment: usually within 1-2 weeks

🗓️ Overall

• Fastest: 4-5 months
  (3 months preparation + 1-2 months fast-tracked processing)
• Typical: 7-9 months
  (4 months preparation + 3-5 months standard processing)
• Conservative: 10-12 months
  (allowing for requests for more information and delays)

📅 Key reminders:
• Visa validity starts from the approval date, not the entry date
• You can apply inside or outside the UK; processing times differ
• If you need to arrive by a specific date, start preparing 12 months ahead

⚡ Saving time:
• Prepare materials and contact recommenders in parallel
• Study the criteria early and focus on your strongest areas
• Consider fast track if you are under time pressure
• Leave buffer time for requests for more information
For more information contact info@sagefyai.com"#;

const ELIGIBILITY_SUMMARY: &str = r#"UK Global Talent visa eligibility:

Basic requirements:
• Experience: at least 5 years in digital technology
• Nature of work: you must work in digital technology, not just use technology
• Age: no age limit
• Education: no specific degree required

Two routes:

1. Exceptional Talent
• For recognised industry leaders
• Recognition gained within the last 5 years
• Established, mature career stage

2. Exceptional Promise
• For early-career applicants with leadership potential
• Potential shown within the last 5 years
• Early career stage

Assessment criteria:
• Meet all mandatory criteria
• Meet at least 2 of the 4 optional criteria

Next step: confirm that your work is genuinely within digital technology and count your years of relevant experience."#;

const GENERAL_OVERVIEW: &str = r#"UK Global Talent visa essentials:

Overview:
• Specialist visa for digital technology
• No employer sponsorship needed
• Valid for 5 years, extendable
• Settlement (ILR) possible after 3-5 years

Basic requirements:
• 5+ years of relevant experience
• Evidence of exceptional talent or promise
• Meet the assessment criteria

Process:
1. Tech Nation endorsement (£561, 8-12 weeks)
2. Home Office visa (£205, 3-8 weeks)

Total fees: £766 + £5,175 health surcharge

Keys to success:
• Externally recognised evidence
• Quantified achievements
• High-quality recommendation letters
• A clear personal statement

Tell me which aspect you'd like to know more about and I can give more detailed guidance! For more information contact info@sagefyai.com"#;
