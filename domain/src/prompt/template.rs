//! Prompt text for each locale

use crate::core::locale::Locale;

/// Fixed prompt fragments used by [`PromptBuilder`](super::PromptBuilder)
pub struct PromptTemplate;

impl PromptTemplate {
    /// Role and expertise statement that opens every system instruction
    pub fn role_statement(locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => {
                "你是英国全球人才签证专家，专门协助Tech Nation数字技术路线申请。请用中文回答，提供具体可行的建议。"
            }
            Locale::En => {
                "You are a UK Global Talent visa expert specialising in Tech Nation applications for the Digital Technology route. Answer in English and give concrete, actionable advice."
            }
        }
    }

    /// Section that embeds the user's background excerpt, followed by the
    /// four analysis directives and the formatting directive.
    pub fn context_section(locale: Locale, excerpt: &str) -> String {
        match locale {
            Locale::Zh => format!(
                r#"

用户已提供简历信息：{}

请基于用户的具体背景提供个性化建议。要求：
1. 必须明确提及用户的当前或最近职位
2. 根据经验判断适合哪个路线
3. 推荐最强的2个评估标准
4. 提供3个最重要的下一步行动

格式要求：使用简洁清晰的格式，用 • 作为项目符号，避免过多粗体。"#,
                excerpt
            ),
            Locale::En => format!(
                r#"

The user has provided their résumé: {}

Give personalised advice based on this specific background. Requirements:
1. Explicitly name the user's current or most recent role
2. Judge which route fits their experience
3. Recommend the 2 strongest assessment criteria
4. Give the 3 most important next actions

Formatting: keep it concise and clear, use • as the bullet symbol, avoid heavy bold."#,
                excerpt
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_section_embeds_excerpt() {
        for locale in Locale::all() {
            let section = PromptTemplate::context_section(*locale, "Staff Engineer at Acme");
            assert!(section.contains("Staff Engineer at Acme"));
            assert!(section.contains('•'));
            assert!(section.starts_with("\n\n"));
        }
    }

    #[test]
    fn test_role_statement_mentions_route() {
        assert!(PromptTemplate::role_statement(Locale::Zh).contains("Tech Nation"));
        assert!(PromptTemplate::role_statement(Locale::En).contains("Digital Technology"));
    }
}
