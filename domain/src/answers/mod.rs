//! Prepared answers
//!
//! [`StaticAnswerStore`] holds everything the advisor can say without a
//! model: the connectivity-probe acknowledgement, the four guided answers,
//! and the keyword-selected degraded-mode answers used when no model
//! response is available.

mod en;
mod zh;

use crate::core::locale::Locale;

/// Sentinel question used by integrators to check the pipeline is wired up
pub const CONNECTIVITY_PROBE: &str = "test connection";

/// A guided question and its curated answer
#[derive(Debug)]
pub struct GuidedAnswer {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Degraded-mode rule: if any keyword occurs in the lowercased question,
/// `answer` is selected.
///
/// Keywords must be lowercase.
#[derive(Debug)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub answer: &'static str,
}

impl KeywordRule {
    pub fn matches(&self, lowercased: &str) -> bool {
        self.keywords.iter().any(|k| lowercased.contains(k))
    }
}

/// All static text for one locale
#[derive(Debug)]
pub struct AnswerPack {
    pub probe_acknowledgement: &'static str,
    pub guided: &'static [GuidedAnswer],
    /// Evaluated in order; first match wins
    pub keyword_rules: &'static [KeywordRule],
    pub general_overview: &'static str,
}

/// Read-only lookup over the answer pack of a locale.
#[derive(Debug, Clone, Copy)]
pub struct StaticAnswerStore {
    locale: Locale,
    pack: &'static AnswerPack,
}

impl StaticAnswerStore {
    pub fn new(locale: Locale) -> Self {
        let pack = match locale {
            Locale::Zh => &zh::PACK,
            Locale::En => &en::PACK,
        };
        Self { locale, pack }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Whether `question` is exactly the connectivity probe
    pub fn is_probe(question: &str) -> bool {
        question == CONNECTIVITY_PROBE
    }

    pub fn probe_acknowledgement(&self) -> &'static str {
        self.pack.probe_acknowledgement
    }

    /// The guided questions, in display order
    pub fn guided_questions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pack.guided.iter().map(|g| g.question)
    }

    /// Exact-match lookup of a guided question's prepared answer.
    pub fn guided_answer(&self, question: &str) -> Option<&'static str> {
        self.pack
            .guided
            .iter()
            .find(|g| g.question == question)
            .map(|g| g.answer)
    }

    /// Keyword-selected degraded-mode answer. Never fails.
    pub fn fallback_answer(&self, question: &str) -> &'static str {
        let query = question.to_lowercase();
        self.pack
            .keyword_rules
            .iter()
            .find(|rule| rule.matches(&query))
            .map(|rule| rule.answer)
            .unwrap_or(self.pack.general_overview)
    }
}

impl Default for StaticAnswerStore {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_locale_has_four_guided_questions() {
        for locale in Locale::all() {
            let store = StaticAnswerStore::new(*locale);
            assert_eq!(store.guided_questions().count(), 4, "locale {}", locale);
        }
    }

    #[test]
    fn test_guided_answer_exact_match_only() {
        let store = StaticAnswerStore::new(Locale::Zh);
        let answer = store.guided_answer("整个过程需要多长时间？").unwrap();
        assert!(answer.starts_with("英国全球人才签证完整时间线"));

        // Trailing whitespace or a different question mark is not a match
        assert!(store.guided_answer("整个过程需要多长时间？ ").is_none());
        assert!(store.guided_answer("整个过程需要多长时间?").is_none());
    }

    #[test]
    fn test_zh_timeline_and_overview_keep_trailing_space() {
        let store = StaticAnswerStore::new(Locale::Zh);
        let timeline = store.guided_answer("整个过程需要多长时间？").unwrap();
        assert!(timeline.ends_with("info@sagefyai.com "));
        assert!(store
            .fallback_answer("可以带家属吗？")
            .ends_with("info@sagefyai.com "));

        let documents = store.guided_answer("我需要准备什么文件和证据？").unwrap();
        assert!(documents.ends_with("info@sagefyai.com"));
    }

    #[test]
    fn test_guided_answers_are_distinct_and_non_empty() {
        for locale in Locale::all() {
            let store = StaticAnswerStore::new(*locale);
            let answers: Vec<_> = store
                .guided_questions()
                .filter_map(|q| store.guided_answer(q))
                .collect();
            assert_eq!(answers.len(), 4);
            assert!(answers.iter().all(|a| !a.trim().is_empty()));
            for (i, a) in answers.iter().enumerate() {
                assert!(!answers[i + 1..].contains(a));
            }
        }
    }

    #[test]
    fn test_guided_questions_do_not_cross_locales() {
        let zh = StaticAnswerStore::new(Locale::Zh);
        let en = StaticAnswerStore::new(Locale::En);
        for q in en.guided_questions() {
            assert!(zh.guided_answer(q).is_none());
        }
    }

    #[test]
    fn test_fallback_eligibility_keyword_case_insensitive() {
        let store = StaticAnswerStore::new(Locale::Zh);
        let eligibility = store.fallback_answer("我有资格吗");
        assert!(eligibility.starts_with("英国全球人才签证申请资格"));
        assert_eq!(store.fallback_answer("What about ELIGIBILITY?"), eligibility);
        assert_eq!(store.fallback_answer("申请资格有哪些"), eligibility);
    }

    #[test]
    fn test_fallback_default_overview() {
        let store = StaticAnswerStore::new(Locale::Zh);
        let answer = store.fallback_answer("可以带家属吗？");
        assert!(answer.starts_with("英国全球人才签证核心信息"));

        let en = StaticAnswerStore::new(Locale::En);
        assert!(en.fallback_answer("Can I bring my family?").starts_with("UK Global Talent visa essentials"));
        assert!(en.fallback_answer("Am I Eligible?").starts_with("UK Global Talent visa eligibility"));
    }

    #[test]
    fn test_fallback_never_empty() {
        for locale in Locale::all() {
            let store = StaticAnswerStore::new(*locale);
            for q in ["", " ", "?", "eligibility", "🇬🇧"] {
                assert!(!store.fallback_answer(q).is_empty());
            }
        }
    }

    #[test]
    fn test_probe_detection() {
        assert!(StaticAnswerStore::is_probe("test connection"));
        assert!(!StaticAnswerStore::is_probe("Test connection"));
        assert!(!StaticAnswerStore::is_probe("test connection "));
        assert!(StaticAnswerStore::new(Locale::Zh)
            .probe_acknowledgement()
            .contains("连接成功"));
    }
}
