//! Jaccard-similarity question matching

use tracing::debug;

use crate::knowledge::KnowledgeBase;
use crate::text::normalize;
use crate::text::TokenSet;

/// Minimum score an entry must reach to be returned
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Outcome of matching a query against the knowledge base
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Answer(String),
    NoMatch,
}

impl MatchResult {
    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Answer(answer) => Some(answer),
            Self::NoMatch => None,
        }
    }
}

/// Size of the intersection over size of the union; 0.0 when both are empty
pub fn jaccard(a: &TokenSet, b: &TokenSet) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union.max(1) as f64
}

impl KnowledgeBase {
    /// Match a raw query, returning the best answer scoring at least `threshold`
    pub fn find_match(&self, query: &str, threshold: f64) -> MatchResult {
        self.find_match_tokens(&normalize(query), threshold)
    }

    /// Match an already-normalized query
    ///
    /// Entries are scanned in order and only a strictly higher score replaces
    /// the current best, so ties go to the earliest entry.
    pub fn find_match_tokens(&self, query: &TokenSet, threshold: f64) -> MatchResult {
        let mut best_score = 0.0;
        let mut best_answer: Option<&str> = None;

        for entry in self.entries() {
            let score = jaccard(query, entry.normalized_question());
            if score > best_score {
                best_score = score;
                best_answer = Some(entry.answer());
            }
        }

        debug!(
            "Best FAQ score {:.3} (threshold {:.3}) for {} query tokens",
            best_score,
            threshold,
            query.len()
        );

        match best_answer {
            Some(answer) if best_score >= threshold => MatchResult::Answer(answer.to_string()),
            _ => MatchResult::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> TokenSet {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    // ====== Jaccard Tests ======

    #[test]
    fn test_jaccard_both_empty() {
        assert_eq!(jaccard(&TokenSet::new(), &TokenSet::new()), 0.0);
    }

    #[test]
    fn test_jaccard_one_empty() {
        assert_eq!(jaccard(&set(&["refund"]), &TokenSet::new()), 0.0);
        assert_eq!(jaccard(&TokenSet::new(), &set(&["refund"])), 0.0);
    }

    #[test]
    fn test_jaccard_identical() {
        let a = set(&["reset", "password"]);
        assert_eq!(jaccard(&a, &a), 1.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        let a = set(&["refund", "policy"]);
        let b = set(&["return", "policy"]);
        assert!((jaccard(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_symmetry_and_bounds() {
        let samples = [
            set(&[]),
            set(&["orders"]),
            set(&["support", "hours"]),
            set(&["contact", "support"]),
            set(&["contact", "support", "hours", "today"]),
        ];
        for a in &samples {
            for b in &samples {
                let ab = jaccard(a, b);
                assert_eq!(ab, jaccard(b, a));
                assert!((0.0..=1.0).contains(&ab));
            }
        }
    }

    // ====== Matching Tests ======

    #[test]
    fn test_exact_match() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            kb.find_match("hello", DEFAULT_THRESHOLD),
            MatchResult::Answer("Hello! How can I help you today?".to_string())
        );
    }

    #[test]
    fn test_no_overlap_is_no_match() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.find_match("asdkjfh qwoeiru", DEFAULT_THRESHOLD), MatchResult::NoMatch);
    }

    #[test]
    fn test_empty_query_is_no_match() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.find_match("", 0.0), MatchResult::NoMatch);
        assert_eq!(kb.find_match("the and", 0.0), MatchResult::NoMatch);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // {"refund", "policy", "question"} vs {"refund", "policy"} scores 2/3
        let kb = KnowledgeBase::from_pairs([("refund policy", "refunds")]);
        assert_eq!(
            kb.find_match("refund policy question", 2.0 / 3.0).answer(),
            Some("refunds")
        );
        assert_eq!(kb.find_match("refund policy question", 0.7), MatchResult::NoMatch);
    }

    #[test]
    fn test_below_threshold() {
        // "policy" alone shares 1 of 2 words with each policy entry
        let kb = KnowledgeBase::builtin();
        assert!(kb.find_match("policy", DEFAULT_THRESHOLD).answer().is_some());
        assert_eq!(
            kb.find_match("policy details shipping costs", DEFAULT_THRESHOLD),
            MatchResult::NoMatch
        );
    }

    #[test]
    fn test_tie_goes_to_earliest_entry() {
        let kb = KnowledgeBase::from_pairs([
            ("store hours", "first"),
            ("hours of the store", "second"),
        ]);
        assert_eq!(
            kb.entries()[0].normalized_question(),
            kb.entries()[1].normalized_question()
        );
        assert_eq!(kb.find_match("store hours", DEFAULT_THRESHOLD).answer(), Some("first"));
    }

    #[test]
    fn test_builtin_policy_tie_prefers_refund() {
        let kb = KnowledgeBase::builtin();
        assert!(kb
            .find_match("policy", DEFAULT_THRESHOLD)
            .answer()
            .is_some_and(|a| a.starts_with("Our refund policy")));
    }

    #[test]
    fn test_higher_score_wins_over_order() {
        let kb = KnowledgeBase::from_pairs([("contact", "partial"), ("contact support", "full")]);
        assert_eq!(kb.find_match("contact support", DEFAULT_THRESHOLD).answer(), Some("full"));
    }

    #[test]
    fn test_empty_knowledge_base() {
        let kb = KnowledgeBase::new(Vec::new());
        assert!(kb.is_empty());
        assert_eq!(kb.find_match("hello", 0.0), MatchResult::NoMatch);
    }
}
