//! Reply generation for a single chat message

use std::sync::Arc;

use tracing::debug;

use crate::knowledge::KnowledgeBase;
use crate::matcher::MatchResult;
use crate::matcher::DEFAULT_THRESHOLD;

/// Reply to an empty or whitespace-only message
pub const EMPTY_MESSAGE_PROMPT: &str = "⚠️ Please type a message.";

/// Reply when no FAQ entry clears the threshold
pub const FALLBACK_MESSAGE: &str = "I couldn’t understand that. Please choose one of the options below:\n\n\
➡️ Support hours\n\
➡️ Reset password\n\
➡️ Contact support\n\
➡️ Refund policy\n\
➡️ Update profile\n\
➡️ Orders";

/// Answers messages from a shared, read-only knowledge base
#[derive(Debug, Clone)]
pub struct FaqBot {
    knowledge: Arc<KnowledgeBase>,
    threshold: f64,
}

impl FaqBot {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::with_threshold(knowledge, DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(knowledge: Arc<KnowledgeBase>, threshold: f64) -> Self {
        Self {
            knowledge,
            threshold,
        }
    }

    /// Build from configuration: knowledge source and match threshold
    pub fn from_config(config: &crate::config::AppConfig) -> crate::Result<Self> {
        let knowledge = Arc::new(KnowledgeBase::from_config(config)?);
        Ok(Self::with_threshold(knowledge, config.threshold()))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Reply to a message; always returns text
    pub fn get_response(&self, message: &str) -> String {
        if message.trim().is_empty() {
            return EMPTY_MESSAGE_PROMPT.to_string();
        }

        match self.knowledge.find_match(message, self.threshold) {
            MatchResult::Answer(answer) => answer,
            MatchResult::NoMatch => {
                debug!("No FAQ entry matched, sending fallback");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}

impl Default for FaqBot {
    fn default() -> Self {
        Self::new(Arc::new(KnowledgeBase::builtin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_text() {
        assert_eq!(
            FALLBACK_MESSAGE,
            "I couldn’t understand that. Please choose one of the options below:\n\n➡️ Support hours\n➡️ Reset password\n➡️ Contact support\n➡️ Refund policy\n➡️ Update profile\n➡️ Orders"
        );
    }

    #[test]
    fn test_empty_message_bypasses_matcher() {
        // Even a threshold of zero with a catch-all entry does not answer
        let kb = Arc::new(KnowledgeBase::from_pairs([("", "catch-all")]));
        let bot = FaqBot::with_threshold(kb, 0.0);
        assert_eq!(bot.get_response(""), EMPTY_MESSAGE_PROMPT);
        assert_eq!(bot.get_response(" \t\n"), EMPTY_MESSAGE_PROMPT);
    }

    #[test]
    fn test_stopword_message_gets_fallback() {
        let bot = FaqBot::default();
        assert_eq!(bot.get_response("what is the"), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_threshold_override() {
        let bot = FaqBot::with_threshold(Arc::new(KnowledgeBase::builtin()), 0.6);
        // "policy" scores 0.5 against "refund policy"
        assert_eq!(bot.get_response("policy"), FALLBACK_MESSAGE);
        assert_eq!(FaqBot::default().threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_from_config() {
        let mut config = crate::config::AppConfig::default();
        config.matcher.threshold = 0.9;
        let bot = FaqBot::from_config(&config).unwrap();
        assert_eq!(bot.threshold(), 0.9);
        assert_eq!(bot.knowledge().len(), 12);
    }
}
