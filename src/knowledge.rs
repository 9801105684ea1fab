//! FAQ knowledge base
//!
//! An ordered, immutable list of question/answer pairs. Questions are
//! normalized once when the knowledge base is built.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use tracing::info;

use crate::text::normalize;
use crate::text::TokenSet;
use crate::FaqBotError;
use crate::Result;

const GREETING: &str = "Hello! How can I help you today?";
const FAREWELL: &str = "Goodbye! Have a great day.";

/// Built-in FAQ entries, in match-priority order
pub const BUILTIN_FAQ: &[(&str, &str)] = &[
    ("hello", GREETING),
    ("hi", GREETING),
    ("hey", GREETING),
    ("support hours", "Our support team is available 24/7 to assist you."),
    (
        "reset password",
        "To reset your password, go to Settings > Security > Reset Password with you Credentials.",
    ),
    (
        "contact support",
        "You can contact support at support@example.com or contact +91 xxxxx xxxxx for your querry.",
    ),
    (
        "Refund policy",
        "Our refund policy allows refunds within 30 days of purchase *My Orders > Help > raise a Refund querry or Contact Support.",
    ),
    (
        "Return policy",
        "Our return policy allows return within 07 days of purchase *My Orders > Help > raise a Return querry or Contact Support.",
    ),
    (
        "update profile",
        "To update your profile, go to Settings > Profile and make changes.",
    ),
    (
        "orders",
        "You can view your orders in the 'My Orders' section of your account.",
    ),
    ("goodbye", FAREWELL),
    ("bye", FAREWELL),
];

/// A question/answer pair with its precomputed token set
#[derive(Debug, Clone)]
pub struct KnowledgeEntry {
    question: String,
    normalized_question: TokenSet,
    answer: String,
}

impl KnowledgeEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        let question = question.into();
        let normalized_question = normalize(&question);
        Self {
            question,
            normalized_question,
            answer: answer.into(),
        }
    }

    /// Source question text, as written
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn normalized_question(&self) -> &TokenSet {
        &self.normalized_question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// One `[[entries]]` table of a knowledge base file
#[derive(Debug, Clone, Deserialize)]
pub struct FaqRecord {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
struct FaqFile {
    #[serde(default)]
    entries: Vec<FaqRecord>,
}

/// The ordered set of FAQ entries consulted by the matcher
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        for entry in &entries {
            if entry.normalized_question.is_empty() {
                debug!(
                    "FAQ question {:?} has no meaningful words and will never match",
                    entry.question
                );
            }
        }
        Self { entries }
    }

    /// Build from (question, answer) pairs, preserving order
    pub fn from_pairs<Q, A>(pairs: impl IntoIterator<Item = (Q, A)>) -> Self
    where
        Q: Into<String>,
        A: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(question, answer)| KnowledgeEntry::new(question, answer))
                .collect(),
        )
    }

    /// The hardcoded FAQ shipped with the service
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_FAQ.iter().copied())
    }

    /// Parse a TOML document of `[[entries]]` with `question` and `answer`
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: FaqFile = toml::from_str(content)?;
        if file.entries.is_empty() {
            return Err(FaqBotError::Knowledge(
                "knowledge base file contains no entries".to_string(),
            ));
        }
        Ok(Self::from_pairs(
            file.entries.into_iter().map(|r| (r.question, r.answer)),
        ))
    }

    /// Load a knowledge base file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let kb = Self::from_toml_str(&content)?;
        info!("Loaded {} FAQ entries from {}", kb.len(), path.display());
        Ok(kb)
    }

    /// Load from the configured file, or fall back to the built-in FAQ
    pub fn from_config(config: &crate::config::AppConfig) -> Result<Self> {
        match config.knowledge_path() {
            Some(path) => Self::from_file(path),
            None => {
                let kb = Self::builtin();
                info!("Using {} built-in FAQ entries", kb.len());
                Ok(kb)
            }
        }
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
