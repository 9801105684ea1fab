pub mod api;
pub mod chatbot;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod knowledge;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod text;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod errors_tests;

pub use chatbot::FaqBot;
pub use chatbot::EMPTY_MESSAGE_PROMPT;
pub use chatbot::FALLBACK_MESSAGE;
pub use config::AppConfig;
pub use errors::*;
pub use knowledge::KnowledgeBase;
pub use knowledge::KnowledgeEntry;
pub use matcher::jaccard;
pub use matcher::MatchResult;
pub use matcher::DEFAULT_THRESHOLD;
pub use text::normalize;
