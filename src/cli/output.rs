//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the FAQ bot CLI

use crate::models::ConversationLogEntry;
use crate::AppConfig;

/// Safely truncate a string at character boundary (not byte boundary)
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Collapse newlines so a multi-line reply fits on one row
fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Print a bot reply
pub fn print_reply(reply: &str) {
    println!("🤖 {reply}");
}

/// Print conversation history, newest first
pub fn print_history(entries: &[ConversationLogEntry], total: i64) {
    println!("🗂️  Showing {} of {} recorded conversations:", entries.len(), total);
    for entry in entries {
        println!(
            "  #{} [{}]",
            entry.id,
            entry.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
        println!("    You: {}", truncate_str(&single_line(&entry.user_message), 100));
        println!("    Bot: {}", truncate_str(&single_line(&entry.bot_response), 100));
    }
}

/// Print the effective configuration
pub fn print_config(config: &AppConfig) {
    println!("📋 FAQ Bot Configuration:");
    println!();

    println!("🌐 Server:");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  CORS: {}", config.server.enable_cors);
    println!();

    println!("🗄️  Conversation log:");
    println!("  Enabled: {}", config.conversation_log_enabled());
    println!("  URL: {}", config.database_url());
    println!("  Max connections: {}", config.max_connections());
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!();

    println!("🔍 Matcher:");
    println!("  Threshold: {}", config.threshold());
    println!(
        "  Knowledge base: {}",
        config.knowledge_path().unwrap_or("built-in")
    );
}

pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 5), "hello...");
        assert_eq!(truncate_str("➡️➡️➡️", 2), "➡️...");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\n\nb  c"), "a b c");
    }
}
