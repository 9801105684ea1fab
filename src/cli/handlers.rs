//! CLI command handlers
//!
//! This module contains all the command handlers for the FAQ bot CLI

use tracing::warn;

use crate::api::serve_api;
use crate::chatbot::FaqBot;
use crate::cli::commands::Commands;
use crate::cli::output::*;
use crate::database::ConversationLog;
use crate::AppConfig;
use crate::Result;

/// Dispatch a parsed command
pub async fn run_command(config: &AppConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Serve { host, port, cors } => {
            handle_serve_command(config, host, port, cors).await
        }
        Commands::Ask { message } => handle_ask_command(config, &message.join(" ")),
        Commands::Init => handle_init_command(config).await,
        Commands::History { limit } => handle_history_command(config, limit).await,
        Commands::Config => {
            print_config(config);
            Ok(())
        }
    }
}

/// Handle serve command; CLI arguments take priority over config
pub async fn handle_serve_command(
    config: &AppConfig,
    host: Option<String>,
    port: Option<u16>,
    cors: bool,
) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let cors = cors || config.server.enable_cors;

    println!("🚀 Starting FAQ Bot Server");
    println!("==========================\n");
    println!("📍 Host: {host}");
    println!("🔌 Port: {port}");
    println!("🌐 CORS: {}", if cors { "Enabled" } else { "Disabled" });
    println!();

    serve_api(config, host, port, cors).await
}

/// Handle ask command
pub fn handle_ask_command(config: &AppConfig, message: &str) -> Result<()> {
    let bot = FaqBot::from_config(config)?;
    print_reply(&bot.get_response(message));
    Ok(())
}

/// Handle init command
pub async fn handle_init_command(config: &AppConfig) -> Result<()> {
    let log = ConversationLog::from_config(config).await?;
    log.init_schema().await?;
    print_success(&format!(
        "Conversation log initialized at {}",
        config.database_url()
    ));
    Ok(())
}

/// Handle history command
///
/// Reads an existing log only; `faqbot init` is what creates it.
pub async fn handle_history_command(config: &AppConfig, limit: u32) -> Result<()> {
    let url = config.database_url();
    let log = match ConversationLog::open_existing(url, config.max_connections()).await {
        Ok(log) => log,
        Err(e) => {
            warn!("Could not open conversation log at {}: {}", url, e);
            print_info(&missing_log_hint(url));
            return Ok(());
        }
    };

    if !log.has_schema().await? {
        print_info(&missing_log_hint(url));
        return Ok(());
    }

    let total = log.count().await?;
    if total == 0 {
        print_info("No conversations recorded yet");
        return Ok(());
    }

    let entries = log.recent(limit).await?;
    print_history(&entries, total);
    Ok(())
}

fn missing_log_hint(url: &str) -> String {
    format!("No conversation log at {url}; run `faqbot init` first")
}
