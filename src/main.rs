use clap::Parser;
use faqbot::cli::run_command;
use faqbot::cli::Cli;
use faqbot::config::AppConfig;
use faqbot::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    if cli.verbose {
        faqbot::logging::init_logging_with_level("debug")?;
    } else {
        faqbot::logging::init_logging_with_config(&config)?;
    }
    info!("Configuration loaded successfully");

    run_command(&config, cli.command).await
}
