//! CLI command definitions and argument parsing

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "faqbot")]
#[command(about = "FAQ chat service: answer questions from a fixed knowledge base")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP chat server
    Serve {
        /// Host to bind (default: from config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (default: from config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Enable permissive CORS
        #[arg(long)]
        cors: bool,
    },
    /// Answer a single question and exit
    Ask {
        /// The question to ask
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Create the conversation log table
    Init,
    /// Show recent conversations
    History {
        /// Maximum number of conversations to show
        #[arg(short, long, default_value = "20")]
        limit: u32,
    },
    /// Show current configuration
    Config,
}
