//! CLI command definitions

use clap::{Parser, ValueEnum};
use qachat_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for one-shot mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Role-labelled transcript
    Plain,
    /// Raw response body as JSON
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => DomainOutputFormat::Plain,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for qachat
#[derive(Parser, Debug)]
#[command(name = "qachat")]
#[command(author, version, about = "Terminal chat client for an ask endpoint")]
#[command(long_about = r#"
qachat sends your questions to an ask endpoint and shows the conversation
history the server returns.

Without a QUESTION it opens an interactive chat view. With a QUESTION it
asks once, prints the history and exits.

Configuration is loaded from (in priority order):
1. QACHAT_* environment variables   e.g. QACHAT_ENDPOINT__URL
2. --config <path>                  Explicit config file
3. ./qachat.toml                    Project-level config
4. ~/.config/qachat/config.toml     Global config

Example:
  qachat
  qachat "What is the capital of France?"
  qachat --session 3f1c "And its population?" -o json
"#)]
pub struct Cli {
    /// Ask once and print the history instead of opening the chat view
    pub question: Option<String>,

    /// Ask endpoint URL (default: http://localhost:8000/ask)
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Resume an existing session
    #[arg(short, long, value_name = "ID")]
    pub session: Option<String>,

    /// Output format for one-shot mode
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Append a JSONL transcript of every exchange to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
