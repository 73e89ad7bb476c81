//! Presentation layer for qachat
//!
//! This crate contains CLI definitions, output formatters for one-shot
//! mode and the interactive terminal chat view.

pub mod cli;
pub mod config;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{ChatViewConfig, OutputConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use tui::ChatApp;
