//! Infrastructure layer for qachat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEndpointConfig, FileLoggingConfig,
    FileOutputConfig, FileTuiConfig,
};
pub use http::HttpAskGateway;
pub use logging::JsonlConversationLogger;
