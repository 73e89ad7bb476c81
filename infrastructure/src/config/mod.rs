//! Configuration file loading for qachat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QACHAT_*` environment variables (`QACHAT_ENDPOINT__URL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./qachat.toml` or `./.qachat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/qachat/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEndpointConfig, FileLoggingConfig, FileOutputConfig,
    FileTuiConfig,
};
pub use loader::ConfigLoader;
