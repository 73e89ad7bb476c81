//! Application layer for qachat
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EndpointParams;
pub use ports::{
    ask_gateway::{AskGateway, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
};
pub use use_cases::submit_query::{
    REQUEST_FAILED_MESSAGE, SubmitOutcome, SubmitQueryError, SubmitQueryUseCase,
};
