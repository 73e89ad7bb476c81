//! Ask gateway port
//!
//! Defines the interface for talking to the ask endpoint.

use async_trait::async_trait;
use qachat_domain::{AskRequest, AskResponse};
use thiserror::Error;

/// Errors that can occur during an ask round-trip
///
/// The variants exist for diagnostics only. The user sees every one of
/// them as the same "request failed" notice.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Server returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for the ask endpoint
///
/// One call is one HTTP request. Implementations must not retry.
#[async_trait]
pub trait AskGateway: Send + Sync {
    /// Send a query and return the server's view of the conversation
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, GatewayError>;
}
