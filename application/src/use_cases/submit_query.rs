//! Submit Query use case.
//!
//! The whole submit handler of a chat view:
//!
//! 1. Skip blank input (no request, nothing changes)
//! 2. POST `{ query, session_id }` through the [`AskGateway`]
//! 3. On success adopt the returned session + history and clear the input
//! 4. On failure log the cause and leave the state exactly as it was
//!
//! There is no retry, no de-duplication and no in-flight guard: every
//! call to [`SubmitQueryUseCase::execute`] is one request.

use crate::ports::ask_gateway::{AskGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use qachat_domain::util::truncate_str;
use qachat_domain::{AskRequest, AskResponse, ChatState};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// The notice shown to the user for every kind of request failure.
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to get response. Please try again.";

/// Errors that can occur while submitting a query.
#[derive(Error, Debug)]
pub enum SubmitQueryError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] GatewayError),
}

impl SubmitQueryError {
    /// Text for the user-facing alert. Deliberately the same for every cause.
    pub fn user_message(&self) -> &'static str {
        REQUEST_FAILED_MESSAGE
    }
}

/// Result of [`SubmitQueryUseCase::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Input was blank; no request was made.
    Skipped,
    /// The response was applied to the chat state.
    Applied,
    /// The request failed; the chat state is untouched.
    Failed(SubmitQueryError),
}

impl SubmitOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SubmitOutcome::Applied)
    }
}

/// Use case for submitting a query to the ask endpoint.
pub struct SubmitQueryUseCase {
    gateway: Arc<dyn AskGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for SubmitQueryUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl SubmitQueryUseCase {
    pub fn new(gateway: Arc<dyn AskGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Send one prepared request.
    ///
    /// Use this when the caller cannot hold the chat state across the
    /// await (the TUI applies the result from its event loop).
    pub async fn execute(&self, request: AskRequest) -> Result<AskResponse, SubmitQueryError> {
        info!("Submitting query: {}", truncate_str(&request.query, 100));
        debug!(
            "Session: {}",
            request
                .session_id
                .as_ref()
                .map(|s| s.as_str())
                .unwrap_or("<new>")
        );

        self.conversation_logger.log(ConversationEvent::new(
            "query_submitted",
            serde_json::json!({
                "query": request.query,
                "session_id": request.session_id,
            }),
        ));

        match self.gateway.ask(&request).await {
            Ok(response) => {
                info!(
                    "Received {} history entries for session {}",
                    response.history.len(),
                    response.session_id
                );
                self.conversation_logger.log(ConversationEvent::new(
                    "response_received",
                    serde_json::json!({
                        "session_id": response.session_id,
                        "history_len": response.history.len(),
                        "answer": response.latest_answer(),
                    }),
                ));
                Ok(response)
            }
            Err(e) => {
                error!("Ask request failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "request_failed",
                    serde_json::json!({
                        "query": request.query,
                        "error": e.to_string(),
                    }),
                ));
                Err(SubmitQueryError::RequestFailed(e))
            }
        }
    }

    /// Run the full submit contract against a chat state.
    pub async fn submit(&self, state: &mut ChatState) -> SubmitOutcome {
        let Some(request) = state.prepare_submission() else {
            debug!("Ignoring blank submission");
            return SubmitOutcome::Skipped;
        };

        match self.execute(request).await {
            Ok(response) => {
                state.apply_response(response);
                SubmitOutcome::Applied
            }
            Err(e) => SubmitOutcome::Failed(e),
        }
    }
}
