//! Chat state aggregate
//!
//! The three pieces of state a chat view owns. Every mutation goes through
//! here so the submit/apply rules live in one place:
//!
//! - keystrokes edit the input buffer synchronously
//! - a submission is only produced for non-blank input
//! - a response replaces session + history and clears the input
//! - a failure changes nothing

use super::entities::Message;
use super::exchange::{AskRequest, AskResponse};
use super::session::SessionId;
use crate::core::query::Query;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    input: String,
    history: Vec<Message>,
    session_id: Option<SessionId>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a conversation the server already knows about.
    pub fn with_session(session_id: impl Into<SessionId>) -> Self {
        Self {
            session_id: Some(session_id.into()),
            ..Self::default()
        }
    }

    // -- Input buffer --

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    // -- Server-owned state --

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    /// Build the request for the current input, or `None` if the input is
    /// blank. The query is sent exactly as typed, surrounding whitespace
    /// included. Nothing is mutated: the input stays until a response
    /// arrives.
    pub fn prepare_submission(&self) -> Option<AskRequest> {
        let query = Query::try_new(self.input.as_str()).ok()?;
        Some(AskRequest::new(query, self.session_id.clone()))
    }

    /// Adopt the server's view of the conversation.
    pub fn apply_response(&mut self, response: AskResponse) {
        self.session_id = Some(response.session_id);
        self.history = response.history;
        self.input.clear();
    }
}
