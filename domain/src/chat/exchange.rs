//! Ask exchange: the request/response pair sent to the ask endpoint
//!
//! ```text
//! POST /ask   { "query": "...", "session_id": "..." | null }
//!   200 OK    { "session_id": "...", "history": [{ "role", "content" }, ...] }
//! ```

use super::entities::Message;
use super::session::SessionId;
use crate::core::query::Query;
use serde::{Deserialize, Serialize};

/// Body of a single ask request.
///
/// `session_id` is always present on the wire; `None` is sent as `null`
/// so the server knows to open a new conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
    pub session_id: Option<SessionId>,
}

impl AskRequest {
    pub fn new(query: Query, session_id: Option<SessionId>) -> Self {
        Self {
            query: query.into_content(),
            session_id,
        }
    }

    /// Whether this request continues an existing conversation.
    pub fn is_continuation(&self) -> bool {
        self.session_id.is_some()
    }
}

/// Body of a successful ask response.
///
/// `history` is the full conversation as the server sees it, not a delta.
/// Servers may also return `response` (the newest answer); it is optional
/// and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub session_id: SessionId,
    pub history: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl AskResponse {
    pub fn new(session_id: impl Into<SessionId>, history: Vec<Message>) -> Self {
        Self {
            session_id: session_id.into(),
            history,
            response: None,
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }

    /// The newest answer: the explicit `response` field if the server sent
    /// one, otherwise the last assistant entry in the history.
    pub fn latest_answer(&self) -> Option<&str> {
        self.response.as_deref().or_else(|| {
            self.history
                .iter()
                .rev()
                .find(|m| m.role.is_assistant())
                .map(|m| m.content.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_conversation_sends_null_session() {
        let request = AskRequest::new(Query::try_new("hi").unwrap(), None);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "query": "hi", "session_id": null }));
        assert!(!request.is_continuation());
    }

    #[test]
    fn test_continuation_echoes_session() {
        let request = AskRequest::new(Query::try_new("more").unwrap(), Some("s1".into()));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["session_id"], "s1");
        assert!(request.is_continuation());
    }

    #[test]
    fn test_response_without_answer_field() {
        let body = r#"{"session_id":"s1","history":[{"role":"user","content":"hi"}]}"#;
        let response: AskResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.session_id.as_str(), "s1");
        assert_eq!(response.history, vec![Message::user("hi")]);
        assert!(response.response.is_none());
        assert!(response.latest_answer().is_none());
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let body = r#"{"session_id":"s1","history":[],"usage":{"tokens":12}}"#;
        let response: AskResponse = serde_json::from_str(body).unwrap();
        assert!(response.history.is_empty());
    }

    #[test]
    fn test_response_missing_history_is_rejected() {
        let body = r#"{"session_id":"s1"}"#;
        assert!(serde_json::from_str::<AskResponse>(body).is_err());
    }

    #[test]
    fn test_latest_answer_prefers_response_field() {
        let response = AskResponse::new(
            "s1",
            vec![Message::user("hi"), Message::assistant("from history")],
        )
        .with_response("from field");
        assert_eq!(response.latest_answer(), Some("from field"));
    }

    #[test]
    fn test_latest_answer_falls_back_to_history() {
        let response = AskResponse::new(
            "s1",
            vec![
                Message::user("a"),
                Message::assistant("first"),
                Message::user("b"),
                Message::assistant("second"),
            ],
        );
        assert_eq!(response.latest_answer(), Some("second"));
    }
}
