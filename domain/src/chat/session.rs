//! Session identifier value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque conversation token assigned by the server (Value Object)
///
/// The client never inspects or validates it; it only echoes it back on the
/// next request so the server can continue the same conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_bare_string() {
        let id = SessionId::new("3f1c");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"3f1c\"");
    }

    #[test]
    fn test_no_validation_on_contents() {
        // Whatever the server hands out is accepted, empty included.
        let id: SessionId = serde_json::from_str("\"\"").unwrap();
        assert_eq!(id.as_str(), "");
    }
}
