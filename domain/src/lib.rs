//! Domain layer for qachat
//!
//! This crate contains the chat state, the ask exchange types, and the
//! value objects shared by the other layers. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Chat state
//!
//! A chat view owns exactly three things: the input buffer, the
//! conversation history, and the session identifier. The server is the
//! source of truth for history; every successful response replaces it
//! wholesale.
//!
//! ## Ask exchange
//!
//! One request per submission: `{ query, session_id }` goes out,
//! `{ session_id, history }` comes back.

pub mod chat;
pub mod config;
pub mod core;
pub mod util;

// Re-export commonly used types
pub use chat::{
    entities::{Message, Role},
    exchange::{AskRequest, AskResponse},
    session::SessionId,
    state::ChatState,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, query::Query};
