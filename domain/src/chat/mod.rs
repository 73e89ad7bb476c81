//! Chat domain.
//!
//! - [`entities::Message`]: a single role-tagged entry of the history
//! - [`session::SessionId`]: opaque server-assigned conversation token
//! - [`exchange::AskRequest`] / [`exchange::AskResponse`]: the wire contract
//! - [`state::ChatState`]: input buffer + history + session, owned by one view

pub mod entities;
pub mod exchange;
pub mod session;
pub mod state;
