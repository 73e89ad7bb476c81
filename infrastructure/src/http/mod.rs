//! HTTP adapter for the ask endpoint.
//!
//! - [`HttpAskGateway`]: reqwest-backed [`AskGateway`](qachat_application::AskGateway)

mod gateway;

pub use gateway::HttpAskGateway;
