//! Application-level configuration.
//!
//! - [`EndpointParams`]: where the ask endpoint lives and how long to wait for it

pub mod endpoint_params;

pub use endpoint_params::{DEFAULT_ASK_ENDPOINT, EndpointParams};
