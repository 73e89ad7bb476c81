//! TUI event types
//!
//! Events flowing back into the select! loop from spawned request tasks.

use qachat_application::SubmitQueryError;
use qachat_domain::AskResponse;

/// Events delivered to the [`ChatApp`](super::ChatApp) loop
#[derive(Debug)]
pub enum AppEvent {
    /// A request task finished. `seq` is the submission number, for logs only:
    /// completions are applied in arrival order, not submission order.
    RequestCompleted {
        seq: u64,
        result: Result<AskResponse, SubmitQueryError>,
    },
}
