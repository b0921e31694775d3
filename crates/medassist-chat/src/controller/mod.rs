//! Chat session controller.
//!
//! Owns the transcript, the pending location, the facility results and the
//! in-flight flag. Submissions are validated and gated synchronously; an
//! accepted submission hands back a `PendingDispatch` that the caller runs
//! and feeds to `resolve`, so other input can still be handled (and
//! rejected) while a reply is outstanding.

mod machine;
mod state;
mod types;


pub use machine::ChatSessionController;
pub use state::{Phase, StateSnapshot};
pub use types::{ControllerOptions, DispatchOutcome, PendingDispatch, SubmitRejection};
