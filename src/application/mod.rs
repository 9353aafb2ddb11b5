//! View-state controllers for the two user flows.
//!
//! - [`submission`] - validate → submit → result for "create short URL"
//! - [`listing`] - fetch → store page → paginate for "browse short URLs"
//!
//! The host composes the two: after a successful submission it calls
//! [`listing::ListController::refresh`] directly. Neither controller holds
//! shared mutable state beyond its own view state.

pub mod listing;
pub mod notice;
pub mod submission;

pub use listing::{FetchTicket, ListController, page_window};
pub use notice::{CopyFeedback, Notice, NoticeLevel};
pub use submission::{SubmissionController, SubmitOutcome, SubmitState};
