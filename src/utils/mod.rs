//! Pure helpers and the clipboard adapter.
//!
//! - [`validate`] - URL and custom-code validation
//! - [`format`] - display formatting for timestamps, counts, and long strings
//! - [`clipboard`] - best-effort copy-to-clipboard

pub mod clipboard;
pub mod format;
pub mod validate;
