//! Wire types for the backend API.
//!
//! Field names match the backend's JSON contract exactly; nothing here is
//! recomputed client-side.

pub mod health;
pub mod pagination;
pub mod shorten;
pub mod stats;

pub use health::HealthStatus;
pub use pagination::Page;
pub use shorten::{CreateRequest, ShortLink};
pub use stats::{ClickStats, CountryClicks, DailyClicks, RefererClicks};
