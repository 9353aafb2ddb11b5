//! Paged list responses.

use serde::{Deserialize, Serialize};

/// One page of a listing.
///
/// Invariants are server-enforced and trusted, not recomputed here:
/// `page ∈ [1, max(1, total_pages)]`, `items.len() <= limit`,
/// `total_pages = ceil(total / limit)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// The backend names this field after the resource it lists.
    #[serde(rename = "urls")]
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// True when an earlier page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// True when a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
