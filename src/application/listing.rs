//! State machine for the "browse short URLs" flow.

use crate::api::ApiClient;
use crate::api::dto::{Page, ShortLink};
use crate::api::transport::HttpTransport;
use crate::application::notice::{CopyFeedback, Notice};
use crate::error::ApiError;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Width of the sliding page-number window.
const PAGE_WINDOW: u32 = 5;

/// Identifies one outstanding fetch.
///
/// A response is applied only while its ticket is still current, so a slow
/// response for an earlier page can never overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    token: u64,
    page: u32,
}

impl FetchTicket {
    /// The page this fetch was issued for.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// The set of page numbers to present: at most [`PAGE_WINDOW`] consecutive
/// pages starting two behind the current page where possible, clipped to
/// `[1, total_pages]`.
pub fn page_window(page: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }

    let start = page.saturating_sub(2).max(1);
    (start..)
        .take(PAGE_WINDOW as usize)
        .take_while(|p| *p <= total_pages)
        .collect()
}

/// Holds the current page selection and the last-fetched page of links.
///
/// Selecting a page never fetches inline; the host drives [`refresh`](Self::refresh)
/// after a selection (and after a successful submission), so exactly one
/// fetch occurs per page change regardless of how many affordances could
/// trigger it.
pub struct ListController<T: HttpTransport> {
    client: Arc<ApiClient<T>>,
    current_page: u32,
    limit: u32,
    data: Option<Page<ShortLink>>,
    loading: bool,
    fetch_token: u64,
    notice: Option<Notice>,
    copy_feedback: Option<CopyFeedback>,
}

impl<T: HttpTransport> ListController<T> {
    pub fn new(client: Arc<ApiClient<T>>, limit: u32) -> Self {
        Self {
            client,
            current_page: 1,
            limit: limit.max(1),
            data: None,
            loading: false,
            fetch_token: 0,
            notice: None,
            copy_feedback: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// The last successfully fetched page, if any.
    pub fn page(&self) -> Option<&Page<ShortLink>> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Consumes the pending transient notice, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Stores a new page selection, clamped to `[1, max(1, total_pages)]`
    /// once a page is known. Does not fetch.
    pub fn select_page(&mut self, page: u32) {
        let upper = self
            .data
            .as_ref()
            .map(|d| d.total_pages.max(1))
            .unwrap_or(u32::MAX);
        self.current_page = page.clamp(1, upper);
    }

    /// Issues the fetch for the current selection and applies the result.
    ///
    /// The explicit refresh entry point: called by the host on mount, after
    /// a page selection, and after a successful submission.
    pub async fn refresh(&mut self) {
        let ticket = self.begin_fetch();
        let result = self.client.list_short_links(ticket.page, self.limit).await;
        self.apply_fetch(ticket, result);
    }

    /// Registers a new outstanding fetch and invalidates all earlier ones.
    ///
    /// Public together with [`apply_fetch`](Self::apply_fetch) so a host
    /// driving concurrent fetches gets the same discard behavior
    /// [`refresh`](Self::refresh) uses internally.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_token += 1;
        self.loading = true;
        FetchTicket {
            token: self.fetch_token,
            page: self.current_page,
        }
    }

    /// Applies a completed fetch.
    ///
    /// A stale ticket is discarded outright. On success the stored page is
    /// replaced; on failure the previously rendered page stays in place
    /// (stale-but-visible) and an error notice is queued.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Page<ShortLink>, ApiError>) {
        if ticket.token != self.fetch_token {
            tracing::debug!(page = ticket.page, "discarding stale list response");
            return;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                tracing::debug!(page = page.page, items = page.items.len(), "list page loaded");
                self.data = Some(page);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch short links");
                self.notice = Some(Notice::error("Failed to fetch URLs"));
            }
        }
    }

    /// Page numbers to present for the stored page.
    pub fn page_numbers(&self) -> Vec<u32> {
        self.data
            .as_ref()
            .map(|d| page_window(d.page, d.total_pages))
            .unwrap_or_default()
    }

    pub fn has_prev(&self) -> bool {
        self.data.as_ref().is_some_and(Page::has_prev)
    }

    pub fn has_next(&self) -> bool {
        self.data.as_ref().is_some_and(Page::has_next)
    }

    /// Marks `code` as just copied, replacing any previous marker.
    pub fn mark_copied(&mut self, code: impl Into<String>, now: DateTime<Utc>) {
        self.copy_feedback = Some(CopyFeedback::new(code, now));
    }

    /// The short code currently showing "copied" feedback, if unexpired.
    pub fn copied_code(&self, now: DateTime<Utc>) -> Option<&str> {
        self.copy_feedback
            .as_ref()
            .and_then(|feedback| feedback.active_code(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_centered_two_behind_where_possible() {
        assert_eq!(page_window(7, 20), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_window(10, 20), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn window_clips_to_lower_bound() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 20), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 20), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_clips_to_upper_bound() {
        assert_eq!(page_window(20, 20), vec![18, 19, 20]);
        assert_eq!(page_window(19, 20), vec![17, 18, 19, 20]);
    }

    #[test]
    fn window_for_single_page() {
        assert_eq!(page_window(1, 1), vec![1]);
    }

    #[test]
    fn window_is_empty_without_pages() {
        assert!(page_window(1, 0).is_empty());
    }
}
