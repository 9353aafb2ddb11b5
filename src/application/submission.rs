//! State machine for the "create short URL" flow.

use crate::api::ApiClient;
use crate::api::dto::{CreateRequest, ShortLink};
use crate::api::transport::HttpTransport;
use crate::application::notice::Notice;
use crate::error::ValidationErrors;
use crate::utils::validate::{validate_form, with_assumed_protocol};
use std::sync::Arc;

/// Observable phase of the submission flow.
///
/// Validation is synchronous, so it is a step inside [`SubmissionController::submit`]
/// rather than a state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
}

/// What a call to [`SubmissionController::submit`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Field validation failed; errors are stored, nothing went out.
    Invalid,
    /// A submission is already outstanding; this attempt was refused.
    InFlight,
    /// The backend created the link. The host should refresh its list view.
    Created(ShortLink),
    /// The request was sent and failed; inputs are preserved for retry.
    Rejected,
}

/// Orchestrates validate → submit → render-result → reset.
///
/// Holds the raw field values, their validation errors, the stored result,
/// and at most one pending notice. Exactly one network call happens per
/// successful validation pass; validation failures stay local.
pub struct SubmissionController<T: HttpTransport> {
    client: Arc<ApiClient<T>>,
    url_input: String,
    custom_code_input: String,
    errors: ValidationErrors,
    result: Option<ShortLink>,
    state: SubmitState,
    notice: Option<Notice>,
}

impl<T: HttpTransport> SubmissionController<T> {
    pub fn new(client: Arc<ApiClient<T>>) -> Self {
        Self {
            client,
            url_input: String::new(),
            custom_code_input: String::new(),
            errors: ValidationErrors::default(),
            result: None,
            state: SubmitState::Idle,
            notice: None,
        }
    }

    pub fn set_url_input(&mut self, value: impl Into<String>) {
        self.url_input = value.into();
    }

    pub fn set_custom_code_input(&mut self, value: impl Into<String>) {
        self.custom_code_input = value.into();
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn custom_code_input(&self) -> &str {
        &self.custom_code_input
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Inline field errors from the last submit attempt.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The created link, present while in [`SubmitState::Succeeded`].
    pub fn result(&self) -> Option<&ShortLink> {
        self.result.as_ref()
    }

    /// Consumes the pending transient notice, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Runs validation and, when it passes, submits the create request.
    ///
    /// On success the inputs and errors are cleared and the result stored;
    /// on rejection the inputs are preserved so the user can correct and
    /// resubmit. Overlapping submissions are refused while one is
    /// outstanding.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state == SubmitState::Submitting {
            return SubmitOutcome::InFlight;
        }

        self.errors = validate_form(&self.url_input, &self.custom_code_input);
        if !self.errors.is_empty() {
            tracing::debug!("submission blocked by field validation");
            return SubmitOutcome::Invalid;
        }

        let request = CreateRequest {
            url: with_assumed_protocol(self.url_input.trim()),
            custom_code: match self.custom_code_input.trim() {
                "" => None,
                code => Some(code.to_string()),
            },
        };

        self.state = SubmitState::Submitting;
        self.result = None;

        match self.client.create_short_link(&request).await {
            Ok(link) => {
                self.state = SubmitState::Succeeded;
                self.result = Some(link.clone());
                self.url_input.clear();
                self.custom_code_input.clear();
                self.errors = ValidationErrors::default();
                self.notice = Some(Notice::success("Short URL created successfully!"));
                SubmitOutcome::Created(link)
            }
            Err(e) => {
                tracing::warn!(error = %e, "short link creation failed");
                self.state = SubmitState::Idle;
                self.notice = Some(Notice::error(e.message()));
                SubmitOutcome::Rejected
            }
        }
    }

    /// Returns the form to its initial empty state ("create another").
    pub fn reset(&mut self) {
        self.url_input.clear();
        self.custom_code_input.clear();
        self.errors = ValidationErrors::default();
        self.result = None;
        self.state = SubmitState::Idle;
        self.notice = None;
    }
}
