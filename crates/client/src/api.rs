//! HTTP transport for intake submissions.
//!
//! The backend owns the endpoint path; from this side it is a single POST of a
//! JSON body to `{base_url}/api/`. Success is any 2xx status. No structured
//! error body is parsed, and there are no retries, timeouts, or idempotency
//! keys: each confirmed submission is one best-effort request.

use async_trait::async_trait;
use intake_core::IntakeSubmission;

use crate::error::{SubmitError, SubmitResult};

/// Sends a finished payload to the backend.
///
/// The submit flow depends on this seam rather than on a concrete HTTP client
/// so it can be exercised without a network.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Perform the POST. `Ok(())` means the backend answered 2xx.
    async fn send(&self, submission: &IntakeSubmission) -> SubmitResult<()>;
}

/// `reqwest`-backed client for the clinic intake endpoint.
pub struct IntakeApi {
    http: reqwest::Client,
    base_url: String,
}

impl IntakeApi {
    /// Create a client for the backend at `base_url` (scheme + authority,
    /// with or without a trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/", self.base_url)
    }
}

#[async_trait]
impl SubmitTransport for IntakeApi {
    async fn send(&self, submission: &IntakeSubmission) -> SubmitResult<()> {
        let response = self.http.post(self.endpoint()).json(submission).send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(%status, "intake submission accepted");
            Ok(())
        } else {
            tracing::warn!(%status, "intake submission rejected by backend");
            Err(SubmitError::Rejected { status })
        }
    }
}
