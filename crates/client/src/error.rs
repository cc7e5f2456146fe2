//! Error types for intake-client.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for submission operations.
pub type SubmitResult<T> = std::result::Result<T, SubmitError>;

/// Everything that can go wrong between a confirmed form and the backend.
///
/// User cancellation is deliberately absent: declining the confirmation is a
/// normal outcome ([`crate::SubmitOutcome::Cancelled`]), not an error. All
/// variants are non-fatal; the form stays usable for another attempt.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or more required fields are missing.
    #[error(transparent)]
    Validation(#[from] intake_core::IntakeError),

    /// The backend answered with a non-2xx status.
    #[error("backend rejected the submission: HTTP {status}")]
    Rejected { status: StatusCode },

    /// The request never produced an HTTP response.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Another submission is still pending; this one was not started.
    #[error("a submission is already in flight")]
    InFlight,
}
