//! The confirm, validate, send submission sequence.
//!
//! One flow instance guards one form view. The sequence mirrors what the
//! requester sees: a confirmation summary first, then validation, then a
//! single POST. Every failure kind is surfaced through the [`Notifier`], and
//! an atomic in-flight guard rejects overlapping submissions, so repeated
//! confirmation cannot produce duplicates.
//!
//! The blocking confirmation dialog and the post-success "page reload" are
//! injected as [`ConfirmPrompt`] and [`ViewReset`], which keeps the whole
//! sequence testable without a UI.

use std::sync::atomic::{AtomicBool, Ordering};

use intake_core::{catalog, validation, IntakeForm, IntakeSubmission};

use crate::api::SubmitTransport;
use crate::error::{SubmitError, SubmitResult};

/// Presents the confirmation summary and waits for an explicit yes/no.
pub trait ConfirmPrompt {
    fn confirm(&self, summary: &str) -> bool;
}

/// User-visible notifications.
///
/// Both outcomes are surfaced: success with a summary of the submitted data,
/// and failure with the reason, whichever kind of failure it was.
pub trait Notifier {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// "Reset the view" capability, invoked after a successful submission.
///
/// In a browser this is the full page reload; callers also reset the
/// [`IntakeForm`] itself.
pub trait ViewReset {
    fn reset(&self);
}

/// How a submit attempt ended when nothing went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the payload.
    Submitted,
    /// The requester declined the confirmation; nothing was sent.
    Cancelled,
}

/// Drives one form view's submissions over a [`SubmitTransport`].
pub struct SubmitFlow<T> {
    transport: T,
    in_flight: AtomicBool,
}

impl<T: SubmitTransport> SubmitFlow<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Run the full sequence for the current form state.
    ///
    /// In order:
    /// 1. Reject with [`SubmitError::InFlight`] if another submit is pending.
    /// 2. Show the confirmation summary; declining cancels with no side
    ///    effects.
    /// 3. Validate. Violations notify the requester and nothing is sent.
    /// 4. POST the payload once. A 2xx response notifies success and resets
    ///    the view; any rejection or transport failure notifies the requester
    ///    and leaves the entered data untouched for a retry.
    pub async fn submit(
        &self,
        form: &IntakeForm,
        confirm: &dyn ConfirmPrompt,
        notifier: &dyn Notifier,
        view: &dyn ViewReset,
    ) -> SubmitResult<SubmitOutcome> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(SubmitError::InFlight);
        }

        let result = self.submit_locked(form, confirm, notifier, view).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn submit_locked(
        &self,
        form: &IntakeForm,
        confirm: &dyn ConfirmPrompt,
        notifier: &dyn Notifier,
        view: &dyn ViewReset,
    ) -> SubmitResult<SubmitOutcome> {
        if !confirm.confirm(&form.confirmation_summary()) {
            return Ok(SubmitOutcome::Cancelled);
        }

        // Validation runs after confirmation, matching the order the
        // requester experiences.
        if let Err(err) = validation::validate(form) {
            notifier.failure(&err.to_string());
            return Err(err.into());
        }

        let submission = IntakeSubmission::from_form(form);
        match self.transport.send(&submission).await {
            Ok(()) => {
                notifier.success(&success_message(&submission));
                view.reset();
                Ok(SubmitOutcome::Submitted)
            }
            Err(err) => {
                tracing::error!(error = %err, "intake submission failed");
                notifier.failure(&err.to_string());
                Err(err)
            }
        }
    }
}

/// Summary of the submitted data shown in the success notification.
fn success_message(submission: &IntakeSubmission) -> String {
    let mut message = format!(
        "ชื่อ-นามสกุล {} สถานะ {} อาการ {}",
        submission.student_name,
        submission.role,
        catalog::label_line(&submission.symptom_ids)
    );

    if !submission.other_symptom.is_empty() {
        message.push(' ');
        message.push_str(&submission.other_symptom);
    }

    message
}
