//! # Intake Core
//!
//! Core business logic for the university clinic intake form.
//!
//! This crate contains pure data operations and state transitions:
//! - The fixed symptom catalog (ids 1..=12) and its display labels
//! - Form state with the role/student-id and "other symptom" rules
//! - An ordered list of named validation rules
//! - The wire payload sent to the backend intake endpoint
//!
//! **No transport concerns**: HTTP submission, session gating, and the
//! confirm/notify/reset capabilities belong in `intake-client`.

pub mod catalog;
pub mod error;
pub mod form;
pub mod role;
pub mod submission;
pub mod validation;

pub use error::{IntakeError, IntakeResult};
pub use form::IntakeForm;
pub use role::Role;
pub use submission::IntakeSubmission;
