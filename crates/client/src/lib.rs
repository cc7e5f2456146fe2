//! # Intake Client
//!
//! Submission side of the clinic intake form:
//! - `api`: the HTTP transport that POSTs the payload to the backend
//! - `flow`: the confirm, validate, send sequence with injectable
//!   confirmation/notification/view-reset capabilities
//! - `session`: gating against an external authentication source
//!
//! Domain state and validation live in `intake-core`; this crate only adds the
//! side effects around them.

pub mod api;
pub mod error;
pub mod flow;
pub mod session;

pub use api::{IntakeApi, SubmitTransport};
pub use error::{SubmitError, SubmitResult};
pub use flow::{ConfirmPrompt, Notifier, SubmitFlow, SubmitOutcome, ViewReset};
pub use session::{AuthState, FormGate, SessionHandle, SessionSource};
