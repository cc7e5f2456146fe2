//! Session gating for the intake form.
//!
//! The form is shown only to unauthenticated requesters; an authenticated user
//! is sent to the dashboard instead. Authentication itself is an external
//! collaborator, reached only through the [`SessionSource`] read. The form
//! never inspects session contents.

/// Opaque handle to an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionHandle(String);

impl SessionHandle {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

/// Observable state of the external session read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthState {
    /// The session read has not resolved yet.
    Pending,
    /// A session exists.
    Authenticated(SessionHandle),
    /// No session.
    Unauthenticated,
}

/// Abstract "current auth state" query.
pub trait SessionSource {
    fn current(&self) -> AuthState;
}

/// What the form view should do given the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormGate {
    /// Session read still pending: render nothing yet.
    Defer,
    /// Authenticated users bypass the form entirely.
    RedirectToDashboard,
    /// Show the intake form.
    Render,
}

impl FormGate {
    pub fn from_auth(state: &AuthState) -> Self {
        match state {
            AuthState::Pending => FormGate::Defer,
            AuthState::Authenticated(_) => FormGate::RedirectToDashboard,
            AuthState::Unauthenticated => FormGate::Render,
        }
    }

    pub fn for_source(source: &impl SessionSource) -> Self {
        Self::from_auth(&source.current())
    }
}
