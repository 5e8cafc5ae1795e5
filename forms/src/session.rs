//! Auth-session state shared by every page of a runtime.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runtimes own one `AuthSession` and hand it to whoever needs it (Leptos
//! context in the browser, a local in the CLI). Forms never mutate it; they
//! emit [`crate::Effect::Dispatch`] and the runtime calls [`AuthSession::reduce`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Closed set of signals the session understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthSignal {
    Login,
    Logout,
}

/// Whether the current user holds a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthSession {
    logged_in: bool,
}

impl AuthSession {
    /// Seed the session from whatever token durable storage currently holds.
    #[must_use]
    pub fn from_stored_token(token: Option<&str>) -> Self {
        Self { logged_in: token.is_some_and(|t| !t.trim().is_empty()) }
    }

    #[must_use]
    pub fn is_logged_in(self) -> bool {
        self.logged_in
    }

    /// Apply one signal and return the next session.
    #[must_use]
    pub fn reduce(self, signal: AuthSignal) -> Self {
        match signal {
            AuthSignal::Login => Self { logged_in: true },
            AuthSignal::Logout => Self { logged_in: false },
        }
    }
}
