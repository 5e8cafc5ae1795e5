//! Commands a flow hands back to its runtime after a submission settles.
//!
//! DESIGN
//! ======
//! Flows never touch storage, routing, the session, or widgets directly.
//! They return effects in the order the runtime should apply them.

#[cfg(test)]
#[path = "effect_test.rs"]
mod effect_test;

use crate::session::AuthSignal;

/// Durable storage key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Client-side routes the flows navigate between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
}

impl Route {
    /// Path passed to the navigation collaborator.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
        }
    }
}

/// A side effect requested by a flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Write `token` to durable storage under `key`.
    StoreToken { key: &'static str, token: String },
    /// Forward a signal to the shared auth session.
    Dispatch(AuthSignal),
    /// Transfer control to another route.
    Navigate(Route),
    /// Clear whatever file-picker widget backs the signup form.
    ResetFileSelection,
}
