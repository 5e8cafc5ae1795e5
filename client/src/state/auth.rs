//! Session context: one `RwSignal<AuthSession>` provided by the app root.
//!
//! SYSTEM CONTEXT
//! ==============
//! SSR always renders logged out because `localStorage` is browser-only. Once
//! hydrated, [`install_stored_token_restore`] re-seeds the session from the
//! stored token. After that only dispatched signals change it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use forms::{AuthSession, AuthSignal, TOKEN_STORAGE_KEY};
use leptos::prelude::*;

use crate::util::token_storage;

/// Create the session signal and register it as context.
pub fn provide_session() -> RwSignal<AuthSession> {
    let session = RwSignal::new(AuthSession::default());
    provide_context(session);
    session
}

/// Seed `session` from the stored token after hydration.
pub fn install_stored_token_restore(session: RwSignal<AuthSession>) {
    Effect::new(move || {
        let stored = token_storage::load(TOKEN_STORAGE_KEY);
        session.set(AuthSession::from_stored_token(stored.as_deref()));
    });
}

/// Feed one signal through the session reducer.
pub fn dispatch(session: RwSignal<AuthSession>, signal: AuthSignal) {
    session.update(|s| *s = s.reduce(signal));
}

/// Forget the stored token and signal logout.
pub fn logout(session: RwSignal<AuthSession>) {
    token_storage::remove(TOKEN_STORAGE_KEY);
    dispatch(session, AuthSignal::Logout);
}

/// Status line shown on the home page.
pub fn session_label(session: AuthSession) -> &'static str {
    if session.is_logged_in() { "You are logged in." } else { "You are not logged in." }
}
