//! Applies the effect lists returned by `forms` flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Flows never touch storage, the session, or the router. Pages hand the
//! returned `Vec<Effect>` to [`apply_effects`] together with an
//! [`EffectTarget`] that knows how to perform each one in the browser.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use forms::{AuthSession, AuthSignal, Effect};
use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth;
use crate::util::token_storage;

/// Side-effect sink for one page.
pub trait EffectTarget {
    fn store_token(&self, key: &str, token: &str);
    fn dispatch(&self, signal: AuthSignal);
    fn navigate(&self, path: &str);
    /// Clear the native file input. Pages without one ignore it.
    fn reset_file_selection(&self) {}
}

/// Perform `effects` in order against `target`.
pub fn apply_effects(effects: Vec<Effect>, target: &impl EffectTarget) {
    for effect in effects {
        match effect {
            Effect::StoreToken { key, token } => target.store_token(key, &token),
            Effect::Dispatch(signal) => target.dispatch(signal),
            Effect::Navigate(route) => target.navigate(route.path()),
            Effect::ResetFileSelection => target.reset_file_selection(),
        }
    }
}

/// Browser implementation: `localStorage`, the session context, the router,
/// and optionally the signup file input.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub struct BrowserEffects<N> {
    pub session: RwSignal<AuthSession>,
    pub navigate: N,
    pub file_input: Option<NodeRef<Input>>,
}

impl<N> EffectTarget for BrowserEffects<N>
where
    N: Fn(&str, NavigateOptions),
{
    fn store_token(&self, key: &str, token: &str) {
        token_storage::save(key, token);
    }

    fn dispatch(&self, signal: AuthSignal) {
        auth::dispatch(self.session, signal);
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }

    fn reset_file_selection(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = self.file_input.and_then(|node| node.get_untracked()) {
                input.set_value("");
            }
        }
    }
}
