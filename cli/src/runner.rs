//! Native runtime: replays form events, performs the request, and applies
//! the effects a flow returns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each command builds a fresh flow, feeds it the same change/blur sequence
//! a user filling the form would produce, then hands the submission to
//! [`AuthApi`]. Storage and session mutations happen only through effects.

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;

use forms::{
    AuthSession, AuthSignal, Effect, LoginField, LoginFlow, Route, SignupField, SignupFlow, TOKEN_STORAGE_KEY,
};

use crate::api::AuthApi;
use crate::attachment::Attachment;
use crate::error::CliError;
use crate::token_store::TokenStore;

/// What a command produced, for printing and exit status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Route the flow navigated to, if it reached its success path.
    pub navigated_to: Option<Route>,
    /// Generic submission error shown to the user, empty on success.
    pub error: String,
    /// Field messages that blocked a signup submission.
    pub field_errors: Vec<(SignupField, String)>,
    /// Signals forwarded to the session, in order.
    pub dispatched: Vec<AuthSignal>,
}

impl Report {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.navigated_to.is_some()
    }
}

#[derive(Debug)]
pub struct Runtime {
    api: AuthApi,
    store: TokenStore,
    session: AuthSession,
}

impl Runtime {
    #[must_use]
    pub fn new(api: AuthApi, store: TokenStore) -> Self {
        let session = AuthSession::from_stored_token(store.get(TOKEN_STORAGE_KEY));
        Self { api, store, session }
    }

    #[must_use]
    pub fn session(&self) -> AuthSession {
        self.session
    }

    #[must_use]
    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Run the login flow with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Storage`] if the token cannot be persisted.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Report, CliError> {
        let mut flow = LoginFlow::default();
        for (field, value) in [(LoginField::Email, email), (LoginField::Password, password)] {
            flow.change(field, value);
            flow.blur(field);
            if let Some(help) = flow.helper_text(field) {
                tracing::debug!(?field, help, "login field renders invalid");
            }
        }

        let Some(request) = flow.submit() else {
            return Ok(Report::default());
        };
        tracing::info!(base_url = self.api.base_url(), "submitting login");
        let outcome = self.api.login(&request).await;
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "login request failed");
        }

        let effects = flow.complete(outcome);
        let mut report = Report { error: flow.error().to_owned(), ..Report::default() };
        self.apply(effects, &mut report)?;
        Ok(report)
    }

    /// Run the signup flow. Invalid input aborts before any request.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Storage`] if an effect cannot be persisted.
    pub async fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        picture: Option<Attachment>,
    ) -> Result<Report, CliError> {
        let mut flow = SignupFlow::default();
        for (field, value) in [(SignupField::Name, name), (SignupField::Email, email), (SignupField::Password, password)] {
            flow.change(field, value);
            flow.blur(field);
        }
        flow.select_file(picture);

        let Some(request) = flow.submit() else {
            tracing::debug!("signup form is invalid, not submitting");
            let field_errors = flow
                .errors()
                .messages()
                .map(|(field, message)| (field, message.to_owned()))
                .collect();
            return Ok(Report { field_errors, ..Report::default() });
        };
        tracing::info!(
            base_url = self.api.base_url(),
            with_picture = request.profile_picture.is_some(),
            "submitting signup"
        );
        let outcome = self.api.signup(request).await;
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "signup request failed");
        }

        let effects = flow.complete(outcome);
        let mut report = Report { error: flow.error().to_owned(), ..Report::default() };
        self.apply(effects, &mut report)?;
        Ok(report)
    }

    /// Drop the stored token and signal logout. Returns whether a token was
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Storage`] if the token file cannot be rewritten.
    pub fn logout(&mut self) -> Result<bool, CliError> {
        let removed = self.store.remove(TOKEN_STORAGE_KEY)?;
        self.session = self.session.reduce(AuthSignal::Logout);
        Ok(removed)
    }

    fn apply(&mut self, effects: Vec<Effect>, report: &mut Report) -> Result<(), CliError> {
        for effect in effects {
            match effect {
                Effect::StoreToken { key, token } => self.store.set(key, &token)?,
                Effect::Dispatch(signal) => {
                    self.session = self.session.reduce(signal);
                    report.dispatched.push(signal);
                }
                Effect::Navigate(route) => report.navigated_to = Some(route),
                // No widget holds the file natively; the attachment was moved into the request.
                Effect::ResetFileSelection => {}
            }
        }
        Ok(())
    }
}
