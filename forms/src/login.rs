//! Login form: email + password with touched-gated display validity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Local validity only drives helper text. `submit` always hands back a
//! request (unless one is already in flight) and the server decides. Every
//! settled attempt wipes values and touched flags.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::effect::{Effect, Route, TOKEN_STORAGE_KEY};
use crate::session::AuthSignal;
use crate::wire::{LoginRequest, LoginResponse, SubmitError};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password. Please try again.";
pub const EMAIL_HELPER: &str = "Please enter a valid email.";
pub const PASSWORD_HELPER: &str = "Please provide a valid password.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginValues {
    pub email: String,
    pub password: String,
}

/// Which fields have lost focus at least once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Touched {
    pub email: bool,
    pub password: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFlow {
    values: LoginValues,
    touched: Touched,
    error: String,
    show_password: bool,
    pending: bool,
}

impl LoginFlow {
    #[must_use]
    pub fn values(&self) -> &LoginValues {
        &self.values
    }

    #[must_use]
    pub fn touched(&self) -> Touched {
        self.touched
    }

    #[must_use]
    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.values.email,
            LoginField::Password => &self.values.password,
        }
    }

    /// Last submission error, empty when none.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    #[must_use]
    pub fn show_password(&self) -> bool {
        self.show_password
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Store the raw input; no validation runs on change.
    pub fn change(&mut self, field: LoginField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LoginField::Email => self.values.email = value,
            LoginField::Password => self.values.password = value,
        }
    }

    pub fn blur(&mut self, field: LoginField) {
        match field {
            LoginField::Email => self.touched.email = true,
            LoginField::Password => self.touched.password = true,
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// A field renders invalid only once it has been touched and is empty.
    #[must_use]
    pub fn is_field_valid(&self, field: LoginField) -> bool {
        let touched = match field {
            LoginField::Email => self.touched.email,
            LoginField::Password => self.touched.password,
        };
        !self.value(field).is_empty() || !touched
    }

    /// Helper text shown under an invalid field.
    #[must_use]
    pub fn helper_text(&self, field: LoginField) -> Option<&'static str> {
        if self.is_field_valid(field) {
            return None;
        }
        Some(match field {
            LoginField::Email => EMAIL_HELPER,
            LoginField::Password => PASSWORD_HELPER,
        })
    }

    /// Begin a submission with the current credentials.
    ///
    /// Returns `None` while a previous attempt is still in flight.
    pub fn submit(&mut self) -> Option<LoginRequest> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(LoginRequest { email: self.values.email.clone(), password: self.values.password.clone() })
    }

    /// Settle the in-flight attempt and return the effects to apply.
    pub fn complete(&mut self, outcome: Result<LoginResponse, SubmitError>) -> Vec<Effect> {
        self.pending = false;
        self.values = LoginValues::default();
        self.touched = Touched::default();

        match outcome {
            Ok(response) => vec![
                Effect::StoreToken { key: TOKEN_STORAGE_KEY, token: response.token },
                Effect::Dispatch(AuthSignal::Login),
                Effect::Navigate(Route::Home),
            ],
            Err(_) => {
                INVALID_CREDENTIALS.clone_into(&mut self.error);
                Vec::new()
            }
        }
    }
}
