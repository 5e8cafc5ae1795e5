//! Signup form: rule-checked text fields plus an optional profile picture.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each text field is re-validated on change and on blur. `submit` runs a
//! full validation pass and only hands back a multipart request when every
//! rule passes. The picture handle type `F` belongs to the runtime (DOM
//! `File` in the browser, an in-memory attachment natively).

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::effect::{Effect, Route};
use crate::validation::{FieldErrors, SignupField};
use crate::wire::SubmitError;

pub const CREATE_FAILED: &str = "Failed to create account. Please try again.";
pub const CHOOSE_FILE_LABEL: &str = "Choose File";

/// A runtime file handle the signup form can carry.
pub trait SelectedFile: Clone {
    /// Name shown on the file picker button.
    fn display_name(&self) -> String;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupValues<F> {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile_picture: Option<F>,
}

impl<F> Default for SignupValues<F> {
    fn default() -> Self {
        Self { name: String::new(), email: String::new(), password: String::new(), profile_picture: None }
    }
}

/// Everything the runtime needs to build the multipart body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest<F> {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile_picture: Option<F>,
}

impl<F> SignupRequest<F> {
    /// Text parts in append order, keyed by part name.
    #[must_use]
    pub fn text_parts(&self) -> [(&'static str, &str); 3] {
        [
            (SignupField::Name.as_str(), self.name.as_str()),
            (SignupField::Email.as_str(), self.email.as_str()),
            (SignupField::Password.as_str(), self.password.as_str()),
        ]
    }

    /// Part name for the optional binary attachment.
    #[must_use]
    pub fn file_part_name() -> &'static str {
        SignupField::ProfilePicture.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupFlow<F> {
    values: SignupValues<F>,
    errors: FieldErrors,
    error: String,
    selected_file_name: String,
    show_password: bool,
    loading: bool,
}

impl<F> Default for SignupFlow<F> {
    fn default() -> Self {
        Self {
            values: SignupValues::default(),
            errors: FieldErrors::default(),
            error: String::new(),
            selected_file_name: String::new(),
            show_password: false,
            loading: false,
        }
    }
}

impl<F: SelectedFile> SignupFlow<F> {
    #[must_use]
    pub fn values(&self) -> &SignupValues<F> {
        &self.values
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Last submission error, empty when none.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    #[must_use]
    pub fn selected_file_name(&self) -> &str {
        &self.selected_file_name
    }

    /// Label for the file picker button.
    #[must_use]
    pub fn file_button_label(&self) -> &str {
        if self.selected_file_name.is_empty() {
            CHOOSE_FILE_LABEL
        } else {
            &self.selected_file_name
        }
    }

    #[must_use]
    pub fn show_password(&self) -> bool {
        self.show_password
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current text of a field. The picture field has no text and yields "".
    #[must_use]
    pub fn value(&self, field: SignupField) -> &str {
        match field {
            SignupField::Name => &self.values.name,
            SignupField::Email => &self.values.email,
            SignupField::Password => &self.values.password,
            SignupField::ProfilePicture => "",
        }
    }

    /// Store the new value and re-check that field only.
    pub fn change(&mut self, field: SignupField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SignupField::Name => self.values.name = value,
            SignupField::Email => self.values.email = value,
            SignupField::Password => self.values.password = value,
            SignupField::ProfilePicture => return,
        }
        self.blur(field);
    }

    /// Re-check `field` against its current value.
    pub fn blur(&mut self, field: SignupField) {
        let value = self.value(field).to_owned();
        self.errors.check(field, &value);
    }

    pub fn select_file(&mut self, file: Option<F>) {
        self.selected_file_name = file.as_ref().map(F::display_name).unwrap_or_default();
        self.values.profile_picture = file;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Re-run every rule against the current values and record the results.
    pub fn validate_form(&mut self) -> bool {
        let mut valid = true;
        for field in SignupField::VALIDATED {
            let value = self.value(field).to_owned();
            valid &= self.errors.check(field, &value);
        }
        valid
    }

    /// Begin a submission if the form validates.
    ///
    /// Returns `None` without side effects beyond refreshed field errors when
    /// validation fails, or when a previous attempt is still in flight.
    pub fn submit(&mut self) -> Option<SignupRequest<F>> {
        if self.loading || !self.validate_form() {
            return None;
        }
        self.loading = true;
        Some(SignupRequest {
            name: self.values.name.clone(),
            email: self.values.email.clone(),
            password: self.values.password.clone(),
            profile_picture: self.values.profile_picture.clone(),
        })
    }

    /// Settle the in-flight attempt and return the effects to apply.
    pub fn complete(&mut self, outcome: Result<(), SubmitError>) -> Vec<Effect> {
        self.values = SignupValues::default();
        self.selected_file_name.clear();
        self.loading = false;

        let mut effects = vec![Effect::ResetFileSelection];
        match outcome {
            Ok(()) => effects.push(Effect::Navigate(Route::Login)),
            Err(_) => CREATE_FAILED.clone_into(&mut self.error),
        }
        effects
    }
}
