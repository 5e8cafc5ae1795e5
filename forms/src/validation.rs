//! Signup field rule table and the per-field error map.
//!
//! DESIGN
//! ======
//! Every field variant maps to one pure rule at compile time via
//! [`SignupField::rule`]. A rule returns the message to show, or `None` when
//! the value is acceptable. [`FieldErrors`] stores the last result per field,
//! with an empty string meaning "valid".

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
/// Minimum password length in UTF-16 code units, as a browser counts it.
pub const MIN_PASSWORD_LEN: usize = 6;

// local-part@domain.tld, no whitespace (BOM included) or extra '@' in any segment.
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").ok());

/// A pure validation rule.
pub type Rule = fn(&str) -> Option<&'static str>;

/// Fields of the signup form, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignupField {
    Name,
    Email,
    Password,
    ProfilePicture,
}

impl SignupField {
    /// Fields covered by a full-form validation pass.
    pub const VALIDATED: [Self; 3] = [Self::Name, Self::Email, Self::Password];

    /// Form field name, also used as the multipart part name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ProfilePicture => "profilePicture",
        }
    }

    /// The rule that guards this field.
    #[must_use]
    pub fn rule(self) -> Rule {
        match self {
            Self::Name => validate_name,
            Self::Email => validate_email,
            Self::Password => validate_password,
            Self::ProfilePicture => accept_any,
        }
    }
}

#[must_use]
pub fn validate_name(value: &str) -> Option<&'static str> {
    value.trim_matches(is_blank).is_empty().then_some(NAME_REQUIRED)
}

#[must_use]
pub fn validate_email(value: &str) -> Option<&'static str> {
    (!is_email_shaped(value)).then_some(INVALID_EMAIL)
}

#[must_use]
pub fn validate_password(value: &str) -> Option<&'static str> {
    (value.encode_utf16().count() < MIN_PASSWORD_LEN).then_some(PASSWORD_TOO_SHORT)
}

// Unicode whitespace plus the byte-order mark.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn accept_any(_value: &str) -> Option<&'static str> {
    None
}

/// `true` when `value` has the `local@domain.tld` shape.
#[must_use]
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(value))
}

/// Last validation message per signup field. Empty string means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: String,
    email: String,
    password: String,
    profile_picture: String,
}

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: SignupField) -> &str {
        match field {
            SignupField::Name => &self.name,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
            SignupField::ProfilePicture => &self.profile_picture,
        }
    }

    fn slot(&mut self, field: SignupField) -> &mut String {
        match field {
            SignupField::Name => &mut self.name,
            SignupField::Email => &mut self.email,
            SignupField::Password => &mut self.password,
            SignupField::ProfilePicture => &mut self.profile_picture,
        }
    }

    /// Run `field`'s rule against `value`, record the outcome, and report
    /// whether the value passed.
    pub fn check(&mut self, field: SignupField, value: &str) -> bool {
        let message = field.rule()(value).unwrap_or_default();
        let slot = self.slot(field);
        slot.clear();
        slot.push_str(message);
        message.is_empty()
    }

    /// `true` when every recorded message is empty.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.iter().all(|(_, message)| message.is_empty())
    }

    /// Non-empty messages keyed by field, in render order.
    pub fn messages(&self) -> impl Iterator<Item = (SignupField, &str)> {
        self.iter().filter(|(_, message)| !message.is_empty())
    }

    fn iter(&self) -> impl Iterator<Item = (SignupField, &str)> {
        [SignupField::Name, SignupField::Email, SignupField::Password, SignupField::ProfilePicture]
            .into_iter()
            .map(|field| (field, self.get(field)))
    }
}
