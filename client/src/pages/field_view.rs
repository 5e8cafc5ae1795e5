//! Presentation helpers shared by the login and signup forms.

#[cfg(test)]
#[path = "field_view_test.rs"]
mod field_view_test;

/// `type` attribute of a password input.
pub fn password_input_type(show_password: bool) -> &'static str {
    if show_password { "text" } else { "password" }
}

/// Accessible label of the visibility toggle.
pub fn visibility_label(show_password: bool) -> &'static str {
    if show_password { "Hide password" } else { "Show password" }
}

/// Toggle glyph: open eye while hidden, crossed eye while shown.
pub fn visibility_icon(show_password: bool) -> &'static str {
    if show_password { "\u{1F648}" } else { "\u{1F441}" }
}

pub fn input_class(valid: bool) -> &'static str {
    if valid { "auth-input" } else { "auth-input auth-input--error" }
}

/// `None` hides the message line.
pub fn non_empty(message: &str) -> Option<String> {
    (!message.is_empty()).then(|| message.to_owned())
}
