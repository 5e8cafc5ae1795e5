use super::*;
use crate::validation::{INVALID_EMAIL, NAME_REQUIRED, PASSWORD_TOO_SHORT};

#[derive(Clone, Debug, PartialEq, Eq)]
struct FakeFile(&'static str);

impl SelectedFile for FakeFile {
    fn display_name(&self) -> String {
        self.0.to_owned()
    }
}

fn filled(name: &str, email: &str, password: &str) -> SignupFlow<FakeFile> {
    let mut flow = SignupFlow::default();
    flow.change(SignupField::Name, name);
    flow.change(SignupField::Email, email);
    flow.change(SignupField::Password, password);
    flow
}

// =============================================================
// Per-field validation
// =============================================================

#[test]
fn fresh_form_has_no_errors() {
    let flow = SignupFlow::<FakeFile>::default();
    assert!(flow.errors().is_clean());
    assert!(!flow.is_loading());
    assert_eq!(flow.file_button_label(), CHOOSE_FILE_LABEL);
}

#[test]
fn change_validates_only_the_changed_field() {
    let mut flow = SignupFlow::<FakeFile>::default();
    flow.change(SignupField::Email, "bad");
    assert_eq!(flow.errors().get(SignupField::Email), INVALID_EMAIL);
    assert_eq!(flow.errors().get(SignupField::Name), "");
    assert_eq!(flow.errors().get(SignupField::Password), "");
}

#[test]
fn change_clears_error_once_value_passes() {
    let mut flow = SignupFlow::<FakeFile>::default();
    flow.change(SignupField::Password, "123");
    assert_eq!(flow.errors().get(SignupField::Password), PASSWORD_TOO_SHORT);
    flow.change(SignupField::Password, "123456");
    assert_eq!(flow.errors().get(SignupField::Password), "");
}

#[test]
fn blur_before_any_edit_flags_empty_name() {
    let mut flow = SignupFlow::<FakeFile>::default();
    flow.blur(SignupField::Name);
    assert_eq!(flow.errors().get(SignupField::Name), NAME_REQUIRED);
}

#[test]
fn profile_picture_error_is_never_populated() {
    let mut flow = SignupFlow::<FakeFile>::default();
    flow.blur(SignupField::ProfilePicture);
    flow.change(SignupField::ProfilePicture, "ignored");
    flow.validate_form();
    assert_eq!(flow.errors().get(SignupField::ProfilePicture), "");
}

#[test]
fn select_file_derives_display_name() {
    let mut flow = SignupFlow::default();
    flow.select_file(Some(FakeFile("me.png")));
    assert_eq!(flow.selected_file_name(), "me.png");
    assert_eq!(flow.file_button_label(), "me.png");
    assert_eq!(flow.values().profile_picture, Some(FakeFile("me.png")));

    flow.select_file(None);
    assert_eq!(flow.selected_file_name(), "");
    assert_eq!(flow.values().profile_picture, None);
}

// =============================================================
// validate_form
// =============================================================

#[test]
fn validate_form_rechecks_untouched_fields() {
    let mut flow = SignupFlow::<FakeFile>::default();
    assert!(!flow.validate_form());
    assert_eq!(flow.errors().get(SignupField::Name), NAME_REQUIRED);
    assert_eq!(flow.errors().get(SignupField::Email), INVALID_EMAIL);
    assert_eq!(flow.errors().get(SignupField::Password), PASSWORD_TOO_SHORT);
}

#[test]
fn validate_form_true_iff_all_rules_pass() {
    assert!(filled("Ann", "ann@example.com", "secret1").validate_form());
    assert!(!filled("  ", "ann@example.com", "secret1").validate_form());
    assert!(!filled("Ann", "ann@example", "secret1").validate_form());
    assert!(!filled("Ann", "ann@example.com", "short").validate_form());
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_with_blank_name_aborts_without_request() {
    let mut flow = filled("", "a@b.com", "123456");
    assert!(flow.submit().is_none());
    assert_eq!(flow.errors().get(SignupField::Name), NAME_REQUIRED);
    assert!(!flow.is_loading());
    assert_eq!(flow.error(), "");
    assert_eq!(flow.values().email, "a@b.com");
}

#[test]
fn valid_submit_without_file_builds_three_text_parts() {
    let mut flow = filled("Ann", "ann@example.com", "secret1");
    let request = flow.submit().expect("valid form submits");
    assert!(flow.is_loading());
    assert_eq!(
        request.text_parts(),
        [("name", "Ann"), ("email", "ann@example.com"), ("password", "secret1")]
    );
    assert_eq!(request.profile_picture, None);
    assert_eq!(SignupRequest::<FakeFile>::file_part_name(), "profilePicture");
}

#[test]
fn valid_submit_carries_selected_file() {
    let mut flow = filled("Ann", "ann@example.com", "secret1");
    flow.select_file(Some(FakeFile("ann.jpg")));
    let request = flow.submit().expect("valid form submits");
    assert_eq!(request.profile_picture, Some(FakeFile("ann.jpg")));
}

#[test]
fn submit_while_loading_returns_none() {
    let mut flow = filled("Ann", "ann@example.com", "secret1");
    assert!(flow.submit().is_some());
    assert!(flow.submit().is_none());
}

#[test]
fn success_resets_form_and_navigates_to_login() {
    let mut flow = filled("Ann", "ann@example.com", "secret1");
    flow.select_file(Some(FakeFile("ann.jpg")));
    flow.submit().expect("request");

    let effects = flow.complete(Ok(()));

    assert_eq!(effects, vec![Effect::ResetFileSelection, Effect::Navigate(Route::Login)]);
    assert_eq!(flow.values(), &SignupValues::default());
    assert_eq!(flow.selected_file_name(), "");
    assert!(!flow.is_loading());
    assert_eq!(flow.error(), "");
}

#[test]
fn failure_sets_generic_error_and_resets_form() {
    let mut flow = filled("Ann", "ann@example.com", "secret1");
    flow.select_file(Some(FakeFile("ann.jpg")));
    flow.submit().expect("request");

    let effects = flow.complete(Err(SubmitError::Status(409)));

    assert_eq!(effects, vec![Effect::ResetFileSelection]);
    assert_eq!(flow.error(), CREATE_FAILED);
    assert_eq!(flow.values(), &SignupValues::default());
    assert_eq!(flow.selected_file_name(), "");
    assert!(!flow.is_loading());
}
