use super::*;
use forms::SignupFlow;

#[test]
fn display_name_is_file_name() {
    assert_eq!(PickedFile::named("me.png").display_name(), "me.png");
}

#[test]
fn selecting_a_picked_file_updates_button_label() {
    let mut flow = SignupFlow::<PickedFile>::default();
    flow.select_file(Some(PickedFile::named("avatar.jpg")));
    assert_eq!(flow.file_button_label(), "avatar.jpg");

    flow.select_file(None);
    assert_eq!(flow.file_button_label(), forms::signup::CHOOSE_FILE_LABEL);
}
