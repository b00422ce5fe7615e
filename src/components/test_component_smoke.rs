use super::*;
use crate::form::{SelectOption, TextKind};
use gpui::{AnyElement, IntoElement};

fn into_any(element: impl IntoElement) -> AnyElement {
    element.into_any_element()
}

#[test]
fn smoke_field_components_render_into_any_element() {
    let _ = into_any(
        TextInput::new("first-name")
            .label("First Name")
            .placeholder("Alok")
            .required(true),
    );
    let _ = into_any(
        TextInput::new("email")
            .kind(TextKind::Email)
            .value("not-an-email")
            .error("Invalid email address"),
    );
    let _ = into_any(Checkbox::new("terms").label("I accept").checked(true));
    let _ = into_any(
        Select::new("speciality")
            .placeholder("Select a speciality")
            .options([SelectOption::new("elbow", "Elbow")])
            .opened(true),
    );
}

#[test]
fn smoke_action_and_feedback_components_render_into_any_element() {
    let _ = into_any(Button::new("submit").label("Submit").loading(true));
    let _ = into_any(Notice::new(NoticeKind::Success, "Submitted").body("{\n  \"a\": 1\n}"));
    let _ = into_any(Notice::new(NoticeKind::Failure, "Submission failed"));
}

#[test]
fn button_is_inert_while_loading_or_disabled() {
    assert!(Button::new("a").is_interactive());
    assert!(!Button::new("b").loading(true).is_interactive());
    assert!(!Button::new("c").disabled(true).is_interactive());
}

#[test]
fn typed_characters_append_and_backspace_removes_last() {
    assert_eq!(
        TextInput::edited_value("Alo", "k", Some("k")).as_deref(),
        Some("Alok")
    );
    assert_eq!(
        TextInput::edited_value("Alok", "space", Some(" ")).as_deref(),
        Some("Alok ")
    );
    assert_eq!(
        TextInput::edited_value("Alok", "backspace", None).as_deref(),
        Some("Alo")
    );
    assert_eq!(TextInput::edited_value("", "backspace", None), None);
}

#[test]
fn navigation_keys_do_not_edit() {
    assert_eq!(TextInput::edited_value("a", "left", None), None);
    assert_eq!(TextInput::edited_value("a", "enter", Some("\n")), None);
    assert_eq!(TextInput::edited_value("a", "escape", Some("\u{1b}")), None);
}

#[test]
fn tab_leaves_every_field_control() {
    assert!(text_input::is_tab_key("tab"));
    assert!(!text_input::is_tab_key("enter"));
    assert_eq!(TextInput::edited_value("a", "tab", Some("\t")), None);
    assert!(!checkbox::is_activation_key("tab"));
}
