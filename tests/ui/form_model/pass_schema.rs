use gpui::SharedString;
use ortho_signup::form::{FormController, FormModel, FormOptions, Schema, ValidationError};

#[derive(Clone, Debug, PartialEq)]
struct Missing;

impl ValidationError for Missing {
    fn message(&self) -> SharedString {
        "missing".into()
    }
}

#[derive(Clone, ortho_signup::form::FormModel)]
struct NoteForm {
    title: SharedString,
}

fn main() {
    let fields = NoteForm::fields();
    let schema = Schema::<NoteForm, Missing>::new().field(fields.title(), |f| f.required(Missing));
    let mut controller = FormController::new(
        NoteForm {
            title: SharedString::default(),
        },
        schema,
        FormOptions::default(),
    );
    assert!(!controller.is_valid());

    controller.set(fields.title(), "Rounds".into());
    assert!(controller.is_valid());
}
