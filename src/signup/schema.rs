use std::fmt::{Display, Formatter};

use gpui::SharedString;

use super::model::{SignupValues, Speciality};
use crate::form::{
    CheckboxBinding, FieldBinding, FormController, FormModel, FormOptions, Schema, SelectBinding,
    TextBinding, TextKind, ValidationError,
};

pub const FIRST_NAME_MAX_CHARS: usize = 15;
pub const LAST_NAME_MAX_CHARS: usize = 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FormatKind {
    Email,
    Url,
}

impl Display for FormatKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Email => "Invalid email address",
            Self::Url => "Invalid URL.",
        })
    }
}

/// Validation failures of the registration form. The display text is the
/// message shown under the field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum SignupError {
    #[error("Required")]
    MissingRequired,
    #[error("Must be {max} characters or less")]
    TooLong { max: usize },
    #[error("{0}")]
    InvalidFormat(FormatKind),
    #[error("Invalid speciality")]
    InvalidChoice,
    #[error("You must accept the terms and conditions.")]
    NotAccepted,
}

impl ValidationError for SignupError {
    fn message(&self) -> SharedString {
        self.to_string().into()
    }
}

pub type SignupController = FormController<SignupValues, SignupError>;
pub type SignupBinding = FieldBinding<SignupValues, SignupError>;

pub fn signup_schema() -> Schema<SignupValues, SignupError> {
    let fields = SignupValues::fields();
    Schema::<SignupValues, SignupError>::new()
        .field(fields.first_name(), |f| {
            f.required(SignupError::MissingRequired).max_chars(
                FIRST_NAME_MAX_CHARS,
                SignupError::TooLong {
                    max: FIRST_NAME_MAX_CHARS,
                },
            )
        })
        .field(fields.last_name(), |f| {
            f.required(SignupError::MissingRequired).max_chars(
                LAST_NAME_MAX_CHARS,
                SignupError::TooLong {
                    max: LAST_NAME_MAX_CHARS,
                },
            )
        })
        .field(fields.email(), |f| {
            f.required(SignupError::MissingRequired)
                .email(SignupError::InvalidFormat(FormatKind::Email))
        })
        .field(fields.url(), |f| {
            f.url(SignupError::InvalidFormat(FormatKind::Url))
        })
        .field(fields.speciality(), |f| {
            f.required(SignupError::MissingRequired)
                .one_of(Speciality::values(), SignupError::InvalidChoice)
        })
        .field(fields.accepted_terms(), |f| {
            f.accepted(SignupError::NotAccepted)
        })
}

/// Bindings in render order.
pub fn signup_bindings() -> Vec<SignupBinding> {
    let fields = SignupValues::fields();
    vec![
        TextBinding::new(fields.first_name(), "First Name")
            .placeholder("Alok")
            .into(),
        TextBinding::new(fields.last_name(), "Last Name")
            .placeholder("Kattangoori")
            .into(),
        TextBinding::new(fields.email(), "Email Address")
            .kind(TextKind::Email)
            .placeholder("alok@agileortho.co.in")
            .into(),
        TextBinding::new(fields.url(), "Website")
            .kind(TextKind::Url)
            .placeholder("www.agileortho.in/")
            .into(),
        SelectBinding::new(fields.speciality(), "Speciality")
            .placeholder("Select a speciality")
            .options(Speciality::options())
            .into(),
        CheckboxBinding::new(fields.accepted_terms(), "I accept the terms and conditions").into(),
    ]
}

pub fn signup_controller(options: FormOptions) -> SignupController {
    FormController::new(SignupValues::default(), signup_schema(), options)
}
