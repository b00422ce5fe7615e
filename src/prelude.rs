pub use crate::application::SignupApplication;
pub use crate::components::{Button, Checkbox, Notice, NoticeKind, Select, TextInput};
pub use crate::config::AppConfig;
pub use crate::contracts::{Disableable, FieldLike};
pub use crate::form::{
    CheckboxBinding, FieldBinding, FieldKey, FieldLens, FormController, FormModel, FormOptions,
    Schema, SelectBinding, SelectOption, SubmissionEffect, TextBinding, ValidationError,
};
pub use crate::signup::{SignupError, SignupForm, SignupValues, Speciality};
pub use crate::theme::Theme;
