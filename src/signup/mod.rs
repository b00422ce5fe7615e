//! The Agile Ortho doctor registration form: values, validation schema,
//! field bindings and the gpui view.

mod model;
mod schema;
mod view;

#[cfg(test)]
mod tests;

pub use model::{SignupValues, SignupValuesFields, Speciality};
pub use schema::{
    FIRST_NAME_MAX_CHARS, FormatKind, LAST_NAME_MAX_CHARS, SignupBinding, SignupController,
    SignupError, signup_bindings, signup_controller, signup_schema,
};
pub use view::{SUBTITLE, SignupForm, TITLE};
