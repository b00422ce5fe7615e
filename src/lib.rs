pub mod application;
pub mod components;
pub mod config;
pub mod contracts;
pub mod form;
pub mod logging;
pub mod prelude;
pub mod signup;
pub mod theme;

pub use application::SignupApplication;
pub use config::AppConfig;
pub use signup::{SignupForm, SignupValues, Speciality};
