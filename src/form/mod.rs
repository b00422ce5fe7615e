//! Headless form state: field lenses, an ordered validation schema, typed
//! field bindings and the submit state machine.

mod binding;
mod controller;
pub mod rules;
mod submit;
mod validation;


pub use binding::{CheckboxBinding, FieldBinding, SelectBinding, SelectOption, TextBinding, TextKind};
pub use controller::{
    FieldKey, FieldMeta, FormController, FormError, FormOptions, FormResult, FormSnapshot,
    SubmitAttempt, SubmitOutcome, SubmitState,
};
pub use ortho_signup_derive::FormModel;
pub use submit::{DelayedEcho, SubmissionEffect, SubmissionReceipt, SubmitError};
pub use validation::{ErrorMap, FieldLens, FieldRules, FormModel, Rule, Schema, ValidationError};
