use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use gpui::SharedString;

use super::submit::{SubmissionReceipt, SubmitError};
use super::validation::{FieldLens, Schema, ValidationError};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FieldKey(&'static str);

impl FieldKey {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormOptions {
    /// Stop evaluating a field at its first failing rule.
    pub first_error_only: bool,
    /// Touch every field when a submit is rejected by validation.
    pub touch_all_on_rejected_submit: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            first_error_only: true,
            touch_all_on_rejected_submit: true,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldMeta<E> {
    pub dirty: bool,
    pub touched: bool,
    pub errors: Vec<E>,
}

impl<E> Default for FieldMeta<E> {
    fn default() -> Self {
        Self {
            dirty: false,
            touched: false,
            errors: Vec::new(),
        }
    }
}

/// Result of the last completed submission effect.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    Delivered(SubmissionReceipt),
    Failed(SharedString),
}

/// What a submit attempt did before the external effect runs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitAttempt<T> {
    /// Validation failed; the form stays idle.
    Rejected { invalid_fields: Vec<FieldKey> },
    /// The form is now submitting these values.
    Accepted(T),
}

#[derive(Clone, Debug)]
pub struct FormSnapshot<T, E> {
    pub model: T,
    pub submit_state: SubmitState,
    pub submit_count: u32,
    pub is_dirty: bool,
    pub is_valid: bool,
    pub field_meta: BTreeMap<FieldKey, FieldMeta<E>>,
    pub last_outcome: Option<SubmitOutcome>,
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("invalid submit state transition: {from:?} -> {to:?}")]
    InvalidStateTransition { from: SubmitState, to: SubmitState },
    #[error("form submit is already in progress")]
    AlreadySubmitting,
}

pub type FormResult<T> = Result<T, FormError>;

/// Owns the values, per-field metadata and submission state of one form.
///
/// The error map is always derived from the current model and the schema:
/// every value change re-evaluates all fields.
pub struct FormController<T, E> {
    pub(super) options: FormOptions,
    pub(super) schema: Schema<T, E>,
    pub(super) initial_model: T,
    pub(super) model: T,
    pub(super) submit_state: SubmitState,
    pub(super) submit_count: u32,
    pub(super) field_meta: BTreeMap<FieldKey, FieldMeta<E>>,
    pub(super) first_error: Option<FieldKey>,
    pub(super) last_outcome: Option<SubmitOutcome>,
}

impl<T, E> FormController<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
{
    pub fn new(initial: T, schema: Schema<T, E>, options: FormOptions) -> Self {
        let field_meta = schema
            .keys()
            .map(|key| (key, FieldMeta::default()))
            .collect();
        let mut controller = Self {
            options,
            schema,
            initial_model: initial.clone(),
            model: initial,
            submit_state: SubmitState::Idle,
            submit_count: 0,
            field_meta,
            first_error: None,
            last_outcome: None,
        };
        controller.revalidate();
        controller
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn schema(&self) -> &Schema<T, E> {
        &self.schema
    }

    pub fn model(&self) -> &T {
        &self.model
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_state == SubmitState::Submitting
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn first_error(&self) -> Option<FieldKey> {
        self.first_error
    }

    pub fn last_outcome(&self) -> Option<&SubmitOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.field_meta.values().any(|meta| meta.dirty)
    }

    /// Starts a submission.
    ///
    /// Re-validates every field. An invalid form stays idle and, by default,
    /// gets every field touched. A valid form moves to `Submitting` and
    /// hands back a copy of the values for the external effect.
    pub fn begin_submit(&mut self) -> FormResult<SubmitAttempt<T>> {
        if self.submit_state == SubmitState::Submitting {
            return Err(FormError::AlreadySubmitting);
        }
        self.submit_count = self.submit_count.saturating_add(1);

        if !self.validate_form() {
            if self.options.touch_all_on_rejected_submit {
                self.touch_all();
            }
            let invalid_fields = self.invalid_fields();
            log::debug!(
                "submit #{} rejected, invalid fields: {}",
                self.submit_count,
                join_keys(&invalid_fields)
            );
            return Ok(SubmitAttempt::Rejected { invalid_fields });
        }

        self.transition_submit_state(SubmitState::Submitting)?;
        log::debug!("submit #{} accepted", self.submit_count);
        Ok(SubmitAttempt::Accepted(self.model.clone()))
    }

    /// Completes the in-flight submission and returns the form to `Idle`.
    pub fn finish_submit(
        &mut self,
        result: Result<SubmissionReceipt, SubmitError>,
    ) -> FormResult<&SubmitOutcome> {
        self.transition_submit_state(SubmitState::Idle)?;
        let outcome = match result {
            Ok(receipt) => {
                log::info!("submission delivered:\n{}", receipt.payload());
                SubmitOutcome::Delivered(receipt)
            }
            Err(error) => {
                log::warn!("submission failed: {error}");
                SubmitOutcome::Failed(error.to_string().into())
            }
        };
        Ok(self.last_outcome.insert(outcome))
    }

    pub fn reset_to_initial(&mut self) {
        self.model = self.initial_model.clone();
        self.submit_state = SubmitState::Idle;
        self.submit_count = 0;
        self.last_outcome = None;
        for meta in self.field_meta.values_mut() {
            meta.dirty = false;
            meta.touched = false;
        }
        self.revalidate();
    }

    pub fn snapshot(&self) -> FormSnapshot<T, E> {
        FormSnapshot {
            model: self.model.clone(),
            submit_state: self.submit_state,
            submit_count: self.submit_count,
            is_dirty: self.is_dirty(),
            is_valid: self.is_valid(),
            field_meta: self.field_meta.clone(),
            last_outcome: self.last_outcome.clone(),
        }
    }

    pub fn field_meta<L>(&self, lens: L) -> Option<&FieldMeta<E>>
    where
        L: FieldLens<T>,
    {
        self.field_meta.get(&lens.key())
    }

    pub fn meta_for_key(&self, key: FieldKey) -> Option<&FieldMeta<E>> {
        self.field_meta.get(&key)
    }

    pub(super) fn ensure_meta(&mut self, key: FieldKey) -> &mut FieldMeta<E> {
        self.field_meta.entry(key).or_default()
    }

    fn transition_submit_state(&mut self, next: SubmitState) -> FormResult<()> {
        let current = self.submit_state;
        let allowed = matches!(
            (current, next),
            (SubmitState::Idle, SubmitState::Submitting)
                | (SubmitState::Submitting, SubmitState::Idle)
        );
        if !allowed {
            return Err(FormError::InvalidStateTransition {
                from: current,
                to: next,
            });
        }
        log::debug!("submit state {current:?} -> {next:?}");
        self.submit_state = next;
        Ok(())
    }
}

pub(super) fn first_error_key<T, E>(
    schema: &Schema<T, E>,
    field_meta: &BTreeMap<FieldKey, FieldMeta<E>>,
) -> Option<FieldKey>
where
    T: 'static,
    E: ValidationError,
{
    schema.keys().find(|key| {
        field_meta
            .get(key)
            .is_some_and(|meta| !meta.errors.is_empty())
    })
}

fn join_keys(keys: &[FieldKey]) -> String {
    keys.iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
