use std::sync::Arc;

use gpui::SharedString;

use super::controller::{FieldKey, FormController, first_error_key};

pub trait ValidationError: Clone + Send + Sync + 'static {
    fn message(&self) -> SharedString;
}

pub trait FieldLens<T>: Copy + Send + Sync + 'static {
    type Value: Clone + PartialEq + Send + Sync + 'static;

    fn key(self) -> FieldKey;
    fn get<'a>(self, model: &'a T) -> &'a Self::Value;
    fn set(self, model: &mut T, value: Self::Value);
}

pub trait FormModel: Clone + Send + Sync + 'static {
    type Fields;

    fn fields() -> Self::Fields;

    /// Field keys in declaration order.
    fn field_keys() -> &'static [FieldKey];
}

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A named predicate paired with the error it reports when the predicate fails.
pub struct Rule<T, E> {
    name: &'static str,
    predicate: Predicate<T>,
    error: E,
}

impl<T, E: Clone> Clone for Rule<T, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            predicate: self.predicate.clone(),
            error: self.error.clone(),
        }
    }
}

impl<T, E> Rule<T, E> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn passes(&self, model: &T) -> bool {
        (self.predicate)(model)
    }
}

/// Rules of one field, built against the field's lens.
pub struct FieldRules<T, L, E>
where
    L: FieldLens<T>,
{
    lens: L,
    rules: Vec<Rule<T, E>>,
}

impl<T, L, E> FieldRules<T, L, E>
where
    T: 'static,
    L: FieldLens<T>,
    E: ValidationError,
{
    fn new(lens: L) -> Self {
        Self {
            lens,
            rules: Vec::new(),
        }
    }

    /// Appends a rule; rules run in the order they are added.
    pub fn rule<F>(mut self, name: &'static str, predicate: F, error: E) -> Self
    where
        F: Fn(&L::Value) -> bool + Send + Sync + 'static,
    {
        let lens = self.lens;
        self.rules.push(Rule {
            name,
            predicate: Arc::new(move |model: &T| predicate(lens.get(model))),
            error,
        });
        self
    }
}

struct FieldSchema<T, E> {
    key: FieldKey,
    rules: Vec<Rule<T, E>>,
}

impl<T, E: Clone> Clone for FieldSchema<T, E> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            rules: self.rules.clone(),
        }
    }
}

/// Errors per field, in schema order.
pub type ErrorMap<E> = Vec<(FieldKey, Vec<E>)>;

/// Ordered per-field rule lists for a form model.
///
/// Fields are evaluated in declaration order and each field's rules in the
/// order they were added, so the same model always yields the same errors.
pub struct Schema<T, E> {
    fields: Vec<FieldSchema<T, E>>,
}

impl<T, E: Clone> Clone for Schema<T, E> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<T, E> Default for Schema<T, E> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<T, E> Schema<T, E>
where
    T: 'static,
    E: ValidationError,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the rules of one field. Declaring the same field twice
    /// appends to its existing rules.
    pub fn field<L>(
        mut self,
        lens: L,
        build: impl FnOnce(FieldRules<T, L, E>) -> FieldRules<T, L, E>,
    ) -> Self
    where
        L: FieldLens<T>,
    {
        let key = lens.key();
        let rules = build(FieldRules::new(lens)).rules;
        match self.fields.iter_mut().find(|field| field.key == key) {
            Some(existing) => existing.rules.extend(rules),
            None => self.fields.push(FieldSchema { key, rules }),
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.fields.iter().map(|field| field.key)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.fields.iter().any(|field| field.key == key)
    }

    pub fn rule_names(&self, key: FieldKey) -> Vec<&'static str> {
        self.rules_for(key).iter().map(Rule::name).collect()
    }

    /// A field is required when it carries a `required` or `accepted` rule.
    pub fn is_required(&self, key: FieldKey) -> bool {
        self.rules_for(key)
            .iter()
            .any(|rule| matches!(rule.name, super::rules::REQUIRED | super::rules::ACCEPTED))
    }

    pub fn evaluate_field(&self, key: FieldKey, model: &T, first_only: bool) -> Vec<E> {
        let mut errors = Vec::new();
        for rule in self.rules_for(key) {
            if !rule.passes(model) {
                errors.push(rule.error.clone());
                if first_only {
                    break;
                }
            }
        }
        errors
    }

    pub fn evaluate(&self, model: &T, first_only: bool) -> ErrorMap<E> {
        self.fields
            .iter()
            .map(|field| (field.key, self.evaluate_field(field.key, model, first_only)))
            .collect()
    }

    fn rules_for(&self, key: FieldKey) -> &[Rule<T, E>] {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| field.rules.as_slice())
            .unwrap_or(&[])
    }
}

impl<T, E> FormController<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
{
    /// Writes a field value and re-evaluates the whole schema.
    pub fn set<L>(&mut self, lens: L, value: L::Value)
    where
        L: FieldLens<T>,
    {
        let key = lens.key();
        lens.set(&mut self.model, value);
        let is_dirty = lens.get(&self.model) != lens.get(&self.initial_model);
        self.ensure_meta(key).dirty = is_dirty;
        self.revalidate();
    }

    pub fn touch<L>(&mut self, lens: L)
    where
        L: FieldLens<T>,
    {
        self.touch_key(lens.key());
    }

    pub fn touch_key(&mut self, key: FieldKey) {
        let meta = self.ensure_meta(key);
        if !meta.touched {
            log::trace!("field `{key}` touched");
            meta.touched = true;
        }
    }

    /// Marks every schema field touched so all outstanding errors become visible.
    pub fn touch_all(&mut self) {
        let keys = self.schema.keys().collect::<Vec<_>>();
        for key in keys {
            self.touch_key(key);
        }
    }

    /// Re-evaluates every field and reports whether the form is valid.
    pub fn validate_form(&mut self) -> bool {
        self.revalidate();
        self.is_valid()
    }

    pub fn is_valid(&self) -> bool {
        self.field_meta.values().all(|meta| meta.errors.is_empty())
    }

    pub fn errors_for<L>(&self, lens: L) -> &[E]
    where
        L: FieldLens<T>,
    {
        self.errors_for_key(lens.key())
    }

    pub fn errors_for_key(&self, key: FieldKey) -> &[E] {
        self.field_meta
            .get(&key)
            .map(|meta| meta.errors.as_slice())
            .unwrap_or(&[])
    }

    /// Keys of the fields currently holding an error, in schema order.
    pub fn invalid_fields(&self) -> Vec<FieldKey> {
        self.schema
            .keys()
            .filter(|key| !self.errors_for_key(*key).is_empty())
            .collect()
    }

    pub(super) fn revalidate(&mut self) {
        let errors = self
            .schema
            .evaluate(&self.model, self.options.first_error_only);
        for (key, field_errors) in errors {
            self.ensure_meta(key).errors = field_errors;
        }
        self.first_error = first_error_key(&self.schema, &self.field_meta);
    }
}
