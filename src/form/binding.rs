use std::sync::Arc;

use gpui::SharedString;

use super::controller::{FieldKey, FormController};
use super::validation::{FieldLens, ValidationError};
use crate::contracts::{Disableable, FieldLike};

type ReadFn<T, V> = Arc<dyn Fn(&T) -> V + Send + Sync>;
type WriteFn<T, E, V> = Arc<dyn Fn(&mut FormController<T, E>, V) + Send + Sync>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextKind {
    #[default]
    Text,
    Email,
    Url,
}

impl TextKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Url => "url",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectOption {
    pub value: SharedString,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

struct Access<T, E, V> {
    read: ReadFn<T, V>,
    write: WriteFn<T, E, V>,
}

impl<T, E, V> Clone for Access<T, E, V> {
    fn clone(&self) -> Self {
        Self {
            read: self.read.clone(),
            write: self.write.clone(),
        }
    }
}

impl<T, E, V> Access<T, E, V>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
    V: Clone + PartialEq + Send + Sync + 'static,
{
    fn new<L>(lens: L) -> Self
    where
        L: FieldLens<T, Value = V>,
    {
        Self {
            read: Arc::new(move |model: &T| lens.get(model).clone()),
            write: Arc::new(move |controller: &mut FormController<T, E>, value: V| {
                controller.set(lens, value)
            }),
        }
    }
}

/// A text-like input bound to one string field.
#[derive(Clone)]
pub struct TextBinding<T, E> {
    key: FieldKey,
    label: SharedString,
    kind: TextKind,
    placeholder: Option<SharedString>,
    access: Access<T, E, SharedString>,
}

impl<T, E> TextBinding<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
{
    pub fn new<L>(lens: L, label: impl Into<SharedString>) -> Self
    where
        L: FieldLens<T, Value = SharedString>,
    {
        Self {
            key: lens.key(),
            label: label.into(),
            kind: TextKind::Text,
            placeholder: None,
            access: Access::new(lens),
        }
    }

    pub fn kind(mut self, kind: TextKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn text_kind(&self) -> TextKind {
        self.kind
    }

    pub fn placeholder_text(&self) -> Option<&SharedString> {
        self.placeholder.as_ref()
    }

    pub fn value(&self, controller: &FormController<T, E>) -> SharedString {
        (self.access.read)(controller.model())
    }

    pub fn input(&self, controller: &mut FormController<T, E>, value: SharedString) {
        (self.access.write)(controller, value);
    }
}

/// A checkbox bound to one boolean field.
#[derive(Clone)]
pub struct CheckboxBinding<T, E> {
    key: FieldKey,
    label: SharedString,
    access: Access<T, E, bool>,
}

impl<T, E> CheckboxBinding<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
{
    pub fn new<L>(lens: L, label: impl Into<SharedString>) -> Self
    where
        L: FieldLens<T, Value = bool>,
    {
        Self {
            key: lens.key(),
            label: label.into(),
            access: Access::new(lens),
        }
    }

    pub fn checked(&self, controller: &FormController<T, E>) -> bool {
        (self.access.read)(controller.model())
    }

    pub fn input(&self, controller: &mut FormController<T, E>, checked: bool) {
        (self.access.write)(controller, checked);
    }

    pub fn toggle(&self, controller: &mut FormController<T, E>) {
        let next = !self.checked(controller);
        self.input(controller, next);
    }
}

/// A single-choice select bound to one string field.
///
/// The empty string stands for "nothing selected".
#[derive(Clone)]
pub struct SelectBinding<T, E> {
    key: FieldKey,
    label: SharedString,
    placeholder: Option<SharedString>,
    options: Vec<SelectOption>,
    access: Access<T, E, SharedString>,
}

impl<T, E> SelectBinding<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
{
    pub fn new<L>(lens: L, label: impl Into<SharedString>) -> Self
    where
        L: FieldLens<T, Value = SharedString>,
    {
        Self {
            key: lens.key(),
            label: label.into(),
            placeholder: None,
            options: Vec::new(),
            access: Access::new(lens),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn option_list(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn placeholder_text(&self) -> Option<&SharedString> {
        self.placeholder.as_ref()
    }

    pub fn value(&self, controller: &FormController<T, E>) -> SharedString {
        (self.access.read)(controller.model())
    }

    /// Label of the current value, or the placeholder when nothing matches.
    pub fn selected_label(&self, controller: &FormController<T, E>) -> Option<SharedString> {
        let value = self.value(controller);
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.clone())
            .or_else(|| self.placeholder.clone())
    }

    pub fn input(&self, controller: &mut FormController<T, E>, value: SharedString) {
        (self.access.write)(controller, value);
    }
}

/// The closed set of field bindings a form can render.
#[derive(Clone)]
pub enum FieldBinding<T, E> {
    Text(TextBinding<T, E>),
    Checkbox(CheckboxBinding<T, E>),
    Select(SelectBinding<T, E>),
}

impl<T, E> From<TextBinding<T, E>> for FieldBinding<T, E> {
    fn from(value: TextBinding<T, E>) -> Self {
        Self::Text(value)
    }
}

impl<T, E> From<CheckboxBinding<T, E>> for FieldBinding<T, E> {
    fn from(value: CheckboxBinding<T, E>) -> Self {
        Self::Checkbox(value)
    }
}

impl<T, E> From<SelectBinding<T, E>> for FieldBinding<T, E> {
    fn from(value: SelectBinding<T, E>) -> Self {
        Self::Select(value)
    }
}

impl<T, E> FieldBinding<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
{
    pub fn key(&self) -> FieldKey {
        match self {
            Self::Text(binding) => binding.key,
            Self::Checkbox(binding) => binding.key,
            Self::Select(binding) => binding.key,
        }
    }

    pub fn label(&self) -> &SharedString {
        match self {
            Self::Text(binding) => &binding.label,
            Self::Checkbox(binding) => &binding.label,
            Self::Select(binding) => &binding.label,
        }
    }

    /// Marks the field touched; called when the control loses focus.
    pub fn blur(&self, controller: &mut FormController<T, E>) {
        controller.touch_key(self.key());
    }

    pub fn error_for_display(&self, controller: &FormController<T, E>) -> Option<SharedString> {
        controller.error_for_display(self.key())
    }

    /// Applies the label, required marker, visible error and disabled state
    /// shared by every field variant.
    pub fn present<C>(&self, controller: &FormController<T, E>, mut component: C) -> C
    where
        C: FieldLike + Disableable,
    {
        component = component
            .label(self.label().clone())
            .required(controller.schema().is_required(self.key()))
            .disabled(controller.is_submitting());
        if let Some(error) = self.error_for_display(controller) {
            component = component.error(error);
        }
        component
    }
}

impl<T, E> FormController<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
{
    /// The first error of a field, but only once the field has been touched.
    pub fn error_for_display(&self, key: FieldKey) -> Option<SharedString> {
        let meta = self.field_meta.get(&key)?;
        if !meta.touched {
            return None;
        }
        meta.errors.first().map(ValidationError::message)
    }

    pub fn field_error_for_display<L>(&self, lens: L) -> Option<SharedString>
    where
        L: FieldLens<T>,
    {
        self.error_for_display(lens.key())
    }
}
