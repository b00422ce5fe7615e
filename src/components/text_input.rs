use std::rc::Rc;

use gpui::{
    ElementId, FocusHandle, InteractiveElement, IntoElement, KeyDownEvent, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use super::field::FieldFrame;
use crate::form::TextKind;
use crate::theme::Theme;

pub type TextChangeHandler = Rc<dyn Fn(&SharedString, &mut Window, &mut gpui::App)>;
pub type BlurHandler = Rc<dyn Fn(&mut Window, &mut gpui::App)>;

/// Single-line text input for text, email and URL values.
///
/// The component is controlled: it renders `value` and reports every edit
/// through `on_change`.
#[derive(IntoElement)]
pub struct TextInput {
    id: ElementId,
    kind: TextKind,
    value: SharedString,
    placeholder: Option<SharedString>,
    label: Option<SharedString>,
    description: Option<SharedString>,
    error: Option<SharedString>,
    required: bool,
    disabled: bool,
    focus_handle: Option<FocusHandle>,
    on_change: Option<TextChangeHandler>,
    on_blur: Option<BlurHandler>,
}

impl TextInput {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            kind: TextKind::Text,
            value: SharedString::default(),
            placeholder: None,
            label: None,
            description: None,
            error: None,
            required: false,
            disabled: false,
            focus_handle: None,
            on_change: None,
            on_blur: None,
        }
    }

    pub fn kind(mut self, kind: TextKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn label(mut self, value: impl Into<SharedString>) -> Self {
        self.label = Some(value.into());
        self
    }

    pub fn description(mut self, value: impl Into<SharedString>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn error(mut self, value: impl Into<SharedString>) -> Self {
        self.error = Some(value.into());
        self
    }

    pub fn required(mut self, value: bool) -> Self {
        self.required = value;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focus_handle(mut self, focus_handle: FocusHandle) -> Self {
        self.focus_handle = Some(focus_handle);
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_blur = Some(Rc::new(handler));
        self
    }

    #[cfg(test)]
    pub(crate) fn presented(&self) -> (Option<&str>, bool, Option<&str>, bool) {
        (
            self.label.as_ref().map(gpui::SharedString::as_str),
            self.required,
            self.error.as_ref().map(gpui::SharedString::as_str),
            self.disabled,
        )
    }

    /// Applies one key press to `value`; `None` when the key does not edit.
    pub(crate) fn edited_value(value: &str, key: &str, key_char: Option<&str>) -> Option<String> {
        if key == "backspace" {
            let mut next = value.to_string();
            return next.pop().map(|_| next);
        }

        let typed = key_char?;
        if typed.is_empty() || typed.chars().any(char::is_control) {
            return None;
        }
        let mut next = value.to_string();
        next.push_str(typed);
        Some(next)
    }
}

/// Tab leaves a field; the control gives up focus and reports a blur.
pub(crate) fn is_tab_key(key: &str) -> bool {
    key == "tab"
}

fn has_command_modifier(event: &KeyDownEvent) -> bool {
    let modifiers = &event.keystroke.modifiers;
    modifiers.control || modifiers.platform || modifiers.function || modifiers.alt
}

crate::impl_disableable!(TextInput);
crate::impl_field_like!(TextInput);

impl RenderOnce for TextInput {
    fn render(self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = Theme::of(cx);
        let is_focused = self
            .focus_handle
            .as_ref()
            .is_some_and(|handle| handle.is_focused(window));
        let border = if self.error.is_some() {
            theme.error
        } else if is_focused {
            theme.border_focus
        } else {
            theme.border
        };

        let content = if self.value.is_empty() {
            div()
                .text_color(theme.muted)
                .child(
                    self.placeholder
                        .clone()
                        .unwrap_or_else(|| default_placeholder(self.kind).into()),
                )
        } else {
            div().text_color(theme.text).child(self.value.clone())
        };

        let mut input = div()
            .id(self.id.clone())
            .flex()
            .flex_row()
            .items_center()
            .w_full()
            .h(px(36.0))
            .px(px(12.0))
            .border_1()
            .border_color(border)
            .rounded(px(4.0))
            .bg(theme.surface)
            .text_sm()
            .overflow_hidden()
            .child(content);

        if is_focused && !self.disabled {
            input = input.child(div().ml(px(1.0)).w(px(1.0)).h(px(18.0)).bg(theme.text));
        }

        if self.disabled {
            input = input.opacity(0.6).cursor_default();
        } else if let Some(focus_handle) = self.focus_handle.clone() {
            let handle_for_click = focus_handle.clone();
            let handle_for_blur = focus_handle.clone();
            let value = self.value.clone();
            let on_change = self.on_change.clone();
            let on_blur_key = self.on_blur.clone();
            let on_blur_out = self.on_blur.clone();
            input = input
                .track_focus(&focus_handle)
                .cursor_text()
                .on_click(move |_, window, cx| {
                    window.focus(&handle_for_click);
                    window.refresh();
                })
                .on_key_down(move |event, window, cx| {
                    if is_tab_key(event.keystroke.key.as_str()) {
                        window.blur();
                        if let Some(handler) = on_blur_key.as_ref() {
                            (handler)(window, cx);
                        }
                        return;
                    }
                    if has_command_modifier(event) {
                        return;
                    }
                    let keystroke = &event.keystroke;
                    let Some(next) = Self::edited_value(
                        &value,
                        keystroke.key.as_str(),
                        keystroke.key_char.as_deref(),
                    ) else {
                        return;
                    };
                    let next = SharedString::from(next);
                    if let Some(handler) = on_change.as_ref() {
                        (handler)(&next, window, cx);
                    }
                    cx.stop_propagation();
                })
                .on_mouse_down_out(move |_, window, cx| {
                    if !handle_for_blur.is_focused(window) {
                        return;
                    }
                    window.blur();
                    if let Some(handler) = on_blur_out.as_ref() {
                        (handler)(window, cx);
                    }
                });
        }

        FieldFrame {
            label: self.label,
            required: self.required,
            description: self.description,
            error: self.error,
        }
        .render(&theme, input.into_any_element())
    }
}

fn default_placeholder(kind: TextKind) -> &'static str {
    match kind {
        TextKind::Text => "",
        TextKind::Email => "name@example.com",
        TextKind::Url => "https://",
    }
}
