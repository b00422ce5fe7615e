use std::rc::Rc;

use gpui::{
    ElementId, FocusHandle, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use super::field::FieldFrame;
use super::text_input::{BlurHandler, is_tab_key};
use crate::theme::Theme;

pub type CheckboxChangeHandler = Rc<dyn Fn(&bool, &mut Window, &mut gpui::App)>;

pub(crate) fn is_activation_key(key: &str) -> bool {
    matches!(key, "space" | "enter")
}

#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    label: SharedString,
    description: Option<SharedString>,
    error: Option<SharedString>,
    checked: bool,
    required: bool,
    disabled: bool,
    focus_handle: Option<FocusHandle>,
    on_change: Option<CheckboxChangeHandler>,
    on_blur: Option<BlurHandler>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: SharedString::default(),
            description: None,
            error: None,
            checked: false,
            required: false,
            disabled: false,
            focus_handle: None,
            on_change: None,
            on_blur: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(mut self, value: impl Into<SharedString>) -> Self {
        self.label = value.into();
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

    pub fn on_change(mut self, handler: impl Fn(&bool, &mut Window, &mut gpui::App) + 'static) -> Self {
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
            Some(self.label.as_str()).filter(|label| !label.is_empty()),
            self.required,
            self.error.as_ref().map(gpui::SharedString::as_str),
            self.disabled,
        )
    }
}

crate::impl_disableable!(Checkbox);
crate::impl_field_like!(Checkbox);

impl RenderOnce for Checkbox {
    fn render(self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = Theme::of(cx);
        let checked = self.checked;
        let is_focused = self
            .focus_handle
            .as_ref()
            .is_some_and(|handle| handle.is_focused(window));
        let border = if self.error.is_some() {
            theme.error
        } else if is_focused || checked {
            theme.border_focus
        } else {
            theme.border
        };

        let mut control = div()
            .w(px(16.0))
            .h(px(16.0))
            .border_1()
            .border_color(border)
            .rounded(px(3.0))
            .flex()
            .items_center()
            .justify_center()
            .bg(if checked { theme.primary } else { theme.surface });
        if checked {
            control = control
                .text_xs()
                .text_color(theme.primary_text)
                .child("✓");
        }

        let mut label_row = div()
            .flex()
            .flex_row()
            .gap(px(2.0))
            .text_sm()
            .text_color(theme.text)
            .child(self.label);
        if self.required {
            label_row = label_row.child(div().text_color(theme.error).child("*"));
        }

        let mut row = div()
            .id(self.id)
            .flex()
            .flex_row()
            .items_center()
            .gap(px(8.0))
            .child(control)
            .child(label_row);

        if self.disabled {
            row = row.opacity(0.6).cursor_default();
        } else if let Some(focus_handle) = self.focus_handle {
            let handle_for_click = focus_handle.clone();
            let handle_for_blur = focus_handle.clone();
            let on_change_click = self.on_change.clone();
            let on_change_key = self.on_change.clone();
            let on_blur_key = self.on_blur.clone();
            let on_blur = self.on_blur.clone();
            row = row
                .track_focus(&focus_handle)
                .cursor_pointer()
                .on_click(move |_, window, cx| {
                    window.focus(&handle_for_click);
                    if let Some(handler) = on_change_click.as_ref() {
                        (handler)(&!checked, window, cx);
                    }
                })
                .on_key_down(move |event, window, cx| {
                    let key = event.keystroke.key.as_str();
                    if is_tab_key(key) {
                        window.blur();
                        if let Some(handler) = on_blur_key.as_ref() {
                            (handler)(window, cx);
                        }
                        return;
                    }
                    if !is_activation_key(key) {
                        return;
                    }
                    if let Some(handler) = on_change_key.as_ref() {
                        (handler)(&!checked, window, cx);
                    }
                    cx.stop_propagation();
                })
                .on_mouse_down_out(move |_, window, cx| {
                    if !handle_for_blur.is_focused(window) {
                        return;
                    }
                    window.blur();
                    if let Some(handler) = on_blur.as_ref() {
                        (handler)(window, cx);
                    }
                });
        }

        FieldFrame {
            label: None,
            required: false,
            description: self.description,
            error: self.error,
        }
        .render(&theme, row.into_any_element())
    }
}
