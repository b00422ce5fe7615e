use std::rc::Rc;

use gpui::{
    ElementId, FocusHandle, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use super::checkbox::is_activation_key;
use super::field::FieldFrame;
use super::text_input::{BlurHandler, TextChangeHandler, is_tab_key};
use crate::form::SelectOption;
use crate::theme::Theme;

pub type ToggleHandler = Rc<dyn Fn(&bool, &mut Window, &mut gpui::App)>;

/// Single-choice dropdown. The open state is owned by the caller.
#[derive(IntoElement)]
pub struct Select {
    id: ElementId,
    options: Vec<SelectOption>,
    value: SharedString,
    placeholder: Option<SharedString>,
    label: Option<SharedString>,
    description: Option<SharedString>,
    error: Option<SharedString>,
    required: bool,
    disabled: bool,
    opened: bool,
    focus_handle: Option<FocusHandle>,
    on_change: Option<TextChangeHandler>,
    on_toggle: Option<ToggleHandler>,
    on_blur: Option<BlurHandler>,
}

impl Select {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            value: SharedString::default(),
            placeholder: None,
            label: None,
            description: None,
            error: None,
            required: false,
            disabled: false,
            opened: false,
            focus_handle: None,
            on_change: None,
            on_toggle: None,
            on_blur: None,
        }
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
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

    pub fn opened(mut self, opened: bool) -> Self {
        self.opened = opened;
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

    pub fn on_toggle(mut self, handler: impl Fn(&bool, &mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(handler));
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

    fn selected_label(&self) -> Option<SharedString> {
        self.options
            .iter()
            .find(|option| option.value == self.value)
            .map(|option| option.label.clone())
    }
}

crate::impl_disableable!(Select);
crate::impl_field_like!(Select);

impl RenderOnce for Select {
    fn render(self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = Theme::of(cx);
        let is_focused = self
            .focus_handle
            .as_ref()
            .is_some_and(|handle| handle.is_focused(window));
        let opened = self.opened && !self.disabled;
        let border = if self.error.is_some() {
            theme.error
        } else if is_focused || opened {
            theme.border_focus
        } else {
            theme.border
        };

        let current = match self.selected_label() {
            Some(label) => div().text_color(theme.text).child(label),
            None => div()
                .text_color(theme.muted)
                .child(self.placeholder.clone().unwrap_or_default()),
        };

        let mut trigger = div()
            .id(self.id.clone())
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .w_full()
            .h(px(36.0))
            .px(px(12.0))
            .border_1()
            .border_color(border)
            .rounded(px(4.0))
            .bg(theme.surface)
            .text_sm()
            .child(current)
            .child(
                div()
                    .text_xs()
                    .text_color(theme.muted)
                    .child(if opened { "▴" } else { "▾" }),
            );

        let mut menu = None;
        if self.disabled {
            trigger = trigger.opacity(0.6).cursor_default();
        } else if let Some(focus_handle) = self.focus_handle.clone() {
            let handle_for_click = focus_handle.clone();
            let on_toggle_click = self.on_toggle.clone();
            let on_toggle_key = self.on_toggle.clone();
            let on_blur_key = self.on_blur.clone();
            trigger = trigger
                .track_focus(&focus_handle)
                .cursor_pointer()
                .on_click(move |_, window, cx| {
                    window.focus(&handle_for_click);
                    if let Some(handler) = on_toggle_click.as_ref() {
                        (handler)(&!opened, window, cx);
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
                    if let Some(handler) = on_toggle_key.as_ref() {
                        (handler)(&!opened, window, cx);
                    }
                    cx.stop_propagation();
                });

            if opened {
                let mut list = div()
                    .flex()
                    .flex_col()
                    .w_full()
                    .py(px(4.0))
                    .border_1()
                    .border_color(theme.border)
                    .rounded(px(4.0))
                    .bg(theme.surface)
                    .text_sm();
                for (index, option) in self.options.iter().enumerate() {
                    let is_selected = option.value == self.value;
                    let value = option.value.clone();
                    let on_change = self.on_change.clone();
                    let on_toggle = self.on_toggle.clone();
                    list = list.child(
                        div()
                            .id(("select-option", index))
                            .px(px(12.0))
                            .py(px(6.0))
                            .cursor_pointer()
                            .text_color(theme.text)
                            .bg(if is_selected {
                                theme.background
                            } else {
                                theme.surface
                            })
                            .hover(move |style| style.bg(theme.background))
                            .child(option.label.clone())
                            .on_click(move |_, window, cx| {
                                if let Some(handler) = on_change.as_ref() {
                                    (handler)(&value, window, cx);
                                }
                                if let Some(handler) = on_toggle.as_ref() {
                                    (handler)(&false, window, cx);
                                }
                            }),
                    );
                }
                menu = Some(list);
            }
        }

        let mut root = div().flex().flex_col().gap(px(4.0)).child(trigger);
        if let Some(list) = menu {
            root = root.child(list);
        }
        if !self.disabled
            && let Some(focus_handle) = self.focus_handle
        {
            let on_blur = self.on_blur.clone();
            root = root.on_mouse_down_out(move |_, window, cx| {
                if !focus_handle.is_focused(window) {
                    return;
                }
                window.blur();
                if let Some(handler) = on_blur.as_ref() {
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
        .render(&theme, root.into_any_element())
    }
}
