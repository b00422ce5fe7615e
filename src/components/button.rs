use std::rc::Rc;

use gpui::{
    ClickEvent, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::theme::Theme;

pub type ClickHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut gpui::App)>;

/// Primary action button. While `loading` it shows `loading_label` and
/// ignores clicks, the same as when disabled.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    loading_label: Option<SharedString>,
    disabled: bool,
    loading: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: SharedString::default(),
            loading_label: None,
            disabled: false,
            loading: false,
            on_click: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = label.into();
        self
    }

    pub fn loading_label(mut self, label: impl Into<SharedString>) -> Self {
        self.loading_label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }
}

crate::impl_disableable!(Button);

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = Theme::of(cx);
        let interactive = self.is_interactive();
        let label = if self.loading {
            self.loading_label.clone().unwrap_or_else(|| self.label.clone())
        } else {
            self.label.clone()
        };

        let mut button = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .h(px(36.0))
            .px(px(18.0))
            .rounded(px(4.0))
            .bg(theme.primary)
            .text_sm()
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(theme.primary_text)
            .child(label);

        if !interactive {
            return button.opacity(0.55).cursor_default();
        }

        let hover_bg = theme.primary_hover;
        button = button
            .cursor_pointer()
            .hover(move |style| style.bg(hover_bg));
        if let Some(handler) = self.on_click {
            button = button.on_click(move |event, window, cx| (handler)(event, window, cx));
        }
        button
    }
}
