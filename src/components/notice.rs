use gpui::{
    FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, px,
};

use crate::theme::Theme;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Inline acknowledgment panel with a title and a monospace body.
#[derive(IntoElement)]
pub struct Notice {
    kind: NoticeKind,
    title: SharedString,
    body: SharedString,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<SharedString>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: SharedString::default(),
        }
    }

    pub fn body(mut self, body: impl Into<SharedString>) -> Self {
        self.body = body.into();
        self
    }
}

impl RenderOnce for Notice {
    fn render(self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = Theme::of(cx);
        let (accent, surface) = match self.kind {
            NoticeKind::Success => (theme.success, theme.success_surface),
            NoticeKind::Failure => (theme.error, theme.error_surface),
        };

        let mut panel = div()
            .flex()
            .flex_col()
            .gap(px(6.0))
            .p(px(12.0))
            .border_1()
            .border_color(accent)
            .rounded(px(4.0))
            .bg(surface)
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(accent)
                    .child(self.title),
            );

        if !self.body.is_empty() {
            let mut body = div()
                .flex()
                .flex_col()
                .font_family("monospace")
                .text_xs()
                .text_color(theme.text);
            for line in self.body.lines() {
                body = body.child(SharedString::from(line.to_string()));
            }
            panel = panel.child(body);
        }

        panel
    }
}
