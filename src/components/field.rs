use gpui::{AnyElement, Div, FontWeight, IntoElement, ParentElement, SharedString, Styled, div, px};

use crate::theme::Theme;

/// Label, control, description and error stacked the same way for every field.
pub(crate) struct FieldFrame {
    pub label: Option<SharedString>,
    pub required: bool,
    pub description: Option<SharedString>,
    pub error: Option<SharedString>,
}

impl FieldFrame {
    pub fn render(self, theme: &Theme, control: AnyElement) -> Div {
        let mut frame = div().flex().flex_col().gap(px(4.0)).w_full();

        if let Some(label) = self.label {
            let mut label_row = div()
                .flex()
                .flex_row()
                .gap(px(2.0))
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .text_color(theme.text)
                .child(label);
            if self.required {
                label_row = label_row.child(div().text_color(theme.error).child("*"));
            }
            frame = frame.child(label_row);
        }

        frame = frame.child(control);

        if let Some(description) = self.description {
            frame = frame.child(
                div()
                    .text_xs()
                    .text_color(theme.muted)
                    .child(description),
            );
        }

        if let Some(error) = self.error {
            frame = frame.child(error_text(theme, error));
        }

        frame
    }
}

pub(crate) fn error_text(theme: &Theme, message: SharedString) -> impl IntoElement {
    div().text_xs().text_color(theme.error).child(message)
}
