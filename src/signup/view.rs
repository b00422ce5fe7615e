use std::rc::Rc;

use gpui::{
    AnyElement, ClickEvent, Context, FocusHandle, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Task, Window, div,
    px,
};

use super::model::SignupValues;
use super::schema::{SignupBinding, SignupController, signup_bindings, signup_controller};
use crate::components::{Button, Checkbox, Notice, NoticeKind, Select, TextInput};
use crate::config::AppConfig;
use crate::form::{
    DelayedEcho, FieldBinding, FormOptions, SubmissionEffect, SubmitAttempt, SubmitOutcome,
};
use crate::theme::Theme;

pub const TITLE: &str = "Agile Ortho";
pub const SUBTITLE: &str = "Doctor Registration Form";

/// The registration form view. Owns the controller; every binding reads and
/// writes it through `&self` / `&mut self`.
pub struct SignupForm {
    controller: SignupController,
    bindings: Vec<SignupBinding>,
    focus_handles: Vec<FocusHandle>,
    select_open: bool,
    effect: Rc<dyn SubmissionEffect<SignupValues>>,
    submit_task: Option<Task<()>>,
}

impl SignupForm {
    pub fn new(config: &AppConfig, cx: &mut Context<Self>) -> Self {
        Self::with_effect(
            Rc::new(DelayedEcho::new(config.submit_delay)),
            config.form,
            cx,
        )
    }

    pub fn with_effect(
        effect: Rc<dyn SubmissionEffect<SignupValues>>,
        options: FormOptions,
        cx: &mut Context<Self>,
    ) -> Self {
        let bindings = signup_bindings();
        let focus_handles = bindings.iter().map(|_| cx.focus_handle()).collect();
        Self {
            controller: signup_controller(options),
            bindings,
            focus_handles,
            select_open: false,
            effect,
            submit_task: None,
        }
    }

    pub fn controller(&self) -> &SignupController {
        &self.controller
    }

    fn input_text(&mut self, index: usize, value: SharedString, cx: &mut Context<Self>) {
        let Some(binding) = self.bindings.get(index) else {
            return;
        };
        match binding {
            FieldBinding::Text(text) => text.input(&mut self.controller, value),
            FieldBinding::Select(select) => {
                select.input(&mut self.controller, value);
                // Choosing an option ends the interaction with the select.
                binding.blur(&mut self.controller);
            }
            FieldBinding::Checkbox(_) => return,
        }
        cx.notify();
    }

    fn input_checked(&mut self, index: usize, checked: bool, cx: &mut Context<Self>) {
        if let Some(FieldBinding::Checkbox(binding)) = self.bindings.get(index) {
            binding.input(&mut self.controller, checked);
            cx.notify();
        }
    }

    fn blur(&mut self, index: usize, cx: &mut Context<Self>) {
        if let Some(binding) = self.bindings.get(index) {
            binding.blur(&mut self.controller);
            if matches!(binding, FieldBinding::Select(_)) {
                self.select_open = false;
            }
            cx.notify();
        }
    }

    fn set_select_open(&mut self, opened: bool, cx: &mut Context<Self>) {
        self.select_open = opened;
        cx.notify();
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let values = match self.controller.begin_submit() {
            Ok(SubmitAttempt::Accepted(values)) => values,
            Ok(SubmitAttempt::Rejected { .. }) => {
                cx.notify();
                return;
            }
            Err(error) => {
                log::debug!("submit ignored: {error}");
                return;
            }
        };

        self.select_open = false;
        let pending = self.effect.submit(values);
        self.submit_task = Some(cx.spawn(async move |this, cx| {
            let result = pending.await;
            let updated = this.update(cx, |this, cx| {
                if let Err(error) = this.controller.finish_submit(result) {
                    log::error!("failed to complete submission: {error}");
                }
                this.submit_task = None;
                cx.notify();
            });
            if updated.is_err() {
                log::debug!("signup form dropped before submission completed");
            }
        }));
        cx.notify();
    }

    fn render_field(
        &self,
        index: usize,
        binding: &SignupBinding,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let id = binding.key().as_str();
        let focus_handle = self.focus_handles[index].clone();
        let view = cx.entity().downgrade();
        let on_blur = move |_: &mut Window, cx: &mut gpui::App| {
            let _ = view.update(cx, |this, cx| this.blur(index, cx));
        };

        match binding {
            FieldBinding::Text(text) => {
                let mut input = TextInput::new(id)
                    .kind(text.text_kind())
                    .value(text.value(&self.controller))
                    .focus_handle(focus_handle)
                    .on_change(cx.listener(move |this, value: &SharedString, _, cx| {
                        this.input_text(index, value.clone(), cx)
                    }))
                    .on_blur(on_blur);
                if let Some(placeholder) = text.placeholder_text() {
                    input = input.placeholder(placeholder.clone());
                }
                binding.present(&self.controller, input).into_any_element()
            }
            FieldBinding::Select(select) => {
                let mut control = Select::new(id)
                    .options(select.option_list().iter().cloned())
                    .value(select.value(&self.controller))
                    .opened(self.select_open)
                    .focus_handle(focus_handle)
                    .on_change(cx.listener(move |this, value: &SharedString, _, cx| {
                        this.input_text(index, value.clone(), cx)
                    }))
                    .on_toggle(cx.listener(|this, opened: &bool, _, cx| {
                        this.set_select_open(*opened, cx)
                    }))
                    .on_blur(on_blur);
                if let Some(placeholder) = select.placeholder_text() {
                    control = control.placeholder(placeholder.clone());
                }
                binding.present(&self.controller, control).into_any_element()
            }
            FieldBinding::Checkbox(checkbox) => {
                let control = Checkbox::new(id)
                    .checked(checkbox.checked(&self.controller))
                    .focus_handle(focus_handle)
                    .on_change(cx.listener(move |this, checked: &bool, _, cx| {
                        this.input_checked(index, *checked, cx)
                    }))
                    .on_blur(on_blur);
                binding.present(&self.controller, control).into_any_element()
            }
        }
    }

    fn render_outcome(&self) -> Option<Notice> {
        match self.controller.last_outcome()? {
            SubmitOutcome::Delivered(receipt) => Some(
                Notice::new(NoticeKind::Success, "Registration submitted")
                    .body(receipt.payload().to_string()),
            ),
            SubmitOutcome::Failed(message) => Some(
                Notice::new(NoticeKind::Failure, "Submission failed").body(message.clone()),
            ),
        }
    }
}

impl Render for SignupForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = Theme::of(cx);
        let submitting = self.controller.is_submitting();

        let mut form = div().flex().flex_col().gap(px(16.0)).w_full();
        for (index, binding) in self.bindings.iter().enumerate() {
            form = form.child(self.render_field(index, binding, cx));
        }
        form = form.child(
            div().flex().flex_row().child(
                Button::new("submit")
                    .label("Submit")
                    .loading_label("Submitting…")
                    .loading(submitting)
                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.submit(cx))),
            ),
        );
        if let Some(notice) = self.render_outcome() {
            form = form.child(notice);
        }

        div()
            .id("signup-root")
            .size_full()
            .overflow_y_scroll()
            .bg(theme.background)
            .flex()
            .flex_col()
            .items_center()
            .py(px(32.0))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(20.0))
                    .w(px(440.0))
                    .p(px(24.0))
                    .border_1()
                    .border_color(theme.border)
                    .rounded(px(6.0))
                    .bg(theme.surface)
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap(px(4.0))
                            .child(
                                div()
                                    .text_2xl()
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(theme.text)
                                    .child(TITLE),
                            )
                            .child(div().text_base().text_color(theme.muted).child(SUBTITLE)),
                    )
                    .child(form),
            )
    }
}
