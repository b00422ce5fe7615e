use super::*;
use crate::form::{
    DelayedEcho, FieldKey, FormError, FormModel, FormOptions, SubmissionReceipt, SubmitAttempt,
    SubmitError, SubmitOutcome, SubmitState,
};
use futures::executor::block_on;
use gpui::SharedString;
use std::time::Duration;

fn controller() -> SignupController {
    signup_controller(FormOptions::default())
}

fn valid_values() -> SignupValues {
    SignupValues {
        first_name: "Alok".into(),
        last_name: "Kattangoori".into(),
        email: "alok@agileortho.co.in".into(),
        url: "https://www.agileortho.in/".into(),
        speciality: "elbow".into(),
        accepted_terms: true,
    }
}

fn filled_controller() -> SignupController {
    let fields = SignupValues::fields();
    let values = valid_values();
    let mut controller = controller();
    controller.set(fields.first_name(), values.first_name);
    controller.set(fields.last_name(), values.last_name);
    controller.set(fields.email(), values.email);
    controller.set(fields.url(), values.url);
    controller.set(fields.speciality(), values.speciality);
    controller.set(fields.accepted_terms(), values.accepted_terms);
    controller
}

fn shown(controller: &SignupController, key: &'static str) -> Option<SharedString> {
    controller.error_for_display(FieldKey::new(key))
}

#[test]
fn empty_required_fields_show_required_once_touched() {
    let fields = SignupValues::fields();
    let mut controller = controller();

    assert_eq!(shown(&controller, "first_name"), None);
    for key in ["first_name", "last_name", "email", "speciality"] {
        controller.touch_key(FieldKey::new(key));
        assert_eq!(shown(&controller, key).as_ref().map(gpui::SharedString::as_str), Some("Required"), "{key}");
        assert_eq!(
            controller.errors_for_key(FieldKey::new(key)),
            &[SignupError::MissingRequired]
        );
    }

    controller.touch(fields.url());
    assert_eq!(controller.field_error_for_display(fields.url()), None);
}

#[test]
fn whitespace_only_name_is_missing() {
    let fields = SignupValues::fields();
    let mut controller = controller();
    controller.set(fields.first_name(), "   ".into());
    assert_eq!(
        controller.errors_for(fields.first_name()),
        &[SignupError::MissingRequired]
    );
}

#[test]
fn long_first_name_is_too_long_regardless_of_touch_order() {
    let fields = SignupValues::fields();
    let long_name = SharedString::from("Bartholomewsmith");
    assert_eq!(long_name.chars().count(), 16);

    let mut touched_first = controller();
    touched_first.touch(fields.first_name());
    touched_first.set(fields.first_name(), long_name.clone());

    let mut typed_first = controller();
    typed_first.set(fields.first_name(), long_name);
    typed_first.touch(fields.first_name());

    for controller in [&touched_first, &typed_first] {
        assert_eq!(
            controller.errors_for(fields.first_name()),
            &[SignupError::TooLong { max: 15 }]
        );
        assert_eq!(
            shown(controller, "first_name").as_ref().map(gpui::SharedString::as_str),
            Some("Must be 15 characters or less")
        );
    }
}

#[test]
fn name_lengths_count_characters_not_bytes() {
    let fields = SignupValues::fields();
    let mut controller = controller();
    controller.set(fields.first_name(), "Ålökßéüñçøàèìò".into());
    assert!(controller.errors_for(fields.first_name()).is_empty());

    controller.set(fields.last_name(), "a".repeat(20).into());
    assert!(controller.errors_for(fields.last_name()).is_empty());
    controller.set(fields.last_name(), "a".repeat(21).into());
    assert_eq!(
        controller.errors_for(fields.last_name()),
        &[SignupError::TooLong { max: 20 }]
    );
}

#[test]
fn email_format_is_checked() {
    let fields = SignupValues::fields();
    let mut controller = controller();
    controller.touch(fields.email());

    controller.set(fields.email(), "not-an-email".into());
    assert_eq!(
        controller.errors_for(fields.email()),
        &[SignupError::InvalidFormat(FormatKind::Email)]
    );
    assert_eq!(shown(&controller, "email").as_ref().map(gpui::SharedString::as_str), Some("Invalid email address"));

    controller.set(fields.email(), "a@b.com".into());
    assert!(controller.errors_for(fields.email()).is_empty());
    assert_eq!(shown(&controller, "email"), None);
}

#[test]
fn url_is_optional_but_must_be_well_formed() {
    let fields = SignupValues::fields();
    let mut controller = controller();
    controller.touch(fields.url());

    assert!(controller.errors_for(fields.url()).is_empty());

    controller.set(fields.url(), "not a url".into());
    assert_eq!(
        controller.errors_for(fields.url()),
        &[SignupError::InvalidFormat(FormatKind::Url)]
    );
    assert_eq!(shown(&controller, "url").as_ref().map(gpui::SharedString::as_str), Some("Invalid URL."));

    for accepted in ["https://agileortho.in", "ftp://files.agileortho.in/cv.pdf"] {
        controller.set(fields.url(), accepted.into());
        assert!(controller.errors_for(fields.url()).is_empty(), "{accepted}");
    }

    // The placeholder is only a hint; without a scheme it is not a URL.
    for rejected in ["www.agileortho.in/", "http://localhost:8080/path"] {
        controller.set(fields.url(), rejected.into());
        assert_eq!(
            controller.errors_for(fields.url()),
            &[SignupError::InvalidFormat(FormatKind::Url)],
            "{rejected}"
        );
    }
}

#[test]
fn speciality_must_come_from_the_list() {
    let fields = SignupValues::fields();
    let mut controller = controller();

    controller.set(fields.speciality(), "dentistry".into());
    assert_eq!(
        controller.errors_for(fields.speciality()),
        &[SignupError::InvalidChoice]
    );

    for value in Speciality::values() {
        controller.set(fields.speciality(), value.into());
        assert!(controller.errors_for(fields.speciality()).is_empty(), "{value}");
    }
}

#[test]
fn speciality_values_and_labels() {
    assert_eq!(Speciality::values().count(), 12);
    assert_eq!(Speciality::HandAndWrist.value(), "handandwrist");
    assert_eq!(
        Speciality::PelvicAndAcetabularSurgeon.value(),
        "pelvicandacetabularsurgeon"
    );
    assert_eq!(Speciality::KneeAndLowerLeg.label(), "Knee and Lower Leg");
    assert_eq!(
        "spinesurgeon".parse::<Speciality>().ok(),
        Some(Speciality::SpineSurgeon)
    );

    let first = Speciality::options().next();
    assert_eq!(first.map(|option| option.label), Some("Shoulder".into()));
}

#[test]
fn speciality_options_carry_display_labels() {
    let labels = Speciality::options()
        .map(|option| option.label.to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec![
            "Shoulder",
            "Elbow",
            "Hand and Wrist",
            "Hip and Thigh",
            "Foot and Ankle",
            "Knee and Lower Leg",
            "Spine Surgeon",
            "Pediatric Orthopedics",
            "Orthopedic Oncologist",
            "Complex Trauma Surgeon",
            "Pelvic and Acetabular surgeon",
            "Other",
        ]
    );
}

#[test]
fn terms_must_be_accepted() {
    let fields = SignupValues::fields();
    let mut controller = controller();
    controller.touch(fields.accepted_terms());

    assert_eq!(
        shown(&controller, "accepted_terms").as_ref().map(gpui::SharedString::as_str),
        Some("You must accept the terms and conditions.")
    );

    controller.set(fields.accepted_terms(), true);
    assert_eq!(shown(&controller, "accepted_terms"), None);
}

#[test]
fn valid_submit_runs_through_submitting_and_back_to_idle() {
    let mut controller = filled_controller();
    assert!(controller.is_valid());

    let attempt = controller.begin_submit().expect("idle form accepts a submit");
    assert_eq!(attempt, SubmitAttempt::Accepted(valid_values()));
    assert_eq!(controller.submit_state(), SubmitState::Submitting);

    assert_eq!(controller.begin_submit(), Err(FormError::AlreadySubmitting));
    assert_eq!(controller.submit_count(), 1);

    let outcome = controller
        .finish_submit(Ok(SubmissionReceipt::new("{}")))
        .expect("submitting form accepts completion")
        .clone();
    assert_eq!(outcome, SubmitOutcome::Delivered(SubmissionReceipt::new("{}")));
    assert_eq!(controller.submit_state(), SubmitState::Idle);
    assert!(controller.invalid_fields().is_empty());
}

#[test]
fn invalid_submit_stays_idle_and_reveals_every_error() {
    let mut controller = controller();

    let attempt = controller.begin_submit().expect("idle form accepts a submit");
    let SubmitAttempt::Rejected { invalid_fields } = attempt else {
        panic!("empty form must be rejected");
    };
    assert_eq!(
        invalid_fields,
        vec![
            FieldKey::new("first_name"),
            FieldKey::new("last_name"),
            FieldKey::new("email"),
            FieldKey::new("speciality"),
            FieldKey::new("accepted_terms"),
        ]
    );
    assert_eq!(controller.submit_state(), SubmitState::Idle);
    assert_eq!(controller.first_error(), Some(FieldKey::new("first_name")));

    for key in SignupValues::field_keys() {
        let meta = controller.meta_for_key(*key).expect("schema field has meta");
        assert!(meta.touched, "{key}");
    }
    for key in ["first_name", "last_name", "email", "speciality"] {
        assert_eq!(shown(&controller, key).as_ref().map(gpui::SharedString::as_str), Some("Required"), "{key}");
    }
    assert_eq!(
        shown(&controller, "accepted_terms").as_ref().map(gpui::SharedString::as_str),
        Some("You must accept the terms and conditions.")
    );
}

#[test]
fn delayed_echo_reports_values_as_camel_case_json() {
    let mut controller = filled_controller();
    let effect = DelayedEcho::new(Duration::ZERO);

    let outcome = block_on(controller.submit_async(&effect))
        .expect("submit flow completes")
        .expect("valid form is submitted");
    let SubmitOutcome::Delivered(receipt) = outcome else {
        panic!("echo effect never fails");
    };

    let payload: serde_json::Value =
        serde_json::from_str(receipt.payload()).expect("payload is JSON");
    assert_eq!(
        payload,
        serde_json::json!({
            "firstName": "Alok",
            "lastName": "Kattangoori",
            "email": "alok@agileortho.co.in",
            "acceptedTerms": true,
            "speciality": "elbow",
            "url": "https://www.agileortho.in/",
        })
    );
    assert_eq!(controller.submit_state(), SubmitState::Idle);
}

#[test]
fn failed_effect_returns_to_idle_with_message() {
    let mut controller = filled_controller();
    let effect = |_: SignupValues| -> futures::future::BoxFuture<
        'static,
        Result<SubmissionReceipt, SubmitError>,
    > {
        Box::pin(async { Err(SubmitError::Rejected("server unavailable".into())) })
    };

    let outcome = block_on(controller.submit_async(&effect))
        .expect("submit flow completes")
        .expect("valid form is submitted");
    assert_eq!(
        outcome,
        SubmitOutcome::Failed("submission rejected: server unavailable".into())
    );
    assert!(!controller.is_submitting());
}

#[test]
fn bindings_follow_render_order_and_mark_required_fields() {
    let bindings = signup_bindings();
    let keys = bindings
        .iter()
        .map(|binding| binding.key().as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        keys,
        vec!["first_name", "last_name", "email", "url", "speciality", "accepted_terms"]
    );

    let schema = signup_schema();
    let required = bindings
        .iter()
        .filter(|binding| schema.is_required(binding.key()))
        .map(|binding| binding.label().to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        required,
        vec![
            "First Name",
            "Last Name",
            "Email Address",
            "Speciality",
            "I accept the terms and conditions",
        ]
    );
}

#[test]
fn blur_through_binding_reveals_error() {
    let bindings = signup_bindings();
    let mut controller = controller();
    let email = &bindings[2];

    assert_eq!(email.error_for_display(&controller), None);
    email.blur(&mut controller);
    assert_eq!(email.error_for_display(&controller).as_ref().map(gpui::SharedString::as_str), Some("Required"));
}
