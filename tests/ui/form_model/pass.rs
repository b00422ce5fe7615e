use ortho_signup::form::{FieldLens, FormModel};

#[derive(Clone, ortho_signup::form::FormModel)]
struct ContactForm {
    contact_email: String,
    opted_in: bool,
}

fn main() {
    let fields = ContactForm::fields();
    let email = fields.contact_email();
    let mut model = ContactForm {
        contact_email: "a@agileortho.in".to_string(),
        opted_in: false,
    };
    email.set(&mut model, "b@agileortho.in".to_string());
    fields.opted_in().set(&mut model, true);

    assert_eq!(email.key().as_str(), "contact_email");
    assert_eq!(email.get(&model), "b@agileortho.in");
    assert!(*fields.opted_in().get(&model));

    let keys: Vec<&str> = ContactForm::field_keys()
        .iter()
        .map(|key| key.as_str())
        .collect();
    assert_eq!(keys, ["contact_email", "opted_in"]);

    let _: ContactFormContactEmailLens = email;
}
