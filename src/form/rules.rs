//! Built-in field rules.
//!
//! Format and choice rules accept an empty value; pair them with
//! [`FieldRules::required`] when the field must be filled in.

use email_address::EmailAddress;
use gpui::SharedString;
use url::Url;

use super::validation::{FieldLens, FieldRules, ValidationError};

pub const REQUIRED: &str = "required";
pub const MAX_CHARS: &str = "max_chars";
pub const EMAIL: &str = "email";
pub const URL: &str = "url";
pub const ONE_OF: &str = "one_of";
pub const ACCEPTED: &str = "accepted";

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Length is counted in characters, not bytes.
pub fn within_chars(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

pub fn is_email(value: &str) -> bool {
    let Ok(address) = value.parse::<EmailAddress>() else {
        return false;
    };
    address.domain().contains('.') && !address.domain().ends_with('.')
}

const URL_PREFIXES: [&str; 4] = ["http://", "https://", "ftp://", "//"];

/// Accepts `http`, `https` and `ftp` URLs, or scheme-relative `//host`
/// ones. The host must be a dotted name or address.
pub fn is_url(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let lower = value.to_ascii_lowercase();
    let Some(prefix) = URL_PREFIXES
        .iter()
        .find(|prefix| lower.starts_with(**prefix))
    else {
        return false;
    };
    let absolute = if *prefix == "//" {
        format!("https:{value}")
    } else {
        value.to_string()
    };
    Url::parse(&absolute).is_ok_and(|url| url.host_str().is_some_and(is_dotted_host))
}

fn is_dotted_host(host: &str) -> bool {
    host.contains('.') && !host.starts_with('.') && !host.ends_with('.')
}

pub fn is_one_of<S: AsRef<str>>(value: &str, allowed: &[S]) -> bool {
    allowed.iter().any(|candidate| candidate.as_ref() == value)
}

impl<T, L, E> FieldRules<T, L, E>
where
    T: 'static,
    L: FieldLens<T, Value = SharedString>,
    E: ValidationError,
{
    pub fn required(self, error: E) -> Self {
        self.rule(REQUIRED, |value| is_present(value), error)
    }

    pub fn max_chars(self, max: usize, error: E) -> Self {
        self.rule(MAX_CHARS, move |value| within_chars(value, max), error)
    }

    pub fn email(self, error: E) -> Self {
        self.rule(EMAIL, |value| value.is_empty() || is_email(value), error)
    }

    pub fn url(self, error: E) -> Self {
        self.rule(URL, |value| value.is_empty() || is_url(value), error)
    }

    pub fn one_of<I, S>(self, allowed: I, error: E) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        let allowed = allowed.into_iter().map(Into::into).collect::<Vec<SharedString>>();
        self.rule(
            ONE_OF,
            move |value| value.is_empty() || is_one_of(value, &allowed),
            error,
        )
    }
}

impl<T, L, E> FieldRules<T, L, E>
where
    T: 'static,
    L: FieldLens<T, Value = bool>,
    E: ValidationError,
{
    /// The value must be exactly `true`.
    pub fn accepted(self, error: E) -> Self {
        self.rule(ACCEPTED, |&value| value, error)
    }
}
