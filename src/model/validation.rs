use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::Field;

/// Validation failures for form fields.
///
/// The `Display` strings are the user-facing messages shown next to the
/// offending field; they must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please enter a valid LinkedIn profile URL")]
    InvalidLinkedin,
    #[error("Please enter a valid website URL")]
    InvalidWebsite,
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid positive number")]
    InvalidValue,
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid hardcoded regex"));

static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(www\.)?linkedin\.com/in/[a-zA-Z0-9-]+/?$")
        .expect("valid hardcoded regex")
});

static WEBSITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .expect("valid hardcoded regex")
});

/// Validates one field's trimmed value.
///
/// Empty values pass for optional fields and fail with
/// [`ValidationError::Required`] for required ones. Non-empty values are
/// checked against the rule registered for the field; fields without a rule
/// are valid whenever non-empty. The caller is expected to trim first.
pub fn check_field(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return if field.is_required() {
            Err(ValidationError::Required)
        } else {
            Ok(())
        };
    }

    match field {
        Field::Email => matches(&EMAIL_RE, value, ValidationError::InvalidEmail),
        Field::Phone => matches(&PHONE_RE, value, ValidationError::InvalidPhone),
        Field::Linkedin => matches(&LINKEDIN_RE, value, ValidationError::InvalidLinkedin),
        Field::Website => matches(&WEBSITE_RE, value, ValidationError::InvalidWebsite),
        Field::FirstName | Field::LastName => {
            if value.chars().count() >= 2 {
                Ok(())
            } else {
                Err(ValidationError::NameTooShort)
            }
        }
        Field::Value => match value.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => Ok(()),
            _ => Err(ValidationError::InvalidValue),
        },
        Field::CompanyName | Field::Title | Field::Designation | Field::Notes => Ok(()),
    }
}

fn matches(re: &Regex, value: &str, err: ValidationError) -> Result<(), ValidationError> {
    if re.is_match(value) { Ok(()) } else { Err(err) }
}
