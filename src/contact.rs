//! Client-side validation for the contact form.
//!
//! Runs before the message is handed to the email relay. Editing a field
//! clears only that field's error.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field error messages. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContactErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactErrors {
    /// True when the form can be submitted.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// Clear the error of the field being edited.
    pub fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Email => self.email = None,
            ContactField::Message => self.message = None,
        }
    }
}

/// Form field, as named by the input's `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ContactField::Name),
            "email" => Ok(ContactField::Email),
            "message" => Ok(ContactField::Message),
            other => Err(format!("Unknown contact field: {}", other)),
        }
    }
}

/// Validate every field.
pub fn validate(form: &ContactForm) -> ContactErrors {
    let mut errors = ContactErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some(NAME_REQUIRED.to_string());
    }

    if form.email.trim().is_empty() {
        errors.email = Some(EMAIL_REQUIRED.to_string());
    } else if !looks_like_email(&form.email) {
        errors.email = Some(EMAIL_INVALID.to_string());
    }

    if form.message.trim().is_empty() {
        errors.message = Some(MESSAGE_REQUIRED.to_string());
    }

    errors
}

/// Page's email rule. Unanchored, so any whitespace-free run with a
/// non-empty local part and a dotted domain after some `@` passes.
pub const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

lazy_static! {
    static ref EMAIL_RE: Option<Regex> = Regex::new(EMAIL_PATTERN).ok();
}

pub fn looks_like_email(input: &str) -> bool {
    let Some(re) = EMAIL_RE.as_ref() else {
        log::warn!("[Contact] email pattern failed to compile");
        return false;
    };
    re.is_match(input)
}
