// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Submit-time validation of form values.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::models::form::{FieldKind, FieldSpec, FormConfig};
use crate::models::submission::FAILURE_MESSAGE;
use crate::models::values::FieldValues;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7,15}$").expect("phone pattern is valid"));

/// Reasons a submission is refused or fails. All are recoverable by editing and retrying.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in {0}.")]
    MissingRequiredField(String),
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid phone number")]
    InvalidPhone,
    #[error("{0} must be a valid URL")]
    InvalidUrl(String),
    #[error("{}", FAILURE_MESSAGE)]
    SubmissionFailed,
}

impl FormError {
    /// Text for the transient notification; the status line uses `Display`.
    pub fn notice(&self) -> String {
        match self {
            Self::InvalidPhone => "Phone must be 7–15 digits".to_string(),
            other => other.to_string(),
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Check values against the form before anything is sent.
///
/// Required fields are checked first (in field order), then email, phone and URL
/// formats. Empty optional fields are never format-checked.
pub fn validate(config: &FormConfig, values: &FieldValues) -> Result<(), FormError> {
    if let Some(missing) = config
        .fields
        .iter()
        .find(|f| f.required && values.get(&f.name).is_empty())
    {
        return Err(FormError::MissingRequiredField(missing.label.clone()));
    }

    if filled(config, values, FieldKind::Email).any(|(_, v)| !is_valid_email(v)) {
        return Err(FormError::InvalidEmail);
    }
    if filled(config, values, FieldKind::Phone).any(|(_, v)| !is_valid_phone(v)) {
        return Err(FormError::InvalidPhone);
    }
    if let Some((field, _)) = filled(config, values, FieldKind::Url).find(|(_, v)| !is_valid_url(v))
    {
        return Err(FormError::InvalidUrl(field.label.clone()));
    }

    Ok(())
}

/// Non-empty values of the fields with the given kind.
fn filled<'a>(
    config: &'a FormConfig,
    values: &'a FieldValues,
    kind: FieldKind,
) -> impl Iterator<Item = (&'a FieldSpec, &'a str)> + 'a {
    config
        .fields
        .iter()
        .filter(move |f| f.kind == kind)
        .map(move |f| (f, values.get(&f.name)))
        .filter(|(_, v)| !v.is_empty())
}
