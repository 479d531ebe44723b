//! Draft validation
//!
//! Every rule looks at exactly one field, so evaluation order never changes
//! the result. A field that fails is mapped to one localized message.

use std::collections::BTreeMap;
use std::collections::btree_map;

use log::trace;
use url::Url;

use crate::i18n::Translate;
use crate::model::{Field, JobPostingDraft};

/// Longest accepted description, in UTF-16 code units.
pub const DESCRIPTION_MAX_LENGTH: usize = 1000;

/// Length of a description as the limit measures it.
///
/// Counts UTF-16 code units, so a character outside the Basic Multilingual
/// Plane (most emoji) counts as two.
pub fn description_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Per-field validation messages. Empty when the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Failed fields and their messages, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// The first failed field in display order.
    pub fn first(&self) -> Option<Field> {
        self.errors.keys().next().copied()
    }

    fn insert(&mut self, field: Field, message: String) {
        self.errors.insert(field, message);
    }
}

impl IntoIterator for FieldErrors {
    type Item = (Field, String);
    type IntoIter = btree_map::IntoIter<Field, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Validates a draft, returning a message for every failing field.
pub fn validate(draft: &JobPostingDraft, messages: &dyn Translate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in draft.fields() {
        if let Some(message) = check_field(draft, field, messages) {
            trace!("Field '{}' failed: {}", field, message);
            errors.insert(field, message);
        }
    }

    errors
}

/// Runs the rule for a single field.
fn check_field(draft: &JobPostingDraft, field: Field, messages: &dyn Translate) -> Option<String> {
    match field {
        Field::PositionAgreement | Field::FrequencyAgreement => {
            (draft.flag(field) == Some(false)).then(|| messages.message(required_key(field), &[]))
        }
        Field::CompanyUrl => {
            let url = draft.company_url().unwrap_or_default();
            (!url.is_empty() && !is_web_url(url))
                .then(|| messages.message("Company-url-invalid", &[("url", url.to_string())]))
        }
        Field::Description => {
            let description = draft.description();
            let length = description_length(description);
            if length > DESCRIPTION_MAX_LENGTH {
                Some(messages.message("Description-max-length", &[("length", length.to_string())]))
            } else if description.is_empty() {
                Some(messages.message(required_key(field), &[]))
            } else {
                None
            }
        }
        Field::Workplace | Field::Occupation => None,
        _ => draft
            .text(field)
            .is_some_and(str::is_empty)
            .then(|| messages.message(required_key(field), &[])),
    }
}

/// Whether `text` parses as an absolute URL with an http(s) scheme.
pub fn is_web_url(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

fn required_key(field: Field) -> &'static str {
    match field {
        Field::PositionAgreement => "Position-agreement-unchecked",
        Field::FrequencyAgreement => "Frequency-agreement-unchecked",
        Field::Title => "Title-is-required",
        Field::Location => "Location-is-required",
        Field::Company => "Company-is-required",
        Field::Salary => "Salary-is-required",
        Field::Contact => "Contact-is-required",
        _ => "Description-is-required",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_web_url() {
        assert!(is_web_url("https://jetbrains.com"));
        assert!(is_web_url("http://acme.dev/careers?id=7"));
        assert!(!is_web_url("not-a-url"));
        assert!(!is_web_url("jetbrains.com"));
        assert!(!is_web_url("ftp://files.acme.dev"));
        assert!(!is_web_url("mailto:hr@acme.dev"));
        assert!(!is_web_url("https://"));
    }

    #[test]
    fn test_required_keys() {
        assert_eq!(required_key(Field::Salary), "Salary-is-required");
        assert_eq!(required_key(Field::Description), "Description-is-required");
    }
}
