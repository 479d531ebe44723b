//! Field names and edit values

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::{Occupation, Workplace};

/// A field of the job posting form.
///
/// Declaration order is display order, so ordered collections keyed by
/// `Field` list errors the way the form shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    Location,
    Company,
    CompanyUrl,
    #[serde(rename = "type")]
    Workplace,
    Occupation,
    Salary,
    Contact,
    Description,
    PositionAgreement,
    FrequencyAgreement,
}

/// The kind of input a field takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single line of text.
    Text,
    /// Multi-line text.
    LongText,
    /// Checkbox.
    Flag,
    Occupation,
    Workplace,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 11] = [
        Self::Title,
        Self::Location,
        Self::Company,
        Self::CompanyUrl,
        Self::Workplace,
        Self::Occupation,
        Self::Salary,
        Self::Contact,
        Self::Description,
        Self::PositionAgreement,
        Self::FrequencyAgreement,
    ];

    /// The wire name of the field (camelCase, as used in draft files).
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Location => "location",
            Self::Company => "company",
            Self::CompanyUrl => "companyUrl",
            Self::Workplace => "type",
            Self::Occupation => "occupation",
            Self::Salary => "salary",
            Self::Contact => "contact",
            Self::Description => "description",
            Self::PositionAgreement => "positionAgreement",
            Self::FrequencyAgreement => "frequencyAgreement",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Description => FieldKind::LongText,
            Self::Workplace => FieldKind::Workplace,
            Self::Occupation => FieldKind::Occupation,
            Self::PositionAgreement | Self::FrequencyAgreement => FieldKind::Flag,
            _ => FieldKind::Text,
        }
    }

    /// Whether the form refuses to submit while this field is empty/unchecked.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::CompanyUrl | Self::Workplace | Self::Occupation)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A new value for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Occupation(Occupation),
    Workplace(Workplace),
}

impl FieldValue {
    /// Short name of the value kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Flag(_) => "flag",
            Self::Occupation(_) => "occupation",
            Self::Workplace(_) => "workplace",
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Occupation> for FieldValue {
    fn from(value: Occupation) -> Self {
        Self::Occupation(value)
    }
}

impl From<Workplace> for FieldValue {
    fn from(value: Workplace) -> Self {
        Self::Workplace(value)
    }
}
