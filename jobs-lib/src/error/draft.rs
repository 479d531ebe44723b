//! DraftError for draft edits

use crate::model::Field;

/// Error type for edits applied to a [`JobPostingDraft`](crate::model::JobPostingDraft).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// The field is not carried by the draft's variant.
    #[error("Field '{field}' is not part of this form")]
    Absent { field: Field },

    /// The value kind does not match the field.
    #[error("Field '{field}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        field: Field,
        expected: &'static str,
        actual: &'static str,
    },

    /// A variant name that does not exist.
    #[error("Unknown form variant '{0}'")]
    UnknownVariant(String),
}

impl DraftError {
    /// Creates a new absent field error.
    pub fn absent(field: Field) -> Self {
        Self::Absent { field }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(field: Field, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            field,
            expected,
            actual,
        }
    }
}
