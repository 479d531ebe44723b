//! Form state machine
//!
//! [`FormState`] is an immutable snapshot of the form: the draft, its
//! validation result, which fields the user has visited, and a
//! [`FormStatus`]. [`FormState::reduce`] applies an [`Action`] and returns the
//! next snapshot; the validator runs on every edit.
//!
//! ```text
//! Pristine --Edit--> Editing --validate--> Invalid | Valid | Pristine
//! Valid --Submit--> Submitting --SubmitFinished--> Pristine (with output)
//! ```

use std::collections::BTreeSet;

use log::debug;

use crate::error::DraftError;
use crate::i18n::Translate;
use crate::model::{Field, FieldValue, JobPostingDraft, Variant};
use crate::validate::{FieldErrors, validate};

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// The draft equals its baseline (the defaults, or the last submitted draft).
    Pristine,
    /// An edit is being applied. Resolved before `reduce` returns.
    Editing,
    /// At least one field fails validation.
    Invalid,
    /// Every field passes and the draft has changed.
    Valid,
    /// Submitted; waiting for the page to render the snippet.
    Submitting,
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace a field value.
    Edit(Field, FieldValue),
    /// Focus left a field.
    Touch(Field),
    /// The Generate control was activated.
    Submit,
    /// The page stored the generated text.
    SubmitFinished,
}

/// Snapshot of the job posting form.
#[derive(Debug, Clone)]
pub struct FormState {
    defaults: JobPostingDraft,
    baseline: JobPostingDraft,
    draft: JobPostingDraft,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    status: FormStatus,
}

impl FormState {
    /// Creates the form at mount: default draft, nothing touched.
    pub fn new(variant: Variant, messages: &dyn Translate) -> Self {
        Self::with_draft(JobPostingDraft::new(variant), messages)
    }

    /// Creates a form whose defaults are `draft`.
    pub fn with_draft(draft: JobPostingDraft, messages: &dyn Translate) -> Self {
        let errors = validate(&draft, messages);
        Self {
            defaults: draft.clone(),
            baseline: draft.clone(),
            draft,
            errors,
            touched: BTreeSet::new(),
            status: FormStatus::Pristine,
        }
    }

    /// Applies an action, returning the next state.
    ///
    /// An edit that the draft rejects leaves `self` as it was and returns the
    /// error.
    pub fn reduce(&self, action: Action, messages: &dyn Translate) -> Result<Self, DraftError> {
        let mut next = self.clone();

        match action {
            Action::Edit(field, value) => {
                if self.status == FormStatus::Submitting {
                    debug!("Ignoring edit of '{}' while submitting", field);
                    return Ok(next);
                }
                next.draft = self.draft.with(field, value)?;
                next.set_status(FormStatus::Editing);
                next.touched.insert(field);
                next.errors = validate(&next.draft, messages);
                next.set_status(next.resolve());
            }
            Action::Touch(field) => {
                if !self.draft.has_field(field) {
                    return Err(DraftError::absent(field));
                }
                next.touched.insert(field);
            }
            Action::Submit => {
                if self.can_submit() {
                    next.set_status(FormStatus::Submitting);
                } else {
                    // Reveal every message so the user sees why nothing happened.
                    next.touched.extend(self.draft.fields());
                    debug!("Submit refused in {:?} with {} error(s)", self.status, self.errors.len());
                }
            }
            Action::SubmitFinished => {
                if self.status == FormStatus::Submitting {
                    next.baseline = self.draft.clone();
                    next.set_status(FormStatus::Pristine);
                } else {
                    debug!("SubmitFinished outside of Submitting ({:?})", self.status);
                }
            }
        }

        Ok(next)
    }

    /// Whether the Generate control is enabled.
    pub fn can_submit(&self) -> bool {
        self.status == FormStatus::Valid
            && self.errors.is_empty()
            && self.draft != self.defaults
            && self.draft != self.baseline
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn draft(&self) -> &JobPostingDraft {
        &self.draft
    }

    pub fn defaults(&self) -> &JobPostingDraft {
        &self.defaults
    }

    /// All current validation errors, visited or not.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the draft differs from its defaults.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.defaults
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error to show next to a field: only once the user has visited it.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Errors of visited fields, in display order.
    pub fn visible_errors(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors
            .iter()
            .filter(|(field, _)| self.touched.contains(field))
    }

    fn resolve(&self) -> FormStatus {
        if self.draft == self.baseline {
            FormStatus::Pristine
        } else if self.errors.is_empty() {
            FormStatus::Valid
        } else {
            FormStatus::Invalid
        }
    }

    fn set_status(&mut self, status: FormStatus) {
        if self.status != status {
            debug!("Form {:?} -> {:?}", self.status, status);
            self.status = status;
        }
    }
}
