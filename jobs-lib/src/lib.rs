//! Job posting builder library
//!
//! Models a job-posting draft, validates it field by field, and renders the
//! plain-text snippet that gets pasted into the jobs channel. The form state
//! machine in [`form`] ties the pieces together for interactive front ends.

pub mod error;
pub mod form;
pub mod format;
pub mod i18n;
pub mod model;
pub mod validate;

pub use form::{Action, FormState, FormStatus};
pub use format::render_snippet;
pub use i18n::{Catalog, Translate};
pub use model::{Field, FieldKind, FieldValue, JobPostingDraft, Occupation, Variant, Workplace};
pub use validate::{DESCRIPTION_MAX_LENGTH, FieldErrors, description_length, validate};
