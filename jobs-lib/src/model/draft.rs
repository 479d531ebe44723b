//! The job posting draft record

use serde::Deserialize;
use serde::Serialize;

use super::{Field, FieldKind, FieldValue, Occupation, Variant, Workplace};
use crate::error::DraftError;

/// The in-progress job posting.
///
/// A draft is never mutated in place: [`with`](Self::with) returns a new
/// draft with one field replaced. Fields that the form variant does not carry
/// are `None`.
///
/// # Example
///
/// ```
/// use jobs_lib::model::{Field, JobPostingDraft, Variant};
///
/// let draft = JobPostingDraft::new(Variant::Agreements)
///     .with(Field::Title, "Backend Engineer")?
///     .with(Field::PositionAgreement, true)?;
///
/// assert_eq!(draft.title(), "Backend Engineer");
/// assert!(draft.with(Field::CompanyUrl, "https://acme.dev").is_err());
/// # Ok::<(), jobs_lib::error::DraftError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position_agreement: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frequency_agreement: Option<bool>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company_url: Option<String>,
    #[serde(default)]
    location: String,
    #[serde(default)]
    occupation: Occupation,
    #[serde(default, rename = "type")]
    workplace: Workplace,
    #[serde(default)]
    salary: String,
    #[serde(default)]
    contact: String,
    #[serde(default)]
    description: String,
}

impl JobPostingDraft {
    /// Creates the default draft for a form variant.
    pub fn new(variant: Variant) -> Self {
        let agreements = (variant == Variant::Agreements).then_some(false);
        Self {
            position_agreement: agreements,
            frequency_agreement: agreements,
            title: String::new(),
            company: String::new(),
            company_url: (variant == Variant::CompanyUrl).then(String::new),
            location: String::new(),
            occupation: Occupation::default(),
            workplace: Workplace::default(),
            salary: String::new(),
            contact: String::new(),
            description: String::new(),
        }
    }

    /// Reshapes a draft (typically one read from a file) to a variant.
    ///
    /// Optional fields of the variant that are missing get their defaults;
    /// fields the variant does not carry are dropped.
    pub fn conform_to(mut self, variant: Variant) -> Self {
        match variant {
            Variant::Agreements => {
                if self.company_url.take().is_some() {
                    log::warn!("Dropping companyUrl: not part of the {} form", variant);
                }
                self.position_agreement.get_or_insert(false);
                self.frequency_agreement.get_or_insert(false);
            }
            Variant::CompanyUrl => {
                let dropped = self.position_agreement.take().is_some();
                let dropped = self.frequency_agreement.take().is_some() || dropped;
                if dropped {
                    log::warn!("Dropping agreements: not part of the {} form", variant);
                }
                self.company_url.get_or_insert_with(String::new);
            }
        }
        self
    }

    /// The variant implied by which optional fields are present.
    pub fn variant(&self) -> Variant {
        if self.company_url.is_some() {
            Variant::CompanyUrl
        } else {
            Variant::Agreements
        }
    }

    /// Whether the draft carries a field.
    pub fn has_field(&self, field: Field) -> bool {
        match field {
            Field::PositionAgreement => self.position_agreement.is_some(),
            Field::FrequencyAgreement => self.frequency_agreement.is_some(),
            Field::CompanyUrl => self.company_url.is_some(),
            _ => true,
        }
    }

    /// Iterates the fields this draft carries, in display order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(|f| self.has_field(*f))
    }

    /// Returns a copy of the draft with one field replaced.
    pub fn with(&self, field: Field, value: impl Into<FieldValue>) -> Result<Self, DraftError> {
        let value = value.into();
        if !self.has_field(field) {
            return Err(DraftError::absent(field));
        }

        let mut next = self.clone();
        match (field.kind(), value) {
            (FieldKind::Text | FieldKind::LongText, FieldValue::Text(text)) => {
                *next.text_slot(field) = text;
            }
            (FieldKind::Flag, FieldValue::Flag(flag)) => match field {
                Field::PositionAgreement => next.position_agreement = Some(flag),
                _ => next.frequency_agreement = Some(flag),
            },
            (FieldKind::Occupation, FieldValue::Occupation(occupation)) => {
                next.occupation = occupation;
            }
            (FieldKind::Workplace, FieldValue::Workplace(workplace)) => {
                next.workplace = workplace;
            }
            (kind, value) => {
                return Err(DraftError::type_mismatch(
                    field,
                    kind_name(kind),
                    value.kind_name(),
                ));
            }
        }
        Ok(next)
    }

    /// Text of a text field, `None` for other kinds or absent fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => Some(&self.title),
            Field::Location => Some(&self.location),
            Field::Company => Some(&self.company),
            Field::CompanyUrl => self.company_url.as_deref(),
            Field::Salary => Some(&self.salary),
            Field::Contact => Some(&self.contact),
            Field::Description => Some(&self.description),
            _ => None,
        }
    }

    /// State of a checkbox field, `None` for other kinds or absent fields.
    pub fn flag(&self, field: Field) -> Option<bool> {
        match field {
            Field::PositionAgreement => self.position_agreement,
            Field::FrequencyAgreement => self.frequency_agreement,
            _ => None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn company_url(&self) -> Option<&str> {
        self.company_url.as_deref()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn occupation(&self) -> Occupation {
        self.occupation
    }

    pub fn workplace(&self) -> Workplace {
        self.workplace
    }

    pub fn salary(&self) -> &str {
        &self.salary
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Mutable slot for a text field. Only called after `has_field` and kind checks.
    fn text_slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Location => &mut self.location,
            Field::Company => &mut self.company,
            Field::CompanyUrl => self.company_url.get_or_insert_with(String::new),
            Field::Salary => &mut self.salary,
            Field::Contact => &mut self.contact,
            _ => &mut self.description,
        }
    }
}

impl Default for JobPostingDraft {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

fn kind_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text | FieldKind::LongText => "text",
        FieldKind::Flag => "flag",
        FieldKind::Occupation => "occupation",
        FieldKind::Workplace => "workplace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_variant() {
        let draft = JobPostingDraft::new(Variant::Agreements);
        assert_eq!(draft.flag(Field::PositionAgreement), Some(false));
        assert_eq!(draft.flag(Field::FrequencyAgreement), Some(false));
        assert_eq!(draft.company_url(), None);
        assert_eq!(draft.occupation(), Occupation::FullTime);
        assert_eq!(draft.workplace(), Workplace::Office);

        let draft = JobPostingDraft::new(Variant::CompanyUrl);
        assert_eq!(draft.flag(Field::PositionAgreement), None);
        assert_eq!(draft.company_url(), Some(""));
        assert_eq!(draft.variant(), Variant::CompanyUrl);
    }

    #[test]
    fn test_with_returns_new_draft() {
        let draft = JobPostingDraft::new(Variant::Agreements);
        let edited = draft.with(Field::Salary, "2000$-3000$").unwrap();

        assert_eq!(draft.salary(), "");
        assert_eq!(edited.salary(), "2000$-3000$");
        assert_ne!(draft, edited);
    }

    #[test]
    fn test_with_rejects_absent_field() {
        let draft = JobPostingDraft::new(Variant::Agreements);
        assert_eq!(
            draft.with(Field::CompanyUrl, "https://acme.dev"),
            Err(DraftError::absent(Field::CompanyUrl))
        );

        let draft = JobPostingDraft::new(Variant::CompanyUrl);
        assert_eq!(
            draft.with(Field::FrequencyAgreement, true),
            Err(DraftError::absent(Field::FrequencyAgreement))
        );
    }

    #[test]
    fn test_with_rejects_type_mismatch() {
        let draft = JobPostingDraft::new(Variant::Agreements);
        assert_eq!(
            draft.with(Field::Title, true),
            Err(DraftError::type_mismatch(Field::Title, "text", "flag"))
        );
        assert_eq!(
            draft.with(Field::Occupation, Workplace::Remote),
            Err(DraftError::type_mismatch(Field::Occupation, "occupation", "workplace"))
        );
    }

    #[test]
    fn test_fields_follow_variant() {
        let draft = JobPostingDraft::new(Variant::CompanyUrl);
        let fields: Vec<_> = draft.fields().collect();
        assert!(fields.contains(&Field::CompanyUrl));
        assert!(!fields.contains(&Field::PositionAgreement));
        assert_eq!(fields.len(), 9);
    }

    #[test]
    fn test_conform_to() {
        let draft = JobPostingDraft::new(Variant::Agreements)
            .with(Field::Title, "Kotlin Developer")
            .unwrap()
            .conform_to(Variant::CompanyUrl);

        assert_eq!(draft.title(), "Kotlin Developer");
        assert_eq!(draft.company_url(), Some(""));
        assert!(!draft.has_field(Field::PositionAgreement));
    }

    #[test]
    fn test_deserialize_wire_names() {
        let draft: JobPostingDraft = serde_json::from_str(
            r#"{"title": "Android Engineer", "type": "Remote", "occupation": "Part-time", "companyUrl": "https://acme.dev"}"#,
        )
        .unwrap();

        assert_eq!(draft.title(), "Android Engineer");
        assert_eq!(draft.workplace(), Workplace::Remote);
        assert_eq!(draft.occupation(), Occupation::PartTime);
        assert_eq!(draft.company_url(), Some("https://acme.dev"));
        assert_eq!(draft.flag(Field::PositionAgreement), None);
    }
}
