//! Snippet rendering

use crate::model::JobPostingDraft;

/// Renders the text snippet for a valid draft.
///
/// Performs no validation; callers run [`validate`](crate::validate) first.
///
/// ```
/// use jobs_lib::model::{Field, JobPostingDraft, Variant};
/// use jobs_lib::render_snippet;
///
/// let draft = JobPostingDraft::new(Variant::Agreements)
///     .with(Field::Title, "Backend Engineer")?
///     .with(Field::Contact, "kotliner")?;
///
/// let text = render_snippet(&draft);
/// assert!(text.starts_with("Vacancy: Backend Engineer\n"));
/// assert!(text.ends_with("Contact: @kotliner\n"));
/// # Ok::<(), jobs_lib::error::DraftError>(())
/// ```
pub fn render_snippet(draft: &JobPostingDraft) -> String {
    let company = match draft.company_url().filter(|url| !url.is_empty()) {
        Some(url) => format!("{} ({})", draft.company(), url),
        None => draft.company().to_string(),
    };

    format!(
        "Vacancy: {}\nLocation: {}\nCompany: {}\nWorkplace: {}\nEmployment: {}\nSalary fork: {}\n\n{}\n\nContact: @{}\n",
        draft.title(),
        draft.location(),
        company,
        draft.workplace(),
        draft.occupation(),
        draft.salary(),
        draft.description(),
        draft.contact(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, Occupation, Variant, Workplace};

    #[test]
    fn test_company_url_suffix() {
        let draft = JobPostingDraft::new(Variant::CompanyUrl)
            .with(Field::Company, "JetBrains")
            .unwrap();
        assert!(render_snippet(&draft).contains("Company: JetBrains\n"));

        let draft = draft.with(Field::CompanyUrl, "https://jetbrains.com").unwrap();
        assert!(render_snippet(&draft).contains("Company: JetBrains (https://jetbrains.com)\n"));
    }

    #[test]
    fn test_enum_labels() {
        let draft = JobPostingDraft::new(Variant::Agreements)
            .with(Field::Workplace, Workplace::Hybrid)
            .unwrap()
            .with(Field::Occupation, Occupation::Contract)
            .unwrap();
        let text = render_snippet(&draft);
        assert!(text.contains("Workplace: Hybrid\n"));
        assert!(text.contains("Employment: Contract\n"));
    }
}
