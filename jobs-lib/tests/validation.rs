use jobs_lib::i18n::Keys;
use jobs_lib::model::{Field, JobPostingDraft, Variant};
use jobs_lib::{Catalog, DESCRIPTION_MAX_LENGTH, description_length, validate};

fn complete(variant: Variant) -> JobPostingDraft {
    let mut draft = JobPostingDraft::new(variant)
        .with(Field::Title, "Backend Engineer")
        .unwrap()
        .with(Field::Location, "Kyiv")
        .unwrap()
        .with(Field::Company, "Acme")
        .unwrap()
        .with(Field::Salary, "2000$-3000$")
        .unwrap()
        .with(Field::Contact, "kotliner")
        .unwrap()
        .with(Field::Description, "Great job")
        .unwrap();
    if variant == Variant::Agreements {
        draft = draft
            .with(Field::PositionAgreement, true)
            .unwrap()
            .with(Field::FrequencyAgreement, true)
            .unwrap();
    }
    draft
}

// ============================================================================
// Required fields
// ============================================================================

#[test]
fn test_complete_draft_is_valid() {
    let catalog = Catalog::english().unwrap();
    assert!(validate(&complete(Variant::Agreements), &catalog).is_empty());
    assert!(validate(&complete(Variant::CompanyUrl), &catalog).is_empty());
}

#[test]
fn test_each_empty_required_field_is_reported() {
    let required = [
        Field::Title,
        Field::Location,
        Field::Company,
        Field::Salary,
        Field::Contact,
        Field::Description,
    ];

    for variant in [Variant::Agreements, Variant::CompanyUrl] {
        for field in required {
            let draft = complete(variant).with(field, "").unwrap();
            let errors = validate(&draft, &Keys);
            assert_eq!(errors.len(), 1, "{} in {}", field, variant);
            assert!(errors.contains(field));
        }
    }
}

#[test]
fn test_unchecked_agreements_are_reported() {
    let draft = complete(Variant::Agreements)
        .with(Field::PositionAgreement, false)
        .unwrap()
        .with(Field::FrequencyAgreement, false)
        .unwrap();
    let errors = validate(&draft, &Keys);

    assert_eq!(errors.get(Field::PositionAgreement), Some("Position-agreement-unchecked"));
    assert_eq!(errors.get(Field::FrequencyAgreement), Some("Frequency-agreement-unchecked"));
}

#[test]
fn test_default_draft_reports_every_required_field() {
    let errors = validate(&JobPostingDraft::new(Variant::Agreements), &Keys);
    let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();

    assert_eq!(
        fields,
        vec![
            Field::Title,
            Field::Location,
            Field::Company,
            Field::Salary,
            Field::Contact,
            Field::Description,
            Field::PositionAgreement,
            Field::FrequencyAgreement,
        ]
    );
}

#[test]
fn test_messages_are_localized() {
    let draft = complete(Variant::Agreements).with(Field::Title, "").unwrap();

    let en = validate(&draft, &Catalog::for_locale("en").unwrap());
    let uk = validate(&draft, &Catalog::for_locale("uk").unwrap());

    assert_eq!(en.get(Field::Title), Some("Vacancy title is required"));
    assert_eq!(uk.get(Field::Title), Some("Вкажіть назву вакансії"));
}

// ============================================================================
// Description length
// ============================================================================

#[test]
fn test_description_at_limit_is_valid() {
    let draft = complete(Variant::Agreements)
        .with(Field::Description, "a".repeat(DESCRIPTION_MAX_LENGTH))
        .unwrap();
    assert!(validate(&draft, &Keys).is_empty());
}

#[test]
fn test_long_description_message_embeds_length() {
    let catalog = Catalog::english().unwrap();

    for length in [1001, 1500, 4096] {
        let draft = complete(Variant::Agreements)
            .with(Field::Description, "x".repeat(length))
            .unwrap();
        let errors = validate(&draft, &catalog);
        let message = errors.get(Field::Description).unwrap();
        assert!(message.contains(&length.to_string()), "{}", message);
    }
}

#[test]
fn test_description_length_ignores_byte_count() {
    // 1000 two-byte characters: 2000 bytes, still within the limit.
    let draft = complete(Variant::Agreements)
        .with(Field::Description, "ї".repeat(1000))
        .unwrap();
    assert!(validate(&draft, &Keys).is_empty());

    let draft = draft.with(Field::Description, "ї".repeat(1001)).unwrap();
    let catalog = Catalog::english().unwrap();
    let errors = validate(&draft, &catalog);
    assert!(errors.get(Field::Description).unwrap().contains("1001"));
}

#[test]
fn test_astral_characters_count_twice() {
    let catalog = Catalog::english().unwrap();

    let at_limit = complete(Variant::Agreements)
        .with(Field::Description, "😀".repeat(500))
        .unwrap();
    assert_eq!(description_length(at_limit.description()), 1000);
    assert!(validate(&at_limit, &catalog).is_empty());

    let over = at_limit.with(Field::Description, format!("{}a", "😀".repeat(500))).unwrap();
    let errors = validate(&over, &catalog);
    assert!(errors.get(Field::Description).unwrap().contains("1001"));

    let emoji = at_limit.with(Field::Description, "😀".repeat(600)).unwrap();
    let errors = validate(&emoji, &catalog);
    assert!(errors.get(Field::Description).unwrap().contains("1200"));
}

// ============================================================================
// Company URL
// ============================================================================

#[test]
fn test_empty_company_url_is_allowed() {
    let draft = complete(Variant::CompanyUrl);
    assert_eq!(draft.company_url(), Some(""));
    assert!(validate(&draft, &Keys).is_empty());
}

#[test]
fn test_invalid_company_urls_are_flagged() {
    for url in ["not-a-url", "jetbrains.com", "ftp://acme.dev", "//acme.dev", "https://"] {
        let draft = complete(Variant::CompanyUrl).with(Field::CompanyUrl, url).unwrap();
        let errors = validate(&draft, &Keys);
        assert_eq!(errors.get(Field::CompanyUrl), Some("Company-url-invalid"), "{}", url);
    }
}

#[test]
fn test_valid_company_urls_pass() {
    for url in ["https://jetbrains.com", "http://acme.dev/jobs/42", "https://acme.dev:8443/?q=kotlin"] {
        let draft = complete(Variant::CompanyUrl).with(Field::CompanyUrl, url).unwrap();
        assert!(validate(&draft, &Keys).is_empty(), "{}", url);
    }
}

#[test]
fn test_company_url_message_names_the_url() {
    let catalog = Catalog::english().unwrap();
    let draft = complete(Variant::CompanyUrl)
        .with(Field::CompanyUrl, "not-a-url")
        .unwrap();
    let errors = validate(&draft, &catalog);
    assert!(errors.get(Field::CompanyUrl).unwrap().contains("not-a-url"));
}
