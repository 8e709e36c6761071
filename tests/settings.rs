use magsys_crm::domain::config::CompanyConfig;
use magsys_crm::forms::settings::SaveSettingsForm;
use magsys_crm::repository::memory::InMemoryRepository;
use magsys_crm::services::ServiceError;
use magsys_crm::services::settings::{get_settings, save_settings};

mod common;

#[test]
fn defaults_are_served_until_saved() {
    let repo = InMemoryRepository::new();
    assert_eq!(get_settings(&repo).unwrap(), CompanyConfig::default());
}

#[test]
fn save_normalizes_and_persists_the_form() {
    let repo = InMemoryRepository::new();
    let form = SaveSettingsForm {
        company_name: "  Estúdio Criativo  ".to_string(),
        email: "Oi@Estudio.com.br".to_string(),
        phone: "(83) 3322-1100".to_string(),
        logo_url: Some("   ".to_string()),
    };

    let saved = save_settings(&repo, &form).unwrap();
    assert_eq!(saved.company_name, "Estúdio Criativo");
    assert_eq!(saved.email, "oi@estudio.com.br");
    assert_eq!(saved.logo_url, None);
    assert_eq!(get_settings(&repo).unwrap(), saved);
}

#[test]
fn save_rejects_an_invalid_email() {
    let repo = InMemoryRepository::new();
    let form = SaveSettingsForm {
        company_name: "Estúdio".to_string(),
        email: "not-an-email".to_string(),
        phone: String::new(),
        logo_url: None,
    };

    assert!(matches!(
        save_settings(&repo, &form),
        Err(ServiceError::Validation(_))
    ));
    // The stored config is untouched on failure.
    assert_eq!(get_settings(&repo).unwrap(), CompanyConfig::default());
}
