use serde::Deserialize;
use validator::Validate;

use crate::domain::config::CompanyConfig;

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for editing the company details.
pub struct SaveSettingsForm {
    #[validate(length(min = 1))]
    pub company_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl From<&SaveSettingsForm> for CompanyConfig {
    fn from(form: &SaveSettingsForm) -> Self {
        Self {
            company_name: form.company_name.trim().to_string(),
            email: form.email.trim().to_lowercase(),
            phone: form.phone.trim().to_string(),
            logo_url: form
                .logo_url
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}
