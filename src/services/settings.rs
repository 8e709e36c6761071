//! Company settings workflows.

use validator::Validate;

use crate::domain::config::CompanyConfig;
use crate::forms::settings::SaveSettingsForm;
use crate::repository::{SettingsReader, SettingsWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads the current company configuration.
pub fn get_settings<R>(repo: &R) -> ServiceResult<CompanyConfig>
where
    R: SettingsReader + ?Sized,
{
    repo.company_config().map_err(ServiceError::from)
}

/// Validates and persists the settings form, returning the saved config.
pub fn save_settings<R>(repo: &R, form: &SaveSettingsForm) -> ServiceResult<CompanyConfig>
where
    R: SettingsWriter + ?Sized,
{
    form.validate()?;
    let config = CompanyConfig::from(form);
    repo.save_company_config(config.clone()).map_err(|err| {
        log::error!("Failed to save company config: {err}");
        ServiceError::from(err)
    })?;
    Ok(config)
}
