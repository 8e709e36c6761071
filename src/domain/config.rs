use serde::{Deserialize, Serialize};

/// Company details shown in the application chrome.
///
/// A process-wide singleton edited from the settings page; it has no
/// relationship to client records beyond display.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyConfig {
    pub company_name: String,
    pub email: String,
    pub phone: String,
    /// Reference to an uploaded logo image, if any.
    pub logo_url: Option<String>,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            company_name: "Mag System".to_string(),
            email: "contato@magsystem.com.br".to_string(),
            phone: "(11) 99999-9999".to_string(),
            logo_url: None,
        }
    }
}
