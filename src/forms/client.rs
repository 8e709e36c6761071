use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::domain::cities::DEFAULT_CITY;
use crate::domain::client::{Coordinates, NewClient};
use crate::domain::status::ClientStatus;
use crate::domain::types::{
    CityName, ClientName, ServiceName, TypeConstraintError, WhatsappNumber,
};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for registering a new client engagement.
pub struct NewClientForm {
    /// Client display name.
    #[validate(length(min = 1))]
    pub name: String,
    /// Optional secondary contact phone, kept as typed.
    #[serde(default)]
    pub phone: String,
    /// WhatsApp contact used for reminder deep links.
    #[validate(length(min = 1))]
    pub whatsapp: String,
    /// Engagement description.
    #[validate(length(min = 1))]
    pub service: String,
    /// Engagement price.
    pub total_value: Decimal,
    /// Amount already received at registration time.
    #[serde(default)]
    pub paid_value: Decimal,
    /// Scheduled service date.
    pub service_date: NaiveDate,
    /// Initial status; defaults to awaiting.
    #[serde(default)]
    pub status: ClientStatus,
    /// Municipality the service happens in; preselected when omitted.
    #[validate(length(min = 1))]
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl TryFrom<&NewClientForm> for NewClient {
    type Error = TypeConstraintError;

    /// Converts the form into creation input, normalizing every constrained
    /// field through its value object.
    fn try_from(form: &NewClientForm) -> Result<Self, Self::Error> {
        Ok(NewClient {
            name: ClientName::new(form.name.as_str())?,
            phone: opt_text(&form.phone),
            whatsapp: WhatsappNumber::new(form.whatsapp.as_str())?,
            service: ServiceName::new(form.service.as_str())?,
            total_value: form.total_value,
            paid_value: form.paid_value,
            service_date: form.service_date,
            status: form.status,
            city: CityName::new(form.city.as_str())?,
            address: opt_text(&form.address),
            notes: opt_text(&form.notes),
            coordinates: form.coordinates,
        })
    }
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

fn opt_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
