#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;

use magsys_crm::domain::client::{Client, NewClient};
use magsys_crm::domain::status::ClientStatus;
use magsys_crm::domain::types::{CityName, ClientId, ClientName, ServiceName, WhatsappNumber};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn new_client(
    name: &str,
    total: Decimal,
    paid: Decimal,
    service_date: NaiveDate,
    status: ClientStatus,
) -> NewClient {
    NewClient {
        name: ClientName::new(name).unwrap(),
        phone: None,
        whatsapp: WhatsappNumber::new("83991234567").unwrap(),
        service: ServiceName::new("Website Corporativo").unwrap(),
        total_value: total,
        paid_value: paid,
        service_date,
        status,
        city: CityName::new("João Pessoa").unwrap(),
        address: None,
        notes: None,
        coordinates: None,
    }
}

/// Materialized record for the pure aggregation/scheduling tests.
pub fn client(
    name: &str,
    total: Decimal,
    paid: Decimal,
    service_date: NaiveDate,
    status: ClientStatus,
) -> Client {
    Client::from_new(
        ClientId::new(),
        new_client(name, total, paid, service_date, status),
    )
}
