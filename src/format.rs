//! Locale-aware rendering helpers and deep-link builders.
//!
//! Pure functions; the presentation layer calls these when turning records
//! into cards, tables and buttons.

use chrono::NaiveDate;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::client::Client;

/// Country calling code prefixed to WhatsApp deep links.
pub const COUNTRY_CODE: &str = "55";

/// Renders a monetary amount in pt-BR style: `R$ 1.234,56`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-R$ {int_grouped},{frac_part}")
    } else {
        format!("R$ {int_grouped},{frac_part}")
    }
}

/// Renders a calendar date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Builds the `wa.me` deep link carrying the appointment reminder message.
pub fn whatsapp_link(client: &Client) -> String {
    let message = format!(
        "Olá {}, lembrete do nosso agendamento de {} para {}.",
        client.name,
        client.service,
        format_date(client.service_date)
    );
    let encoded = utf8_percent_encode(&message, NON_ALPHANUMERIC);
    format!(
        "https://wa.me/{COUNTRY_CODE}{}?text={encoded}",
        client.whatsapp.as_str()
    )
}

/// Builds a Google Maps search link for the client location. Falls back to
/// the city alone when no street address was recorded.
pub fn maps_link(client: &Client) -> String {
    let place = match client.address.as_deref() {
        Some(address) => format!("{address}, {} - PB", client.city),
        None => format!("{} - PB", client.city),
    };
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        utf8_percent_encode(&place, NON_ALPHANUMERIC)
    )
}
