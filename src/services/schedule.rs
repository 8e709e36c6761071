//! Agenda partitioning over a snapshot and a caller-supplied reference date.
//!
//! Date comparisons are calendar-only; the reference date is injected so the
//! views stay deterministic under test.

use chrono::{Duration, NaiveDate};

use crate::domain::client::Client;
use crate::dto::dashboard::Agenda;

/// How far ahead the upcoming list looks.
pub const AGENDA_WINDOW_DAYS: i64 = 7;

/// Appointments scheduled exactly for `today`, excluding completed and
/// cancelled records. Collection order is preserved.
pub fn today_list(records: &[Client], today: NaiveDate) -> Vec<Client> {
    records
        .iter()
        .filter(|c| c.service_date == today && c.is_active())
        .cloned()
        .collect()
}

/// Appointments strictly after `today` and within the next
/// [`AGENDA_WINDOW_DAYS`] days, excluding completed and cancelled records,
/// soonest first (stable on collection order for same-day ties).
pub fn next_seven_days(records: &[Client], today: NaiveDate) -> Vec<Client> {
    let window_end = today + Duration::days(AGENDA_WINDOW_DAYS);
    let mut upcoming: Vec<Client> = records
        .iter()
        .filter(|c| c.service_date > today && c.service_date <= window_end && c.is_active())
        .cloned()
        .collect();
    upcoming.sort_by_key(|c| c.service_date);
    upcoming
}

/// Both agenda lists bundled for the agenda view.
pub fn agenda(records: &[Client], today: NaiveDate) -> Agenda {
    Agenda {
        today: today_list(records, today),
        upcoming: next_seven_days(records, today),
    }
}
