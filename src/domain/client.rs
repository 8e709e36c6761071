use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::status::ClientStatus;
use crate::domain::types::{CityName, ClientId, ClientName, ServiceName, WhatsappNumber};

/// Geographic point used for map placement.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One tracked service engagement with a single counterparty.
///
/// `remaining_value` and `paid_percentage` are derived and are never written
/// directly; every mutation path goes through [`payment_progress`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub phone: Option<String>,
    pub whatsapp: WhatsappNumber,
    pub service: ServiceName,
    pub total_value: Decimal,
    pub paid_value: Decimal,
    /// Derived: always `total_value - paid_value`.
    pub remaining_value: Decimal,
    /// Derived: rounded share of the total already paid, in `[0, 100]`.
    pub paid_percentage: u8,
    pub service_date: NaiveDate,
    pub status: ClientStatus,
    pub city: CityName,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub coordinates: Option<Coordinates>,
}

/// Input for creating a client record; everything except the identifier and
/// the derived payment fields.
#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub name: ClientName,
    pub phone: Option<String>,
    pub whatsapp: WhatsappNumber,
    pub service: ServiceName,
    pub total_value: Decimal,
    pub paid_value: Decimal,
    pub service_date: NaiveDate,
    pub status: ClientStatus,
    pub city: CityName,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub coordinates: Option<Coordinates>,
}

/// Derived payment fields computed from the raw monetary pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaymentProgress {
    pub remaining_value: Decimal,
    pub paid_percentage: u8,
}

/// Recomputes the derived payment fields.
///
/// The percentage is `round(100 * paid / total)` clamped to `[0, 100]`, or 0
/// for a zero total. Rounding is half-away-from-zero to match how the
/// original form previews the figure.
pub fn payment_progress(total_value: Decimal, paid_value: Decimal) -> PaymentProgress {
    let paid_percentage = if total_value > Decimal::ZERO {
        (paid_value * Decimal::ONE_HUNDRED / total_value)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
            .to_u8()
            .unwrap_or(0)
    } else {
        0
    };
    PaymentProgress {
        remaining_value: total_value - paid_value,
        paid_percentage,
    }
}

impl Client {
    /// Materializes a record from creation input, deriving the payment fields.
    pub fn from_new(id: ClientId, new: NewClient) -> Self {
        let progress = payment_progress(new.total_value, new.paid_value);
        Self {
            id,
            name: new.name,
            phone: new.phone,
            whatsapp: new.whatsapp,
            service: new.service,
            total_value: new.total_value,
            paid_value: new.paid_value,
            remaining_value: progress.remaining_value,
            paid_percentage: progress.paid_percentage,
            service_date: new.service_date,
            status: new.status,
            city: new.city,
            address: new.address,
            notes: new.notes,
            coordinates: new.coordinates,
        }
    }

    /// Whether the engagement still requires attention.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Marks the engagement completed with the full amount collected.
    pub fn settle(&mut self) {
        self.status = ClientStatus::Completed;
        self.paid_value = self.total_value;
        let progress = payment_progress(self.total_value, self.paid_value);
        self.remaining_value = progress.remaining_value;
        self.paid_percentage = progress.paid_percentage;
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn progress_for_partial_payment() {
        let progress = payment_progress(dec!(1000), dec!(300));
        assert_eq!(progress.remaining_value, dec!(700));
        assert_eq!(progress.paid_percentage, 30);
    }

    #[test]
    fn progress_for_zero_total_is_neutral() {
        let progress = payment_progress(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(progress.remaining_value, Decimal::ZERO);
        assert_eq!(progress.paid_percentage, 0);
    }

    #[test]
    fn percentage_rounds_half_away_from_zero() {
        // 125 / 1000 = 12.5% -> 13
        assert_eq!(payment_progress(dec!(1000), dec!(125)).paid_percentage, 13);
    }

    #[test]
    fn percentage_caps_at_one_hundred_on_overpayment() {
        let progress = payment_progress(dec!(100), dec!(150));
        assert_eq!(progress.paid_percentage, 100);
        assert_eq!(progress.remaining_value, dec!(-50));
    }
}
