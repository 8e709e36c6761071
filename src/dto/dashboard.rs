//! Read models shaped for the dashboard views.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::client::Client;

/// Figures behind the four header cards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FinancialSummary {
    pub total_revenue: Decimal,
    pub total_received: Decimal,
    pub total_pending: Decimal,
    /// Share of non-cancelled clients that confirmed or completed, in percent.
    pub conversion_rate: f64,
}

/// Figures behind the performance stats grid.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PerformanceStats {
    pub total_clients: usize,
    pub active_clients: usize,
    pub completed_clients: usize,
    /// Completed share of the whole base, in percent.
    pub completion_rate: f64,
    pub average_ticket: Decimal,
    pub average_revenue_per_client: Decimal,
}

/// One point of the cumulative revenue projection series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectionPoint {
    /// Client first name, used as the axis label.
    pub label: String,
    pub date: NaiveDate,
    pub cumulative: Decimal,
}

/// Aggregated data for the financial page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FinancialBreakdown {
    pub total_revenue: Decimal,
    pub total_received: Decimal,
    pub total_pending: Decimal,
    /// Received share of the total revenue, rounded, in `[0, 100]`.
    pub received_percentage: u8,
    pub projection: Vec<ProjectionPoint>,
}

/// Agenda partition for a reference date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Agenda {
    /// Appointments scheduled for the reference date, in collection order.
    pub today: Vec<Client>,
    /// Appointments within the following week, soonest first.
    pub upcoming: Vec<Client>,
}
