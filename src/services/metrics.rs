//! Derived financial and performance metrics.
//!
//! Pure, stateless functions over a snapshot of the collection. Every
//! function tolerates an empty slice and degrades to zero/neutral values
//! instead of failing.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::client::Client;
use crate::domain::status::ClientStatus;
use crate::dto::dashboard::{
    FinancialBreakdown, FinancialSummary, PerformanceStats, ProjectionPoint,
};

/// Maximum number of points emitted by the projection series.
pub const PROJECTION_POINTS: usize = 10;

/// Sum of every engagement price, regardless of status.
pub fn total_revenue(records: &[Client]) -> Decimal {
    records.iter().map(|c| c.total_value).sum()
}

/// Sum of every amount actually received.
pub fn total_received(records: &[Client]) -> Decimal {
    records.iter().map(|c| c.paid_value).sum()
}

/// Outstanding amount across the whole collection.
pub fn total_pending(records: &[Client]) -> Decimal {
    total_revenue(records) - total_received(records)
}

/// Share of non-cancelled clients that confirmed or completed, in percent.
pub fn conversion_rate(records: &[Client]) -> f64 {
    let converted = records
        .iter()
        .filter(|c| matches!(c.status, ClientStatus::Completed | ClientStatus::Confirmed))
        .count();
    let eligible = records
        .iter()
        .filter(|c| c.status != ClientStatus::Cancelled)
        .count();
    if eligible == 0 {
        0.0
    } else {
        converted as f64 * 100.0 / eligible as f64
    }
}

/// Records that are neither completed nor cancelled.
pub fn active_count(records: &[Client]) -> usize {
    records.iter().filter(|c| c.is_active()).count()
}

pub fn completed_count(records: &[Client]) -> usize {
    records
        .iter()
        .filter(|c| c.status == ClientStatus::Completed)
        .count()
}

/// Average engagement price over the whole base.
pub fn average_ticket(records: &[Client]) -> Decimal {
    if records.is_empty() {
        Decimal::ZERO
    } else {
        total_revenue(records) / Decimal::from(records.len() as u64)
    }
}

/// Average amount received per client over the whole base.
pub fn average_revenue_per_client(records: &[Client]) -> Decimal {
    if records.is_empty() {
        Decimal::ZERO
    } else {
        total_received(records) / Decimal::from(records.len() as u64)
    }
}

/// Running cumulative revenue of the non-cancelled records, ordered by
/// service date (stable on insertion order), truncated to the first
/// [`PROJECTION_POINTS`] entries.
pub fn projection_series(records: &[Client]) -> Vec<ProjectionPoint> {
    let mut eligible: Vec<&Client> = records
        .iter()
        .filter(|c| c.status != ClientStatus::Cancelled)
        .collect();
    eligible.sort_by_key(|c| c.service_date);

    let mut cumulative = Decimal::ZERO;
    eligible
        .into_iter()
        .take(PROJECTION_POINTS)
        .map(|c| {
            cumulative += c.total_value;
            ProjectionPoint {
                label: first_name(c.name.as_str()),
                date: c.service_date,
                cumulative,
            }
        })
        .collect()
}

/// Figures for the four dashboard header cards.
pub fn financial_summary(records: &[Client]) -> FinancialSummary {
    FinancialSummary {
        total_revenue: total_revenue(records),
        total_received: total_received(records),
        total_pending: total_pending(records),
        conversion_rate: conversion_rate(records),
    }
}

/// Figures for the performance stats grid.
pub fn performance_stats(records: &[Client]) -> PerformanceStats {
    let total = records.len();
    let completed = completed_count(records);
    let completion_rate = if total == 0 {
        0.0
    } else {
        completed as f64 * 100.0 / total as f64
    };
    PerformanceStats {
        total_clients: total,
        active_clients: active_count(records),
        completed_clients: completed,
        completion_rate,
        average_ticket: average_ticket(records),
        average_revenue_per_client: average_revenue_per_client(records),
    }
}

/// Aggregated data for the financial page.
pub fn financial_breakdown(records: &[Client]) -> FinancialBreakdown {
    let total = total_revenue(records);
    let received = total_received(records);
    let received_percentage = if total > Decimal::ZERO {
        (received * Decimal::ONE_HUNDRED / total)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
            .to_u8()
            .unwrap_or(0)
    } else {
        0
    };
    FinancialBreakdown {
        total_revenue: total,
        total_received: received,
        total_pending: total - received,
        received_percentage,
        projection: projection_series(records),
    }
}

fn first_name(name: &str) -> String {
    name.split_whitespace().next().unwrap_or(name).to_string()
}
