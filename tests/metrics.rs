use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use magsys_crm::domain::client::Client;
use magsys_crm::domain::status::ClientStatus;
use magsys_crm::services::metrics::{
    PROJECTION_POINTS, active_count, average_revenue_per_client, average_ticket, completed_count,
    conversion_rate, financial_breakdown, financial_summary, performance_stats, projection_series,
    total_pending, total_received, total_revenue,
};

mod common;

fn sample() -> Vec<Client> {
    vec![
        common::client(
            "Alice Souza",
            dec!(100),
            dec!(100),
            common::date(2024, 6, 10),
            ClientStatus::Completed,
        ),
        common::client(
            "Bruno Lima",
            dec!(200),
            dec!(50),
            common::date(2024, 6, 12),
            ClientStatus::Awaiting,
        ),
        common::client(
            "Carla Dias",
            dec!(300),
            dec!(0),
            common::date(2024, 6, 11),
            ClientStatus::Cancelled,
        ),
    ]
}

#[test]
fn empty_collection_degrades_to_neutral_values() {
    let empty: Vec<Client> = Vec::new();
    assert_eq!(total_revenue(&empty), Decimal::ZERO);
    assert_eq!(total_received(&empty), Decimal::ZERO);
    assert_eq!(total_pending(&empty), Decimal::ZERO);
    assert_eq!(conversion_rate(&empty), 0.0);
    assert_eq!(average_ticket(&empty), Decimal::ZERO);
    assert_eq!(average_revenue_per_client(&empty), Decimal::ZERO);
    assert!(projection_series(&empty).is_empty());

    let stats = performance_stats(&empty);
    assert_eq!(stats.total_clients, 0);
    assert_eq!(stats.completion_rate, 0.0);

    let breakdown = financial_breakdown(&empty);
    assert_eq!(breakdown.received_percentage, 0);
}

#[test]
fn revenue_counts_every_status_but_conversion_excludes_cancelled() {
    let records = sample();

    // Cancelled records still count toward revenue.
    assert_eq!(total_revenue(&records), dec!(600));
    assert_eq!(total_received(&records), dec!(150));
    assert_eq!(total_pending(&records), dec!(450));

    // Converted: the completed one. Eligible: everything except the
    // cancelled record.
    assert_eq!(conversion_rate(&records), 50.0);

    assert_eq!(active_count(&records), 1);
    assert_eq!(completed_count(&records), 1);
}

#[test]
fn pending_is_always_revenue_minus_received() {
    for records in [Vec::new(), sample()] {
        assert_eq!(
            total_pending(&records),
            total_revenue(&records) - total_received(&records)
        );
    }
}

#[test]
fn averages_divide_by_the_whole_base() {
    let records = sample();
    assert_eq!(average_ticket(&records), dec!(200));
    assert_eq!(average_revenue_per_client(&records), dec!(50));
}

#[test]
fn summary_matches_the_individual_aggregates() {
    let records = sample();
    let summary = financial_summary(&records);
    assert_eq!(summary.total_revenue, total_revenue(&records));
    assert_eq!(summary.total_received, total_received(&records));
    assert_eq!(summary.total_pending, total_pending(&records));
    assert_eq!(summary.conversion_rate, conversion_rate(&records));
}

#[test]
fn projection_orders_by_date_and_skips_cancelled() {
    let records = sample();
    let series = projection_series(&records);

    // The cancelled record (2024-06-11) never shows up.
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].label, "Alice");
    assert_eq!(series[0].date, common::date(2024, 6, 10));
    assert_eq!(series[0].cumulative, dec!(100));
    assert_eq!(series[1].label, "Bruno");
    assert_eq!(series[1].cumulative, dec!(300));
}

#[test]
fn projection_breaks_date_ties_by_collection_order() {
    let day = common::date(2024, 6, 10);
    let records = vec![
        common::client("Primeiro", dec!(10), dec!(0), day, ClientStatus::Awaiting),
        common::client("Segundo", dec!(20), dec!(0), day, ClientStatus::Awaiting),
    ];
    let series = projection_series(&records);
    assert_eq!(series[0].label, "Primeiro");
    assert_eq!(series[1].label, "Segundo");
    assert_eq!(series[1].cumulative, dec!(30));
}

#[test]
fn projection_truncates_to_ten_points() {
    let records: Vec<Client> = (0..15u32)
        .map(|i| {
            common::client(
                &format!("Cliente {i}"),
                dec!(10),
                dec!(0),
                common::date(2024, 6, 1 + i),
                ClientStatus::Awaiting,
            )
        })
        .collect();
    let series = projection_series(&records);
    assert_eq!(series.len(), PROJECTION_POINTS);
    assert_eq!(series.last().unwrap().cumulative, dec!(100));
}

#[test]
fn breakdown_rounds_the_received_share() {
    let records = sample();
    let breakdown = financial_breakdown(&records);
    // 150 / 600 = 25%
    assert_eq!(breakdown.received_percentage, 25);
    assert_eq!(breakdown.projection, projection_series(&records));
}

#[test]
fn performance_stats_cover_the_whole_base() {
    let records = sample();
    let stats = performance_stats(&records);
    assert_eq!(stats.total_clients, 3);
    assert_eq!(stats.active_clients, 1);
    assert_eq!(stats.completed_clients, 1);
    assert!((stats.completion_rate - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(stats.average_ticket, dec!(200));
}
