//! Daily analytics snapshots and the CSV report built from them.
//!
//! The backend precomputes one snapshot per day; this module only joins
//! numbers it already received. Everything here is deterministic given the
//! same input rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only daily analytics record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub id: Uuid,
    pub snapshot_date: String,
    pub total_routes: i64,
    pub total_deliveries: i64,
    pub total_distance_km: f64,
    pub total_fuel_cost: f64,
    pub average_delivery_time_minutes: f64,
    pub on_time_deliveries: i64,
    pub delayed_deliveries: i64,
    pub active_vehicles: i64,
    pub created_at: String,
}

/// Literal header sequence of the exported report.
pub const REPORT_HEADER: [&str; 8] = [
    "Date",
    "Routes",
    "Deliveries",
    "Distance (km)",
    "Fuel Cost",
    "Avg Time (min)",
    "On Time",
    "Delayed",
];

/// Assemble the CSV report: header row plus one comma-joined row per
/// snapshot, newline-separated. An empty slice yields exactly the header
/// row and nothing else.
pub fn report_csv(snapshots: &[AnalyticsSnapshot]) -> String {
    let mut lines = Vec::with_capacity(snapshots.len() + 1);
    lines.push(REPORT_HEADER.join(","));
    for s in snapshots {
        lines.push(
            [
                s.snapshot_date.clone(),
                s.total_routes.to_string(),
                s.total_deliveries.to_string(),
                s.total_distance_km.to_string(),
                s.total_fuel_cost.to_string(),
                s.average_delivery_time_minutes.to_string(),
                s.on_time_deliveries.to_string(),
                s.delayed_deliveries.to_string(),
            ]
            .join(","),
        );
    }
    lines.join("\n")
}

/// Download name for the exported report.
pub fn report_filename(date: NaiveDate) -> String {
    format!("logisync-report-{}.csv", date.format("%Y-%m-%d"))
}

/// Share of on-time deliveries among on-time + delayed, in percent.
/// Returns 0.0 when there is nothing to divide by.
pub fn on_time_rate(on_time: i64, delayed: i64) -> f64 {
    let total = on_time + delayed;
    if total == 0 {
        return 0.0;
    }
    on_time as f64 / total as f64 * 100.0
}

/// Display form of [`on_time_rate`]: one decimal with a percent sign, or a
/// bare `0` when the denominator is zero.
pub fn format_rate(on_time: i64, delayed: i64) -> String {
    if on_time + delayed == 0 {
        return "0".to_string();
    }
    format!("{:.1}%", on_time_rate(on_time, delayed))
}

/// Success-rate column of the Reports table: on-time over all deliveries.
pub fn success_rate(on_time: i64, total_deliveries: i64) -> String {
    if total_deliveries <= 0 {
        return "0%".to_string();
    }
    format!(
        "{:.1}%",
        on_time as f64 / total_deliveries as f64 * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            id: Uuid::nil(),
            snapshot_date: "2024-01-01".to_string(),
            total_routes: 3,
            total_deliveries: 10,
            total_distance_km: 42.5,
            total_fuel_cost: 12.3,
            average_delivery_time_minutes: 18.0,
            on_time_deliveries: 9,
            delayed_deliveries: 1,
            active_vehicles: 2,
            created_at: "2024-01-01T23:59:00Z".to_string(),
        }
    }

    #[test]
    fn empty_export_is_header_only() {
        assert_eq!(
            report_csv(&[]),
            "Date,Routes,Deliveries,Distance (km),Fuel Cost,Avg Time (min),On Time,Delayed"
        );
    }

    #[test]
    fn single_snapshot_export() {
        let csv = report_csv(&[snapshot()]);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Routes,Deliveries,Distance (km),Fuel Cost,Avg Time (min),On Time,Delayed"
        );
        assert_eq!(lines.next().unwrap(), "2024-01-01,3,10,42.5,12.3,18,9,1");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn export_is_deterministic() {
        let rows = [snapshot(), snapshot()];
        assert_eq!(report_csv(&rows), report_csv(&rows));
    }

    #[test]
    fn filename_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(report_filename(date), "logisync-report-2024-03-15.csv");
    }

    #[test]
    fn rate_formatting() {
        assert_eq!(format_rate(9, 1), "90.0%");
        assert_eq!(format_rate(0, 0), "0");
        assert_eq!(on_time_rate(0, 0), 0.0);
        assert_eq!(on_time_rate(9, 1), 90.0);
    }

    #[test]
    fn success_rate_handles_zero_total() {
        assert_eq!(success_rate(9, 10), "90.0%");
        assert_eq!(success_rate(0, 0), "0%");
    }
}
