//! Operational overview: live counters plus today's analytics snapshot.

use contracts::reports::{self, AnalyticsSnapshot};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::StatCard;
use crate::shared::data::client;
use crate::shared::date_utils;
use crate::shared::icons::icon;

/// Resolved text for a counter card. A failed count degrades to the same
/// explicit "No data" state the snapshot cards use; only a request still
/// in flight renders the placeholder dash.
fn count_display(result: Result<u64, String>) -> String {
    match result {
        Ok(n) => n.to_string(),
        Err(_) => "No data".to_string(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (active_routes, set_active_routes) = signal(Option::<String>::None);
    let (open_deliveries, set_open_deliveries) = signal(Option::<String>::None);
    let (vehicles_in_use, set_vehicles_in_use) = signal(Option::<String>::None);
    // outer None = still loading, inner None = no snapshot for today
    let (snapshot, set_snapshot) = signal(Option::<Option<AnalyticsSnapshot>>::None);

    // Four independent queries; each card fills in as its answer arrives.
    spawn_local(async move {
        let result = client::table("routes")
            .eq("status", "in_progress")
            .count()
            .await;
        if let Err(err) = &result {
            log::error!("Failed to count active routes: {}", err);
        }
        set_active_routes.set(Some(count_display(result)));
    });
    spawn_local(async move {
        let result = client::table("deliveries")
            .in_set("status", &["pending", "in_transit"])
            .count()
            .await;
        if let Err(err) = &result {
            log::error!("Failed to count open deliveries: {}", err);
        }
        set_open_deliveries.set(Some(count_display(result)));
    });
    spawn_local(async move {
        let result = client::table("vehicles").eq("status", "in_use").count().await;
        if let Err(err) = &result {
            log::error!("Failed to count vehicles in use: {}", err);
        }
        set_vehicles_in_use.set(Some(count_display(result)));
    });
    spawn_local(async move {
        match client::table("analytics_snapshots")
            .eq("snapshot_date", &date_utils::today_iso())
            .fetch_maybe_single::<AnalyticsSnapshot>()
            .await
        {
            Ok(row) => set_snapshot.set(Some(row)),
            Err(err) => {
                log::error!("Failed to load today's snapshot: {}", err);
                set_snapshot.set(Some(None));
            }
        }
    });

    let avg_time = Signal::derive(move || {
        snapshot.get().map(|today| match today {
            Some(s) => format!("{} min", s.average_delivery_time_minutes.round() as i64),
            None => "No data".to_string(),
        })
    });
    let fuel_cost = Signal::derive(move || {
        snapshot.get().map(|today| match today {
            Some(s) => format!("${:.2}", s.total_fuel_cost),
            None => "No data".to_string(),
        })
    });
    let on_time = Signal::derive(move || {
        snapshot.get().map(|today| match today {
            Some(s) => reports::format_rate(s.on_time_deliveries, s.delayed_deliveries),
            None => "No data".to_string(),
        })
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Dashboard"</h1>
                <p>"Today's operations at a glance"</p>
            </header>

            <div class="stat-grid">
                <StatCard
                    label="Active Routes"
                    icon_name="map"
                    value=active_routes
                    hint="In progress right now"
                />
                <StatCard
                    label="Open Deliveries"
                    icon_name="package"
                    value=open_deliveries
                    hint="Pending or in transit"
                />
                <StatCard label="Vehicles in Use" icon_name="truck" value=vehicles_in_use/>
                <StatCard label="Avg Delivery Time" icon_name="clock" value=avg_time/>
                <StatCard label="Fuel Cost Today" icon_name="dollar-sign" value=fuel_cost/>
                <StatCard label="On-Time Rate" icon_name="trending-up" value=on_time/>
            </div>

            <div class="panel-grid">
                <section class="panel">
                    <h2>"Recent Activity"</h2>
                    <ul class="activity-list">
                        <li>
                            {icon("check-circle")}
                            <span>"Route #142 completed ahead of schedule"</span>
                        </li>
                        <li>
                            {icon("alert-circle")}
                            <span>"Delivery to Oak Street delayed by traffic"</span>
                        </li>
                        <li>
                            {icon("wrench")}
                            <span>"Vehicle TR-07 scheduled for maintenance"</span>
                        </li>
                    </ul>
                </section>
                <section class="panel">
                    <h2>"Quick Stats"</h2>
                    <ul class="quick-stats">
                        <li><span>"Fleet utilization"</span><strong>"78%"</strong></li>
                        <li><span>"Driver availability"</span><strong>"12 of 15"</strong></li>
                        <li><span>"Fuel efficiency"</span><strong>"8.4 L/100km"</strong></li>
                    </ul>
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_count_shows_the_figure() {
        assert_eq!(count_display(Ok(0)), "0");
        assert_eq!(count_display(Ok(17)), "17");
    }

    #[test]
    fn failed_count_degrades_to_no_data() {
        assert_eq!(count_display(Err("HTTP error: 500".to_string())), "No data");
    }
}
