//! Reports: last week of analytics snapshots with CSV export.

use contracts::reports::{self, AnalyticsSnapshot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::EmptyState;
use crate::shared::data::client;
use crate::shared::date_utils;
use crate::shared::export;
use crate::shared::icons::icon;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let (snapshots, set_snapshots) = signal(Option::<Vec<AnalyticsSnapshot>>::None);

    spawn_local(async move {
        match client::table("analytics_snapshots")
            .order_by("snapshot_date", false)
            .limit(7)
            .fetch::<AnalyticsSnapshot>()
            .await
        {
            Ok(rows) => set_snapshots.set(Some(rows)),
            Err(err) => {
                log::error!("Failed to load snapshots: {}", err);
                set_snapshots.set(Some(Vec::new()));
            }
        }
    });

    let export_csv = move |_| {
        let rows = snapshots.get_untracked().unwrap_or_default();
        let csv = reports::report_csv(&rows);
        let filename = reports::report_filename(date_utils::today());
        if let Err(err) = export::download_csv(&csv, &filename) {
            log::error!("CSV export failed: {}", err);
        }
    };

    // Week totals for the on-time panel.
    let totals = Signal::derive(move || {
        snapshots.get().map(|rows| {
            let on_time: i64 = rows.iter().map(|s| s.on_time_deliveries).sum();
            let delayed: i64 = rows.iter().map(|s| s.delayed_deliveries).sum();
            (on_time, delayed)
        })
    });

    view! {
        <div class="page">
            <header class="page__header page__header--actions">
                <div>
                    <h1>"Reports"</h1>
                    <p>"Daily performance over the last week"</p>
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=export_csv>
                    {icon("download")}
                    "Export CSV"
                </Button>
            </header>

            <section class="panel">
                {move || match totals.get() {
                    None => view! { <p class="muted">"Loading..."</p> }.into_any(),
                    Some((on_time, delayed)) => view! {
                        <div class="ontime-panel">
                            {icon("trending-up")}
                            <div>
                                <span class="ontime-panel__rate">
                                    {reports::format_rate(on_time, delayed)}
                                </span>
                                <span class="ontime-panel__label">
                                    {format!(
                                        "on time this week ({} on time, {} delayed)",
                                        on_time, delayed,
                                    )}
                                </span>
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </section>

            <section class="panel">
                <h2>"Daily Snapshots"</h2>
                {move || match snapshots.get() {
                    None => view! { <p class="muted">"Loading snapshots..."</p> }.into_any(),
                    Some(rows) if rows.is_empty() => view! {
                        <EmptyState
                            icon_name="bar-chart"
                            title="No snapshot data"
                            hint="Snapshots are produced nightly on the backend"
                        />
                    }
                    .into_any(),
                    Some(rows) => view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Date"</TableHeaderCell>
                                    <TableHeaderCell>"Routes"</TableHeaderCell>
                                    <TableHeaderCell>"Deliveries"</TableHeaderCell>
                                    <TableHeaderCell>"Distance"</TableHeaderCell>
                                    <TableHeaderCell>"Fuel Cost"</TableHeaderCell>
                                    <TableHeaderCell>"Avg Time"</TableHeaderCell>
                                    <TableHeaderCell>"Success Rate"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {rows
                                    .into_iter()
                                    .map(|s| view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {date_utils::format_date(&s.snapshot_date)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {s.total_routes.to_string()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {s.total_deliveries.to_string()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format!("{:.1} km", s.total_distance_km)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format!("${:.2}", s.total_fuel_cost)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format!(
                                                        "{} min",
                                                        s.average_delivery_time_minutes.round() as i64,
                                                    )}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {reports::success_rate(
                                                        s.on_time_deliveries,
                                                        s.total_deliveries,
                                                    )}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}
