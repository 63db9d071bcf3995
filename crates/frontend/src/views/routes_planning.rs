//! Route planning: recent routes table with vehicle / driver lookups.

use std::collections::HashMap;

use contracts::domain::{Driver, Route, Vehicle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;
use uuid::Uuid;

use crate::shared::components::{EmptyState, StatusBadge};
use crate::shared::data::client;
use crate::shared::date_utils;
use crate::shared::icons::icon;

#[component]
pub fn RoutesPlanningPage() -> impl IntoView {
    let (routes, set_routes) = signal(Option::<Vec<Route>>::None);
    let (vehicles, set_vehicles) = signal(Vec::<Vehicle>::new());
    let (drivers, set_drivers) = signal(Vec::<Driver>::new());

    spawn_local(async move {
        match client::table("routes")
            .order_by("created_at", false)
            .limit(10)
            .fetch::<Route>()
            .await
        {
            Ok(rows) => set_routes.set(Some(rows)),
            Err(err) => {
                log::error!("Failed to load routes: {}", err);
                set_routes.set(Some(Vec::new()));
            }
        }
    });
    spawn_local(async move {
        match client::table("vehicles").fetch::<Vehicle>().await {
            Ok(rows) => set_vehicles.set(rows),
            Err(err) => log::error!("Failed to load vehicles: {}", err),
        }
    });
    spawn_local(async move {
        match client::table("drivers").fetch::<Driver>().await {
            Ok(rows) => set_drivers.set(rows),
            Err(err) => log::error!("Failed to load drivers: {}", err),
        }
    });

    let plate_by_id = Signal::derive(move || {
        vehicles
            .get()
            .into_iter()
            .map(|v| (v.id, v.license_plate))
            .collect::<HashMap<Uuid, String>>()
    });
    let driver_ids = Signal::derive(move || {
        drivers
            .get()
            .into_iter()
            .map(|d| (d.id, d.short_id()))
            .collect::<HashMap<Uuid, String>>()
    });

    view! {
        <div class="page">
            <header class="page__header page__header--actions">
                <div>
                    <h1>"Route Planning"</h1>
                    <p>"Plan and track delivery routes"</p>
                </div>
                <A href="/routes/create" attr:class="button button--primary">
                    {icon("plus")}
                    "New Route"
                </A>
            </header>

            <section class="panel map-placeholder">
                {icon("map")}
                <p>"Map view is not available in this build"</p>
            </section>

            <section class="panel">
                <h2>"Recent Routes"</h2>
                {move || match routes.get() {
                    None => view! { <p class="muted">"Loading routes..."</p> }.into_any(),
                    Some(rows) if rows.is_empty() => view! {
                        <EmptyState
                            icon_name="map"
                            title="No routes yet"
                            hint="Create a route to see it here"
                        />
                    }
                    .into_any(),
                    Some(rows) => view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Route"</TableHeaderCell>
                                    <TableHeaderCell>"Vehicle"</TableHeaderCell>
                                    <TableHeaderCell>"Driver"</TableHeaderCell>
                                    <TableHeaderCell>"Distance"</TableHeaderCell>
                                    <TableHeaderCell>"Est. Fuel"</TableHeaderCell>
                                    <TableHeaderCell>"Created"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {rows
                                    .into_iter()
                                    .map(|route| {
                                        let vehicle = route
                                            .vehicle_id
                                            .and_then(|id| plate_by_id.get().get(&id).cloned())
                                            .unwrap_or_else(|| "—".to_string());
                                        let driver = route
                                            .driver_id
                                            .and_then(|id| driver_ids.get().get(&id).cloned())
                                            .unwrap_or_else(|| "—".to_string());
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{route.name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{vehicle}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{driver}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format!("{:.1} km", route.total_distance_km)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format!("${:.2}", route.estimated_fuel_cost)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {date_utils::format_datetime(&route.created_at)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <StatusBadge
                                                            label=route.status.label()
                                                            tone=route.status.tone()
                                                        />
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
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

/// Route creation is a planned follow-up; the route exists so the sidebar
/// action has somewhere to land.
#[component]
pub fn RouteCreatePage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page__header">
                <h1>"New Route"</h1>
            </header>
            <section class="panel">
                <EmptyState
                    icon_name="map"
                    title="Route creation is coming soon"
                    hint="Use the backend console to create routes for now"
                />
                <A href="/routes" attr:class="button button--secondary">"Back to routes"</A>
            </section>
        </div>
    }
}
