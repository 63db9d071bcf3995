//! Fleet view: vehicles and drivers behind a tab switch.

use contracts::domain::{Driver, Vehicle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::{EmptyState, StatusBadge};
use crate::shared::data::client;
use crate::shared::date_utils;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FleetTab {
    Vehicles,
    Drivers,
}

#[component]
pub fn FleetPage() -> impl IntoView {
    let (tab, set_tab) = signal(FleetTab::Vehicles);
    let (vehicles, set_vehicles) = signal(Option::<Vec<Vehicle>>::None);
    let (drivers, set_drivers) = signal(Option::<Vec<Driver>>::None);

    spawn_local(async move {
        match client::table("vehicles")
            .order_by("license_plate", true)
            .fetch::<Vehicle>()
            .await
        {
            Ok(rows) => set_vehicles.set(Some(rows)),
            Err(err) => {
                log::error!("Failed to load vehicles: {}", err);
                set_vehicles.set(Some(Vec::new()));
            }
        }
    });
    spawn_local(async move {
        match client::table("drivers")
            .order_by("created_at", false)
            .fetch::<Driver>()
            .await
        {
            Ok(rows) => set_drivers.set(Some(rows)),
            Err(err) => {
                log::error!("Failed to load drivers: {}", err);
                set_drivers.set(Some(Vec::new()));
            }
        }
    });

    let tab_button = move |target: FleetTab, label: &'static str| {
        let appearance = Signal::derive(move || {
            if tab.get() == target {
                ButtonAppearance::Primary
            } else {
                ButtonAppearance::Secondary
            }
        });
        view! {
            <Button appearance on_click=move |_| set_tab.set(target)>
                {label}
            </Button>
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Fleet & Drivers"</h1>
                <p>"Vehicles and the people driving them"</p>
            </header>

            <Flex gap=FlexGap::Small>
                {tab_button(FleetTab::Vehicles, "Vehicles")}
                {tab_button(FleetTab::Drivers, "Drivers")}
            </Flex>

            <Show
                when=move || tab.get() == FleetTab::Vehicles
                fallback=move || view! { <DriversTable drivers/> }
            >
                <VehicleCards vehicles/>
            </Show>
        </div>
    }
}

#[component]
fn VehicleCards(vehicles: ReadSignal<Option<Vec<Vehicle>>>) -> impl IntoView {
    move || match vehicles.get() {
        None => view! { <p class="muted">"Loading vehicles..."</p> }.into_any(),
        Some(rows) if rows.is_empty() => view! {
            <EmptyState icon_name="truck" title="No vehicles registered"/>
        }
        .into_any(),
        Some(rows) => view! {
            <div class="card-grid">
                {rows
                    .into_iter()
                    .map(|vehicle| {
                        let maintenance = vehicle
                            .last_maintenance
                            .as_deref()
                            .map(date_utils::format_date)
                            .unwrap_or_else(|| "Never".to_string());
                        view! {
                            <div class="vehicle-card">
                                <div class="vehicle-card__top">
                                    {icon("truck")}
                                    <strong>{vehicle.license_plate.clone()}</strong>
                                    <StatusBadge
                                        label=vehicle.status.label()
                                        tone=vehicle.status.tone()
                                    />
                                </div>
                                <p class="vehicle-card__model">{vehicle.model.clone()}</p>
                                <ul class="vehicle-card__specs">
                                    <li>
                                        <span>"Capacity"</span>
                                        <span>{format!("{:.0} kg", vehicle.capacity_kg)}</span>
                                    </li>
                                    <li>
                                        <span>"Consumption"</span>
                                        <span>
                                            {format!("{:.2} L/km", vehicle.fuel_consumption_per_km)}
                                        </span>
                                    </li>
                                    <li>
                                        <span>"Last maintenance"</span>
                                        <span>{maintenance}</span>
                                    </li>
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn DriversTable(drivers: ReadSignal<Option<Vec<Driver>>>) -> impl IntoView {
    move || match drivers.get() {
        None => view! { <p class="muted">"Loading drivers..."</p> }.into_any(),
        Some(rows) if rows.is_empty() => view! {
            <EmptyState icon_name="users" title="No drivers registered"/>
        }
        .into_any(),
        Some(rows) => view! {
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Driver"</TableHeaderCell>
                        <TableHeaderCell>"License"</TableHeaderCell>
                        <TableHeaderCell>"Expires"</TableHeaderCell>
                        <TableHeaderCell>"Rating"</TableHeaderCell>
                        <TableHeaderCell>"Deliveries"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|driver| {
                            let short_id = driver.short_id();
                            let license = driver.license_number.clone();
                            let expiry = date_utils::format_date(&driver.license_expiry);
                            let rating = driver.rating;
                            let total = driver.total_deliveries;
                            let status = driver.availability_status;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            {format!("#{}", short_id)}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{license}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{expiry}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {icon("star")}
                                            {format!("{:.1}", rating)}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {total.to_string()}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <StatusBadge
                                                label=status.label()
                                                tone=status.tone()
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
    }
}
