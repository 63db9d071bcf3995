//! Deliveries list with server-side status filtering.

use contracts::domain::Delivery;
use contracts::enums::DeliveryStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::{EmptyState, StatusBadge};
use crate::shared::data::client;
use crate::shared::date_utils;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusFilter {
    All,
    Only(DeliveryStatus),
}

fn status_icon(status: DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::Delivered => "check-circle",
        DeliveryStatus::InTransit => "clock",
        DeliveryStatus::Delayed => "alert-circle",
        DeliveryStatus::Failed => "x-circle",
        _ => "package",
    }
}

fn priority_class(priority: i32) -> &'static str {
    if priority >= 4 {
        "delivery-card--high"
    } else if priority == 3 {
        "delivery-card--medium"
    } else {
        ""
    }
}

#[component]
pub fn DeliveriesPage() -> impl IntoView {
    let (filter, set_filter) = signal(StatusFilter::All);
    let (deliveries, set_deliveries) = signal(Option::<Vec<Delivery>>::None);

    // Refetch whenever the filter changes; filtering happens server-side.
    Effect::new(move |_| {
        let current = filter.get();
        set_deliveries.set(None);
        spawn_local(async move {
            let mut query = client::table("deliveries").order_by("scheduled_time", true);
            if let StatusFilter::Only(status) = current {
                query = query.eq("status", status.as_str());
            }
            match query.fetch::<Delivery>().await {
                Ok(rows) => set_deliveries.set(Some(rows)),
                Err(err) => {
                    log::error!("Failed to load deliveries: {}", err);
                    set_deliveries.set(Some(Vec::new()));
                }
            }
        });
    });

    let filter_button = move |target: StatusFilter, label: &'static str| {
        let appearance = Signal::derive(move || {
            if filter.get() == target {
                ButtonAppearance::Primary
            } else {
                ButtonAppearance::Secondary
            }
        });
        view! {
            <Button appearance on_click=move |_| set_filter.set(target)>
                {label}
            </Button>
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Deliveries"</h1>
                <p>"All scheduled and completed deliveries"</p>
            </header>

            <Flex gap=FlexGap::Small>
                {filter_button(StatusFilter::All, "All")}
                {DeliveryStatus::FILTERABLE
                    .iter()
                    .map(|status| filter_button(StatusFilter::Only(*status), status.label()))
                    .collect_view()}
            </Flex>

            {move || match deliveries.get() {
                None => view! { <p class="muted">"Loading deliveries..."</p> }.into_any(),
                Some(rows) if rows.is_empty() => view! {
                    <EmptyState
                        icon_name="package"
                        title="No deliveries found"
                        hint="Try a different status filter"
                    />
                }
                .into_any(),
                Some(rows) => view! {
                    <div class="card-list">
                        {rows
                            .into_iter()
                            .map(|delivery| {
                                let scheduled = delivery
                                    .scheduled_time
                                    .as_deref()
                                    .map(date_utils::format_datetime)
                                    .unwrap_or_else(|| "Not scheduled".to_string());
                                view! {
                                    <div class=format!(
                                        "delivery-card {}",
                                        priority_class(delivery.priority),
                                    )>
                                        <div class="delivery-card__icon">
                                            {icon(status_icon(delivery.status))}
                                        </div>
                                        <div class="delivery-card__body">
                                            <div class="delivery-card__top">
                                                <strong>{format!("#{}", delivery.short_id())}</strong>
                                                <StatusBadge
                                                    label=delivery.status.label()
                                                    tone=delivery.status.tone()
                                                />
                                                <span class="badge badge--neutral">
                                                    {delivery.kind.label()}
                                                </span>
                                            </div>
                                            <p class="delivery-card__address">{delivery.address.clone()}</p>
                                            <div class="delivery-card__meta">
                                                <span>{icon("clock")} {scheduled}</span>
                                                {delivery.weight_kg.map(|w| view! {
                                                    <span>{format!("{:.1} kg", w)}</span>
                                                })}
                                                <span>{format!("Priority {}", delivery.priority)}</span>
                                            </div>
                                            {delivery.notes.clone().map(|notes| view! {
                                                <p class="delivery-card__notes">{notes}</p>
                                            })}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
