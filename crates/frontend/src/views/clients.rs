//! Client directory, alphabetical.

use contracts::domain::Client;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::EmptyState;
use crate::shared::data::client;
use crate::shared::icons::icon;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let (clients, set_clients) = signal(Option::<Vec<Client>>::None);

    spawn_local(async move {
        match client::table("clients")
            .order_by("name", true)
            .fetch::<Client>()
            .await
        {
            Ok(rows) => set_clients.set(Some(rows)),
            Err(err) => {
                log::error!("Failed to load clients: {}", err);
                set_clients.set(Some(Vec::new()));
            }
        }
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Clients"</h1>
                <p>"Delivery destinations and contacts"</p>
            </header>

            {move || match clients.get() {
                None => view! { <p class="muted">"Loading clients..."</p> }.into_any(),
                Some(rows) if rows.is_empty() => view! {
                    <EmptyState
                        icon_name="users"
                        title="No clients yet"
                        hint="Clients appear here once added on the backend"
                    />
                }
                .into_any(),
                Some(rows) => view! {
                    <div class="card-grid">
                        {rows
                            .into_iter()
                            .map(|c| view! {
                                <div class="client-card">
                                    <div class="client-card__top">
                                        {icon("user")}
                                        <strong>{c.name.clone()}</strong>
                                    </div>
                                    <ul class="client-card__contacts">
                                        {c.email.clone().map(|email| view! {
                                            <li>{icon("mail")} <span>{email}</span></li>
                                        })}
                                        {c.phone.clone().map(|phone| view! {
                                            <li>{icon("phone")} <span>{phone}</span></li>
                                        })}
                                        <li>{icon("map-pin")} <span>{c.address.clone()}</span></li>
                                    </ul>
                                </div>
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
