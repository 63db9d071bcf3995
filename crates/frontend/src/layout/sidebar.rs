//! Navigation rail with the profile footer.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;
use crate::system::auth::context;

struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU: [MenuItem; 8] = [
    MenuItem { path: "/dashboard", label: "Dashboard", icon: "layout-dashboard" },
    MenuItem { path: "/routes", label: "Route Planning", icon: "map" },
    MenuItem { path: "/deliveries", label: "Deliveries", icon: "package" },
    MenuItem { path: "/fleet", label: "Fleet & Drivers", icon: "truck" },
    MenuItem { path: "/clients", label: "Clients", icon: "users" },
    MenuItem { path: "/reports", label: "Reports", icon: "bar-chart" },
    MenuItem { path: "/notifications", label: "Notifications", icon: "bell" },
    MenuItem { path: "/settings", label: "Settings", icon: "settings" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth_state, set_auth_state) = context::use_auth();
    let pathname = use_location().pathname;

    // `/routes` stays highlighted on `/routes/create`
    let is_active = move |path: &'static str| {
        let current = pathname.get();
        current == path || current.starts_with(&format!("{}/", path))
    };

    let display_name = move || {
        let state = auth_state.get();
        state
            .profile
            .as_ref()
            .map(|p| p.full_name.clone())
            .or_else(|| state.session.as_ref().and_then(|s| s.user.email.clone()))
            .unwrap_or_else(|| "Unknown user".to_string())
    };
    let initial = move || {
        auth_state
            .get()
            .profile
            .as_ref()
            .map(|p| p.initial())
            .unwrap_or_else(|| "?".to_string())
    };
    let role_label = move || {
        auth_state
            .get()
            .profile
            .as_ref()
            .map(|p| p.role.label())
            .unwrap_or("")
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">{icon("truck")}</span>
                <span class="sidebar__title">"LogiSync"</span>
            </div>
            <nav class="sidebar__nav">
                {MENU
                    .iter()
                    .map(|item| {
                        let path = item.path;
                        view! {
                            <A
                                href=path
                                attr:class=move || {
                                    if is_active(path) {
                                        "sidebar__link sidebar__link--active"
                                    } else {
                                        "sidebar__link"
                                    }
                                }
                            >
                                <span class="sidebar__link-icon">{icon(item.icon)}</span>
                                <span>{item.label}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">
                <div class="sidebar__avatar">{initial}</div>
                <div class="sidebar__profile">
                    <span class="sidebar__name">{display_name}</span>
                    <span class="sidebar__role">{role_label}</span>
                </div>
                <button
                    class="sidebar__signout"
                    title="Sign out"
                    on:click=move |_| context::sign_out(set_auth_state)
                >
                    {icon("log-out")}
                </button>
            </div>
        </aside>
    }
}
