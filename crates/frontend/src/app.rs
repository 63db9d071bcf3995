//! Application shell: session gate, router and the main layout.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::layout::loading::LoadingScreen;
use crate::layout::sidebar::Sidebar;
use crate::system::auth::context::{self, AuthProvider};
use crate::system::pages::login::AuthPage;
use crate::views;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <AppRoutes/>
        </AuthProvider>
    }
}

/// Three-way gate: splash while the session restores, the auth screen when
/// there is none, the full layout otherwise.
#[component]
fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = context::use_auth();

    view! {
        <Router>
            <Show
                when=move || !auth_state.get().loading
                fallback=|| view! { <LoadingScreen/> }
            >
                <Show
                    when=move || auth_state.get().session.is_some()
                    fallback=|| view! { <AuthPage/> }
                >
                    <MainLayout/>
                </Show>
            </Show>
        </Router>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar/>
            <main class="app-main">
                <Routes fallback=|| view! { <views::not_found::NotFoundPage/> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path=path!("/dashboard") view=views::dashboard::DashboardPage/>
                    <Route path=path!("/routes") view=views::routes_planning::RoutesPlanningPage/>
                    <Route path=path!("/routes/create") view=views::routes_planning::RouteCreatePage/>
                    <Route path=path!("/deliveries") view=views::deliveries::DeliveriesPage/>
                    <Route path=path!("/fleet") view=views::fleet::FleetPage/>
                    <Route path=path!("/clients") view=views::clients::ClientsPage/>
                    <Route path=path!("/reports") view=views::reports::ReportsPage/>
                    <Route path=path!("/notifications") view=views::notifications::NotificationsPage/>
                    <Route path=path!("/settings") view=views::settings::SettingsPage/>
                </Routes>
            </main>
        </div>
    }
}
