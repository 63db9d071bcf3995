use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found">
            {icon("alert-circle")}
            <h1>"Page not found"</h1>
            <p>"The address you followed does not exist."</p>
            <A href="/dashboard" attr:class="button button--primary">"Back to dashboard"</A>
        </div>
    }
}
