use leptos::prelude::*;

use crate::shared::icons::icon;

/// Summary tile for the dashboard grid. A `None` value means the figure is
/// still loading (or failed to load) and renders as an em-dash placeholder.
#[component]
pub fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] value: Signal<Option<String>>,
    #[prop(optional, into)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "—".to_string())}
                </span>
                {hint.map(|h| view! { <span class="stat-card__hint">{h}</span> })}
            </div>
        </div>
    }
}
