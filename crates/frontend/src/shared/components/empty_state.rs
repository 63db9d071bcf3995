use leptos::prelude::*;

use crate::shared::icons::icon;

/// Placeholder shown when a list query returns no rows.
#[component]
pub fn EmptyState(
    icon_name: &'static str,
    title: &'static str,
    #[prop(optional, into)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon(icon_name)}</div>
            <p class="empty-state__title">{title}</p>
            {hint.map(|h| view! { <p class="empty-state__hint">{h}</p> })}
        </div>
    }
}
