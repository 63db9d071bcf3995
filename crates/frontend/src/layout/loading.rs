use leptos::prelude::*;

/// Full-screen splash shown while the persisted session is being restored.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
