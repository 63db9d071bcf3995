//! Settings: profile details plus locally persisted route parameters.

use contracts::system::preferences::RouteParameters;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::Checkbox;
use crate::system::auth::context;

const PARAMETERS_KEY: &str = "logisync_route_parameters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Profile,
    Security,
    Notifications,
    Parameters,
}

const TABS: [(SettingsTab, &str); 4] = [
    (SettingsTab::Profile, "Profile"),
    (SettingsTab::Security, "Security"),
    (SettingsTab::Notifications, "Notifications"),
    (SettingsTab::Parameters, "Route Parameters"),
];

fn load_parameters() -> RouteParameters {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(PARAMETERS_KEY).ok().flatten());
    match stored {
        Some(json) => RouteParameters::from_json_str(&json).unwrap_or_else(|err| {
            log::warn!("Stored route parameters are invalid: {}", err);
            RouteParameters::default()
        }),
        None => RouteParameters::default(),
    }
}

fn store_parameters(parameters: &RouteParameters) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(PARAMETERS_KEY, &parameters.to_json_string());
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (tab, set_tab) = signal(SettingsTab::Profile);

    let tab_button = move |target: SettingsTab, label: &'static str| {
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
                <h1>"Settings"</h1>
            </header>

            <Flex gap=FlexGap::Small>
                {TABS
                    .iter()
                    .map(|&(target, label)| tab_button(target, label))
                    .collect_view()}
            </Flex>

            {move || match tab.get() {
                SettingsTab::Profile => view! { <ProfileTab/> }.into_any(),
                SettingsTab::Security => view! { <SecurityTab/> }.into_any(),
                SettingsTab::Notifications => view! { <NotificationsTab/> }.into_any(),
                SettingsTab::Parameters => view! { <ParametersTab/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProfileTab() -> impl IntoView {
    let (auth_state, _) = context::use_auth();
    let profile = auth_state.get_untracked().profile;

    let full_name = RwSignal::new(
        profile
            .as_ref()
            .map(|p| p.full_name.clone())
            .unwrap_or_default(),
    );
    let phone = RwSignal::new(
        profile
            .as_ref()
            .and_then(|p| p.phone.clone())
            .unwrap_or_default(),
    );
    let role = profile.as_ref().map(|p| p.role.label()).unwrap_or("");

    view! {
        <section class="panel settings-form">
            <h2>"Profile"</h2>
            <Label>"Full name"</Label>
            <Input value=full_name/>
            <Label>"Phone"</Label>
            <Input value=phone input_type=InputType::Tel/>
            <Label>"Role"</Label>
            <p class="muted">{role}</p>
            <p class="muted">"Profile editing is managed by your administrator."</p>
        </section>
    }
}

#[component]
fn SecurityTab() -> impl IntoView {
    view! {
        <section class="panel settings-form">
            <h2>"Security"</h2>
            <p class="muted">
                "Password changes go through the email reset flow. Contact your \
                 administrator to rotate credentials."
            </p>
        </section>
    }
}

#[component]
fn NotificationsTab() -> impl IntoView {
    let email_alerts = RwSignal::new(true);
    let delay_alerts = RwSignal::new(true);
    let maintenance_alerts = RwSignal::new(false);

    view! {
        <section class="panel settings-form">
            <h2>"Notification Preferences"</h2>
            <Checkbox checked=email_alerts label="Email alerts"/>
            <Checkbox checked=delay_alerts label="Delivery delay alerts"/>
            <Checkbox checked=maintenance_alerts label="Vehicle maintenance reminders"/>
            <p class="muted">"Preferences apply to this browser only."</p>
        </section>
    }
}

/// Planning defaults used when estimating new routes. Stored locally; these
/// are per-dispatcher preferences, not shared configuration.
#[component]
fn ParametersTab() -> impl IntoView {
    let initial = load_parameters();
    let cost_per_km = RwSignal::new(format!("{}", initial.cost_per_km));
    let average_speed = RwSignal::new(initial.average_speed_kmh.to_string());
    let stop_minutes = RwSignal::new(initial.average_stop_minutes.to_string());
    let (saved, set_saved) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let on_save = move |_| {
        set_error.set(None);
        let parsed = (
            cost_per_km.get_untracked().parse::<f64>(),
            average_speed.get_untracked().parse::<u32>(),
            stop_minutes.get_untracked().parse::<u32>(),
        );
        let (Ok(cost), Ok(speed), Ok(stop)) = parsed else {
            set_error.set(Some("All parameters must be numeric".to_string()));
            return;
        };
        store_parameters(&RouteParameters {
            cost_per_km: cost,
            average_speed_kmh: speed,
            average_stop_minutes: stop,
        });
        set_saved.set(true);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2500).await;
            set_saved.set(false);
        });
    };

    view! {
        <section class="panel settings-form">
            <h2>"Route Parameters"</h2>
            {move || error.get().map(|err| view! { <div class="auth-form__error">{err}</div> })}
            <Label>"Cost per km ($)"</Label>
            <Input value=cost_per_km/>
            <Label>"Average speed (km/h)"</Label>
            <Input value=average_speed/>
            <Label>"Average stop time (min)"</Label>
            <Input value=stop_minutes/>
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <Button appearance=ButtonAppearance::Primary on_click=on_save>
                    "Save"
                </Button>
                <Show when=move || saved.get()>
                    <span class="badge badge--success">"Saved"</span>
                </Show>
            </Flex>
        </section>
    }
}
