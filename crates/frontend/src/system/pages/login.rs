//! Sign-in / sign-up screen shown whenever no session exists.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context};

#[component]
pub fn AuthPage() -> impl IntoView {
    let (show_register, set_show_register) = signal(false);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1>"LogiSync"</h1>
                    <p>"Logistics operations dashboard"</p>
                </div>
                <Show
                    when=move || show_register.get()
                    fallback=move || view! { <LoginForm/> }
                >
                    <RegisterForm/>
                </Show>
                <div class="auth-card__footer">
                    <Show
                        when=move || show_register.get()
                        fallback=move || view! {
                            <button
                                class="link-button"
                                on:click=move |_| set_show_register.set(true)
                            >
                                "Don't have an account? Sign up"
                            </button>
                        }
                    >
                        <button
                            class="link-button"
                            on:click=move |_| set_show_register.set(false)
                        >
                            "Already have an account? Sign in"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let (_, set_auth_state) = context::use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_is_loading.set(true);

        let email = email.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            match api::sign_in(&email, &password).await {
                Ok(session) => {
                    context::complete_sign_in(set_auth_state, session).await;
                }
                Err(err) => {
                    set_error.set(Some(err));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            {move || error.get().map(|err| view! { <div class="auth-form__error">{err}</div> })}
            <label>
                "Email"
                <input
                    type="email"
                    required
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    required
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="auth-form__submit" disabled=is_loading>
                {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let (_, set_auth_state) = context::use_auth();

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_notice.set(None);
        set_is_loading.set(true);

        let full_name = full_name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            match api::sign_up(&email, &password, &full_name).await {
                // Confirmation disabled: the project signed us straight in.
                Ok(Some(session)) => {
                    context::complete_sign_in(set_auth_state, session).await;
                }
                Ok(None) => {
                    set_notice.set(Some(
                        "Account created. Check your email to confirm, then sign in.".to_string(),
                    ));
                    set_is_loading.set(false);
                }
                Err(err) => {
                    set_error.set(Some(err));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            {move || error.get().map(|err| view! { <div class="auth-form__error">{err}</div> })}
            {move || notice.get().map(|msg| view! { <div class="auth-form__notice">{msg}</div> })}
            <label>
                "Full name"
                <input
                    type="text"
                    required
                    prop:value=full_name
                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    required
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    required
                    minlength="6"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="auth-form__submit" disabled=is_loading>
                {move || if is_loading.get() { "Creating account..." } else { "Create account" }}
            </button>
        </form>
    }
}
