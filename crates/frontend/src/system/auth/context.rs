//! Application-wide authentication state.
//!
//! `AuthProvider` restores a persisted session once on startup, then exposes
//! the state through context. Until that restore finishes `loading` is true
//! and the router shows the splash screen instead of guessing a route.

use contracts::domain::Profile;
use contracts::system::auth::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use super::{api, storage};
use crate::shared::data::client;

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub profile: Option<Profile>,
    pub loading: bool,
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        session: None,
        profile: None,
        loading: true,
    });
    provide_context((auth_state, set_auth_state));

    Effect::new(move |_| {
        spawn_local(async move {
            restore_session(set_auth_state).await;
        });
    });

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    use_context().expect("use_auth called outside of AuthProvider")
}

/// Try the stored access token first, then fall back to a refresh. Either
/// way `loading` ends up false.
async fn restore_session(set_auth_state: WriteSignal<AuthState>) {
    let Some(access_token) = storage::get_access_token() else {
        set_auth_state.update(|s| s.loading = false);
        return;
    };

    match api::get_user(&access_token).await {
        Ok(user) => {
            let refresh_token = storage::get_refresh_token().unwrap_or_default();
            let session = Session {
                access_token,
                refresh_token,
                user,
            };
            let profile = load_profile(session.user.id).await;
            set_auth_state.set(AuthState {
                session: Some(session),
                profile,
                loading: false,
            });
        }
        Err(err) => {
            log::debug!("Stored access token rejected: {}", err);
            try_refresh(set_auth_state).await;
        }
    }
}

async fn try_refresh(set_auth_state: WriteSignal<AuthState>) {
    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        set_auth_state.update(|s| s.loading = false);
        return;
    };

    match api::refresh_session(&refresh_token).await {
        Ok(session) => {
            storage::save_tokens(&session.access_token, &session.refresh_token);
            let profile = load_profile(session.user.id).await;
            set_auth_state.set(AuthState {
                session: Some(session),
                profile,
                loading: false,
            });
        }
        Err(err) => {
            log::debug!("Session refresh failed: {}", err);
            storage::clear_tokens();
            set_auth_state.set(AuthState {
                session: None,
                profile: None,
                loading: false,
            });
        }
    }
}

/// A missing profile row is tolerated; the sidebar falls back to the
/// account email in that case.
pub async fn load_profile(user_id: Uuid) -> Option<Profile> {
    match client::table("profiles")
        .eq("id", &user_id.to_string())
        .fetch_maybe_single::<Profile>()
        .await
    {
        Ok(profile) => profile,
        Err(err) => {
            log::warn!("Failed to load profile: {}", err);
            None
        }
    }
}

/// Persist tokens and publish the session after a successful login or
/// confirmed registration.
pub async fn complete_sign_in(set_auth_state: WriteSignal<AuthState>, session: Session) {
    storage::save_tokens(&session.access_token, &session.refresh_token);
    let profile = load_profile(session.user.id).await;
    set_auth_state.set(AuthState {
        session: Some(session),
        profile,
        loading: false,
    });
}

/// Local state is dropped immediately; server-side revocation runs in the
/// background and only logs on failure.
pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    let access_token = storage::get_access_token();
    storage::clear_tokens();
    set_auth_state.set(AuthState {
        session: None,
        profile: None,
        loading: false,
    });

    if let Some(token) = access_token {
        spawn_local(async move {
            if let Err(err) = api::sign_out(&token).await {
                log::warn!("{}", err);
            }
        });
    }
}
