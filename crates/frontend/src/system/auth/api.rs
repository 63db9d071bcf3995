//! Calls against the hosted identity service.

use contracts::system::auth::{AuthUser, Credentials, Session, SignUpMetadata, SignUpRequest};
use gloo_net::http::{Request, Response};

use crate::shared::data::config;

fn auth_url(path: &str) -> String {
    format!("{}/auth/v1/{}", config::backend_url(), path)
}

/// Pull a human-readable message out of an identity-service error body.
/// The service is inconsistent about the field name across endpoints.
async fn error_message(response: Response) -> String {
    let status = response.status();
    if let Ok(body) = response.json::<serde_json::Value>().await {
        for field in ["error_description", "msg", "message", "error"] {
            if let Some(text) = body.get(field).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    format!("Authentication failed (HTTP {})", status)
}

/// Password grant. A success returns a full session with both tokens.
pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    let credentials = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response = Request::post(&auth_url("token?grant_type=password"))
        .header("apikey", config::anon_key())
        .json(&credentials)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<Session>()
        .await
        .map_err(|e| format!("Failed to parse session: {}", e))
}

/// Register a new account. When the project requires email confirmation
/// the response carries no tokens, hence the `Option`.
pub async fn sign_up(
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<Option<Session>, String> {
    let request = SignUpRequest {
        email: email.to_string(),
        password: password.to_string(),
        data: SignUpMetadata {
            full_name: full_name.to_string(),
        },
    };
    let response = Request::post(&auth_url("signup"))
        .header("apikey", config::anon_key())
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let body = response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    if body.get("access_token").is_some() {
        let session: Session = serde_json::from_value(body)
            .map_err(|e| format!("Failed to parse session: {}", e))?;
        Ok(Some(session))
    } else {
        Ok(None)
    }
}

/// Exchange a refresh token for a fresh session.
pub async fn refresh_session(refresh_token: &str) -> Result<Session, String> {
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = Request::post(&auth_url("token?grant_type=refresh_token"))
        .header("apikey", config::anon_key())
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<Session>()
        .await
        .map_err(|e| format!("Failed to parse session: {}", e))
}

/// Validate a stored access token and identify its user.
pub async fn get_user(access_token: &str) -> Result<AuthUser, String> {
    let response = Request::get(&auth_url("user"))
        .header("apikey", config::anon_key())
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<AuthUser>()
        .await
        .map_err(|e| format!("Failed to parse user: {}", e))
}

/// Revoke the session server-side. Local state is cleared regardless of
/// the outcome, so the caller only logs failures.
pub async fn sign_out(access_token: &str) -> Result<(), String> {
    let response = Request::post(&auth_url("logout"))
        .header("apikey", config::anon_key())
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed (HTTP {})", response.status()));
    }
    Ok(())
}
