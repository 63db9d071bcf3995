use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Email/password pair for the password grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload. `full_name` travels in the user metadata so the
/// backend trigger can seed the profile row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub data: SignUpMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpMetadata {
    pub full_name: String,
}

/// Identity as returned by the session provider. Extra provider fields are
/// ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
}

/// An authenticated session: bearer tokens plus the identity they belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: AuthUser,
}
