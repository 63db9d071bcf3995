pub mod auth;
pub mod preferences;
