pub mod clients;
pub mod dashboard;
pub mod deliveries;
pub mod fleet;
pub mod not_found;
pub mod notifications;
pub mod reports;
pub mod routes_planning;
pub mod settings;
