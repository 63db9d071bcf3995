//! Closed-set status enums.
//!
//! Every enum here mirrors a backend check constraint. The backend owns the
//! value set; the UI must never fail on a value it does not recognize, so
//! each enum carries an `#[serde(other)] Unknown` variant and maps it to
//! [`StatusTone::Neutral`].

mod delivery_status;
mod driver_status;
mod notification_kind;
mod route_status;
mod user_role;
mod vehicle_status;

pub use delivery_status::{DeliveryKind, DeliveryStatus};
pub use driver_status::DriverStatus;
pub use notification_kind::NotificationKind;
pub use route_status::RouteStatus;
pub use user_role::UserRole;
pub use vehicle_status::VehicleStatus;

use serde::{Deserialize, Serialize};

/// Visual bucket a status maps onto. The frontend turns this into a badge
/// class; no view ever matches on raw status strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    Success,
    Info,
    Warning,
    Danger,
    Neutral,
}
