//! Entity records as the backend returns them.
//!
//! Lifecycle (create/update/delete) is owned entirely by the backend; the
//! application reads these verbatim and never derives persistent state.
//! Timestamps stay as ISO-8601 strings and are formatted only for display.

mod client;
mod delivery;
mod driver;
mod notification;
mod profile;
mod route;
mod vehicle;

pub use client::Client;
pub use delivery::Delivery;
pub use driver::Driver;
pub use notification::Notification;
pub use profile::Profile;
pub use route::Route;
pub use vehicle::Vehicle;
