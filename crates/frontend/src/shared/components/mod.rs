pub mod checkbox;
pub mod empty_state;
pub mod stat_card;
pub mod status_badge;

pub use checkbox::Checkbox;
pub use empty_state::EmptyState;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
