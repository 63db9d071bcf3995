//! Shared data contracts for the LogiSync dashboard.
//!
//! Everything in this crate is WASM-free: entity records as they arrive
//! from the hosted backend, the closed-set status enums, auth DTOs and the
//! pure report/aggregation helpers. The frontend crate renders these; it
//! never defines its own wire types.

pub mod domain;
pub mod enums;
pub mod reports;
pub mod system;
