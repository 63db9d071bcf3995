//! Data-access facade.
//!
//! Every backend read and the single notification write go through
//! [`client`]; views never build URLs or headers themselves.

pub mod client;
pub mod config;
