//! Reservation expiry

pub mod monitor;

pub use monitor::ExpiryMonitor;
