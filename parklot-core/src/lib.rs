//! Board-agnostic core logic for the smart parking lot controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Shared slot store (the lot) and its lock-free access protocol
//! - Input debouncing and the actions buttons trigger
//! - Reservation expiry
//! - Remote control endpoint (request in, page out)
//! - Diffing renderers for the LED matrix and the text display
//! - Hardware abstraction traits and configuration types
//!
//! Every task in the firmware shares one [`lot::Lot`]. Tasks never wait for
//! each other: each one reads and writes single slot fields and tolerates
//! values that are momentarily stale.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod expiry;
pub mod input;
pub mod lot;
pub mod remote;
pub mod render;
pub mod time;
pub mod traits;
