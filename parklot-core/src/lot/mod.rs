//! Shared slot store
//!
//! The [`Lot`] is the single source of truth for every task. It is created
//! once at startup and mutated in place for the life of the process.

pub mod slot;
pub mod store;

pub use slot::{Slot, SlotStatus};
pub use store::Lot;
