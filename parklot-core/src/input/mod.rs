//! Button handling
//!
//! The [`InputDebouncer`] turns raw pressed states into at most one
//! [`Action`] per poll; the action is then applied to the lot.

pub mod action;
pub mod debouncer;

pub use action::{Action, Outcome};
pub use debouncer::{DebounceState, InputDebouncer};
