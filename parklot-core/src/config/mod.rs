//! Configuration types
//!
//! Board-agnostic configuration for the lot, its timing, and the LED
//! matrix. Configuration is compiled in; nothing is persisted.

pub mod matrix;
pub mod types;

pub use matrix::{MatrixLayout, Palette};
pub use types::*;
