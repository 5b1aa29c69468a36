//! Diffing renderers
//!
//! Each renderer remembers what it last put on its device and only talks
//! to the device when the lot changed since. A pass with nothing to do
//! touches no hardware.

pub mod cache;
pub mod matrix;
pub mod text;

pub use cache::RenderCache;
pub use matrix::MatrixRenderer;
pub use text::TextRenderer;
