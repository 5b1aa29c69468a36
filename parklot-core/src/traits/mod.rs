//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the board: buttons, the LED matrix and the text display.

pub mod display;
pub mod input;
pub mod pixel;

pub use display::{DisplayError, TextDisplay};
pub use input::{InputId, InputSource};
pub use pixel::{OutputError, PixelOutput};
