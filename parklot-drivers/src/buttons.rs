//! Push button inputs
//!
//! Buttons pull their pin to ground when pressed, against the MCU's
//! internal pull-up.

use embedded_hal::digital::InputPin;
use parklot_core::traits::{InputId, InputSource};

/// The three buttons driving the controller
pub struct ButtonBank<L, R, T> {
    left: L,
    right: R,
    toggle: T,
}

impl<L, R, T> ButtonBank<L, R, T>
where
    L: InputPin,
    R: InputPin,
    T: InputPin,
{
    /// Create a bank from the move-left, move-right and toggle pins
    pub fn new(left: L, right: R, toggle: T) -> Self {
        Self {
            left,
            right,
            toggle,
        }
    }
}

impl<L, R, T> InputSource for ButtonBank<L, R, T>
where
    L: InputPin,
    R: InputPin,
    T: InputPin,
{
    fn is_active(&mut self, input: InputId) -> bool {
        match input {
            InputId::MoveLeft => is_pressed(&mut self.left),
            InputId::MoveRight => is_pressed(&mut self.right),
            InputId::Toggle => is_pressed(&mut self.toggle),
        }
    }
}

/// Active-low read; a pin that cannot be read counts as released
fn is_pressed<P: InputPin>(pin: &mut P) -> bool {
    pin.is_low().unwrap_or(false)
}
