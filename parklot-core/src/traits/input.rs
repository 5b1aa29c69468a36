//! Raw button inputs

/// Logical input sources
///
/// Declared in debounce priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputId {
    /// Move the selection one slot towards the start
    MoveLeft,
    /// Move the selection one slot towards the end
    MoveRight,
    /// Toggle occupancy of the selected slot
    Toggle,
}

impl InputId {
    /// Every input, highest priority first
    pub const ALL: [InputId; 3] = [InputId::MoveLeft, InputId::MoveRight, InputId::Toggle];

    /// Position in [`ALL`](Self::ALL)
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Source of raw pressed states
///
/// Implementations report the electrical level only; debouncing happens
/// in [`InputDebouncer`](crate::input::InputDebouncer).
pub trait InputSource {
    /// Check if the input is currently pressed
    ///
    /// Takes `&mut self` because reading a pin may require mutable access.
    fn is_active(&mut self, input: InputId) -> bool;
}
