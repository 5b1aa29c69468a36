//! Text display trait for the status screen

/// Errors that can occur with the text display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed
    Bus,
    /// Display did not respond
    NotResponding,
}

/// Trait for a buffered text display
///
/// Drawing calls only touch the frame buffer; nothing reaches the panel
/// until [`commit`](Self::commit).
pub trait TextDisplay {
    /// Blank the frame buffer
    fn clear(&mut self);

    /// Draw text with its top-left corner at pixel `(x, y)`
    ///
    /// Text running off the panel is clipped.
    fn draw_line(&mut self, text: &str, x: u8, y: u8);

    /// Transfer the frame buffer to the panel
    fn commit(&mut self) -> Result<(), DisplayError>;
}
