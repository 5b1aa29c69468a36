//! Addressable LED output

use smart_leds::RGB8;

/// Errors reported by a pixel output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// The LED chain could not be written
    Transfer,
}

/// Trait for an addressable LED matrix
///
/// Pixels are staged with [`set_pixel`](Self::set_pixel) and become
/// visible on [`flush`](Self::flush).
pub trait PixelOutput {
    /// Stage a color for the pixel at a logical position
    ///
    /// Positions outside the matrix are ignored.
    fn set_pixel(&mut self, position: u8, color: RGB8);

    /// Push all staged pixels to the LEDs
    fn flush(&mut self) -> Result<(), OutputError>;
}
