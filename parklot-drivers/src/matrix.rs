//! WS2812 matrix frame buffer
//!
//! Pixels are addressed by logical position: row-major, top-left first.
//! The frame stores them in chain order (the order the LEDs are wired),
//! ready to be clocked out by the PIO program.
//!
//! `flush` does not touch the LEDs itself. It latches the frame; the
//! firmware takes the latched frame and writes it out asynchronously.

use parklot_core::traits::{OutputError, PixelOutput};
use smart_leds::RGB8;

/// How the LED chain runs through the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Wiring {
    /// Every row left to right, top row first
    Linear,
    /// Rows alternate direction, top row first, left to right
    Serpentine,
    /// Serpentine starting at the bottom-right corner (BitDogLab carrier)
    ReversedSerpentine,
}

/// Frame buffer for an N-pixel matrix
pub struct MatrixFrame<const N: usize> {
    pixels: [RGB8; N],
    width: u8,
    wiring: Wiring,
    latched: bool,
}

impl<const N: usize> MatrixFrame<N> {
    /// Create a dark frame for a matrix `width` pixels wide
    pub fn new(width: u8, wiring: Wiring) -> Self {
        Self {
            pixels: [RGB8::default(); N],
            width: width.max(1),
            wiring,
            latched: false,
        }
    }

    /// Chain index of a logical position
    pub fn chain_index(&self, position: u8) -> Option<usize> {
        let position = position as usize;
        if position >= N {
            return None;
        }

        let width = self.width as usize;
        let (row, col) = (position / width, position % width);
        let serpentine = if row % 2 == 1 {
            row * width + (width - 1 - col)
        } else {
            position
        };

        let index = match self.wiring {
            Wiring::Linear => position,
            Wiring::Serpentine => serpentine,
            Wiring::ReversedSerpentine => (N - 1).checked_sub(serpentine)?,
        };

        (index < N).then_some(index)
    }

    /// Pixels in chain order
    pub fn pixels(&self) -> &[RGB8; N] {
        &self.pixels
    }

    /// Take the latched frame, if a flush happened since the last take
    pub fn take_latched(&mut self) -> Option<&[RGB8; N]> {
        if !core::mem::take(&mut self.latched) {
            return None;
        }
        Some(&self.pixels)
    }
}

impl<const N: usize> PixelOutput for MatrixFrame<N> {
    fn set_pixel(&mut self, position: u8, color: RGB8) {
        if let Some(index) = self.chain_index(position) {
            self.pixels[index] = color;
        }
    }

    fn flush(&mut self) -> Result<(), OutputError> {
        // A latched frame nobody took yet gets superseded; the pixels
        // already hold the newer state
        self.latched = true;
        Ok(())
    }
}
