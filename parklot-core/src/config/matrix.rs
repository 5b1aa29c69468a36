//! LED matrix configuration
//!
//! A [`MatrixLayout`] assigns each slot a region of pixel positions; a
//! [`Palette`] holds the color for each rendered slot state.

use smart_leds::RGB8;

use super::types::MAX_SLOTS;

/// Pixel regions of the slots on the matrix
///
/// `regions[i]` lists the pixel positions lit for slot index `i`. Positions
/// are logical (row-major); the pixel output maps them to its wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixLayout {
    /// Matrix width in pixels
    pub width: u8,
    /// Matrix height in pixels
    pub height: u8,
    /// Region per slot index
    pub regions: &'static [&'static [u8]],
}

impl MatrixLayout {
    /// 5x5 matrix with one 2x2 block per corner
    ///
    /// ```text
    /// 1 1 . 2 2
    /// 1 1 . 2 2
    /// . . . . .
    /// 3 3 . 4 4
    /// 3 3 . 4 4
    /// ```
    pub const CORNERS_5X5: Self = Self {
        width: 5,
        height: 5,
        regions: &[
            &[0, 1, 5, 6],
            &[3, 4, 8, 9],
            &[15, 16, 20, 21],
            &[18, 19, 23, 24],
        ],
    };

    /// 5x5 matrix with one full row per slot, for lots of up to five slots
    pub const ROWS_5X5: Self = Self {
        width: 5,
        height: 5,
        regions: &[
            &[0, 1, 2, 3, 4],
            &[5, 6, 7, 8, 9],
            &[10, 11, 12, 13, 14],
            &[15, 16, 17, 18, 19],
            &[20, 21, 22, 23, 24],
        ],
    };

    /// Total number of pixels
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Pixel positions of the slot at `index` (empty if it has no region)
    pub fn region(&self, index: usize) -> &'static [u8] {
        self.regions.get(index).copied().unwrap_or(&[])
    }

    /// Check that the layout covers `slot_count` slots inside the matrix
    pub fn covers(&self, slot_count: usize) -> bool {
        slot_count <= self.regions.len()
            && slot_count <= MAX_SLOTS
            && self.regions[..slot_count]
                .iter()
                .all(|region| region.iter().all(|&p| (p as usize) < self.pixel_count()))
    }
}

impl Default for MatrixLayout {
    fn default() -> Self {
        Self::CORNERS_5X5
    }
}

/// Colors of the rendered slot states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Free slot reserved for drivers with disabilities
    pub free_accessible: RGB8,
    /// Free slot
    pub free: RGB8,
    /// Occupied slot
    pub occupied: RGB8,
    /// Reserved slot
    pub reserved: RGB8,
}

impl Default for Palette {
    /// Dimmed primaries; a bare WS2812 matrix at full brightness is blinding
    fn default() -> Self {
        Self {
            free_accessible: RGB8::new(0, 0, 40),
            free: RGB8::new(0, 40, 0),
            occupied: RGB8::new(40, 0, 0),
            reserved: RGB8::new(40, 30, 0),
        }
    }
}
