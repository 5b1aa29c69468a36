//! LED matrix renderer
//!
//! Paints each slot's region in the color of its status. Only slots whose
//! status changed are repainted, and the matrix is flushed at most once
//! per pass.

use smart_leds::RGB8;

use super::cache::RenderCache;
use crate::config::{MatrixLayout, Palette};
use crate::lot::{Lot, Slot, SlotStatus};
use crate::traits::{OutputError, PixelOutput};

/// Diffing renderer for the LED matrix
#[derive(Debug, Clone)]
pub struct MatrixRenderer {
    layout: MatrixLayout,
    palette: Palette,
    cache: RenderCache,
}

impl MatrixRenderer {
    /// Create a renderer that draws every slot on its first pass
    pub fn new(layout: MatrixLayout, palette: Palette) -> Self {
        Self {
            layout,
            palette,
            cache: RenderCache::new(),
        }
    }

    /// Color of a slot
    pub fn color_for(&self, slot: &Slot) -> RGB8 {
        match slot.status {
            SlotStatus::Free if slot.is_accessible => self.palette.free_accessible,
            SlotStatus::Free => self.palette.free,
            SlotStatus::Occupied => self.palette.occupied,
            SlotStatus::Reserved => self.palette.reserved,
        }
    }

    /// Run one render pass
    ///
    /// Returns `Ok(true)` if the matrix was flushed. On a flush error the
    /// cache is dropped so the next pass repaints everything.
    pub fn render<P: PixelOutput>(&mut self, lot: &Lot, out: &mut P) -> Result<bool, OutputError> {
        let mut dirty = false;

        for slot in lot.slots() {
            if !self.cache.update(slot.index(), slot.status) {
                continue;
            }

            let color = self.color_for(&slot);
            for &position in self.layout.region(slot.index()) {
                out.set_pixel(position, color);
            }
            dirty = true;
        }

        if !dirty {
            return Ok(false);
        }

        out.flush().inspect_err(|_| self.cache.invalidate())?;
        Ok(true)
    }
}
