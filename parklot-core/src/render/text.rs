//! Text display renderer
//!
//! Layout on a 128x64 panel with a 6x9 font:
//!
//! ```text
//! Parking Lot
//! > Slot 1 Free
//!   Slot 2 Reserved
//!   Slot 3 Occupied
//!   Slot 4 Free (A)
//! ```

use core::fmt::Write;

use heapless::{String, Vec};

use super::cache::RenderCache;
use crate::config::MAX_SLOTS;
use crate::lot::{Lot, Slot};
use crate::traits::{DisplayError, TextDisplay};

/// Header drawn on the first line
pub const HEADER: &str = "Parking Lot";

/// Vertical distance between lines in pixels
pub const LINE_PITCH: u8 = 9;

/// Longest line: "> Slot 6 Occupied (A)"
const LINE_CAPACITY: usize = 24;

/// Diffing renderer for the text display
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    cache: RenderCache,
    selected: Option<usize>,
}

impl TextRenderer {
    /// Create a renderer that draws on its first pass
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one render pass
    ///
    /// Redraws the whole screen if any slot or the cursor changed.
    /// Returns `Ok(true)` if the display was committed.
    ///
    /// The lot is read once per pass; the cache and the screen always
    /// agree on that one snapshot.
    pub fn render<D: TextDisplay>(&mut self, lot: &Lot, display: &mut D) -> Result<bool, DisplayError> {
        let selected = lot.selected_index();
        let slots: Vec<Slot, MAX_SLOTS> = lot.slots().collect();
        let mut dirty = self.selected.replace(selected) != Some(selected);

        // Update every entry, not just up to the first change
        for slot in &slots {
            dirty |= self.cache.update(slot.index(), slot.status);
        }

        if !dirty {
            return Ok(false);
        }

        display.clear();
        display.draw_line(HEADER, 0, 0);

        let mut y = LINE_PITCH;
        for slot in &slots {
            let line = format_line(slot, slot.index() == selected);
            display.draw_line(&line, 0, y);
            y = y.saturating_add(LINE_PITCH);
        }

        display.commit().inspect_err(|_| self.invalidate())?;
        Ok(true)
    }

    fn invalidate(&mut self) {
        self.cache.invalidate();
        self.selected = None;
    }
}

/// Text of one slot line
fn format_line(slot: &Slot, selected: bool) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    let marker = if selected { "> " } else { "  " };
    let accessible = if slot.is_accessible { " (A)" } else { "" };

    // Cannot overflow: ids are single digits and labels are short
    let _ = write!(line, "{}Slot {} {}{}", marker, slot.id, slot.status.label(), accessible);
    line
}

#[cfg(test)]
mod tests {
    use std::string::{String as StdString, ToString};
    use std::vec::Vec;

    use super::*;
    use crate::config::LotConfig;
    use crate::lot::SlotStatus;

    #[derive(Default)]
    struct FakeDisplay {
        lines: Vec<(StdString, u8, u8)>,
        clears: usize,
        commits: usize,
        fail_next_commit: bool,
    }

    impl TextDisplay for FakeDisplay {
        fn clear(&mut self) {
            self.clears += 1;
            self.lines.clear();
        }

        fn draw_line(&mut self, text: &str, x: u8, y: u8) {
            self.lines.push((text.to_string(), x, y));
        }

        fn commit(&mut self) -> Result<(), DisplayError> {
            if core::mem::take(&mut self.fail_next_commit) {
                return Err(DisplayError::Bus);
            }
            self.commits += 1;
            Ok(())
        }
    }

    fn setup() -> (Lot, TextRenderer, FakeDisplay) {
        (
            Lot::new(&LotConfig::reference()),
            TextRenderer::new(),
            FakeDisplay::default(),
        )
    }

    fn texts(display: &FakeDisplay) -> Vec<&str> {
        display.lines.iter().map(|(text, _, _)| text.as_str()).collect()
    }

    #[test]
    fn test_first_pass_draws_screen() {
        let (lot, mut renderer, mut display) = setup();

        assert_eq!(renderer.render(&lot, &mut display), Ok(true));
        assert_eq!(display.clears, 1);
        assert_eq!(display.commits, 1);
        assert_eq!(
            texts(&display),
            [
                "Parking Lot",
                "> Slot 1 Free",
                "  Slot 2 Free",
                "  Slot 3 Free",
                "  Slot 4 Free (A)",
            ]
        );
        let rows: Vec<u8> = display.lines.iter().map(|&(_, _, y)| y).collect();
        assert_eq!(rows, [0, 9, 18, 27, 36]);
    }

    #[test]
    fn test_idle_pass_commits_nothing() {
        let (lot, mut renderer, mut display) = setup();
        renderer.render(&lot, &mut display).unwrap();

        assert_eq!(renderer.render(&lot, &mut display), Ok(false));
        assert_eq!(display.clears, 1);
        assert_eq!(display.commits, 1);
    }

    #[test]
    fn test_status_change_redraws_once() {
        let (lot, mut renderer, mut display) = setup();
        renderer.render(&lot, &mut display).unwrap();

        lot.write_status(2, SlotStatus::Occupied);
        lot.reserve(1, 0);
        assert_eq!(renderer.render(&lot, &mut display), Ok(true));
        assert_eq!(display.commits, 2);
        assert_eq!(texts(&display)[2], "  Slot 2 Reserved");
        assert_eq!(texts(&display)[3], "  Slot 3 Occupied");

        assert_eq!(renderer.render(&lot, &mut display), Ok(false));
    }

    #[test]
    fn test_cursor_move_redraws() {
        let (lot, mut renderer, mut display) = setup();
        renderer.render(&lot, &mut display).unwrap();

        lot.move_selection(1);
        assert_eq!(renderer.render(&lot, &mut display), Ok(true));
        assert_eq!(texts(&display)[1], "  Slot 1 Free");
        assert_eq!(texts(&display)[2], "> Slot 2 Free");
    }

    #[test]
    fn test_commit_error_forces_redraw() {
        let (lot, mut renderer, mut display) = setup();
        display.fail_next_commit = true;

        assert_eq!(renderer.render(&lot, &mut display), Err(DisplayError::Bus));
        assert_eq!(renderer.render(&lot, &mut display), Ok(true));
        assert_eq!(display.commits, 1);
    }

    /// Display that lets a writer slip in while the screen is being drawn
    struct RacingDisplay<'a> {
        inner: FakeDisplay,
        lot: &'a Lot,
        write_on_clear: Option<(usize, SlotStatus)>,
    }

    impl TextDisplay for RacingDisplay<'_> {
        fn clear(&mut self) {
            if let Some((index, status)) = self.write_on_clear.take() {
                self.lot.write_status(index, status);
            }
            self.inner.clear();
        }

        fn draw_line(&mut self, text: &str, x: u8, y: u8) {
            self.inner.draw_line(text, x, y);
        }

        fn commit(&mut self) -> Result<(), DisplayError> {
            self.inner.commit()
        }
    }

    #[test]
    fn test_write_during_draw_is_not_lost() {
        let lot = Lot::new(&LotConfig::reference());
        let mut renderer = TextRenderer::new();
        let mut display = RacingDisplay {
            inner: FakeDisplay::default(),
            lot: &lot,
            write_on_clear: None,
        };
        renderer.render(&lot, &mut display).unwrap();

        lot.write_status(0, SlotStatus::Occupied);
        display.write_on_clear = Some((0, SlotStatus::Reserved));
        assert_eq!(renderer.render(&lot, &mut display), Ok(true));
        assert_eq!(texts(&display.inner)[1], "> Slot 1 Occupied");

        // The write that raced the draw shows up on the next pass
        assert_eq!(renderer.render(&lot, &mut display), Ok(true));
        assert_eq!(texts(&display.inner)[1], "> Slot 1 Reserved");

        lot.write_status(0, SlotStatus::Occupied);
        for _ in 0..5 {
            renderer.render(&lot, &mut display).unwrap();
        }
        assert_eq!(texts(&display.inner)[1], "> Slot 1 Occupied");
        assert_eq!(display.inner.commits, 4);
    }

    #[test]
    fn test_longest_line_fits() {
        let slot = Slot {
            id: 6,
            status: SlotStatus::Occupied,
            reservation_started_at: 0,
            is_accessible: true,
        };
        assert_eq!(format_line(&slot, true), "> Slot 6 Occupied (A)");
    }
}
