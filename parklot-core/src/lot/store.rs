//! Lock-free slot store
//!
//! Every field lives in its own atomic cell. Reads copy one field at a
//! time and writes store one field at a time; nothing ever holds a lock,
//! so a renderer walking the table never waits for a writer.
//!
//! A logical transition that touches two fields (a reservation sets the
//! start time and the status) is two independent stores. Writers store the
//! timestamp first and the status last with `Release`; readers load the
//! status with `Acquire` before the timestamp. A reader that observes
//! `Reserved` therefore also observes the start of that reservation. A
//! reader between the two stores sees the old status with the new
//! timestamp, which is harmless because the timestamp is ignored unless
//! the slot is reserved.
//!
//! Read-modify-write sequences (toggle, expiry) are not atomic as a whole.
//! A racing writer can lose an update; the physical lot is only eventually
//! consistent with the controller anyway.

use portable_atomic::{AtomicU32, AtomicU8, AtomicUsize, Ordering};

use super::slot::{Slot, SlotStatus};
use crate::config::{LotConfig, MAX_SLOTS};
use crate::time::Millis;

/// Shared storage for one slot
struct SlotCell {
    status: AtomicU8,
    reservation_started_at: AtomicU32,
    is_accessible: bool,
}

impl SlotCell {
    fn new(is_accessible: bool) -> Self {
        Self {
            status: AtomicU8::new(SlotStatus::Free.to_raw()),
            reservation_started_at: AtomicU32::new(0),
            is_accessible,
        }
    }

    fn status(&self) -> SlotStatus {
        SlotStatus::from_raw(self.status.load(Ordering::Acquire))
    }
}

/// The parking lot: all slots plus the selection cursor
///
/// Indices are 0-based (`index = id - 1`). Any operation given an index
/// outside the lot does nothing.
pub struct Lot {
    cells: [SlotCell; MAX_SLOTS],
    len: usize,
    selected: AtomicUsize,
}

impl Lot {
    /// Create a lot with every slot free and the cursor on the first slot
    ///
    /// Slot count and accessibility come from the configuration and never
    /// change afterwards. A slot count above `MAX_SLOTS` is clamped and a
    /// count of zero is raised to one; run [`LotConfig::validate`] first.
    pub fn new(config: &LotConfig) -> Self {
        Self {
            cells: core::array::from_fn(|index| SlotCell::new(config.is_accessible(index))),
            len: config.len().clamp(1, MAX_SLOTS),
            selected: AtomicUsize::new(0),
        }
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.len
    }

    /// A lot always has at least one slot
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if `index` addresses a slot
    pub fn is_valid(&self, index: usize) -> bool {
        index < self.len
    }

    fn cell(&self, index: usize) -> Option<&SlotCell> {
        self.cells[..self.len].get(index)
    }

    /// Snapshot of the slot at `index`
    pub fn read_slot(&self, index: usize) -> Option<Slot> {
        let cell = self.cell(index)?;

        // Status first; see module docs for the ordering contract
        let status = cell.status();
        let reservation_started_at = cell.reservation_started_at.load(Ordering::Relaxed);

        Some(Slot {
            id: index as u8 + 1,
            status,
            reservation_started_at,
            is_accessible: cell.is_accessible,
        })
    }

    /// Status of the slot at `index`
    pub fn status(&self, index: usize) -> Option<SlotStatus> {
        self.cell(index).map(SlotCell::status)
    }

    /// Snapshots of every slot, in order
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.len).filter_map(|index| self.read_slot(index))
    }

    /// Set the status of the slot at `index`
    pub fn write_status(&self, index: usize, status: SlotStatus) {
        if let Some(cell) = self.cell(index) {
            cell.status.store(status.to_raw(), Ordering::Release);
        }
    }

    /// Set the reservation start of the slot at `index`
    pub fn write_reservation_start(&self, index: usize, at: Millis) {
        if let Some(cell) = self.cell(index) {
            cell.reservation_started_at.store(at, Ordering::Relaxed);
        }
    }

    /// Reserve the slot at `index` starting `now`
    ///
    /// Re-reserving a reserved slot restarts its countdown. Returns false
    /// for an invalid index.
    pub fn reserve(&self, index: usize, now: Millis) -> bool {
        if !self.is_valid(index) {
            return false;
        }

        // Timestamp before status
        self.write_reservation_start(index, now);
        self.write_status(index, SlotStatus::Reserved);
        true
    }

    /// Toggle occupancy of the slot at `index`
    ///
    /// Returns the new status, or None for an invalid index.
    pub fn toggle_occupancy(&self, index: usize) -> Option<SlotStatus> {
        let next = self.status(index)?.toggled();
        self.write_status(index, next);
        Some(next)
    }

    /// Index of the selected slot
    pub fn selected_index(&self) -> usize {
        self.selected.load(Ordering::Relaxed).min(self.len - 1)
    }

    /// Move the cursor by `delta`, clamped to the lot
    ///
    /// Moving past either end is a no-op. Returns the new index.
    pub fn move_selection(&self, delta: isize) -> usize {
        let last = self.len - 1;
        let result = self
            .selected
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                let next = current.saturating_add_signed(delta).min(last);
                (next != current).then_some(next)
            });

        match result {
            Ok(previous) => previous.saturating_add_signed(delta).min(last),
            Err(unchanged) => unchanged,
        }
    }
}
