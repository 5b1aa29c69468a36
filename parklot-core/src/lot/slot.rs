//! Slot records

use crate::time::Millis;

/// Occupancy status of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SlotStatus {
    /// Nobody parked, nobody waiting
    #[default]
    Free = 0,
    /// A car is parked
    Occupied = 1,
    /// Held for a remote client until the reservation expires
    Reserved = 2,
}

impl SlotStatus {
    /// Raw value stored in the shared cell
    pub const fn to_raw(self) -> u8 {
        self as u8
    }

    /// Decode a raw cell value
    ///
    /// Only values written by [`to_raw`](Self::to_raw) are ever stored, so
    /// anything else decodes as `Free`.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => SlotStatus::Occupied,
            2 => SlotStatus::Reserved,
            _ => SlotStatus::Free,
        }
    }

    /// Status after the occupancy button is pressed
    ///
    /// A car pulling into a free or reserved slot occupies it; leaving an
    /// occupied slot frees it.
    pub const fn toggled(self) -> Self {
        match self {
            SlotStatus::Free | SlotStatus::Reserved => SlotStatus::Occupied,
            SlotStatus::Occupied => SlotStatus::Free,
        }
    }

    /// Short label for the text display
    pub const fn label(self) -> &'static str {
        match self {
            SlotStatus::Free => "Free",
            SlotStatus::Occupied => "Occupied",
            SlotStatus::Reserved => "Reserved",
        }
    }
}

/// Snapshot of one slot
///
/// Produced by copying each field out of the store. Two fields of the same
/// snapshot may come from different moments; see [`Lot`](super::Lot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slot {
    /// 1-based id, `index + 1`
    pub id: u8,
    /// Current status
    pub status: SlotStatus,
    /// When the current reservation started; meaningful only while `Reserved`
    pub reservation_started_at: Millis,
    /// Reserved for drivers with disabilities (fixed at startup)
    pub is_accessible: bool,
}

impl Slot {
    /// Position of the slot in the lot
    pub const fn index(&self) -> usize {
        self.id as usize - 1
    }

    /// Start of the current reservation, if the slot is reserved
    pub const fn reservation_start(&self) -> Option<Millis> {
        match self.status {
            SlotStatus::Reserved => Some(self.reservation_started_at),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_roundtrip() {
        for status in [SlotStatus::Free, SlotStatus::Occupied, SlotStatus::Reserved] {
            assert_eq!(SlotStatus::from_raw(status.to_raw()), status);
        }
        assert_eq!(SlotStatus::from_raw(0xFF), SlotStatus::Free);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(SlotStatus::Free.toggled(), SlotStatus::Occupied);
        assert_eq!(SlotStatus::Reserved.toggled(), SlotStatus::Occupied);
        assert_eq!(SlotStatus::Occupied.toggled(), SlotStatus::Free);
    }

    #[test]
    fn test_reservation_start_only_when_reserved() {
        let mut slot = Slot {
            id: 2,
            status: SlotStatus::Occupied,
            reservation_started_at: 1234,
            is_accessible: false,
        };
        assert_eq!(slot.index(), 1);
        assert_eq!(slot.reservation_start(), None);

        slot.status = SlotStatus::Reserved;
        assert_eq!(slot.reservation_start(), Some(1234));
    }
}
