//! Slot view model for the remote page

use parklot_protocol::SlotView;

use crate::lot::{Slot, SlotStatus};

/// Build the page view of a slot
pub fn slot_view(slot: &Slot) -> SlotView {
    let (class, label) = match slot.status {
        SlotStatus::Free => ("available", "Available"),
        SlotStatus::Occupied => ("occupied", "Occupied"),
        SlotStatus::Reserved => ("reserved", "Reserved"),
    };

    SlotView {
        id: slot.id,
        accessible: slot.is_accessible,
        class,
        label,
        // Only a free slot can be reserved
        disabled: slot.status != SlotStatus::Free,
    }
}
