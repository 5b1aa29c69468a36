//! Actions triggered by the buttons

use crate::lot::{Lot, SlotStatus};
use crate::traits::InputId;

/// A debounced button action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    MoveLeft,
    MoveRight,
    Toggle,
}

impl From<InputId> for Action {
    fn from(input: InputId) -> Self {
        match input {
            InputId::MoveLeft => Action::MoveLeft,
            InputId::MoveRight => Action::MoveRight,
            InputId::Toggle => Action::Toggle,
        }
    }
}

/// What an applied action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Cursor is now on this index (unchanged at the ends of the lot)
    Selected(usize),
    /// Slot at this index now has this status
    Toggled(usize, SlotStatus),
}

impl Action {
    /// Apply the action to the lot
    pub fn apply(self, lot: &Lot) -> Outcome {
        match self {
            Action::MoveLeft => Outcome::Selected(lot.move_selection(-1)),
            Action::MoveRight => Outcome::Selected(lot.move_selection(1)),
            Action::Toggle => {
                let index = lot.selected_index();
                // selected_index is always valid
                let status = lot.toggle_occupancy(index).unwrap_or_default();
                Outcome::Toggled(index, status)
            }
        }
    }
}
