//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::time::Millis;

/// Maximum number of slots in a lot
///
/// Bounded by the text display: a header plus six lines fill 64 pixels.
pub const MAX_SLOTS: usize = 6;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Slot count is zero or above `MAX_SLOTS`
    SlotCount,
    /// Accessible mask names a slot that does not exist
    AccessibleMask,
    /// A period, window or timeout is zero
    ZeroDuration,
}

/// Task periods, debounce windows and the reservation timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Debounce window for the move-left and move-right buttons
    pub select_debounce_ms: Millis,
    /// Debounce window for the toggle button
    pub toggle_debounce_ms: Millis,
    /// Button polling period
    pub input_poll_ms: Millis,
    /// Reservation expiry scan period
    pub expiry_period_ms: Millis,
    /// How long a reservation survives unconfirmed
    pub reservation_timeout_ms: Millis,
    /// LED matrix render period
    pub matrix_period_ms: Millis,
    /// Text display render period
    pub display_period_ms: Millis,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            select_debounce_ms: 270,
            toggle_debounce_ms: 270,
            input_poll_ms: 20,
            expiry_period_ms: 250,
            reservation_timeout_ms: 10_000,
            matrix_period_ms: 100,
            display_period_ms: 200,
        }
    }
}

impl TimingConfig {
    fn durations(&self) -> [Millis; 7] {
        [
            self.select_debounce_ms,
            self.toggle_debounce_ms,
            self.input_poll_ms,
            self.expiry_period_ms,
            self.reservation_timeout_ms,
            self.matrix_period_ms,
            self.display_period_ms,
        ]
    }
}

/// Lot configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LotConfig {
    /// Number of slots (1..=MAX_SLOTS)
    pub slot_count: u8,
    /// Accessible slots, bit `i` set for slot index `i`
    pub accessible_mask: u8,
    /// Timing
    pub timing: TimingConfig,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl LotConfig {
    /// Four slots, the last one accessible
    pub fn reference() -> Self {
        Self {
            slot_count: 4,
            accessible_mask: 1 << 3,
            timing: TimingConfig::default(),
        }
    }

    /// Number of slots as an index bound
    pub fn len(&self) -> usize {
        self.slot_count as usize
    }

    /// Check if the slot at `index` is accessible
    pub fn is_accessible(&self, index: usize) -> bool {
        index < self.len() && index < 8 && self.accessible_mask & (1 << index) != 0
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_count == 0 || self.len() > MAX_SLOTS {
            return Err(ConfigError::SlotCount);
        }

        // Every bit at or above slot_count must be clear
        if self.accessible_mask >> self.slot_count != 0 {
            return Err(ConfigError::AccessibleMask);
        }

        if self.timing.durations().contains(&0) {
            return Err(ConfigError::ZeroDuration);
        }

        Ok(())
    }
}
