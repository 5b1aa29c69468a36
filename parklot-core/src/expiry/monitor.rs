//! Reservation expiry monitor
//!
//! Frees reservations nobody confirmed in time. Confirming a reservation
//! means a car pulling in and the toggle button marking the slot occupied.

use crate::config::TimingConfig;
use crate::lot::{Lot, SlotStatus};
use crate::time::{self, Millis};

/// Scans the lot for stale reservations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExpiryMonitor {
    timeout_ms: Millis,
}

impl ExpiryMonitor {
    /// Create a monitor with the configured reservation timeout
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            timeout_ms: timing.reservation_timeout_ms,
        }
    }

    /// Reservation timeout in milliseconds
    pub fn timeout_ms(&self) -> Millis {
        self.timeout_ms
    }

    /// Check if a reservation started at `started_at` has expired at `now`
    pub fn is_expired(&self, started_at: Millis, now: Millis) -> bool {
        time::elapsed(now, started_at) > self.timeout_ms
    }

    /// Free every expired reservation
    ///
    /// Returns the number of slots released.
    pub fn scan(&self, lot: &Lot, now: Millis) -> usize {
        let mut released = 0;

        for slot in lot.slots() {
            let Some(started_at) = slot.reservation_start() else {
                continue;
            };

            if self.is_expired(started_at, now) {
                lot.write_status(slot.index(), SlotStatus::Free);
                released += 1;
            }
        }

        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LotConfig;

    fn setup() -> (Lot, ExpiryMonitor) {
        let config = LotConfig::reference();
        (Lot::new(&config), ExpiryMonitor::new(&config.timing))
    }

    #[test]
    fn test_reservation_survives_until_timeout() {
        let (lot, monitor) = setup();
        lot.reserve(1, 2_000);

        assert_eq!(monitor.scan(&lot, 2_000), 0);
        assert_eq!(monitor.scan(&lot, 12_000), 0);
        assert_eq!(lot.status(1), Some(SlotStatus::Reserved));
    }

    #[test]
    fn test_reservation_expires_after_timeout() {
        let (lot, monitor) = setup();
        lot.reserve(1, 2_000);

        assert_eq!(monitor.scan(&lot, 12_001), 1);
        assert_eq!(lot.status(1), Some(SlotStatus::Free));
    }

    #[test]
    fn test_other_statuses_untouched() {
        let (lot, monitor) = setup();
        lot.write_status(0, SlotStatus::Occupied);
        lot.write_reservation_start(0, 0);

        assert_eq!(monitor.scan(&lot, 1_000_000), 0);
        assert_eq!(lot.status(0), Some(SlotStatus::Occupied));
        assert!(lot.slots().skip(1).all(|s| s.status == SlotStatus::Free));
    }

    #[test]
    fn test_re_reservation_restarts_countdown() {
        let (lot, monitor) = setup();
        lot.reserve(3, 0);
        lot.reserve(3, 8_000);

        assert_eq!(monitor.scan(&lot, 10_500), 0);
        assert_eq!(monitor.scan(&lot, 18_001), 1);
    }

    #[test]
    fn test_releases_several() {
        let (lot, monitor) = setup();
        lot.reserve(0, 0);
        lot.reserve(2, 100);
        lot.reserve(3, 9_000);

        assert_eq!(monitor.scan(&lot, 10_101), 2);
        assert_eq!(lot.status(3), Some(SlotStatus::Reserved));
    }

    #[test]
    fn test_expiry_across_clock_wrap() {
        let (lot, monitor) = setup();
        lot.reserve(0, u32::MAX - 1_000);

        assert_eq!(monitor.scan(&lot, 8_999), 0);
        assert_eq!(monitor.scan(&lot, 9_000), 1);
    }
}
