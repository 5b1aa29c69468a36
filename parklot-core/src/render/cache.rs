//! Per-slot snapshot of the last render

use crate::config::MAX_SLOTS;
use crate::lot::SlotStatus;

/// Status of every slot as last drawn
///
/// `None` means the slot was never drawn, or the device failed since and
/// its contents are unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCache {
    drawn: [Option<SlotStatus>; MAX_SLOTS],
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderCache {
    /// Create a cache with nothing drawn
    pub const fn new() -> Self {
        Self {
            drawn: [None; MAX_SLOTS],
        }
    }

    /// Record `status` for the slot at `index`
    ///
    /// Returns true if it differs from what was drawn before.
    pub fn update(&mut self, index: usize, status: SlotStatus) -> bool {
        match self.drawn.get_mut(index) {
            Some(entry) if *entry != Some(status) => {
                *entry = Some(status);
                true
            }
            _ => false,
        }
    }

    /// What was drawn for the slot at `index`
    pub fn get(&self, index: usize) -> Option<SlotStatus> {
        self.drawn.get(index).copied().flatten()
    }

    /// Forget everything so the next pass redraws all slots
    pub fn invalidate(&mut self) {
        self.drawn = [None; MAX_SLOTS];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_update_is_dirty() {
        let mut cache = RenderCache::new();
        assert_eq!(cache.get(0), None);
        assert!(cache.update(0, SlotStatus::Free));
        assert!(!cache.update(0, SlotStatus::Free));
        assert!(cache.update(0, SlotStatus::Occupied));
        assert_eq!(cache.get(0), Some(SlotStatus::Occupied));
    }

    #[test]
    fn test_invalidate() {
        let mut cache = RenderCache::new();
        cache.update(1, SlotStatus::Reserved);
        cache.invalidate();
        assert_eq!(cache.get(1), None);
        assert!(cache.update(1, SlotStatus::Reserved));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut cache = RenderCache::new();
        assert!(!cache.update(MAX_SLOTS, SlotStatus::Occupied));
        assert_eq!(cache.get(MAX_SLOTS), None);
    }
}
