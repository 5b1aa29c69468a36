//! Millisecond timestamps
//!
//! Timestamps are `u32` milliseconds since boot, as produced by the
//! firmware tick. They wrap after about 49 days, so they are only ever
//! compared through their wrapping difference. Intervals must stay below
//! `i32::MAX` ms (about 24 days), which every timeout here does by far.

/// Milliseconds since boot (wrapping)
pub type Millis = u32;

/// Milliseconds elapsed from `since` to `now`
#[inline]
pub const fn elapsed(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}

/// Check if `now` is strictly after `instant`
#[inline]
pub const fn is_after(now: Millis, instant: Millis) -> bool {
    (now.wrapping_sub(instant) as i32) > 0
}

/// Instant `delta_ms` after `now`
#[inline]
pub const fn after(now: Millis, delta_ms: Millis) -> Millis {
    now.wrapping_add(delta_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_simple() {
        assert_eq!(elapsed(1500, 1000), 500);
        assert_eq!(elapsed(1000, 1000), 0);
    }

    #[test]
    fn test_elapsed_across_wrap() {
        let since = u32::MAX - 99;
        assert_eq!(elapsed(100, since), 200);
    }

    #[test]
    fn test_is_after() {
        assert!(is_after(1001, 1000));
        assert!(!is_after(1000, 1000));
        assert!(!is_after(999, 1000));
    }

    #[test]
    fn test_is_after_across_wrap() {
        let deadline = after(u32::MAX - 10, 270);
        assert!(!is_after(u32::MAX, deadline));
        assert!(is_after(deadline.wrapping_add(1), deadline));
    }

    proptest::proptest! {
        #[test]
        fn prop_after_is_after(now in proptest::num::u32::ANY, delta in 1u32..1_000_000) {
            let deadline = after(now, delta);
            proptest::prop_assert!(!is_after(now, deadline));
            proptest::prop_assert!(!is_after(deadline, deadline));
            proptest::prop_assert!(is_after(deadline.wrapping_add(1), deadline));
            proptest::prop_assert_eq!(elapsed(deadline, now), delta);
        }
    }
}
