//! Input debouncer
//!
//! Each input source is either idle or suppressed until some instant. A
//! press while suppressed is ignored; holding a button repeats its action
//! once per debounce window.

use crate::config::TimingConfig;
use crate::time::{self, Millis};
use crate::traits::{InputId, InputSource};

use super::action::Action;

/// Debounce state of one input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// Ready to fire
    #[default]
    Idle,
    /// Ignoring the source until this instant has passed
    SuppressedUntil(Millis),
}

impl DebounceState {
    fn is_ready(self, now: Millis) -> bool {
        match self {
            DebounceState::Idle => true,
            DebounceState::SuppressedUntil(until) => time::is_after(now, until),
        }
    }
}

/// Debouncer for the three buttons
#[derive(Debug, Clone)]
pub struct InputDebouncer {
    states: [DebounceState; 3],
    windows: [Millis; 3],
}

impl InputDebouncer {
    /// Create a debouncer with every source idle
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            states: [DebounceState::Idle; 3],
            windows: [
                timing.select_debounce_ms,
                timing.select_debounce_ms,
                timing.toggle_debounce_ms,
            ],
        }
    }

    /// Current state of a source
    pub fn state(&self, input: InputId) -> DebounceState {
        self.states[input.index()]
    }

    /// Poll the inputs once
    ///
    /// Sources are checked in priority order (left, right, toggle). The
    /// first one that is pressed and not suppressed fires and starts its
    /// window; the rest are not read this tick.
    pub fn poll<I: InputSource>(&mut self, inputs: &mut I, now: Millis) -> Option<Action> {
        // Expired windows go back to idle so an old deadline never looks
        // like a future one once the clock wraps
        for state in &mut self.states {
            if matches!(state, DebounceState::SuppressedUntil(_)) && state.is_ready(now) {
                *state = DebounceState::Idle;
            }
        }

        for input in InputId::ALL {
            let slot = input.index();
            if self.states[slot].is_ready(now) && inputs.is_active(input) {
                self.states[slot] = DebounceState::SuppressedUntil(time::after(now, self.windows[slot]));
                return Some(Action::from(input));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inputs held at fixed levels
    #[derive(Default)]
    struct FakeInputs {
        pressed: [bool; 3],
        reads: usize,
    }

    impl FakeInputs {
        fn pressing(inputs: &[InputId]) -> Self {
            let mut fake = Self::default();
            for input in inputs {
                fake.pressed[input.index()] = true;
            }
            fake
        }
    }

    impl InputSource for FakeInputs {
        fn is_active(&mut self, input: InputId) -> bool {
            self.reads += 1;
            self.pressed[input.index()]
        }
    }

    fn debouncer() -> InputDebouncer {
        InputDebouncer::new(&TimingConfig::default())
    }

    #[test]
    fn test_nothing_pressed() {
        let mut debouncer = debouncer();
        let mut inputs = FakeInputs::default();
        assert_eq!(debouncer.poll(&mut inputs, 0), None);
        assert_eq!(inputs.reads, 3);
    }

    #[test]
    fn test_presses_inside_window_fire_once() {
        let mut debouncer = debouncer();
        let mut inputs = FakeInputs::pressing(&[InputId::Toggle]);

        assert_eq!(debouncer.poll(&mut inputs, 1_000), Some(Action::Toggle));
        assert_eq!(
            debouncer.state(InputId::Toggle),
            DebounceState::SuppressedUntil(1_270)
        );
        assert_eq!(debouncer.poll(&mut inputs, 1_100), None);
        assert_eq!(debouncer.poll(&mut inputs, 1_270), None);
    }

    #[test]
    fn test_presses_outside_window_fire_twice() {
        let mut debouncer = debouncer();
        let mut inputs = FakeInputs::pressing(&[InputId::MoveRight]);

        assert_eq!(debouncer.poll(&mut inputs, 0), Some(Action::MoveRight));
        assert_eq!(debouncer.poll(&mut inputs, 271), Some(Action::MoveRight));
    }

    #[test]
    fn test_priority_order() {
        let mut debouncer = debouncer();
        let mut inputs =
            FakeInputs::pressing(&[InputId::MoveLeft, InputId::MoveRight, InputId::Toggle]);

        // One action per tick, left first; suppressed sources yield
        assert_eq!(debouncer.poll(&mut inputs, 0), Some(Action::MoveLeft));
        assert_eq!(debouncer.poll(&mut inputs, 20), Some(Action::MoveRight));
        assert_eq!(debouncer.poll(&mut inputs, 40), Some(Action::Toggle));
        assert_eq!(debouncer.poll(&mut inputs, 60), None);
    }

    #[test]
    fn test_first_ready_source_stops_scan() {
        let mut debouncer = debouncer();
        let mut inputs = FakeInputs::pressing(&[InputId::MoveLeft]);

        debouncer.poll(&mut inputs, 0);
        assert_eq!(inputs.reads, 1);
    }

    #[test]
    fn test_windows_are_per_source() {
        let timing = TimingConfig {
            select_debounce_ms: 100,
            toggle_debounce_ms: 500,
            ..TimingConfig::default()
        };
        let mut debouncer = InputDebouncer::new(&timing);
        let mut inputs = FakeInputs::pressing(&[InputId::MoveLeft]);

        debouncer.poll(&mut inputs, 0);
        assert_eq!(debouncer.state(InputId::MoveLeft), DebounceState::SuppressedUntil(100));

        inputs = FakeInputs::pressing(&[InputId::Toggle]);
        debouncer.poll(&mut inputs, 0);
        assert_eq!(debouncer.state(InputId::Toggle), DebounceState::SuppressedUntil(500));
    }

    #[test]
    fn test_expired_window_returns_to_idle() {
        let mut debouncer = debouncer();
        let mut inputs = FakeInputs::pressing(&[InputId::Toggle]);
        debouncer.poll(&mut inputs, 0);

        let mut released = FakeInputs::default();
        assert_eq!(debouncer.poll(&mut released, 300), None);
        assert_eq!(debouncer.state(InputId::Toggle), DebounceState::Idle);
    }

    #[test]
    fn test_window_across_clock_wrap() {
        let mut debouncer = debouncer();
        let mut inputs = FakeInputs::pressing(&[InputId::Toggle]);

        assert_eq!(debouncer.poll(&mut inputs, u32::MAX - 100), Some(Action::Toggle));
        assert_eq!(debouncer.poll(&mut inputs, 50), None);
        assert_eq!(debouncer.poll(&mut inputs, 170), Some(Action::Toggle));
    }
}
