//! Button polling task

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Ticker;
use parklot_core::config::TimingConfig;
use parklot_core::input::{InputDebouncer, Outcome};
use parklot_core::lot::Lot;
use parklot_drivers::ButtonBank;

use super::{now_ms, period};

/// Left, right and toggle buttons
pub type Buttons = ButtonBank<Input<'static>, Input<'static>, Input<'static>>;

/// Input task
///
/// Polls the buttons and applies at most one debounced action per tick.
#[embassy_executor::task]
pub async fn input_task(lot: &'static Lot, mut buttons: Buttons, timing: TimingConfig) {
    info!("Input task started");

    let mut debouncer = InputDebouncer::new(&timing);
    let mut ticker = Ticker::every(period(timing.input_poll_ms));

    loop {
        if let Some(action) = debouncer.poll(&mut buttons, now_ms()) {
            match action.apply(lot) {
                Outcome::Selected(index) => debug!("{}: slot {} selected", action, index + 1),
                Outcome::Toggled(index, status) => info!("Slot {} now {}", index + 1, status),
            }
        }

        ticker.next().await;
    }
}
