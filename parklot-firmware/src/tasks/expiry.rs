//! Reservation expiry task

use defmt::*;
use embassy_time::Ticker;
use parklot_core::config::TimingConfig;
use parklot_core::expiry::ExpiryMonitor;
use parklot_core::lot::Lot;

use super::{now_ms, period};

/// Expiry task - frees reservations older than the timeout
#[embassy_executor::task]
pub async fn expiry_task(lot: &'static Lot, timing: TimingConfig) {
    let monitor = ExpiryMonitor::new(&timing);
    info!(
        "Expiry task started (timeout {} ms)",
        monitor.timeout_ms()
    );

    let mut ticker = Ticker::every(period(timing.expiry_period_ms));

    loop {
        let released = monitor.scan(lot, now_ms());
        if released > 0 {
            info!("Released {} expired reservation(s)", released);
        }

        ticker.next().await;
    }
}
