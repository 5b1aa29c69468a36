//! OLED status display task

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::Ticker;
use parklot_core::lot::Lot;
use parklot_core::render::TextRenderer;
use parklot_core::time::Millis;
use parklot_drivers::Ssd1306;

use super::period;

/// SSD1306 on I2C1
pub type Oled = Ssd1306<I2c<'static, I2C1, Blocking>>;

/// Display task
///
/// A panel that fails (or was never detected) is re-initialized on the
/// next tick; the renderer redraws the full screen afterwards.
#[embassy_executor::task]
pub async fn display_task(lot: &'static Lot, mut oled: Oled, period_ms: Millis) {
    info!("Display task started");

    let mut renderer = TextRenderer::new();
    let mut ticker = Ticker::every(period(period_ms));
    let mut ready = false;

    loop {
        if !ready {
            match oled.init() {
                Ok(()) => {
                    info!("OLED initialized");
                    ready = true;
                }
                Err(e) => warn!("OLED init failed: {:?}", e),
            }
        }

        if ready {
            match renderer.render(lot, &mut oled) {
                Ok(true) => trace!("Display redrawn"),
                Ok(false) => {}
                Err(e) => {
                    warn!("Display commit failed: {:?}", e);
                    ready = false;
                }
            }
        }

        ticker.next().await;
    }
}
