//! LED matrix task
//!
//! Renders into a frame buffer and clocks a latched frame out through
//! the PIO WS2812 program.

use defmt::*;
use embassy_rp::peripherals::PIO1;
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812};
use embassy_time::Ticker;
use parklot_core::config::{MatrixLayout, Palette};
use parklot_core::lot::Lot;
use parklot_core::render::MatrixRenderer;
use parklot_core::time::Millis;
use parklot_drivers::MatrixFrame;

use super::period;
use crate::config::{MATRIX_PIXELS, MATRIX_WIRING};

/// WS2812 chain on PIO1, state machine 0
pub type MatrixDriver = PioWs2812<'static, PIO1, 0, MATRIX_PIXELS, Grb>;

/// Matrix task
#[embassy_executor::task]
pub async fn matrix_task(
    lot: &'static Lot,
    mut driver: MatrixDriver,
    layout: MatrixLayout,
    palette: Palette,
    period_ms: Millis,
) {
    info!("Matrix task started");

    let mut frame = MatrixFrame::<MATRIX_PIXELS>::new(layout.width, MATRIX_WIRING);
    let mut renderer = MatrixRenderer::new(layout, palette);
    let mut ticker = Ticker::every(period(period_ms));

    loop {
        match renderer.render(lot, &mut frame) {
            Ok(true) => trace!("Matrix repainted"),
            Ok(false) => {}
            Err(e) => warn!("Matrix flush failed: {:?}", e),
        }

        if let Some(pixels) = frame.take_latched() {
            driver.write(pixels).await;
        }

        ticker.next().await;
    }
}
