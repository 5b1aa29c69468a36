//! Smart parking lot controller firmware
//!
//! Main firmware binary for a Raspberry Pi Pico W on a BitDogLab carrier.
//! Buttons move a cursor over the slots and toggle occupancy, a web page
//! lets anyone on the network reserve a free slot, and stale reservations
//! expire. The LED matrix and the OLED show the lot.

#![no_std]
#![no_main]

use cyw43_pio::{PioSpi, DEFAULT_CLOCK_DIVIDER};
use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{PIO0, PIO1};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use parklot_core::lot::Lot;
use parklot_drivers::{ButtonBank, Ssd1306};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
    PIO1_IRQ_0 => PioInterruptHandler<PIO1>;
});

// Shared by every task for the life of the firmware
static LOT: StaticCell<Lot> = StaticCell::new();
static CYW43_STATE: StaticCell<cyw43::State> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Parking lot controller starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let board = config::load();
    let timing = board.lot.timing;
    let lot: &'static Lot = LOT.init(Lot::new(&board.lot));

    // Buttons pull to ground when pressed
    let buttons = ButtonBank::new(
        Input::new(p.PIN_5, Pull::Up),
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_22, Pull::Up),
    );
    info!(
        "Buttons on GPIO{} (left), GPIO{} (right), GPIO{} (toggle)",
        config::BUTTON_LEFT_GPIO,
        config::BUTTON_RIGHT_GPIO,
        config::BUTTON_TOGGLE_GPIO
    );

    // WS2812 matrix on PIO1; PIO0 belongs to the radio
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO1, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let matrix = PioWs2812::new(&mut common, sm0, p.DMA_CH1, p.PIN_7, &program);
    info!("LED matrix on GPIO{}", config::MATRIX_GPIO);

    // OLED on I2C1
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config::OLED_I2C_HZ;
    let oled = Ssd1306::new(I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config));
    info!(
        "OLED on I2C1 (SDA GPIO{}, SCL GPIO{})",
        config::OLED_SDA_GPIO,
        config::OLED_SCL_GPIO
    );

    // Local tasks run whether or not the network ever comes up
    spawner.spawn(tasks::input_task(lot, buttons, timing)).unwrap();
    spawner.spawn(tasks::expiry_task(lot, timing)).unwrap();
    spawner
        .spawn(tasks::matrix_task(
            lot,
            matrix,
            board.layout,
            board.palette,
            timing.matrix_period_ms,
        ))
        .unwrap();
    spawner
        .spawn(tasks::display_task(lot, oled, timing.display_period_ms))
        .unwrap();

    // CYW43439 radio over PIO SPI
    let pwr = Output::new(p.PIN_23, Level::Low);
    let cs = Output::new(p.PIN_25, Level::High);
    let mut pio = Pio::new(p.PIO0, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        p.PIN_24,
        p.PIN_29,
        p.DMA_CH0,
    );

    let state = CYW43_STATE.init(cyw43::State::new());
    let (net_device, mut control, runner) =
        cyw43::new(state, pwr, spi, cyw43_firmware::CYW43_43439A0).await;
    spawner.spawn(tasks::cyw43_task(runner)).unwrap();

    control.init(cyw43_firmware::CYW43_43439A0_CLM).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;

    let stack = tasks::wifi::start_stack(spawner, net_device);
    spawner.spawn(tasks::web_task(stack, lot)).unwrap();

    tasks::wifi::join(&mut control).await;

    info!("All tasks spawned, controller running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
