//! Wi-Fi bring-up and runner tasks
//!
//! The CYW43439 is driven over a PIO SPI on PIO0. Joining retries until
//! it succeeds; the web task waits for DHCP on its own.

use cyw43::JoinOptions;
use cyw43_pio::PioSpi;
use defmt::*;
use embassy_executor::Spawner;
use embassy_net::{Config, Stack, StackResources};
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::{DMA_CH0, PIO0};
use embassy_time::Timer;
use static_cell::StaticCell;

use crate::config::{WIFI_PASSWORD, WIFI_SSID};

/// Radio runner on PIO0, state machine 0
pub type WifiRunner = cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>;

/// Sockets: the web listener plus DHCP and headroom
const SOCKETS: usize = 3;

/// Seed for the network stack's port and sequence numbers
const SEED: u64 = 0x5a17_c0de_9e3b_41f7;

#[embassy_executor::task]
pub async fn cyw43_task(runner: WifiRunner) -> ! {
    runner.run().await
}

#[embassy_executor::task]
pub async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}

/// Start the network stack on a running radio
pub fn start_stack(spawner: Spawner, net_device: cyw43::NetDriver<'static>) -> Stack<'static> {
    static RESOURCES: StaticCell<StackResources<SOCKETS>> = StaticCell::new();

    let (stack, runner) = embassy_net::new(
        net_device,
        Config::dhcpv4(Default::default()),
        RESOURCES.init(StackResources::new()),
        SEED,
    );
    spawner.spawn(net_task(runner)).unwrap();

    stack
}

/// Join the configured network, retrying forever
pub async fn join(control: &mut cyw43::Control<'static>) {
    info!("Joining Wi-Fi network {}", WIFI_SSID);

    loop {
        match control
            .join(WIFI_SSID, JoinOptions::new(WIFI_PASSWORD.as_bytes()))
            .await
        {
            Ok(()) => break,
            Err(err) => {
                warn!("Wi-Fi join failed: status {}", err.status);
                Timer::after_secs(1).await;
            }
        }
    }

    info!("Wi-Fi joined");
}
