//! Board configuration
//!
//! Pin assignments for a Pico W on a BitDogLab carrier, the lot layout,
//! and Wi-Fi credentials baked in at compile time:
//!
//! ```text
//! WIFI_SSID=my-network WIFI_PASSWORD=secret cargo build --release
//! ```

use defmt::*;
use parklot_core::config::{LotConfig, MatrixLayout, Palette};
use parklot_drivers::Wiring;

/// Button A, moves the selection left
pub const BUTTON_LEFT_GPIO: u8 = 5;
/// Button B, moves the selection right
pub const BUTTON_RIGHT_GPIO: u8 = 6;
/// Joystick push button, toggles occupancy
pub const BUTTON_TOGGLE_GPIO: u8 = 22;
/// WS2812 matrix data line
pub const MATRIX_GPIO: u8 = 7;
/// OLED I2C1 data line
pub const OLED_SDA_GPIO: u8 = 14;
/// OLED I2C1 clock line
pub const OLED_SCL_GPIO: u8 = 15;
/// OLED bus frequency
pub const OLED_I2C_HZ: u32 = 400_000;

/// Pixels on the LED matrix
pub const MATRIX_PIXELS: usize = 25;
/// LED chain wiring of the BitDogLab matrix
pub const MATRIX_WIRING: Wiring = Wiring::ReversedSerpentine;

/// Wi-Fi network name, `WIFI_SSID` at build time
pub const WIFI_SSID: &str = match option_env!("WIFI_SSID") {
    Some(ssid) => ssid,
    None => "parklot",
};

/// Wi-Fi passphrase, `WIFI_PASSWORD` at build time
pub const WIFI_PASSWORD: &str = match option_env!("WIFI_PASSWORD") {
    Some(password) => password,
    None => "parklot-password",
};

/// Check if real credentials were supplied at build time
pub const fn has_wifi_credentials() -> bool {
    option_env!("WIFI_SSID").is_some() && option_env!("WIFI_PASSWORD").is_some()
}

/// Everything the tasks need to know about the lot
pub struct BoardConfig {
    pub lot: LotConfig,
    pub layout: MatrixLayout,
    pub palette: Palette,
}

/// Load and validate the lot configuration
///
/// The reference lot can be overridden at build time with
/// `PARKLOT_SLOT_COUNT` and `PARKLOT_ACCESSIBLE_MASK` (decimal). An
/// invalid result, or one the matrix cannot show, falls back to the
/// reference lot.
pub fn load() -> BoardConfig {
    let mut lot = LotConfig::reference();
    if let Some(count) = parse_u8("PARKLOT_SLOT_COUNT", option_env!("PARKLOT_SLOT_COUNT")) {
        lot.slot_count = count;
    }
    if let Some(mask) = parse_u8("PARKLOT_ACCESSIBLE_MASK", option_env!("PARKLOT_ACCESSIBLE_MASK")) {
        lot.accessible_mask = mask;
    }

    if let Err(e) = lot.validate() {
        error!("Invalid lot configuration: {:?}, using reference lot", e);
        lot = LotConfig::reference();
    }

    // Corner blocks for small lots, one row per slot above that
    let mut layout = if MatrixLayout::CORNERS_5X5.covers(lot.len()) {
        MatrixLayout::CORNERS_5X5
    } else {
        MatrixLayout::ROWS_5X5
    };

    if !layout.covers(lot.len()) || layout.pixel_count() > MATRIX_PIXELS {
        error!("Matrix cannot show {} slots, using reference lot", lot.slot_count);
        lot = LotConfig::reference();
        layout = MatrixLayout::CORNERS_5X5;
    }

    info!(
        "Lot: {} slots, accessible mask {=u8:#b}",
        lot.slot_count, lot.accessible_mask
    );

    if !has_wifi_credentials() {
        warn!("WIFI_SSID/WIFI_PASSWORD not set at build time, using placeholders");
    }

    BoardConfig {
        lot,
        layout,
        palette: Palette::default(),
    }
}

fn parse_u8(name: &str, value: Option<&str>) -> Option<u8> {
    let value = value?;
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        warn!("Ignoring {}={}: not a number 0-255", name, value);
    }
    parsed
}
