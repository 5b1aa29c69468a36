//! SSD1306 OLED display driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C. Text is drawn
//! into a page-organized frame buffer with an `embedded-graphics` mono
//! font; nothing reaches the panel until `commit`.

use embedded_graphics::mono_font::ascii::FONT_6X9;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use parklot_core::traits::{DisplayError, TextDisplay};

/// Default I2C address (0x3D with the address pin high)
pub const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// Control bytes prefixed to every transfer
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Power-up sequence for a 128x64 panel with the internal charge pump
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80,
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14,
    cmd::SET_MEMORY_MODE,
    0x02, // Page addressing
    cmd::SET_SEG_REMAP,
    cmd::SET_COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_FROM_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, SSD1306_ADDR)
    }

    /// Create a driver at a specific address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Initialize the display
    pub fn init(&mut self) -> Result<(), DisplayError> {
        for &c in INIT_SEQUENCE {
            self.command(c)?;
        }
        Ok(())
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .map_err(map_error)
    }

    /// Check if the pixel at `(x, y)` is lit in the frame buffer
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.buffer
            .get(y / 8)
            .and_then(|page| page.get(x))
            .is_some_and(|column| column & (1 << (y % 8)) != 0)
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

fn map_error<E: embedded_hal::i2c::Error>(error: E) -> DisplayError {
    match error.kind() {
        ErrorKind::NoAcknowledge(_) => DisplayError::NotResponding,
        _ => DisplayError::Bus,
    }
}

impl<I2C: I2c> TextDisplay for Ssd1306<I2C> {
    fn clear(&mut self) {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
    }

    fn draw_line(&mut self, text: &str, x: u8, y: u8) {
        let style = MonoTextStyle::new(&FONT_6X9, BinaryColor::On);
        let origin = Point::new(i32::from(x), i32::from(y));

        // Drawing into the frame buffer cannot fail
        let _ = Text::with_baseline(text, origin, style, Baseline::Top).draw(self);
    }

    fn commit(&mut self) -> Result<(), DisplayError> {
        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(cmd::SET_LOW_COLUMN)?;
            self.command(cmd::SET_HIGH_COLUMN)?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(&self.buffer[page]);
            self.i2c.write(self.address, &data).map_err(map_error)?;
        }

        Ok(())
    }
}

impl<I2C> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<I2C> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if x >= WIDTH || y >= HEIGHT {
                continue;
            }

            let bit = 1 << (y % 8);
            let column = &mut self.buffer[y / 8][x];
            match color {
                BinaryColor::On => *column |= bit,
                BinaryColor::Off => *column &= !bit,
            }
        }

        Ok(())
    }
}
