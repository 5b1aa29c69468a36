//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in parklot-core for the parts on the board:
//!
//! - Push buttons on GPIO inputs (active-low)
//! - WS2812 LED matrix frame buffer
//! - SSD1306 128x64 OLED over I2C

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buttons;
pub mod matrix;
pub mod ssd1306;

pub use buttons::ButtonBank;
pub use matrix::{MatrixFrame, Wiring};
pub use ssd1306::Ssd1306;
