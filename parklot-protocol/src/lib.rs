//! Remote Control Protocol
//!
//! This crate defines the text protocol between a remote client (a browser
//! on the local network) and the parking lot controller.
//!
//! # Protocol Overview
//!
//! A client request is plain text, normally an HTTP request whose path
//! carries one action token:
//! ```text
//! GET /reserve-slot-2 HTTP/1.1
//! ```
//!
//! The controller always answers with the full slot table, rendered as an
//! HTML page into a buffer of fixed capacity. A request without a usable
//! token simply gets the page.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod page;
pub mod request;

pub use page::{
    max_response_len, write_response, PageError, ResponseBuffer, SlotView, CARD_MAX_LEN,
    RESPONSE_CAPACITY,
};
pub use request::{ActionToken, RESERVE_SLOT_PREFIX};
