//! Slot table page
//!
//! Renders the HTTP response sent back for every remote request: a status
//! line, headers, and an HTML page listing every slot.
//!
//! The response is written into a `heapless::String` whose capacity covers
//! the worst case (the maximum number of slots, all accessible, longest
//! labels), so a full table never truncates.

use core::fmt::{self, Write};

use heapless::String;

use crate::request::ActionToken;

/// Capacity of a complete response (head and body)
pub const RESPONSE_CAPACITY: usize = 4096;

/// Fixed-capacity response text
pub type ResponseBuffer = String<RESPONSE_CAPACITY>;

/// Seconds between automatic page refreshes
pub const REFRESH_S: u8 = 5;

/// Upper bound on one slot card, any id and any status
pub const CARD_MAX_LEN: usize = 256;

/// Upper bound on the refresh `<meta>` line
const REFRESH_MAX_LEN: usize = 64;

/// Digits of the largest `Content-Length`
const LENGTH_MAX_DIGITS: usize = 20;

/// Upper bound on everything around the slot cards
const FRAME_MAX_LEN: usize = RESPONSE_HEAD.len()
    + LENGTH_MAX_DIGITS
    + HEAD_END.len()
    + PAGE_HEAD.len()
    + REFRESH_MAX_LEN
    + PAGE_STYLE.len()
    + PAGE_TAIL.len();

/// Upper bound on a complete response listing `slot_count` slots
pub const fn max_response_len(slot_count: usize) -> usize {
    FRAME_MAX_LEN + slot_count * CARD_MAX_LEN
}

/// Errors that can occur while rendering a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageError {
    /// Response did not fit the buffer
    Overflow,
}

impl From<fmt::Error> for PageError {
    fn from(_: fmt::Error) -> Self {
        PageError::Overflow
    }
}

/// Everything the page shows about one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotView {
    /// 1-based slot id
    pub id: u8,
    /// Slot is reserved for drivers with disabilities
    pub accessible: bool,
    /// CSS class for the status (`available`, `occupied`, `reserved`)
    pub class: &'static str,
    /// Human readable status
    pub label: &'static str,
    /// Reserve button is disabled
    pub disabled: bool,
}

const RESPONSE_HEAD: &str = "HTTP/1.1 200 OK\r\n\
Content-Type: text/html; charset=utf-8\r\n\
Cache-Control: no-store\r\n\
Connection: close\r\n\
Content-Length: ";

const HEAD_END: &str = "\r\n\r\n";

const PAGE_HEAD: &str = "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n";

const PAGE_STYLE: &str = "<title>Parking Lot</title>\n\
<style>\n\
body { font-family: sans-serif; text-align: center; background: #eef3f7; }\n\
.slot { display: inline-block; margin: 8px; padding: 12px; border-radius: 8px; min-width: 120px; }\n\
.available { background: #b8e6b8; }\n\
.occupied { background: #f2b0b0; }\n\
.reserved { background: #f5e39a; }\n\
.accessible { border: 3px solid #2a5bd7; }\n\
</style>\n\
</head>\n\
<body>\n\
<h1>Parking Lot</h1>\n";

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Render the complete HTTP response for a slot table
///
/// The buffer is cleared first. On overflow the buffer holds a truncated
/// response and `PageError::Overflow` is returned.
pub fn write_response(out: &mut ResponseBuffer, views: &[SlotView]) -> Result<(), PageError> {
    out.clear();

    // First pass only measures the body for Content-Length
    let mut counter = ByteCounter(0);
    write_body(&mut counter, views)?;

    write!(out, "{}{}{}", RESPONSE_HEAD, counter.0, HEAD_END)?;
    write_body(out, views)?;

    Ok(())
}

/// Write the HTML body
fn write_body<W: Write>(out: &mut W, views: &[SlotView]) -> fmt::Result {
    out.write_str(PAGE_HEAD)?;
    // Always land on the plain page so a browser reload never repeats an action
    write!(
        out,
        "<meta http-equiv=\"refresh\" content=\"{}; url=/\">\n",
        REFRESH_S
    )?;
    out.write_str(PAGE_STYLE)?;

    for view in views {
        write_slot(out, view)?;
    }

    out.write_str(PAGE_TAIL)
}

/// Write one slot card
fn write_slot<W: Write>(out: &mut W, view: &SlotView) -> fmt::Result {
    let accessible_class = if view.accessible { " accessible" } else { "" };
    let accessible_mark = if view.accessible { " &#9855;" } else { "" };
    let disabled = if view.disabled { " disabled" } else { "" };

    write!(
        out,
        "<div class=\"slot {}{}\">\n<h2>Slot {}{}</h2>\n<p>{}</p>\n<form action=\"./",
        view.class, accessible_class, view.id, accessible_mark, view.label
    )?;
    ActionToken::ReserveSlot(view.id).write_token(out)?;
    write!(out, "\"><button{}>Reserve</button></form>\n</div>\n", disabled)
}

/// `fmt::Write` sink that only counts bytes
struct ByteCounter(usize);

impl Write for ByteCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 = self.0.saturating_add(s.len());
        Ok(())
    }
}
