//! Action tokens carried by remote requests
//!
//! Tokens are case-sensitive literals followed by a decimal slot id:
//! - `reserve-slot-{id}`: reserve the slot with 1-based `id`
//!
//! The id ends at the first non-digit, so `reserve-slot-1` never matches
//! the prefix of `reserve-slot-12`.

use core::fmt;

/// Literal prefix of the reserve action
pub const RESERVE_SLOT_PREFIX: &str = "reserve-slot-";

/// An action requested by a remote client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActionToken {
    /// Reserve the slot with this 1-based id
    ReserveSlot(u8),
}

impl ActionToken {
    /// Find the first well-formed action token in a request
    ///
    /// Occurrences of the prefix without a parseable id (no digits, or a
    /// number that does not fit a slot id) are skipped. The id is not
    /// range-checked here; that is up to whoever owns the slots.
    pub fn find(request: &str) -> Option<Self> {
        let mut rest = request;

        while let Some(pos) = rest.find(RESERVE_SLOT_PREFIX) {
            let after = &rest[pos + RESERVE_SLOT_PREFIX.len()..];
            if let Some(id) = parse_id(after) {
                return Some(ActionToken::ReserveSlot(id));
            }
            rest = after;
        }

        None
    }

    /// Write the token as it appears in a request path
    pub fn write_token<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            ActionToken::ReserveSlot(id) => write!(out, "{}{}", RESERVE_SLOT_PREFIX, id),
        }
    }
}

/// Parse the leading decimal digits of `text` as a slot id
fn parse_id(text: &str) -> Option<u8> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    text[..digits].parse().ok()
}
