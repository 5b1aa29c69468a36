//! Request handling
//!
//! Every request gets the same answer shape: the complete live slot
//! table. A request carrying a reservation token for an existing slot
//! reserves it first, so the answer already shows the reservation.
//! Anything else (no token, a malformed token, an unknown slot) changes
//! nothing.

use heapless::Vec;
use parklot_protocol::{
    max_response_len, write_response, ActionToken, ResponseBuffer, SlotView, RESPONSE_CAPACITY,
};

use super::view::slot_view;
use crate::config::MAX_SLOTS;
use crate::lot::Lot;
use crate::time::Millis;

const _: () = assert!(max_response_len(MAX_SLOTS) <= RESPONSE_CAPACITY);

/// Result of one request
#[derive(Debug, PartialEq, Eq)]
pub struct Reply<'a> {
    /// Id of the slot this request reserved
    pub reserved: Option<u8>,
    /// Complete HTTP response
    pub response: &'a str,
}

/// Request handler with its own response buffer
///
/// The buffer is reused for every request, so only one reply can be
/// alive at a time.
pub struct RemoteEndpoint {
    buffer: ResponseBuffer,
}

impl Default for RemoteEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteEndpoint {
    /// Create an endpoint with an empty buffer
    pub const fn new() -> Self {
        Self {
            buffer: ResponseBuffer::new(),
        }
    }

    /// Handle one request received at `now`
    ///
    /// Always produces the full table: the response buffer holds the
    /// largest page a lot of `MAX_SLOTS` slots can render.
    pub fn handle_request(&mut self, lot: &Lot, request: &str, now: Millis) -> Reply<'_> {
        let reserved = match ActionToken::find(request) {
            Some(ActionToken::ReserveSlot(id)) => reserve(lot, id, now),
            None => None,
        };

        let views: Vec<SlotView, MAX_SLOTS> = lot.slots().map(|slot| slot_view(&slot)).collect();
        // Cannot overflow, see the capacity assertion above
        let _ = write_response(&mut self.buffer, &views);

        Reply {
            reserved,
            response: self.buffer.as_str(),
        }
    }
}

fn reserve(lot: &Lot, id: u8, now: Millis) -> Option<u8> {
    let index = usize::from(id).checked_sub(1)?;
    lot.reserve(index, now).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LotConfig;
    use crate::expiry::ExpiryMonitor;
    use crate::lot::SlotStatus;

    fn setup() -> (Lot, RemoteEndpoint) {
        (Lot::new(&LotConfig::reference()), RemoteEndpoint::new())
    }

    fn statuses(lot: &Lot) -> [SlotStatus; 4] {
        core::array::from_fn(|index| lot.status(index).unwrap())
    }

    #[test]
    fn test_plain_request_renders_table() {
        let (lot, mut endpoint) = setup();
        let reply = endpoint
            .handle_request(&lot, "GET / HTTP/1.1\r\n\r\n", 0);

        assert_eq!(reply.reserved, None);
        assert!(reply.response.starts_with("HTTP/1.1 200 OK\r\n"));
        for id in 1..=4 {
            assert!(reply.response.contains(&std::format!("Slot {id}")));
        }
        assert_eq!(statuses(&lot), [SlotStatus::Free; 4]);
    }

    #[test]
    fn test_reserve_scenario() {
        let (lot, mut endpoint) = setup();
        let reply = endpoint
            .handle_request(&lot, "GET /reserve-slot-2 HTTP/1.1\r\n\r\n", 1_000);

        assert_eq!(reply.reserved, Some(2));
        assert!(reply
            .response
            .contains("<div class=\"slot reserved\">\n<h2>Slot 2</h2>\n<p>Reserved</p>"));
        assert!(reply.response.contains("reserve-slot-2\"><button disabled>"));
        assert!(reply.response.contains("reserve-slot-1\"><button>"));
        assert!(reply.response.contains("reserve-slot-4\"><button>"));
        assert_eq!(
            statuses(&lot),
            [
                SlotStatus::Free,
                SlotStatus::Reserved,
                SlotStatus::Free,
                SlotStatus::Free
            ]
        );

        let monitor = ExpiryMonitor::new(&LotConfig::reference().timing);
        assert_eq!(monitor.scan(&lot, 11_001), 1);
        assert_eq!(statuses(&lot), [SlotStatus::Free; 4]);
    }

    #[test]
    fn test_same_token_twice_keeps_second_timestamp() {
        let (lot, mut endpoint) = setup();
        endpoint
            .handle_request(&lot, "GET /reserve-slot-3", 100);
        endpoint
            .handle_request(&lot, "GET /reserve-slot-3", 900);

        let slot = lot.read_slot(2).unwrap();
        assert_eq!(slot.status, SlotStatus::Reserved);
        assert_eq!(slot.reservation_start(), Some(900));
    }

    #[test]
    fn test_out_of_range_ids_change_nothing() {
        let (lot, mut endpoint) = setup();
        for request in ["GET /reserve-slot-0", "GET /reserve-slot-5", "GET /reserve-slot-255"] {
            let reply = endpoint.handle_request(&lot, request, 0);
            assert_eq!(reply.reserved, None);
            assert!(reply.response.contains("Slot 4"));
        }
        assert_eq!(statuses(&lot), [SlotStatus::Free; 4]);
    }

    #[test]
    fn test_malformed_token_changes_nothing() {
        let (lot, mut endpoint) = setup();
        let reply = endpoint
            .handle_request(&lot, "GET /reserve-slot-x HTTP/1.1", 0);

        assert_eq!(reply.reserved, None);
        assert_eq!(statuses(&lot), [SlotStatus::Free; 4]);
    }

    #[test]
    fn test_reserving_occupied_slot_overrides_it() {
        // The page disables the button, but a hand-typed URL still goes
        // through; the lot accepts the last write
        let (lot, mut endpoint) = setup();
        lot.write_status(0, SlotStatus::Occupied);

        let reply = endpoint
            .handle_request(&lot, "GET /reserve-slot-1", 0);
        assert_eq!(reply.reserved, Some(1));
        assert_eq!(lot.status(0), Some(SlotStatus::Reserved));
    }

    #[test]
    fn test_largest_lot_gets_complete_page() {
        let config = LotConfig {
            slot_count: MAX_SLOTS as u8,
            accessible_mask: ((1u16 << MAX_SLOTS) - 1) as u8,
            ..LotConfig::reference()
        };
        let lot = Lot::new(&config);
        let mut endpoint = RemoteEndpoint::new();

        let reply = endpoint.handle_request(&lot, "GET /reserve-slot-6 HTTP/1.1", 0);
        assert_eq!(reply.reserved, Some(6));
        assert!(reply.response.contains("<h2>Slot 6 &#9855;</h2>"));
        assert!(reply.response.ends_with("</html>\n"));
    }

    #[test]
    fn test_accessible_slot_marked() {
        let (lot, mut endpoint) = setup();
        let reply = endpoint.handle_request(&lot, "", 0);
        assert!(reply.response.contains("class=\"slot available accessible\""));
    }
}
