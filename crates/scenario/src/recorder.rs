//! Event Recorder
//!
//! Appends one event per call, snapshotting the top of book as it stands
//! after the caller's mutation. The recorder only ever reads the book.

use vigil_core::{Actor, Event, EventAction, EventLog, EventNote, Price, Size};
use vigil_order_book::OrderBook;

/// Append-only event recorder
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    log: EventLog,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number the next event will get
    pub fn next_t(&self) -> u64 {
        self.log.next_t()
    }

    /// Snapshot best bid/ask/mid from `book` and append an event
    pub fn record(
        &mut self,
        book: &OrderBook,
        actor: Actor,
        action: EventAction,
        price: Option<Price>,
        size: Option<Size>,
        note: Option<EventNote>,
    ) -> &Event {
        let event = Event {
            t: self.log.next_t(),
            actor,
            action,
            price,
            size,
            note,
            best_bid: book.best_bid().map(|o| o.price),
            best_ask: book.best_ask().map(|o| o.price),
            mid: book.mid_price(),
        };
        let event = self.log.append(event);

        log::debug!(
            "[t={}] {} {} price={:?} size={:?} bid={:?} ask={:?} mid={:?}",
            event.t,
            event.actor,
            event.action,
            event.price,
            event.size,
            event.best_bid,
            event.best_ask,
            event.mid
        );

        event
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn into_log(self) -> EventLog {
        self.log
    }
}
