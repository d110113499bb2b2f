use serde::{Deserialize, Serialize};
use vigil_core::{Actor, Event, EventAction, EventLog, EventNote, Price, Size};
use vigil_order_book::OrderBook;

use crate::recorder::Recorder;

/// Which way the decision step went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    /// Mid reached the threshold: elevated sell followed by reversion
    Predatory,
    /// Threshold not reached: nothing is sold
    Benign,
}

/// Mutable state of one scripted run
///
/// Owned by the engine and passed explicitly to every step.
#[derive(Debug, Clone, Default)]
pub struct ScenarioState {
    book: OrderBook,
    recorder: Recorder,
    branch: Option<Branch>,
}

impl ScenarioState {
    /// Fresh state: empty book, empty log
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut OrderBook {
        &mut self.book
    }

    pub fn events(&self) -> &EventLog {
        self.recorder.log()
    }

    /// Sequence number of the next recorded event
    pub fn next_t(&self) -> u64 {
        self.recorder.next_t()
    }

    pub fn branch(&self) -> Option<Branch> {
        self.branch
    }

    pub(crate) fn set_branch(&mut self, branch: Branch) {
        self.branch = Some(branch);
    }

    /// Record an event against the current book
    pub fn record(
        &mut self,
        actor: Actor,
        action: EventAction,
        price: Option<Price>,
        size: Option<Size>,
        note: Option<EventNote>,
    ) -> &Event {
        self.recorder
            .record(&self.book, actor, action, price, size, note)
    }

    /// Split into the final book, the event log and the branch taken
    pub fn into_parts(self) -> (OrderBook, EventLog, Option<Branch>) {
        (self.book, self.recorder.into_log(), self.branch)
    }
}
