//! Event log entries recorded by the scenario script
//!
//! Actions and notes are typed tags. Their serialized form is the text that
//! appears in exported logs, so a rename here changes the export format.

use serde::{Deserialize, Serialize};

use super::Actor;
use crate::values::{Price, Size};

/// What happened at a recorded step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventAction {
    #[serde(rename = "initial quotes")]
    InitialQuotes,
    #[serde(rename = "post bid")]
    PostBid,
    #[serde(rename = "post ask")]
    PostAsk,
    #[serde(rename = "replace bid")]
    ReplaceBid,
    #[serde(rename = "replace ask")]
    ReplaceAsk,
    #[serde(rename = "remove ask")]
    RemoveAsk,
    /// Narrative execution; never derived from book state
    #[serde(rename = "trade(fill)")]
    TradeFill,
    #[serde(rename = "check mid")]
    CheckMid,
    #[serde(rename = "evaluate threshold")]
    EvaluateThreshold,
    #[serde(rename = "no predatory sell")]
    NoPredatorySell,
}

impl EventAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventAction::InitialQuotes => "initial quotes",
            EventAction::PostBid => "post bid",
            EventAction::PostAsk => "post ask",
            EventAction::ReplaceBid => "replace bid",
            EventAction::ReplaceAsk => "replace ask",
            EventAction::RemoveAsk => "remove ask",
            EventAction::TradeFill => "trade(fill)",
            EventAction::CheckMid => "check mid",
            EventAction::EvaluateThreshold => "evaluate threshold",
            EventAction::NoPredatorySell => "no predatory sell",
        }
    }

    /// True for in-place requotes on either side
    pub fn is_replace(&self) -> bool {
        matches!(self, EventAction::ReplaceBid | EventAction::ReplaceAsk)
    }
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a step happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventNote {
    #[serde(rename = "seed quotes")]
    SeedQuotes,
    #[serde(rename = "human limit buy")]
    HumanLimitBuy,
    #[serde(rename = "algo regains top of book")]
    RegainTopOfBook,
    #[serde(rename = "passive liquidity")]
    PassiveLiquidity,
    #[serde(rename = "competitive tightening")]
    CompetitiveTightening,
    #[serde(rename = "checkpoint")]
    Checkpoint,
    #[serde(rename = "threshold reached")]
    ThresholdReached,
    #[serde(rename = "threshold not reached")]
    ThresholdNotReached,
    #[serde(rename = "elevated sell")]
    ElevatedSell,
    #[serde(rename = "fill at elevated ask")]
    FillAtElevatedAsk,
    #[serde(rename = "withdraw elevated ask")]
    WithdrawElevatedAsk,
    #[serde(rename = "revert")]
    Revert,
}

impl EventNote {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventNote::SeedQuotes => "seed quotes",
            EventNote::HumanLimitBuy => "human limit buy",
            EventNote::RegainTopOfBook => "algo regains top of book",
            EventNote::PassiveLiquidity => "passive liquidity",
            EventNote::CompetitiveTightening => "competitive tightening",
            EventNote::Checkpoint => "checkpoint",
            EventNote::ThresholdReached => "threshold reached",
            EventNote::ThresholdNotReached => "threshold not reached",
            EventNote::ElevatedSell => "elevated sell",
            EventNote::FillAtElevatedAsk => "fill at elevated ask",
            EventNote::WithdrawElevatedAsk => "withdraw elevated ask",
            EventNote::Revert => "revert",
        }
    }
}

impl std::fmt::Display for EventNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded step with the top of book as it stood after the step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Sequence number, 0-based, no gaps
    pub t: u64,
    pub actor: Actor,
    pub action: EventAction,
    pub price: Option<Price>,
    pub size: Option<Size>,
    pub note: Option<EventNote>,
    pub best_bid: Option<Price>,
    pub best_ask: Option<Price>,
    pub mid: Option<Price>,
}

impl Event {
    pub fn is_by(&self, actor: Actor) -> bool {
        self.actor == actor
    }
}

/// Append-only, t-ordered sequence of events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number the next appended event must carry
    pub fn next_t(&self) -> u64 {
        self.events.len() as u64
    }

    /// Append an event, stamping it with the next sequence number
    pub fn append(&mut self, mut event: Event) -> &Event {
        event.t = self.next_t();
        self.events.push(event);
        &self.events[self.events.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn get(&self, t: u64) -> Option<&Event> {
        self.events.get(usize::try_from(t).ok()?)
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
