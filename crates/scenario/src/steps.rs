//! Scripted steps
//!
//! The script is a fixed, linear list of named steps. Each step takes the
//! run state and the validated parameters, mutates the book (or not),
//! records one or more events and returns how many it recorded.
//!
//! Lookups that expect an ALGO order act on the first match. When there is
//! no match the mutation is skipped and the event is still recorded, so the
//! event count only depends on `steps` and the branch taken.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use vigil_core::{Actor, EventAction, EventNote, Order, Side, Size};
use vigil_order_book::OrderFilter;

use crate::config::ScenarioParams;
use crate::state::{Branch, ScenarioState};

/// How far ALGO lifts its bid to regain the top of book
pub const REGAIN_OFFSET: Decimal = dec!(2.0);

/// Size of each passive OTHER bid
pub const OTHER_BID_SIZE: Size = 20;

/// Minimum increment of an OTHER bid over the current best bid
pub const MIN_LIQUIDITY_INCREMENT: Decimal = dec!(1.0);

/// How much ALGO cuts its ask per loop iteration
pub const ASK_TIGHTEN_STEP: Decimal = dec!(10.0);

/// Premium over fair price of the ask floor at k = 0
pub const ASK_FLOOR_PREMIUM: Decimal = dec!(10.0);

/// Per-iteration decay of the ask floor
pub const ASK_FLOOR_DECAY: Decimal = dec!(3.0);

/// Fixed number of events recorded outside the loop and the branch
pub const FIXED_EVENTS: usize = 5;

/// Events recorded by one liquidity-loop iteration
pub const EVENTS_PER_ITERATION: usize = 2;

/// Events recorded by the predatory branch
pub const PREDATORY_EVENTS: usize = 5;

/// Events recorded by the benign branch
pub const BENIGN_EVENTS: usize = 1;

/// Named steps of the script, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScriptStep {
    Init,
    HumanPost,
    AlgoRegain,
    LiquidityLoop,
    Check,
    Decision,
}

impl ScriptStep {
    /// The whole script
    pub const ALL: [ScriptStep; 6] = [
        ScriptStep::Init,
        ScriptStep::HumanPost,
        ScriptStep::AlgoRegain,
        ScriptStep::LiquidityLoop,
        ScriptStep::Check,
        ScriptStep::Decision,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScriptStep::Init => "INIT",
            ScriptStep::HumanPost => "HUMAN_POST",
            ScriptStep::AlgoRegain => "ALGO_REGAIN",
            ScriptStep::LiquidityLoop => "LIQUIDITY_LOOP",
            ScriptStep::Check => "CHECK",
            ScriptStep::Decision => "DECISION",
        }
    }

    /// Run this step, returning the number of events recorded
    pub fn apply(&self, state: &mut ScenarioState, params: &ScenarioParams) -> usize {
        match self {
            ScriptStep::Init => init(state, params),
            ScriptStep::HumanPost => human_post(state, params),
            ScriptStep::AlgoRegain => algo_regain(state, params),
            ScriptStep::LiquidityLoop => liquidity_loop(state, params),
            ScriptStep::Check => check(state, params),
            ScriptStep::Decision => decision(state, params),
        }
    }
}

impl std::fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Expected event count for a run with `steps` iterations ending in `branch`
pub fn expected_event_count(steps: u32, branch: Branch) -> usize {
    let tail = match branch {
        Branch::Predatory => PREDATORY_EVENTS,
        Branch::Benign => BENIGN_EVENTS,
    };
    FIXED_EVENTS + EVENTS_PER_ITERATION * steps as usize + tail
}

fn algo_near(price: Decimal, params: &ScenarioParams) -> OrderFilter {
    OrderFilter::owned_by(Actor::Algo).near(price, params.price_tolerance)
}

/// Seed one ALGO bid and one ALGO ask
pub fn init(state: &mut ScenarioState, params: &ScenarioParams) -> usize {
    let book = state.book_mut();
    book.insert(
        Side::Bid,
        Order::new(params.algo_bid, params.size_algo, Actor::Algo),
    );
    book.insert(
        Side::Ask,
        Order::new(params.algo_ask, params.size_algo, Actor::Algo),
    );

    state.record(
        Actor::Init,
        EventAction::InitialQuotes,
        None,
        None,
        Some(EventNote::SeedQuotes),
    );
    1
}

/// HUMAN posts a limit buy
pub fn human_post(state: &mut ScenarioState, params: &ScenarioParams) -> usize {
    state.book_mut().insert(
        Side::Bid,
        Order::new(params.human_buy, params.size_human, Actor::Human),
    );

    state.record(
        Actor::Human,
        EventAction::PostBid,
        Some(params.human_buy),
        Some(params.size_human),
        Some(EventNote::HumanLimitBuy),
    );
    1
}

/// ALGO lifts its seed bid (or posts a new one) to `algo_bid + 2`
pub fn algo_regain(state: &mut ScenarioState, params: &ScenarioParams) -> usize {
    let target = params.algo_bid + REGAIN_OFFSET;
    let filter = algo_near(params.algo_bid, params);

    let replaced = state
        .book_mut()
        .replace_first_match(Side::Bid, |o| filter.matches(o), target);

    match replaced {
        Some(old) => {
            state.record(
                Actor::Algo,
                EventAction::ReplaceBid,
                Some(target),
                Some(old.size),
                Some(EventNote::RegainTopOfBook),
            );
        }
        None => {
            log::debug!(
                "No ALGO bid near {}; posting a new bid at {}",
                params.algo_bid,
                target
            );
            state
                .book_mut()
                .insert(Side::Bid, Order::new(target, params.size_algo, Actor::Algo));
            state.record(
                Actor::Algo,
                EventAction::PostBid,
                Some(target),
                Some(params.size_algo),
                Some(EventNote::RegainTopOfBook),
            );
        }
    }
    1
}

/// One iteration: OTHER steps in above the best bid, ALGO tightens its ask
pub fn liquidity_iteration(state: &mut ScenarioState, params: &ScenarioParams, k: u32) -> usize {
    let k_dec = Decimal::from(k);

    // a. passive liquidity above the current best bid
    let best_bid = state
        .book()
        .best_bid()
        .map(|o| o.price)
        .unwrap_or(params.human_buy);
    let bid_price = best_bid + MIN_LIQUIDITY_INCREMENT.max(k_dec);
    state
        .book_mut()
        .insert(Side::Bid, Order::new(bid_price, OTHER_BID_SIZE, Actor::Other));
    state.record(
        Actor::Other,
        EventAction::PostBid,
        Some(bid_price),
        Some(OTHER_BID_SIZE),
        Some(EventNote::PassiveLiquidity),
    );

    // b. competitive tightening of the first ALGO ask
    let algo = OrderFilter::owned_by(Actor::Algo);
    let tightened = state
        .book()
        .first_match(Side::Ask, |o| algo.matches(o))
        .map(|ask| {
            let floor = params.fair_price + ASK_FLOOR_PREMIUM - k_dec * ASK_FLOOR_DECAY;
            (ask.price - ASK_TIGHTEN_STEP).max(floor)
        });

    let (price, size) = match tightened {
        Some(new_price) => {
            let old = state
                .book_mut()
                .replace_first_match(Side::Ask, |o| algo.matches(o), new_price);
            (Some(new_price), old.map(|o| o.size))
        }
        None => {
            log::debug!("No ALGO ask to tighten at k={}", k);
            (None, None)
        }
    };
    state.record(
        Actor::Algo,
        EventAction::ReplaceAsk,
        price,
        size,
        Some(EventNote::CompetitiveTightening),
    );
    2
}

/// Run `steps` liquidity iterations
pub fn liquidity_loop(state: &mut ScenarioState, params: &ScenarioParams) -> usize {
    (0..params.steps)
        .map(|k| liquidity_iteration(state, params, k))
        .sum()
}

/// Checkpoint of the mid price, no mutation
pub fn check(state: &mut ScenarioState, _params: &ScenarioParams) -> usize {
    let mid = state.book().mid_price();
    state.record(
        Actor::Check,
        EventAction::CheckMid,
        mid,
        None,
        Some(EventNote::Checkpoint),
    );
    1
}

/// Compare mid with the threshold and play out the matching branch
pub fn decision(state: &mut ScenarioState, params: &ScenarioParams) -> usize {
    let threshold = params.threshold();
    let mid = state.book().mid_price();
    let reached = mid.is_some_and(|m| m >= threshold);

    state.record(
        Actor::Check,
        EventAction::EvaluateThreshold,
        Some(threshold),
        None,
        Some(if reached {
            EventNote::ThresholdReached
        } else {
            EventNote::ThresholdNotReached
        }),
    );

    let branch_events = if reached {
        log::info!("Mid {:?} reached threshold {}: predatory branch", mid, threshold);
        state.set_branch(Branch::Predatory);
        predatory_branch(state, params)
    } else {
        log::info!("Mid {:?} below threshold {}: benign branch", mid, threshold);
        state.set_branch(Branch::Benign);
        benign_branch(state, params)
    };
    1 + branch_events
}

/// Elevated sell at the threshold, narrative fill, then revert all quotes
pub fn predatory_branch(state: &mut ScenarioState, params: &ScenarioParams) -> usize {
    let threshold = params.threshold();

    // Elevated ask
    state.book_mut().insert(
        Side::Ask,
        Order::new(threshold, params.size_human, Actor::Algo),
    );
    state.record(
        Actor::Algo,
        EventAction::PostAsk,
        Some(threshold),
        Some(params.size_human),
        Some(EventNote::ElevatedSell),
    );

    // Narrative fill: the ask stays in the book until withdrawn below
    state.record(
        Actor::Human,
        EventAction::TradeFill,
        Some(threshold),
        Some(params.size_human),
        Some(EventNote::FillAtElevatedAsk),
    );

    let elevated = algo_near(threshold, params);
    let removed = state
        .book_mut()
        .remove_all(Side::Ask, |o| elevated.matches(o));
    if removed.is_empty() {
        log::debug!("No ALGO ask near {} to withdraw", threshold);
    }
    let removed_size: Size = removed.iter().map(|o| o.size).sum();
    state.record(
        Actor::Algo,
        EventAction::RemoveAsk,
        Some(threshold),
        (!removed.is_empty()).then_some(removed_size),
        Some(EventNote::WithdrawElevatedAsk),
    );

    // Revert bid
    let regained = algo_near(params.algo_bid + REGAIN_OFFSET, params);
    let old_bid = state
        .book_mut()
        .replace_first_match(Side::Bid, |o| regained.matches(o), params.algo_bid);
    if old_bid.is_none() {
        log::debug!(
            "No ALGO bid near {} to revert",
            params.algo_bid + REGAIN_OFFSET
        );
    }
    state.record(
        Actor::Algo,
        EventAction::ReplaceBid,
        Some(params.algo_bid),
        old_bid.map(|o| o.size),
        Some(EventNote::Revert),
    );

    // Revert ask
    let algo = OrderFilter::owned_by(Actor::Algo);
    let old_ask = state
        .book_mut()
        .replace_first_match(Side::Ask, |o| algo.matches(o), params.algo_ask);
    if old_ask.is_none() {
        log::debug!("No ALGO ask to revert");
    }
    state.record(
        Actor::Algo,
        EventAction::ReplaceAsk,
        Some(params.algo_ask),
        old_ask.map(|o| o.size),
        Some(EventNote::Revert),
    );

    5
}

/// Threshold not reached: record the outcome only
pub fn benign_branch(state: &mut ScenarioState, _params: &ScenarioParams) -> usize {
    state.record(
        Actor::Result,
        EventAction::NoPredatorySell,
        None,
        None,
        Some(EventNote::ThresholdNotReached),
    );
    1
}
