//! End-to-end matching scenarios
//!
//! Drives the engine through the full order lifecycle with a
//! manually-stepped host clock and checks the observable outcomes: trades
//! emitted, resting state, query results, and serialized output.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use matching_engine::boundary;
use matching_engine::host::{HostClock, HostLog};
use matching_engine::MatchingEngine;
use types::order::{OrderStatus, OrderType, Side};

/// Host clock the tests advance by hand
struct ManualClock(AtomicI64);

impl ManualClock {
    fn new(start: i64) -> Arc<Self> {
        Arc::new(Self(AtomicI64::new(start)))
    }

    fn set(&self, seconds: i64) {
        self.0.store(seconds, Ordering::SeqCst);
    }
}

impl HostClock for ManualClock {
    fn current_time(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

struct NullLog;

impl HostLog for NullLog {
    fn log_message(&self, _text: &str) {}
    fn print_string(&self, _text: &str) {}
}

fn engine_at(start: i64) -> (MatchingEngine, Arc<ManualClock>) {
    let clock = ManualClock::new(start);
    let engine = MatchingEngine::new(clock.clone(), Arc::new(NullLog));
    (engine, clock)
}

#[test]
fn partial_fill_leaves_maker_resting() {
    let (mut engine, _) = engine_at(1710000000);

    let a = engine
        .add_order("alice", OrderType::Limit, Side::Sell, 100.0, 2.0)
        .unwrap();
    engine
        .add_order("bob", OrderType::Limit, Side::Buy, 100.0, 1.0)
        .unwrap();

    let trades = engine.trades();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].maker.as_str(), "alice");
    assert_eq!(trades[0].taker.as_str(), "bob");
    assert_eq!(trades[0].taker_side, Side::Buy);
    assert_eq!(trades[0].price, 100.0);
    assert_eq!(trades[0].quantity, 1.0);

    let maker = engine.order(&a).unwrap();
    assert_eq!(maker.status, OrderStatus::PartiallyFilled);
    assert_eq!(maker.remaining_quantity, 1.0);
    assert_eq!(engine.resting_volume(Side::Sell), 1.0);
}

#[test]
fn market_buy_sweeps_levels_at_maker_prices() {
    let (mut engine, _) = engine_at(1710000000);

    engine
        .add_order("alice", OrderType::Limit, Side::Sell, 100.0, 2.0)
        .unwrap();
    engine
        .add_order("carol", OrderType::Limit, Side::Sell, 101.0, 5.0)
        .unwrap();
    let b = engine
        .add_order("bob", OrderType::Market, Side::Buy, 0.0, 4.0)
        .unwrap();

    let trades = engine.trades();
    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].maker.as_str(), "alice");
    assert_eq!((trades[0].price, trades[0].quantity), (100.0, 2.0));
    assert_eq!(trades[1].maker.as_str(), "carol");
    assert_eq!((trades[1].price, trades[1].quantity), (101.0, 2.0));

    assert!(engine.order(&b).unwrap().is_filled());
}

#[test]
fn market_buy_against_empty_book_emits_nothing() {
    let (mut engine, _) = engine_at(1710000000);

    let b = engine
        .add_order("bob", OrderType::Market, Side::Buy, 0.0, 1.0)
        .unwrap();

    assert!(engine.trades().is_empty());
    let order = engine.order(&b).unwrap();
    assert_eq!(order.remaining_quantity, 1.0);
    assert_eq!(engine.resting_volume(Side::Sell), 0.0);
    assert_eq!(engine.resting_volume(Side::Buy), 0.0);

    let mut out = [0u8; 64];
    let n = boundary::get_trades(&engine, &mut out);
    assert_eq!(&out[..n], b"[]");
}

#[test]
fn earlier_timestamp_wins_at_equal_price() {
    let (mut engine, clock) = engine_at(10);

    engine
        .add_order("alice", OrderType::Limit, Side::Buy, 100.0, 1.0)
        .unwrap();
    clock.set(11);
    engine
        .add_order("dan", OrderType::Limit, Side::Buy, 100.0, 1.0)
        .unwrap();
    clock.set(12);
    engine
        .add_order("bob", OrderType::Limit, Side::Sell, 100.0, 1.0)
        .unwrap();

    let trades = engine.trades();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].maker.as_str(), "alice");
    assert_eq!(trades[0].taker_side, Side::Sell);
}

#[test]
fn user_queries_filter_and_preserve_order() {
    let (mut engine, _) = engine_at(1710000000);

    engine
        .add_order("alice", OrderType::Limit, Side::Sell, 100.0, 1.0)
        .unwrap();
    engine
        .add_order("bob", OrderType::Limit, Side::Buy, 100.0, 1.0)
        .unwrap();
    engine
        .add_order("carol", OrderType::Limit, Side::Sell, 101.0, 1.0)
        .unwrap();
    engine
        .add_order("dan", OrderType::Limit, Side::Buy, 101.0, 1.0)
        .unwrap();

    assert_eq!(engine.trades().len(), 2);

    let alice = engine.user_trades("alice");
    assert_eq!(alice.len(), 1);
    assert_eq!(alice[0].maker.as_str(), "alice");

    assert!(engine.user_trades("zoe").is_empty());
}

#[test]
fn clear_then_add_starts_from_scratch() {
    let (mut engine, _) = engine_at(1710000000);

    engine
        .add_order("alice", OrderType::Limit, Side::Sell, 100.0, 2.0)
        .unwrap();
    engine
        .add_order("bob", OrderType::Limit, Side::Buy, 100.0, 1.0)
        .unwrap();
    assert!(!engine.trades().is_empty());

    boundary::clear_order_book(&mut engine);

    let x = engine
        .add_order("x", OrderType::Limit, Side::Buy, 50.0, 1.0)
        .unwrap();
    assert_eq!(engine.order(&x).unwrap().status, OrderStatus::Open);
    assert_eq!(engine.resting_volume(Side::Buy), 1.0);
    assert!(engine.trades().is_empty());
}

#[test]
fn one_trade_per_consumed_maker() {
    let (mut engine, _) = engine_at(1710000000);

    engine
        .add_order("alice", OrderType::Limit, Side::Sell, 100.0, 1.0)
        .unwrap();
    engine
        .add_order("carol", OrderType::Limit, Side::Sell, 100.5, 1.0)
        .unwrap();
    engine
        .add_order("dan", OrderType::Limit, Side::Sell, 101.0, 1.0)
        .unwrap();
    engine
        .add_order("bob", OrderType::Limit, Side::Buy, 101.0, 3.0)
        .unwrap();

    let trades = engine.trades();
    assert_eq!(trades.len(), 3);
    assert_eq!(trades[0].price, 100.0);
    assert_eq!(trades[1].price, 100.5);
    assert_eq!(trades[2].price, 101.0);
    for trade in trades {
        assert!(trade.quantity > 0.0);
        assert!(trade.price > 0.0);
        assert_eq!(trade.taker.as_str(), "bob");
    }
}

#[test]
fn quantity_is_conserved_per_order() {
    let (mut engine, _) = engine_at(1710000000);

    let a = engine
        .add_order("alice", OrderType::Limit, Side::Sell, 100.0, 5.0)
        .unwrap();
    engine
        .add_order("bob", OrderType::Limit, Side::Buy, 100.0, 2.0)
        .unwrap();
    engine
        .add_order("carol", OrderType::Market, Side::Buy, 0.0, 1.5)
        .unwrap();

    let filled: f64 = engine
        .trades()
        .iter()
        .filter(|trade| trade.maker.as_str() == "alice")
        .map(|trade| trade.quantity)
        .sum();

    let order = engine.order(&a).unwrap();
    assert_eq!(order.quantity, order.remaining_quantity + filled);
    assert_eq!(engine.resting_volume(Side::Sell), order.remaining_quantity);
}

#[test]
fn serialized_trades_are_stable_across_reads() {
    let (mut engine, _) = engine_at(1710000000);

    engine
        .add_order("alice", OrderType::Limit, Side::Sell, 100.0, 2.0)
        .unwrap();
    engine
        .add_order("bob", OrderType::Market, Side::Buy, 0.0, 1.0)
        .unwrap();

    let mut first = vec![0u8; 4096];
    let mut second = vec![0u8; 4096];
    let n1 = boundary::get_trades(&engine, &mut first);
    let n2 = boundary::get_trades(&engine, &mut second);

    assert!(n1 > 0);
    assert_eq!(&first[..n1], &second[..n2]);
}

#[test]
fn trade_ids_are_unique_within_a_burst() {
    let (mut engine, _) = engine_at(1710000000);

    for i in 0..10 {
        let user = format!("seller-{}", i);
        engine
            .add_order(&user, OrderType::Limit, Side::Sell, 100.0, 1.0)
            .unwrap();
    }
    engine
        .add_order("bob", OrderType::Market, Side::Buy, 0.0, 10.0)
        .unwrap();

    let trades = engine.trades();
    assert_eq!(trades.len(), 10);
    let mut ids: Vec<_> = trades.iter().map(|trade| trade.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}
