//! Matching engine core
//!
//! Owns the book, the order index, and the trade log. Every entry point runs
//! to completion on the caller's thread; the only calls that leave the
//! engine are host-clock reads and diagnostics.

use std::sync::Arc;

use serde::Serialize;
use types::errors::OrderError;
use types::ids::{OrderId, UserId};
use types::order::{Order, OrderType, Side};
use types::trade::Trade;

use crate::book::OrderBook;
use crate::host::{HostClock, HostLog};
use crate::ids::IdGenerator;
use crate::matching::{crossing, TradeLog};

/// Continuous double-auction matching engine for a single instrument
pub struct MatchingEngine {
    book: OrderBook,
    trade_log: TradeLog,
    order_ids: IdGenerator,
    clock: Arc<dyn HostClock>,
    log: Arc<dyn HostLog>,
}

impl MatchingEngine {
    /// Create an empty engine wired to the host's clock and log sink
    pub fn new(clock: Arc<dyn HostClock>, log: Arc<dyn HostLog>) -> Self {
        Self {
            book: OrderBook::new(),
            trade_log: TradeLog::new(),
            order_ids: IdGenerator::new(""),
            clock,
            log,
        }
    }

    /// Accept an order, match it against the opposite book, and return its
    /// id. Malformed input is rejected before any state changes.
    ///
    /// Limit orders execute while the best opposite price crosses their
    /// limit and rest with any remainder. Market orders execute against
    /// whatever the opposite side offers; an unfillable remainder is
    /// recorded against the order but never rests in a book.
    pub fn add_order(
        &mut self,
        user: &str,
        order_type: OrderType,
        side: Side,
        price: f64,
        quantity: f64,
    ) -> Result<OrderId, OrderError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(OrderError::InvalidQuantity(
                "must be positive".to_string(),
            ));
        }
        // Market orders carry price 0 regardless of what the caller sent
        let price = match order_type {
            OrderType::Market => 0.0,
            OrderType::Limit => {
                if !price.is_finite() || price <= 0.0 {
                    return Err(OrderError::InvalidPrice(
                        "must be positive for limit orders".to_string(),
                    ));
                }
                price
            }
        };

        let now = self.clock.current_time();
        let id = OrderId::new(self.order_ids.next(now));
        let mut order = Order::new(
            id.clone(),
            UserId::from(user),
            order_type,
            side,
            price,
            quantity,
            now,
        );

        self.log.log_message(&format!(
            "new order {}: {:?} {:?} price={} quantity={}",
            order.id, order.side, order.order_type, order.price, order.quantity
        ));

        match order_type {
            OrderType::Market => self.match_market(&mut order),
            OrderType::Limit => self.match_limit(&mut order),
        }

        self.book.update(order);
        Ok(id)
    }

    /// Limit pass: stop at the first resting price that fails the crossing
    /// test, then rest the remainder in the order's own book.
    fn match_limit(&mut self, order: &mut Order) {
        let opposite = order.side.opposite();
        while order.remaining_quantity > 0.0 {
            let (resting_price, available) = match self.book.peek_best(opposite) {
                Some((price, entry)) => (price, entry.remaining_quantity),
                None => break,
            };
            if !crossing::crosses(order.side, order.price, resting_price) {
                break;
            }
            self.execute_fill(order, opposite, resting_price, available);
        }

        if order.is_restable() {
            self.book.insert(order);
        }
    }

    /// Market pass: every opposite order is eligible regardless of price.
    /// The remainder keeps its status in the index but is not inserted; a
    /// price of 0 cannot participate in price ordering.
    fn match_market(&mut self, order: &mut Order) {
        let opposite = order.side.opposite();
        while order.remaining_quantity > 0.0 {
            let (resting_price, available) = match self.book.peek_best(opposite) {
                Some((price, entry)) => (price, entry.remaining_quantity),
                None => break,
            };
            self.execute_fill(order, opposite, resting_price, available);
        }
    }

    /// Fill the taker against the best maker on `opposite` and record the
    /// trade at the maker's resting price.
    fn execute_fill(
        &mut self,
        order: &mut Order,
        opposite: Side,
        resting_price: f64,
        available: f64,
    ) {
        let fill = order.remaining_quantity.min(available);
        let maker = match self.book.fill_best(opposite, fill) {
            Some(maker) => maker,
            None => return,
        };
        order.add_fill(fill);

        let now = self.clock.current_time();
        let trade = self.trade_log.record(
            maker.user,
            order.user.clone(),
            order.side,
            resting_price,
            fill,
            now,
        );
        self.log.print_string(&format!(
            "[engine] trade executed: {}, price: {:.2}, quantity: {:.2}\n",
            trade.id, trade.price, trade.quantity
        ));
    }

    /// Every trade since the last clear, oldest first
    pub fn trades(&self) -> &[Trade] {
        self.trade_log.all()
    }

    /// Trades involving the user as maker or taker, oldest first. An
    /// unknown user yields an empty list.
    pub fn user_trades(&self, user: &str) -> Vec<Trade> {
        self.trade_log.for_user(&UserId::from(user))
    }

    /// Latest state of any order ever accepted
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.book.order(id)
    }

    /// Total unmatched quantity resting on one side
    pub fn resting_volume(&self, side: Side) -> f64 {
        self.book.total_volume(side)
    }

    /// Top-of-book view, up to `depth` levels per side
    pub fn book_snapshot(&self, depth: usize) -> BookSnapshot {
        BookSnapshot {
            bids: self.book.depth(Side::Buy, depth),
            asks: self.book.depth(Side::Sell, depth),
        }
    }

    /// Drop books, index, and trades. Id counters keep running so ids stay
    /// unique for the engine lifetime.
    pub fn clear(&mut self) {
        self.book.clear();
        self.trade_log.clear();
        self.log.log_message("order book cleared");
    }
}

/// Aggregated depth per side, best price first
#[derive(Debug, Clone, Serialize)]
pub struct BookSnapshot {
    pub bids: Vec<(f64, f64)>,
    pub asks: Vec<(f64, f64)>,
}
