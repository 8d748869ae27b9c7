//! Order book
//!
//! Two priority-ordered sides plus the order index. The index maps every
//! order id ever accepted to its latest state; entries are updated in place
//! and never removed, so terminal statuses stay visible after a fill.

pub mod ask_book;
pub mod bid_book;
pub mod price_level;

pub use ask_book::AskBook;
pub use bid_book::BidBook;
pub use price_level::{PriceLevel, RestingOrder};

use std::collections::HashMap;
use types::ids::{OrderId, UserId};
use types::order::{Order, Side};

/// Result of applying a fill to the best resting order
#[derive(Debug, Clone)]
pub struct MakerFill {
    pub order_id: OrderId,
    pub user: UserId,
    /// True when the maker was fully consumed and left its book
    pub filled: bool,
}

/// Both book sides and the order index
#[derive(Debug, Default)]
pub struct OrderBook {
    bids: BidBook,
    asks: AskBook,
    orders: HashMap<OrderId, Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an order into its side's book. The order must still have
    /// something to fill.
    pub fn insert(&mut self, order: &Order) {
        debug_assert!(order.remaining_quantity > 0.0);
        match order.side {
            Side::Buy => self.bids.insert(order),
            Side::Sell => self.asks.insert(order),
        }
    }

    /// Write an order into the index under its id
    pub fn update(&mut self, order: Order) {
        self.orders.insert(order.id.clone(), order);
    }

    /// Read an order's latest state from the index
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    /// Best resting order on the given side: (price, oldest entry)
    pub fn peek_best(&self, side: Side) -> Option<(f64, &RestingOrder)> {
        match side {
            Side::Buy => self.bids.peek_best(),
            Side::Sell => self.asks.peek_best(),
        }
    }

    /// Remove the best resting order on the given side
    pub fn pop_best(&mut self, side: Side) -> Option<RestingOrder> {
        match side {
            Side::Buy => self.bids.pop_best(),
            Side::Sell => self.asks.pop_best(),
        }
    }

    /// Apply a fill to the best resting order on `side`, updating both the
    /// level and the index entry. A maker left with nothing is removed from
    /// its book and marked filled; otherwise it keeps its queue position.
    pub fn fill_best(&mut self, side: Side, quantity: f64) -> Option<MakerFill> {
        let (order_id, user, maker_done) = {
            let (_, entry) = self.peek_best(side)?;
            (
                entry.order_id.clone(),
                entry.user.clone(),
                entry.remaining_quantity - quantity <= 0.0,
            )
        };

        if maker_done {
            let _ = self.pop_best(side);
        } else {
            match side {
                Side::Buy => self.bids.reduce_best(quantity),
                Side::Sell => self.asks.reduce_best(quantity),
            };
        }

        if let Some(maker) = self.orders.get_mut(&order_id) {
            maker.add_fill(quantity);
        }

        Some(MakerFill {
            order_id,
            user,
            filled: maker_done,
        })
    }

    /// Top-of-book snapshot for one side, best price first
    pub fn depth(&self, side: Side, depth: usize) -> Vec<(f64, f64)> {
        match side {
            Side::Buy => self.bids.depth_snapshot(depth),
            Side::Sell => self.asks.depth_snapshot(depth),
        }
    }

    /// Total unmatched volume resting on one side
    pub fn total_volume(&self, side: Side) -> f64 {
        match side {
            Side::Buy => self.bids.total_volume(),
            Side::Sell => self.asks.total_volume(),
        }
    }

    pub fn is_empty(&self, side: Side) -> bool {
        match side {
            Side::Buy => self.bids.is_empty(),
            Side::Sell => self.asks.is_empty(),
        }
    }

    /// Drop both sides and the index
    pub fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
        self.orders.clear();
    }
}
