//! Bid (buy-side) book
//!
//! Buy orders sorted by price descending, so the highest bid matches first.
//! At each price level orders are kept in FIFO order.

use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use types::order::Order;

use super::price_level::{PriceLevel, RestingOrder};

/// Buy side of the order book
#[derive(Debug, Default)]
pub struct BidBook {
    /// Levels keyed ascending; the best bid is the last key
    levels: BTreeMap<OrderedFloat<f64>, PriceLevel>,
}

impl BidBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an order at the back of its price level
    pub fn insert(&mut self, order: &Order) {
        let level = self
            .levels
            .entry(OrderedFloat(order.price))
            .or_insert_with(PriceLevel::new);
        level.insert(RestingOrder {
            order_id: order.id.clone(),
            user: order.user.clone(),
            remaining_quantity: order.remaining_quantity,
        });
    }

    /// Get the best (highest) bid price
    pub fn best_price(&self) -> Option<f64> {
        self.levels.keys().next_back().map(|price| price.0)
    }

    /// Peek the oldest order at the best price
    pub fn peek_best(&self) -> Option<(f64, &RestingOrder)> {
        let (price, level) = self.levels.iter().next_back()?;
        level.peek_front().map(|entry| (price.0, entry))
    }

    /// Remove and return the oldest order at the best price, dropping the
    /// level once it is empty
    pub fn pop_best(&mut self) -> Option<RestingOrder> {
        let (price, level) = self.levels.iter_mut().next_back()?;
        let price = *price;
        let entry = level.pop_front();
        if level.is_empty() {
            self.levels.remove(&price);
        }
        entry
    }

    /// Reduce the oldest order at the best price in place
    pub fn reduce_best(&mut self, quantity: f64) -> bool {
        match self.levels.values_mut().next_back() {
            Some(level) => level.reduce_front(quantity),
            None => false,
        }
    }

    /// Top-of-book snapshot: up to `depth` levels, best first
    pub fn depth_snapshot(&self, depth: usize) -> Vec<(f64, f64)> {
        self.levels
            .iter()
            .rev()
            .take(depth)
            .map(|(price, level)| (price.0, level.total_quantity()))
            .collect()
    }

    /// Sum of remaining quantity across every resting bid
    pub fn total_volume(&self) -> f64 {
        self.levels.values().map(PriceLevel::total_quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }
}
