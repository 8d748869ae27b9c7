//! Trade log
//!
//! Append-only record of every execution, in the order it happened. The log
//! mints its own trade ids and is truncated only by an explicit clear.

use crate::ids::IdGenerator;
use types::ids::{TradeId, UserId};
use types::order::Side;
use types::trade::Trade;

/// Insertion-ordered trade history
#[derive(Debug)]
pub struct TradeLog {
    ids: IdGenerator,
    trades: Vec<Trade>,
}

impl TradeLog {
    pub fn new() -> Self {
        Self {
            ids: IdGenerator::new("trade-"),
            trades: Vec::new(),
        }
    }

    /// Record an execution and return the stored trade
    pub fn record(
        &mut self,
        maker: UserId,
        taker: UserId,
        taker_side: Side,
        price: f64,
        quantity: f64,
        now: i64,
    ) -> &Trade {
        let trade = Trade::new(
            TradeId::new(self.ids.next(now)),
            maker,
            taker,
            taker_side,
            price,
            quantity,
            now,
        );
        self.trades.push(trade);
        // Just pushed, so the log is non-empty
        self.trades.last().expect("trade log is non-empty")
    }

    /// Every trade, oldest first
    pub fn all(&self) -> &[Trade] {
        &self.trades
    }

    /// Trades where the user was maker or taker, oldest first
    pub fn for_user(&self, user: &UserId) -> Vec<Trade> {
        self.trades
            .iter()
            .filter(|trade| trade.involves(user))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Drop the history. Trade ids keep counting up so they stay unique for
    /// the engine lifetime.
    pub fn clear(&mut self) {
        self.trades.clear();
    }
}

impl Default for TradeLog {
    fn default() -> Self {
        Self::new()
    }
}
