//! Trade types
//!
//! A trade records one execution between a resting maker order and an
//! incoming taker order. Trades are immutable once recorded.

use crate::ids::{TradeId, UserId};
use crate::order::Side;
use serde::{Deserialize, Serialize};

/// An executed trade
///
/// The serde field order and names are the wire format rendered by the
/// query surface: `id`, `maker`, `taker`, `taker_side`, `price`,
/// `quantity`, `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    /// User whose order was resting in the book
    pub maker: UserId,
    /// User whose order initiated the execution
    pub taker: UserId,
    /// Side of the aggressor
    pub taker_side: Side,
    /// Execution price: always the maker's limit price
    pub price: f64,
    /// Executed quantity, strictly positive
    pub quantity: f64,
    /// Host-clock seconds at execution
    pub timestamp: i64,
}

impl Trade {
    pub fn new(
        id: TradeId,
        maker: UserId,
        taker: UserId,
        taker_side: Side,
        price: f64,
        quantity: f64,
        timestamp: i64,
    ) -> Self {
        Self {
            id,
            maker,
            taker,
            taker_side,
            price,
            quantity,
            timestamp,
        }
    }

    /// Check whether the given user participated as maker or taker
    pub fn involves(&self, user: &UserId) -> bool {
        self.maker == *user || self.taker == *user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trade() -> Trade {
        Trade::new(
            TradeId::new("65f2a1c0-trade-1"),
            UserId::from("alice"),
            UserId::from("bob"),
            Side::Buy,
            100.0,
            1.5,
            1710000000,
        )
    }

    #[test]
    fn test_involves_maker_and_taker() {
        let trade = sample_trade();
        assert!(trade.involves(&UserId::from("alice")));
        assert!(trade.involves(&UserId::from("bob")));
        assert!(!trade.involves(&UserId::from("carol")));
    }

    #[test]
    fn test_trade_wire_format() {
        let json = serde_json::to_string(&sample_trade()).unwrap();
        assert_eq!(
            json,
            "{\"id\":\"65f2a1c0-trade-1\",\"maker\":\"alice\",\"taker\":\"bob\",\
             \"taker_side\":\"buy\",\"price\":100.0,\"quantity\":1.5,\
             \"timestamp\":1710000000}"
        );
    }

    #[test]
    fn test_trade_roundtrip() {
        let trade = sample_trade();
        let json = serde_json::to_string(&trade).unwrap();
        let back: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(trade, back);
    }
}
