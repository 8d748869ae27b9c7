//! Order lifecycle types
//!
//! An order is an immutable identity (id, user, type, side, price, quantity,
//! timestamp) plus mutable fill state (remaining quantity and status).

use crate::errors::OrderError;
use crate::ids::{OrderId, UserId};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
///
/// Boundary code: 0 = buy, 1 = sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Numeric code carried across the boundary
    pub fn code(&self) -> i32 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }
}

impl TryFrom<i32> for Side {
    type Error = OrderError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Side::Buy),
            1 => Ok(Side::Sell),
            other => Err(OrderError::InvalidSide(other)),
        }
    }
}

/// Order type
///
/// Boundary code: 0 = limit, 1 = market. Market orders carry price 0 and
/// execute at whatever the opposite side offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit,
    Market,
}

impl OrderType {
    /// Numeric code carried across the boundary
    pub fn code(&self) -> i32 {
        match self {
            OrderType::Limit => 0,
            OrderType::Market => 1,
        }
    }
}

impl TryFrom<i32> for OrderType {
    type Error = OrderError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(OrderType::Limit),
            1 => Ok(OrderType::Market),
            other => Err(OrderError::InvalidOrderType(other)),
        }
    }
}

/// Order status
///
/// Transitions: Open -> PartiallyFilled -> Filled, or Open -> Filled
/// directly. Cancelled is reserved; nothing in the engine produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Open,
    PartiallyFilled,
    Filled,
    Cancelled,
}

impl OrderStatus {
    /// Check if the status is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Filled | OrderStatus::Cancelled)
    }
}

/// A single order and its fill state
///
/// Prices and quantities are IEEE-754 doubles; completion is detected with
/// `remaining_quantity <= 0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user: UserId,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: Side,
    /// Limit price; 0 for market orders
    pub price: f64,
    /// Original size, strictly positive
    pub quantity: f64,
    /// Unfilled size, in [0, quantity], monotonically non-increasing
    pub remaining_quantity: f64,
    pub status: OrderStatus,
    /// Host-clock seconds at creation
    pub timestamp: i64,
}

impl Order {
    /// Create a new open order with nothing filled yet
    pub fn new(
        id: OrderId,
        user: UserId,
        order_type: OrderType,
        side: Side,
        price: f64,
        quantity: f64,
        timestamp: i64,
    ) -> Self {
        Self {
            id,
            user,
            order_type,
            side,
            price,
            quantity,
            remaining_quantity: quantity,
            status: OrderStatus::Open,
            timestamp,
        }
    }

    /// Apply a fill, decrementing the remaining quantity and advancing the
    /// status. A remaining quantity at or below zero means filled.
    pub fn add_fill(&mut self, quantity: f64) {
        self.remaining_quantity -= quantity;
        if self.remaining_quantity <= 0.0 {
            self.remaining_quantity = 0.0;
            self.status = OrderStatus::Filled;
        } else {
            self.status = OrderStatus::PartiallyFilled;
        }
    }

    /// Check if the order is completely filled
    pub fn is_filled(&self) -> bool {
        matches!(self.status, OrderStatus::Filled)
    }

    /// Check if the order may still rest in a book
    pub fn is_restable(&self) -> bool {
        matches!(self.status, OrderStatus::Open | OrderStatus::PartiallyFilled)
    }
}
