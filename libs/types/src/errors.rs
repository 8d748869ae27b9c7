//! Error taxonomy
//!
//! The engine rejects malformed input before touching any state; everything
//! else is encoded in return values rather than errors.

use thiserror::Error;

/// Rejection reasons for incoming orders
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid order type code: {0}")]
    InvalidOrderType(i32),

    #[error("Invalid side code: {0}")]
    InvalidSide(i32),
}
