//! Crossing detection
//!
//! Decides whether an incoming limit order may execute against the best
//! resting price. Market orders never consult this check.

use types::order::Side;

/// Check if an incoming limit order crosses the resting price.
///
/// A buy crosses when the resting ask is at or below its limit; a sell
/// crosses when the resting bid is at or above its limit.
pub fn crosses(taker_side: Side, taker_price: f64, resting_price: f64) -> bool {
    match taker_side {
        Side::Buy => resting_price <= taker_price,
        Side::Sell => resting_price >= taker_price,
    }
}
