//! Matching support
//!
//! The crossing predicate and the trade log consumed by the engine's
//! matching passes.

pub mod crossing;
pub mod trade_log;

pub use crossing::crosses;
pub use trade_log::TradeLog;
