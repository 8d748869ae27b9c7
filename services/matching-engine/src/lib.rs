//! Confidential matching engine
//!
//! Continuous double-auction matching for a single instrument under
//! price-time priority. The engine is built to live inside a
//! confidentiality boundary: the host supplies the clock and the log sink
//! through `host`, and all ingress goes through the buffer-based adapters
//! in `boundary`.
//!
//! **Key invariants:**
//! - Price-time priority strictly enforced; FIFO within a price level
//! - Execution price is always the resting (maker) order's limit price
//! - Order index entries are never removed; terminal statuses stay visible
//! - The trade log is append-only between clears

pub mod book;
pub mod boundary;
pub mod engine;
pub mod host;
pub mod ids;
pub mod matching;

pub use engine::{BookSnapshot, MatchingEngine};
pub use host::{HostClock, HostLog, SystemClock, TracingLog};
