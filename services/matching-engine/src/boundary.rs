//! Host-facing entry points
//!
//! The untrusted side drives the engine through these adapters: plain
//! scalars in, caller-provided byte buffers out, mirroring the narrow ABI of
//! the confidentiality boundary. No panic crosses this layer; every failure
//! is encoded as a zero return with the buffer untouched.

use crate::engine::MatchingEngine;
use types::order::{OrderType, Side};

/// Accept an order described by boundary codes (type: 0 = limit,
/// 1 = market; side: 0 = buy, 1 = sell) and write its id into `id_buf`.
///
/// Returns the id's byte length, or 0 when the input is invalid or the
/// buffer is too small.
pub fn add_order(
    engine: &mut MatchingEngine,
    user: &str,
    order_type: i32,
    side: i32,
    price: f64,
    quantity: f64,
    id_buf: &mut [u8],
) -> usize {
    let order_type = match OrderType::try_from(order_type) {
        Ok(order_type) => order_type,
        Err(_) => return 0,
    };
    let side = match Side::try_from(side) {
        Ok(side) => side,
        Err(_) => return 0,
    };
    let id = match engine.add_order(user, order_type, side, price, quantity) {
        Ok(id) => id,
        Err(_) => return 0,
    };
    write_bytes(id.as_str().as_bytes(), id_buf)
}

/// Serialize the full trade log as JSON into `out`.
///
/// Returns the byte length written, or 0 when the output exceeds the
/// buffer. Callers retry with a larger buffer.
pub fn get_trades(engine: &MatchingEngine, out: &mut [u8]) -> usize {
    match serde_json::to_vec(engine.trades()) {
        Ok(json) => write_bytes(&json, out),
        Err(_) => 0,
    }
}

/// Serialize the trades involving `user` as JSON into `out`.
///
/// An unknown user serializes to `[]`.
pub fn get_user_trades(engine: &MatchingEngine, user: &str, out: &mut [u8]) -> usize {
    match serde_json::to_vec(&engine.user_trades(user)) {
        Ok(json) => write_bytes(&json, out),
        Err(_) => 0,
    }
}

/// Serialize a depth snapshot (up to `depth` levels per side) into `out`.
pub fn get_order_book(engine: &MatchingEngine, depth: usize, out: &mut [u8]) -> usize {
    match serde_json::to_vec(&engine.book_snapshot(depth)) {
        Ok(json) => write_bytes(&json, out),
        Err(_) => 0,
    }
}

/// Drop all books, index entries, and trades
pub fn clear_order_book(engine: &mut MatchingEngine) {
    engine.clear();
}

fn write_bytes(src: &[u8], out: &mut [u8]) -> usize {
    if src.len() > out.len() {
        return 0;
    }
    out[..src.len()].copy_from_slice(src);
    src.len()
}
