use crate::error::AppError;
use crate::models::{BookParams, TradesParams};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use matching_engine::{boundary, MatchingEngine};

/// A serialized response larger than this is a bug, not a retry candidate
const MAX_RESPONSE_BUFFER: usize = 4 * 1024 * 1024;

/// `GET /trades[?user=…]`
///
/// Returns the engine's trade JSON verbatim: the whole log, or only the
/// trades involving `user`.
pub async fn get_trades(
    State(state): State<AppState>,
    Query(params): Query<TradesParams>,
) -> Result<Response, AppError> {
    let json = fetch_with_retry(&state, |engine, buf| match &params.user {
        Some(user) => boundary::get_user_trades(engine, user, buf),
        None => boundary::get_trades(engine, buf),
    })?;
    Ok(json_response(json))
}

/// `GET /book[?depth=N]`: top-of-book snapshot
pub async fn get_book(
    State(state): State<AppState>,
    Query(params): Query<BookParams>,
) -> Result<Response, AppError> {
    let json = fetch_with_retry(&state, |engine, buf| {
        boundary::get_order_book(engine, params.depth, buf)
    })?;
    Ok(json_response(json))
}

/// Call a boundary serializer, growing the buffer until the output fits.
/// The boundary reports an undersized buffer as a zero-length write.
fn fetch_with_retry<F>(state: &AppState, fetch: F) -> Result<Vec<u8>, AppError>
where
    F: Fn(&MatchingEngine, &mut [u8]) -> usize,
{
    let mut size = state.response_buffer.max(2);
    loop {
        let mut buf = vec![0u8; size];
        let written = {
            let engine = state
                .engine
                .lock()
                .map_err(|_| AppError::Internal("engine lock poisoned".into()))?;
            fetch(&engine, &mut buf)
        };
        if written > 0 {
            buf.truncate(written);
            return Ok(buf);
        }
        if size >= MAX_RESPONSE_BUFFER {
            return Err(AppError::Internal(
                "serialized response exceeds maximum buffer".into(),
            ));
        }
        size *= 2;
    }
}

fn json_response(body: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
