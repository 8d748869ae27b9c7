use crate::error::AppError;
use crate::models::ClearResponse;
use crate::state::AppState;
use axum::{extract::State, Json};
use matching_engine::boundary;

/// `POST /clear`: drop all books, index entries, and trades
pub async fn clear_order_book(
    State(state): State<AppState>,
) -> Result<Json<ClearResponse>, AppError> {
    let mut engine = state
        .engine
        .lock()
        .map_err(|_| AppError::Internal("engine lock poisoned".into()))?;
    boundary::clear_order_book(&mut engine);

    Ok(Json(ClearResponse {
        status: "success",
        message: "Order book cleared",
    }))
}
