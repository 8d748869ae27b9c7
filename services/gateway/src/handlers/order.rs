use crate::error::AppError;
use crate::models::{OrderParams, OrderResponse};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use matching_engine::boundary;
use types::order::OrderType;

/// `POST /order?user=…&type={limit,market}&side={buy,sell}&price=…&quantity=…`
///
/// Validates the parameters, hands the order to the engine through the
/// boundary, and returns the generated order id.
pub async fn create_order(
    State(state): State<AppState>,
    Query(params): Query<OrderParams>,
) -> Result<Json<OrderResponse>, AppError> {
    if !params.quantity.is_finite() || params.quantity <= 0.0 {
        return Err(AppError::BadRequest("Quantity must be positive".into()));
    }
    let price = match params.order_type {
        OrderType::Market => 0.0,
        OrderType::Limit => {
            let price = params.price.ok_or_else(|| {
                AppError::BadRequest("Price is required for limit orders".into())
            })?;
            if !price.is_finite() || price <= 0.0 {
                return Err(AppError::BadRequest(
                    "Price must be positive for limit orders".into(),
                ));
            }
            price
        }
    };

    let mut id_buf = [0u8; 64];
    let written = {
        let mut engine = state
            .engine
            .lock()
            .map_err(|_| AppError::Internal("engine lock poisoned".into()))?;
        boundary::add_order(
            &mut engine,
            &params.user,
            params.order_type.code(),
            params.side.code(),
            price,
            params.quantity,
            &mut id_buf,
        )
    };

    if written == 0 {
        return Err(AppError::Internal("Failed to add order".into()));
    }

    let order_id = String::from_utf8_lossy(&id_buf[..written]).into_owned();
    Ok(Json(OrderResponse { order_id }))
}
