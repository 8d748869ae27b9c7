use crate::handlers::{admin, order, trades};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/order", post(order::create_order))
        .route("/trades", get(trades::get_trades))
        .route("/book", get(trades::get_book))
        .route("/clear", post(admin::clear_order_book))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
