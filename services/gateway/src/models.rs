use serde::{Deserialize, Serialize};
use types::order::{OrderType, Side};

/// Query parameters for `POST /order`
#[derive(Debug, Clone, Deserialize)]
pub struct OrderParams {
    pub user: String,
    /// Defaults to a limit order when omitted
    #[serde(rename = "type", default = "default_order_type")]
    pub order_type: OrderType,
    pub side: Side,
    /// Required for limit orders; ignored for market orders
    pub price: Option<f64>,
    pub quantity: f64,
}

fn default_order_type() -> OrderType {
    OrderType::Limit
}

/// Query parameters for `GET /trades`
#[derive(Debug, Clone, Deserialize)]
pub struct TradesParams {
    pub user: Option<String>,
}

/// Query parameters for `GET /book`
#[derive(Debug, Clone, Deserialize)]
pub struct BookParams {
    #[serde(default = "default_depth")]
    pub depth: usize,
}

fn default_depth() -> usize {
    10
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub order_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub status: &'static str,
    pub message: &'static str,
}
