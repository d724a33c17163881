//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{CheckoutRequest, Order};

use crate::core::ServerState;
use crate::store;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

/// POST /api/orders - 结算下单
pub async fn checkout(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<Order>> {
    let mut cart = store::build_cart(&state.catalog, &payload.restaurant_id, &payload.items)?;
    let order = store::place_order(&state, &mut cart, &payload)?;
    Ok(Json(order))
}

/// GET /api/orders - 历史订单，最新在前 (「再来一单」列表)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Order>> {
    Json(state.orders.list_recent(query.limit.unwrap_or(50)))
}

/// GET /api/orders/{id} - 订单详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state
        .orders
        .get(&id)
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(Json(order))
}
