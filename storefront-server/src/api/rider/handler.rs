//! Rider API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::Order;

use crate::core::ServerState;
use crate::store::{RiderOrderView, RiderStats};
use crate::utils::{AppError, AppResult};

/// 骑手身份 (无认证，显式传参)
#[derive(Debug, Deserialize)]
pub struct RiderScope {
    pub rider: String,
}

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub rider: String,
    /// available | active | history
    #[serde(rename = "type")]
    pub view: String,
}

/// 接单请求
#[derive(Debug, Deserialize)]
pub struct AcceptRequest {
    pub order_id: String,
    pub rider_id: String,
}

/// GET /api/rider/orders?rider=&type= - 骑手订单视图
pub async fn list_orders(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let view = RiderOrderView::parse(&query.view)
        .ok_or_else(|| AppError::validation(format!("Unknown order view {:?}", query.view)))?;
    Ok(Json(state.orders.rider_orders(&query.rider, view)))
}

/// POST /api/rider/orders - 接单 (READY -> ASSIGNED)
pub async fn accept_order(
    State(state): State<ServerState>,
    Json(payload): Json<AcceptRequest>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.accept(&payload.order_id, &payload.rider_id)?))
}

/// PUT /api/rider/orders/{id}/status?rider= - 推进配送状态
pub async fn advance_order(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(scope): Query<RiderScope>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.advance_for_rider(&id, &scope.rider)?))
}

/// GET /api/rider/stats?rider= - 骑手统计
pub async fn stats(
    State(state): State<ServerState>,
    Query(scope): Query<RiderScope>,
) -> Json<RiderStats> {
    Json(state.orders.rider_stats(&scope.rider))
}
