//! Admin API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use shared::models::{Order, OrderStatus};

use crate::core::ServerState;
use crate::store::AdminStats;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    /// 可选状态过滤 (SCREAMING_SNAKE_CASE 令牌)
    pub status: Option<String>,
}

/// GET /api/admin/orders?status= - 全局订单列表
pub async fn list_orders(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let status = match query.status.as_deref() {
        Some(token) => Some(
            OrderStatus::parse(token)
                .ok_or_else(|| AppError::validation(format!("Unknown order status {token:?}")))?,
        ),
        None => None,
    };
    Ok(Json(state.orders.list_by_status(status)))
}

/// GET /api/admin/stats - 全局统计
pub async fn stats(State(state): State<ServerState>) -> Json<AdminStats> {
    Json(state.orders.admin_stats())
}
