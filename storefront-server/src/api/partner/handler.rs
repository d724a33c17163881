//! Partner API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{
    MenuItem, MenuItemCreate, MenuItemUpdate, Order, Restaurant, RestaurantProfileUpdate,
};

use crate::core::ServerState;
use crate::store::PartnerStats;
use crate::utils::{AppError, AppResult};

/// 商家身份 (无认证，显式传参)
#[derive(Debug, Deserialize)]
pub struct PartnerScope {
    pub restaurant: String,
}

/// GET /api/partner/menu?restaurant= - 本店菜单
pub async fn list_menu(
    State(state): State<ServerState>,
    Query(scope): Query<PartnerScope>,
) -> AppResult<Json<Vec<MenuItem>>> {
    require_restaurant(&state, &scope.restaurant)?;
    Ok(Json(state.catalog.menu(&scope.restaurant)))
}

/// POST /api/partner/menu - 新增菜单项
pub async fn create_menu_item(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(state.catalog.add_item(payload)?))
}

/// PUT /api/partner/menu/{id} - 更新菜单项
pub async fn update_menu_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(state.catalog.update_item(&id, payload)?))
}

/// DELETE /api/partner/menu/{id} - 删除菜单项
pub async fn delete_menu_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.catalog.remove_item(&id)?;
    Ok(Json(true))
}

/// GET /api/partner/orders?restaurant= - 本店订单，最新在前
pub async fn list_orders(
    State(state): State<ServerState>,
    Query(scope): Query<PartnerScope>,
) -> AppResult<Json<Vec<Order>>> {
    require_restaurant(&state, &scope.restaurant)?;
    Ok(Json(state.orders.list_for_restaurant(&scope.restaurant)))
}

/// PUT /api/partner/orders/{id}/status - 推进订单 (PENDING..PREPARING)
pub async fn advance_order(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(scope): Query<PartnerScope>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.advance_for_restaurant(&id, &scope.restaurant)?))
}

/// POST /api/partner/orders/{id}/cancel - 取消订单 (任何非终态)
pub async fn cancel_order(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(scope): Query<PartnerScope>,
) -> AppResult<Json<Order>> {
    // 归属校验后再走链外取消
    let order = state
        .orders
        .get(&id)
        .filter(|o| o.restaurant_id == scope.restaurant)
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(Json(state.orders.cancel(&order.id)?))
}

/// GET /api/partner/restaurant?restaurant= - 本店资料
pub async fn get_restaurant(
    State(state): State<ServerState>,
    Query(scope): Query<PartnerScope>,
) -> AppResult<Json<Restaurant>> {
    let restaurant = require_restaurant(&state, &scope.restaurant)?;
    Ok(Json(restaurant))
}

/// PUT /api/partner/restaurant?restaurant= - 更新本店资料
pub async fn update_restaurant(
    State(state): State<ServerState>,
    Query(scope): Query<PartnerScope>,
    Json(payload): Json<RestaurantProfileUpdate>,
) -> AppResult<Json<Restaurant>> {
    Ok(Json(state.catalog.update_profile(&scope.restaurant, payload)?))
}

/// GET /api/partner/stats?restaurant= - 本店统计
pub async fn stats(
    State(state): State<ServerState>,
    Query(scope): Query<PartnerScope>,
) -> AppResult<Json<PartnerStats>> {
    require_restaurant(&state, &scope.restaurant)?;
    let menu_size = state.catalog.menu(&scope.restaurant).len();
    Ok(Json(state.orders.partner_stats(&scope.restaurant, menu_size)))
}

fn require_restaurant(state: &ServerState, restaurant_id: &str) -> AppResult<Restaurant> {
    state
        .catalog
        .get(restaurant_id)
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", restaurant_id)))
}
