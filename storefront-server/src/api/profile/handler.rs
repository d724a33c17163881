//! User Profile API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{
    Address, AddressCreate, PaymentMethod, PaymentMethodCreate, UserProfile, UserProfileUpdate,
};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/user/profile - 用户资料
pub async fn get_profile(State(state): State<ServerState>) -> Json<UserProfile> {
    Json(state.profile.get())
}

/// PUT /api/user/profile - 更新标量字段
pub async fn update_profile(
    State(state): State<ServerState>,
    Json(payload): Json<UserProfileUpdate>,
) -> AppResult<Json<UserProfile>> {
    Ok(Json(state.profile.update(payload)?))
}

/// POST /api/user/profile/addresses - 新增地址
pub async fn add_address(
    State(state): State<ServerState>,
    Json(payload): Json<AddressCreate>,
) -> AppResult<Json<Address>> {
    Ok(Json(state.profile.add_address(payload)?))
}

/// DELETE /api/user/profile/addresses/{id} - 删除地址
pub async fn remove_address(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserProfile>> {
    Ok(Json(state.profile.remove_address(&id)?))
}

/// PUT /api/user/profile/addresses/{id}/default - 设置默认地址
pub async fn set_default_address(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserProfile>> {
    Ok(Json(state.profile.set_default_address(&id)?))
}

/// POST /api/user/profile/payment-methods - 新增支付方式
pub async fn add_payment_method(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentMethodCreate>,
) -> AppResult<Json<PaymentMethod>> {
    Ok(Json(state.profile.add_payment_method(payload)?))
}

/// DELETE /api/user/profile/payment-methods/{id} - 删除支付方式
pub async fn remove_payment_method(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserProfile>> {
    Ok(Json(state.profile.remove_payment_method(&id)?))
}

/// PUT /api/user/profile/payment-methods/{id}/default - 设置默认支付方式
pub async fn set_default_payment_method(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserProfile>> {
    Ok(Json(state.profile.set_default_payment_method(&id)?))
}
