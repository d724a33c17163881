//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`restaurants`] - 餐厅浏览/过滤/详情 (顾客)
//! - [`orders`] - 结算与历史订单 (顾客)
//! - [`partner`] - 菜单/订单/资料/统计 (商家后台)
//! - [`rider`] - 接单与配送流转 (骑手端)
//! - [`admin`] - 全局订单与统计 (管理员)
//! - [`profile`] - 用户资料 (地址/支付方式)
//!
//! 认证不在范围内，商家/骑手身份通过显式的 `restaurant` / `rider`
//! 查询参数传入。

use axum::Router;

use crate::core::ServerState;

pub mod admin;
pub mod health;
pub mod orders;
pub mod partner;
pub mod profile;
pub mod restaurants;
pub mod rider;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// 合并所有资源路由
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(restaurants::router())
        .merge(orders::router())
        .merge(partner::router())
        .merge(rider::router())
        .merge(admin::router())
        .merge(profile::router())
}
