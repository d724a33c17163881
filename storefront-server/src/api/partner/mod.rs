//! Partner API 模块 (商家后台)
//!
//! 商家身份通过 `?restaurant=` 查询参数传入 (认证不在范围内)。

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/partner", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/menu", get(handler::list_menu).post(handler::create_menu_item))
        .route(
            "/menu/{id}",
            put(handler::update_menu_item).delete(handler::delete_menu_item),
        )
        .route("/orders", get(handler::list_orders))
        .route("/orders/{id}/status", put(handler::advance_order))
        .route("/orders/{id}/cancel", post(handler::cancel_order))
        .route(
            "/restaurant",
            get(handler::get_restaurant).put(handler::update_restaurant),
        )
        .route("/stats", get(handler::stats))
}
