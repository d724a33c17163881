//! Rider API 模块 (骑手端)
//!
//! 骑手身份通过 `?rider=` 查询参数传入 (认证不在范围内)。

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/rider", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/orders", get(handler::list_orders).post(handler::accept_order))
        .route("/orders/{id}/status", put(handler::advance_order))
        .route("/stats", get(handler::stats))
}
