//! User Profile API 模块 (地址/支付方式)

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/user/profile", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get_profile).put(handler::update_profile))
        .route("/addresses", post(handler::add_address))
        .route(
            "/addresses/{id}",
            axum::routing::delete(handler::remove_address),
        )
        .route("/addresses/{id}/default", put(handler::set_default_address))
        .route("/payment-methods", post(handler::add_payment_method))
        .route(
            "/payment-methods/{id}",
            axum::routing::delete(handler::remove_payment_method),
        )
        .route(
            "/payment-methods/{id}/default",
            put(handler::set_default_payment_method),
        )
}
