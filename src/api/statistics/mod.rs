//! Statistics API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/statistics", statistics_routes())
}

fn statistics_routes() -> Router<ServerState> {
    Router::new()
        .route("/top/clients", get(handler::top_clients))
        .route("/top/products", get(handler::top_products))
        .route("/orders/total", get(handler::total_orders))
        .route("/orders/totalValue", get(handler::total_value))
}
