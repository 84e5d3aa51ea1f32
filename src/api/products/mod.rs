//! Product API 模块

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/products", product_routes())
}

fn product_routes() -> Router<ServerState> {
    Router::new()
        .route("/", put(handler::create).get(handler::list))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}
