//! Client API 模块

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/clients", client_routes())
}

fn client_routes() -> Router<ServerState> {
    Router::new()
        .route("/", put(handler::create))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/{id}/orders", get(handler::list_orders))
}
