//! Order API Handlers

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::api::{AppJson, CreatedResponse};
use crate::core::ServerState;
use crate::db::models::OrderCreate;
use crate::db::repository::{OrderRepository, record_key};
use crate::ident::EntityKind;
use crate::utils::AppResult;

/// PUT /orders - 创建订单
///
/// The whole request validates before anything is persisted; the response
/// carries the newly assigned numeric suffix of the order id.
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderCreate>,
) -> AppResult<impl IntoResponse> {
    let repo = OrderRepository::new(state.db.clone(), state.sequences.clone());
    let order = repo.create(payload).await?;

    let key = order.id.as_ref().map(record_key).unwrap_or_default();
    let id = EntityKind::Order.strip(&key).to_string();
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
