//! Client API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::api::{AppJson, CreatedResponse};
use crate::core::ServerState;
use crate::db::models::{ClientCreate, OrderLine};
use crate::db::repository::{ClientRepository, OrderRepository, record_key};
use crate::ident::EntityKind;
use crate::utils::{AppError, AppResult};

/// Client as it appears on the wire (numeric-suffix id)
#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// One order in a client's order listing
#[derive(Debug, Serialize)]
pub struct OrderSummary {
    pub id: String,
    pub items: Vec<OrderLine>,
    pub total_price: f64,
}

#[derive(Debug, Serialize)]
pub struct ClientOrdersResponse {
    pub message: String,
    pub orders: Vec<OrderSummary>,
}

/// PUT /clients - 创建客户
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ClientCreate>,
) -> AppResult<impl IntoResponse> {
    let repo = ClientRepository::new(state.db.clone(), state.sequences.clone());
    let key = repo.create(payload).await?;

    let id = EntityKind::Client.strip(&key).to_string();
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /clients/{id} - 获取客户
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ClientResponse>> {
    let repo = ClientRepository::new(state.db.clone(), state.sequences.clone());
    let client = repo
        .find(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Client not found"))?;

    let key = client.id.as_ref().map(record_key).unwrap_or_default();
    Ok(Json(ClientResponse {
        id: EntityKind::Client.strip(&key).to_string(),
        name: client.name,
        email: client.email,
    }))
}

/// DELETE /clients/{id} - 删除客户并级联删除关联数据
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = ClientRepository::new(state.db.clone(), state.sequences.clone());
    repo.delete_cascade(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /clients/{id}/orders - 客户订单列表
pub async fn list_orders(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ClientOrdersResponse>> {
    let client_key = format!("{}{}", EntityKind::Client.prefix(), id);

    let repo = OrderRepository::new(state.db.clone(), state.sequences.clone());
    let orders = repo.find_by_client(&client_key).await?;

    if orders.is_empty() {
        return Err(AppError::not_found("No orders found for this client"));
    }

    let orders = orders
        .into_iter()
        .map(|order| {
            let key = order.id.as_ref().map(record_key).unwrap_or_default();
            OrderSummary {
                id: EntityKind::Order.strip(&key).to_string(),
                items: order.items,
                total_price: order.total_price,
            }
        })
        .collect();

    Ok(Json(ClientOrdersResponse {
        message: "List of orders for client".to_string(),
        orders,
    }))
}
