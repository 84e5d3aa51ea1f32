//! Statistics API Handlers
//!
//! Read-only aggregation endpoints over the order collection.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::StatisticsRepository;
use crate::db::repository::statistics::{TopClient, TopProduct};
use crate::utils::AppResult;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TopClientsResponse {
    pub clients: Vec<TopClient>,
}

#[derive(Debug, Serialize)]
pub struct TopProductsResponse {
    pub message: String,
    pub products: Vec<TopProduct>,
}

#[derive(Debug, Serialize)]
pub struct TotalOrdersResponse {
    pub message: String,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct TotalValueResponse {
    pub message: String,
    #[serde(rename = "totalValue")]
    pub total_value: f64,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /statistics/top/clients - 按订单数排名前 10 的客户
pub async fn top_clients(
    State(state): State<ServerState>,
) -> AppResult<Json<TopClientsResponse>> {
    let repo = StatisticsRepository::new(state.db.clone());
    let clients = repo.top_clients().await?;
    Ok(Json(TopClientsResponse { clients }))
}

/// GET /statistics/top/products - 按销量排名前 10 的商品
pub async fn top_products(
    State(state): State<ServerState>,
) -> AppResult<Json<TopProductsResponse>> {
    let repo = StatisticsRepository::new(state.db.clone());
    let products = repo.top_products().await?;
    Ok(Json(TopProductsResponse {
        message: "Top products".to_string(),
        products,
    }))
}

/// GET /statistics/orders/total - 订单总数
pub async fn total_orders(
    State(state): State<ServerState>,
) -> AppResult<Json<TotalOrdersResponse>> {
    let repo = StatisticsRepository::new(state.db.clone());
    let total = repo.total_orders().await?;
    Ok(Json(TotalOrdersResponse {
        message: "Total number of orders".to_string(),
        total,
    }))
}

/// GET /statistics/orders/totalValue - 订单总金额
pub async fn total_value(
    State(state): State<ServerState>,
) -> AppResult<Json<TotalValueResponse>> {
    let repo = StatisticsRepository::new(state.db.clone());
    let total_value = repo.total_value().await?;
    Ok(Json(TotalValueResponse {
        message: "Total value of orders".to_string(),
        total_value,
    }))
}
