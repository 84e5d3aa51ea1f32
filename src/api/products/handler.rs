//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::api::{AppJson, CreatedResponse};
use crate::core::ServerState;
use crate::db::models::ProductCreate;
use crate::db::repository::{ProductRepository, record_key};
use crate::ident::EntityKind;
use crate::utils::{AppError, AppResult};

/// Query params for the product listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// Product in the listing (description omitted, as the detail view carries it)
#[derive(Debug, Serialize)]
pub struct ProductListItem {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
}

/// Full product detail
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// PUT /products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ProductCreate>,
) -> AppResult<impl IntoResponse> {
    let repo = ProductRepository::new(state.db.clone(), state.sequences.clone());
    let key = repo.create(payload).await?;

    let id = EntityKind::Product.strip(&key).to_string();
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /products?category= - 商品列表，可选分类过滤
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<ProductListItem>>> {
    let repo = ProductRepository::new(state.db.clone(), state.sequences.clone());
    let products = repo.find_all(query.category).await?;

    let items = products
        .into_iter()
        .map(|product| {
            let key = product.id.as_ref().map(record_key).unwrap_or_default();
            ProductListItem {
                id: EntityKind::Product.strip(&key).to_string(),
                name: product.name,
                category: product.category,
                price: product.price,
            }
        })
        .collect();

    Ok(Json(items))
}

/// GET /products/{id} - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductDetail>> {
    let repo = ProductRepository::new(state.db.clone(), state.sequences.clone());
    let (key, product) = repo
        .resolve(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ProductDetail {
        id: EntityKind::Product.strip(&key).to_string(),
        name: product.name,
        category: product.category,
        description: product.description,
        price: product.price,
    }))
}

/// DELETE /products/{id} - 删除商品并修剪订单/库存
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = ProductRepository::new(state.db.clone(), state.sequences.clone());
    repo.delete_with_prune(&id).await?;

    Ok(Json(MessageResponse {
        message: "Product and all related information deleted".to_string(),
    }))
}
