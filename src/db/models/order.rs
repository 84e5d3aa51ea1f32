//! Order Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order entity
///
/// Immutable once created, except for line-item pruning when a referenced
/// product is deleted. `total_price` is fixed at creation time:
/// `total_price == Σ line.total_price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Owning client reference (`client_<n>`), non-owning from the order side
    pub client_id: String,
    pub items: Vec<OrderLine>,
    pub total_price: f64,
}

/// One product+quantity entry within an order
///
/// `unit_price` is a snapshot of the product's price at order time and does
/// not track later price changes. Stored camelCase, matching the wire form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Create order payload (PUT /orders)
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreate {
    #[serde(rename = "clientId")]
    pub client_id: Option<String>,
    pub items: Option<Vec<OrderItemRequest>>,
}

/// One requested line item, validated per-item during order assembly
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: Option<String>,
    pub quantity: Option<i64>,
}
