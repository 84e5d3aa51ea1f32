//! Product Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub description: Option<String>,
}

/// Create product payload (PUT /products)
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    /// Optional caller-supplied id, stored as-is; absent means generated.
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}
