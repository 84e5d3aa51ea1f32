//! Client Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Client entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
}

/// Create client payload (PUT /clients)
///
/// All fields optional so presence is checked explicitly; missing name or
/// email is a validation error, not a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientCreate {
    /// Optional numeric suffix; non-numeric input is ignored and an id is
    /// generated instead.
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}
