//! Sequence Counter Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Per-entity-type durable monotonic counter (`counter:<kind>`)
///
/// Initialized at `-1` so the first post-increment allocation yields `0`.
/// Never deleted during normal operation; reset only by the global cleanup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub value: i64,
}
