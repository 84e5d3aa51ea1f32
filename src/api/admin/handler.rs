//! Admin API Handlers

use axum::{extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Collections emptied by the global cleanup. Counters are included: the
/// cleanup is the one operation allowed to reset sequence state.
const CLEANUP_TABLES: &[&str] = &["client", "product", "order", "counter"];

/// POST /cleanup - 删除所有客户/商品/订单数据并重置序列
pub async fn cleanup(State(state): State<ServerState>) -> AppResult<StatusCode> {
    for table in CLEANUP_TABLES {
        state
            .db
            .query(format!("DELETE {table}"))
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .check()
            .map_err(|e| AppError::database(e.to_string()))?;
    }

    tracing::info!("All client, product and order data deleted");
    Ok(StatusCode::NO_CONTENT)
}
