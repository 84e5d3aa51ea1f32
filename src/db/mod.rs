//! Database Module
//!
//! Owns the embedded SurrealDB connection. All access goes through the
//! repositories in [`repository`]; document shapes live in [`models`].

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "store";
const DATABASE: &str = "store";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the embedded database under `db_dir`
    pub async fn new(db_dir: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(
            path = %db_dir.display(),
            "Database connection established (SurrealDB embedded, RocksDB)"
        );

        Ok(Self { db })
    }
}
