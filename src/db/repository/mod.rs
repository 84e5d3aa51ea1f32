//! Repository Module
//!
//! Provides data access for the SurrealDB collections. The logical entity
//! identifier is the record key, so point lookups and deletes are key
//! operations; cross-collection work (cascades, aggregation) goes through
//! queries.

pub mod client;
pub mod order;
pub mod product;
pub mod sequence;
pub mod statistics;

// Re-exports
pub use client::ClientRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use sequence::SequenceRepository;
pub use statistics::StatisticsRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Extract the plain record key (the logical identifier) from a record id
pub fn record_key(id: &RecordId) -> String {
    id.key().to_string()
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
