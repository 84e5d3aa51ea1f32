//! Sequence Repository
//!
//! Durable, monotonically increasing identifier allocation per entity kind.
//! Backed by one `counter:<kind>` record per kind, created lazily so the
//! first allocation returns `0`.

use std::sync::Arc;

use dashmap::DashMap;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::Mutex;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Counter;
use crate::ident::EntityKind;

/// Sequence generator over the `counter` table
///
/// Must be shared as a single instance (owned by `ServerState`): the keyed
/// locks only serialize allocations that go through the same instance.
#[derive(Clone)]
pub struct SequenceRepository {
    base: BaseRepository,
    /// Per-kind initialization/increment lock. The store's upsert is atomic
    /// per record; the lock serializes in-process callers so a lazily
    /// created counter is never initialized twice.
    locks: Arc<DashMap<EntityKind, Arc<Mutex<()>>>>,
}

impl SequenceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
            locks: Arc::new(DashMap::new()),
        }
    }

    /// Allocate the next identifier for `kind`
    ///
    /// Returns `0` on the first allocation for a kind, then strictly
    /// increasing values with no duplicates, even under concurrent callers.
    /// A failed store round-trip surfaces an error; no identifier is
    /// fabricated. Numbers consumed by later-failing workflows stay
    /// consumed (gaps are acceptable, duplicates are not).
    pub async fn next(&self, kind: EntityKind) -> RepoResult<i64> {
        let lock = self
            .locks
            .entry(kind)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        let mut result = self
            .base
            .db()
            .query("UPSERT type::thing('counter', $key) SET value = (value ?? -1) + 1 RETURN AFTER")
            .bind(("key", kind.table().to_string()))
            .await?;
        let counters: Vec<Counter> = result.take(0)?;

        counters
            .into_iter()
            .next()
            .map(|c| c.value)
            .ok_or_else(|| RepoError::Database("Counter upsert returned no record".to_string()))
    }
}
