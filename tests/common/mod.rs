//! Shared test setup: a server state backed by a throwaway embedded store.

use store_server::{Config, ServerState};
use tempfile::TempDir;

/// Build a fresh `ServerState` over a temp directory.
///
/// The `TempDir` must be kept alive for the duration of the test; dropping
/// it deletes the database files out from under the store.
pub async fn test_state() -> (TempDir, ServerState) {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("initialize server state");
    (tmp, state)
}
