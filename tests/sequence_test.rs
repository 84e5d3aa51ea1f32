//! Sequence generator tests: zero-based allocation, per-kind independence,
//! uniqueness under concurrency, durability across a store reopen.

mod common;

use std::collections::BTreeSet;

use store_server::{Config, EntityKind, ServerState};

#[tokio::test]
async fn first_allocation_is_zero_then_increasing() {
    let (_tmp, state) = common::test_state().await;

    assert_eq!(state.sequences.next(EntityKind::Order).await.unwrap(), 0);
    assert_eq!(state.sequences.next(EntityKind::Order).await.unwrap(), 1);
    assert_eq!(state.sequences.next(EntityKind::Order).await.unwrap(), 2);
}

#[tokio::test]
async fn kinds_count_independently() {
    let (_tmp, state) = common::test_state().await;

    assert_eq!(state.sequences.next(EntityKind::Client).await.unwrap(), 0);
    assert_eq!(state.sequences.next(EntityKind::Client).await.unwrap(), 1);

    // Other kinds are untouched by client allocations
    assert_eq!(state.sequences.next(EntityKind::Product).await.unwrap(), 0);
    assert_eq!(state.sequences.next(EntityKind::Order).await.unwrap(), 0);
}

#[tokio::test]
async fn concurrent_allocations_never_duplicate() {
    let (_tmp, state) = common::test_state().await;

    let mut handles = Vec::new();
    for _ in 0..50 {
        let sequences = state.sequences.clone();
        handles.push(tokio::spawn(async move {
            sequences.next(EntityKind::Order).await.unwrap()
        }));
    }

    let mut values = BTreeSet::new();
    for handle in handles {
        let value = handle.await.unwrap();
        assert!(values.insert(value), "duplicate sequence value {value}");
    }

    // Exactly 0..=49, no gaps: nothing else allocated against this kind
    assert_eq!(values.len(), 50);
    assert_eq!(values.first().copied(), Some(0));
    assert_eq!(values.last().copied(), Some(49));
}

#[tokio::test]
async fn counters_survive_reopen() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);

    {
        let state = ServerState::initialize(&config).await.unwrap();
        assert_eq!(state.sequences.next(EntityKind::Product).await.unwrap(), 0);
        assert_eq!(state.sequences.next(EntityKind::Product).await.unwrap(), 1);
    }

    // Reopen over the same directory: allocation resumes, never restarts
    let state = ServerState::initialize(&config).await.unwrap();
    assert_eq!(state.sequences.next(EntityKind::Product).await.unwrap(), 2);
}
