//! Bookkeeping of users created by fixtures, deleted in one batch after each test.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::adapters::users_sea;
use crate::error::FixtureError;

/// Owned by the harness, never global. An id is registered only after its
/// user row committed.
#[derive(Debug, Default)]
pub struct CleanupRegistry {
    ids: Mutex<BTreeSet<i64>>,
    batches: AtomicU64,
}

impl CleanupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, user_id: i64) {
        self.ids.lock().insert(user_id);
    }

    /// Drop an id whose user was already deleted by other means.
    pub fn forget(&self, user_id: i64) -> bool {
        self.ids.lock().remove(&user_id)
    }

    pub fn contains(&self, user_id: i64) -> bool {
        self.ids.lock().contains(&user_id)
    }

    pub fn len(&self) -> usize {
        self.ids.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.lock().is_empty()
    }

    /// Number of batch deletes issued so far.
    pub fn batches_issued(&self) -> u64 {
        self.batches.load(Ordering::Relaxed)
    }

    /// Delete every registered user with one `id IN (...)` statement.
    ///
    /// Empty registry: no statement, returns 0. On failure the ids stay
    /// registered and the error propagates. Ids registered while the delete
    /// is in flight survive to the next flush.
    pub async fn flush<C: ConnectionTrait + Send + Sync>(&self, conn: &C) -> Result<u64, FixtureError> {
        let ids: Vec<i64> = self.ids.lock().iter().copied().collect();
        if ids.is_empty() {
            debug!("cleanup=skip nothing registered");
            return Ok(0);
        }

        self.batches.fetch_add(1, Ordering::Relaxed);
        let deleted = users_sea::delete_users_by_ids(conn, &ids).await?;

        let mut registered = self.ids.lock();
        for id in &ids {
            registered.remove(id);
        }
        info!(registered = ids.len(), deleted, "cleanup=flushed");
        Ok(deleted)
    }
}
