//! User store port for subscription state updates.
//!
//! Defines the single write operation the reconciler performs: apply a
//! subscription patch to every user record matched by a lookup key.
//!
//! # Design
//!
//! - **Absolute state**: patches carry full values, never deltas, so
//!   reapplying one is harmless
//! - **Anomaly surfacing**: the outcome reports how many rows matched so
//!   callers can log zero-match and multi-match cases

use async_trait::async_trait;

use crate::domain::billing::{LookupKey, SubscriptionPatch};

/// Port for user record updates.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Apply `patch` to every user record matched by `key`.
    ///
    /// Matching zero rows is not an error; the outcome carries the count.
    async fn update_where(
        &self,
        key: &LookupKey,
        patch: &SubscriptionPatch,
    ) -> Result<UpdateOutcome, StoreError>;
}

/// Result of a user record update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Number of rows the patch was applied to.
    pub rows_affected: u64,
}

impl UpdateOutcome {
    /// True when exactly one record was updated, the expected case.
    pub fn is_exact(&self) -> bool {
        self.rows_affected == 1
    }
}

/// Errors from user store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Query failed to execute.
    #[error("query failed: {0}")]
    Query(String),

    /// Store could not be reached or a connection could not be acquired.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
