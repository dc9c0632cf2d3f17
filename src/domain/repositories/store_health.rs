//! Store connectivity diagnostics.

use async_trait::async_trait;
use serde::Serialize;

/// Snapshot of the document store's reachability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreReport {
    pub connected: bool,
    /// Human-readable status line.
    pub status: String,
    /// Sample of collection names (at most 10).
    pub collections: Vec<String>,
}

impl StoreReport {
    pub const MAX_COLLECTIONS: usize = 10;
}

/// Probes the store without ever failing.
///
/// Errors are folded into the returned [`StoreReport`] so callers can
/// report degraded state instead of propagating a failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn report(&self) -> StoreReport;
}
