//! Repository trait for the click log.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only storage for click records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoClickRepository`] - MongoDB implementation
/// - [`crate::infrastructure::persistence::MemoryClickRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn insert(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts all logged clicks.
    async fn count(&self) -> Result<u64, AppError>;
}
