//! Repository trait for affiliate link data access.

use crate::domain::entities::{AffiliateLink, NewAffiliateLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for affiliate links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoLinkRepository`] - MongoDB implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the store's unique index on
    /// `code` rejects the insert.
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn insert(&self, new_link: NewAffiliateLink) -> Result<AffiliateLink, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(AffiliateLink))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<AffiliateLink>, AppError>;

    /// Lists all links, keeping only those tagged with `tag` when provided.
    async fn list(&self, tag: Option<String>) -> Result<Vec<AffiliateLink>, AppError>;

    /// Counts all registered links.
    async fn count(&self) -> Result<u64, AppError>;
}
