//! Link and click totals.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// Raw totals across the whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_links: u64,
    pub total_clicks: u64,
}

/// Service for the two global counters.
///
/// The counts are independent queries; no joins or time windows.
pub struct StatsService<L, C>
where
    L: LinkRepository + ?Sized,
    C: ClickRepository + ?Sized,
{
    link_repository: Arc<L>,
    click_repository: Arc<C>,
}

impl<L, C> StatsService<L, C>
where
    L: LinkRepository + ?Sized,
    C: ClickRepository + ?Sized,
{
    /// Creates a new statistics service.
    pub fn new(link_repository: Arc<L>, click_repository: Arc<C>) -> Self {
        Self {
            link_repository,
            click_repository,
        }
    }

    /// Counts registered links and logged clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if either count cannot reach the store.
    pub async fn stats(&self) -> Result<Stats, AppError> {
        let total_links = self.link_repository.count().await?;
        let total_clicks = self.click_repository.count().await?;

        Ok(Stats {
            total_links,
            total_clicks,
        })
    }
}
