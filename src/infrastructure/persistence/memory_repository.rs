//! In-process repository implementations.
//!
//! Behave like the MongoDB repositories, including the unique constraint on
//! link codes, but keep everything in memory. The integration test suite
//! runs the full router on top of them.

use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::Utc;
use tokio::sync::RwLock;

use super::collections::RecordKind;
use crate::domain::entities::{AffiliateLink, Click, NewAffiliateLink, NewClick};
use crate::domain::repositories::{ClickRepository, LinkRepository, StoreHealth, StoreReport};
use crate::error::AppError;

#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<Vec<AffiliateLink>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewAffiliateLink) -> Result<AffiliateLink, AppError> {
        let mut links = self.links.write().await;

        // Same guarantee as the unique index on `code`.
        if links.iter().any(|l| l.code == new_link.code) {
            return Err(AppError::duplicate_code(new_link.code));
        }

        let link = new_link.into_link(ObjectId::new().to_hex(), Utc::now());
        links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<AffiliateLink>, AppError> {
        let links = self.links.read().await;
        Ok(links.iter().find(|l| l.code == code).cloned())
    }

    async fn list(&self, tag: Option<String>) -> Result<Vec<AffiliateLink>, AppError> {
        let links = self.links.read().await;

        Ok(links
            .iter()
            .filter(|l| tag.as_deref().is_none_or(|t| l.has_tag(t)))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.links.read().await.len() as u64)
    }
}

#[derive(Default)]
pub struct MemoryClickRepository {
    clicks: RwLock<Vec<Click>>,
}

impl MemoryClickRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// All logged clicks in insertion order.
    pub async fn clicks(&self) -> Vec<Click> {
        self.clicks.read().await.clone()
    }
}

#[async_trait]
impl ClickRepository for MemoryClickRepository {
    async fn insert(&self, new_click: NewClick) -> Result<Click, AppError> {
        let click = new_click.into_click(ObjectId::new().to_hex(), Utc::now());
        self.clicks.write().await.push(click.clone());

        Ok(click)
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.clicks.read().await.len() as u64)
    }
}

/// Always-healthy diagnostics for the in-process store.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryStore;

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn report(&self) -> StoreReport {
        StoreReport {
            connected: true,
            status: "in-memory".to_string(),
            collections: vec![
                RecordKind::AffiliateLink.collection_name().to_string(),
                RecordKind::Click.collection_name().to_string(),
            ],
        }
    }
}
