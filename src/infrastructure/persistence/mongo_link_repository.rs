//! MongoDB implementation of link repository.

use async_trait::async_trait;
use bson::{Document, doc};
use chrono::Utc;
use futures_util::TryStreamExt;
use std::sync::Arc;

use super::collections::RecordKind;
use super::documents::LinkDocument;
use super::mongo_store::MongoStore;
use crate::domain::entities::{AffiliateLink, NewAffiliateLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::store_error::is_duplicate_key;

/// MongoDB repository for the `affiliatelink` collection.
pub struct MongoLinkRepository {
    store: Arc<MongoStore>,
}

impl MongoLinkRepository {
    /// Creates a new repository over the shared store handle.
    pub fn new(store: Arc<MongoStore>) -> Self {
        Self { store }
    }
}

/// Filter matching links whose tag list contains `tag`, or every link.
fn tag_filter(tag: Option<String>) -> Document {
    match tag {
        Some(tag) => doc! { "tags": { "$in": [tag] } },
        None => doc! {},
    }
}

#[async_trait]
impl LinkRepository for MongoLinkRepository {
    async fn insert(&self, new_link: NewAffiliateLink) -> Result<AffiliateLink, AppError> {
        // Code uniqueness under concurrent registrations relies on this index.
        self.store.ensure_indexes().await?;

        let links = self
            .store
            .collection::<LinkDocument>(RecordKind::AffiliateLink)?;

        let code = new_link.code.clone();
        let document = LinkDocument::from_new(new_link.clone(), Utc::now());
        let created_at = document.created_at;

        let result = match self.store.timed(links.insert_one(&document)).await? {
            Ok(result) => result,
            Err(e) if is_duplicate_key(&e) => return Err(AppError::duplicate_code(code)),
            Err(e) => return Err(e.into()),
        };

        let id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };

        Ok(new_link.into_link(id, created_at))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<AffiliateLink>, AppError> {
        let links = self
            .store
            .collection::<LinkDocument>(RecordKind::AffiliateLink)?;

        let document = self
            .store
            .timed(links.find_one(doc! { "code": code }))
            .await??;

        Ok(document.map(AffiliateLink::from))
    }

    async fn list(&self, tag: Option<String>) -> Result<Vec<AffiliateLink>, AppError> {
        let links = self
            .store
            .collection::<LinkDocument>(RecordKind::AffiliateLink)?;

        let cursor = self.store.timed(links.find(tag_filter(tag))).await??;
        let documents: Vec<LinkDocument> = self
            .store
            .timed(cursor.try_collect::<Vec<LinkDocument>>())
            .await??;

        Ok(documents.into_iter().map(AffiliateLink::from).collect())
    }

    async fn count(&self) -> Result<u64, AppError> {
        let links = self
            .store
            .collection::<LinkDocument>(RecordKind::AffiliateLink)?;

        Ok(self.store.timed(links.count_documents(doc! {})).await??)
    }
}
