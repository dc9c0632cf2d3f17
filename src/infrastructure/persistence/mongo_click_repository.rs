//! MongoDB implementation of the click log.

use async_trait::async_trait;
use bson::doc;
use chrono::Utc;
use std::sync::Arc;

use super::collections::RecordKind;
use super::documents::ClickDocument;
use super::mongo_store::MongoStore;
use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// MongoDB repository for the `click` collection.
pub struct MongoClickRepository {
    store: Arc<MongoStore>,
}

impl MongoClickRepository {
    /// Creates a new repository over the shared store handle.
    pub fn new(store: Arc<MongoStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ClickRepository for MongoClickRepository {
    async fn insert(&self, new_click: NewClick) -> Result<Click, AppError> {
        let clicks = self.store.collection::<ClickDocument>(RecordKind::Click)?;

        let document = ClickDocument::from_new(new_click.clone(), Utc::now());
        let clicked_at = document.clicked_at;

        let result = self.store.timed(clicks.insert_one(&document)).await??;

        let id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };

        Ok(new_click.into_click(id, clicked_at))
    }

    async fn count(&self) -> Result<u64, AppError> {
        let clicks = self.store.collection::<ClickDocument>(RecordKind::Click)?;

        Ok(self.store.timed(clicks.count_documents(doc! {})).await??)
    }
}
