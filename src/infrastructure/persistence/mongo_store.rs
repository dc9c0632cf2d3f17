//! Shared MongoDB handle.
//!
//! The store is created once at startup and shared read-only across all
//! requests. A missing or unparsable `DATABASE_URL` does not abort startup:
//! the store is kept in an unconfigured state, every repository call fails
//! with [`AppError::StoreUnavailable`], and `/test` reports the problem.

use async_trait::async_trait;
use bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use std::future::IntoFuture;
use std::time::Duration;
use tokio::sync::OnceCell;

use super::collections::RecordKind;
use super::documents::LinkDocument;
use crate::domain::repositories::{StoreHealth, StoreReport};
use crate::error::AppError;

/// Database used when neither `DATABASE_NAME` nor the connection string names one.
pub const DEFAULT_DATABASE_NAME: &str = "affiliate";

const APP_NAME: &str = "affiliate-tracker";

/// Maximum length of error text echoed into diagnostics.
const STATUS_ERROR_LEN: usize = 50;

pub struct MongoStore {
    database: Option<Database>,
    timeout: Duration,
    init_error: Option<String>,
    /// Set once the unique index on link codes is known to exist.
    indexes: OnceCell<()>,
}

impl MongoStore {
    /// Builds a client for `database_url`.
    ///
    /// The MongoDB driver connects lazily, so this only parses the connection
    /// string and sets up the client. Server-selection and connect timeouts
    /// are bounded by `timeout`.
    pub async fn connect(
        database_url: Option<&str>,
        database_name: Option<&str>,
        timeout: Duration,
    ) -> Self {
        let Some(url) = database_url else {
            tracing::warn!("DATABASE_URL not set, document store disabled");
            return Self::unconfigured(timeout);
        };

        match Self::build_database(url, database_name, timeout).await {
            Ok(database) => {
                tracing::info!(database = %database.name(), "Document store client ready");
                Self {
                    database: Some(database),
                    timeout,
                    init_error: None,
                    indexes: OnceCell::new(),
                }
            }
            Err(e) => {
                tracing::error!("Failed to initialise MongoDB client: {}", e);
                Self {
                    database: None,
                    timeout,
                    init_error: Some(e.to_string()),
                    indexes: OnceCell::new(),
                }
            }
        }
    }

    /// A store with no backing database.
    pub fn unconfigured(timeout: Duration) -> Self {
        Self {
            database: None,
            timeout,
            init_error: None,
            indexes: OnceCell::new(),
        }
    }

    async fn build_database(
        url: &str,
        database_name: Option<&str>,
        timeout: Duration,
    ) -> Result<Database, mongodb::error::Error> {
        let mut options = ClientOptions::parse(url).await?;
        options.app_name = Some(APP_NAME.to_string());
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);

        let client = Client::with_options(options)?;

        let database = match database_name {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE_NAME)),
        };

        Ok(database)
    }

    pub fn is_configured(&self) -> bool {
        self.database.is_some()
    }

    /// Returns the typed collection for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store is unconfigured.
    pub fn collection<T>(&self, kind: RecordKind) -> Result<Collection<T>, AppError>
    where
        T: Send + Sync,
    {
        self.database
            .as_ref()
            .map(|db| db.collection::<T>(kind.collection_name()))
            .ok_or_else(|| AppError::store_unavailable("document store is not configured"))
    }

    /// Runs a driver operation bounded by the store timeout.
    ///
    /// The outer result carries the timeout; the inner one is the driver's own
    /// result so callers can inspect specific errors before converting them.
    pub async fn timed<F, T>(&self, operation: F) -> Result<mongodb::error::Result<T>, AppError>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        tokio::time::timeout(self.timeout, operation)
            .await
            .map_err(|_| {
                tracing::warn!(timeout = ?self.timeout, "Document store call timed out");
                AppError::store_unavailable("document store call timed out")
            })
    }

    /// Creates the unique index on link codes.
    ///
    /// Runs at most once successfully per store. A failed attempt leaves the
    /// store unmarked, so the next call tries again; link inserts call this
    /// first and therefore never run without the index.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        self.indexes
            .get_or_try_init(|| self.create_indexes())
            .await
            .map(|_| ())
    }

    /// Whether the unique index has been confirmed.
    pub fn indexes_ready(&self) -> bool {
        self.indexes.initialized()
    }

    async fn create_indexes(&self) -> Result<(), AppError> {
        let links = self.collection::<LinkDocument>(RecordKind::AffiliateLink)?;

        let model = IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("code_unique".to_string())
                    .build(),
            )
            .build();

        self.timed(links.create_index(model)).await??;
        tracing::info!("Unique index on link code ensured");

        Ok(())
    }
}

#[async_trait]
impl StoreHealth for MongoStore {
    async fn report(&self) -> StoreReport {
        let Some(database) = &self.database else {
            let status = match &self.init_error {
                Some(e) => format!("error: {}", truncate(e, STATUS_ERROR_LEN)),
                None => "not configured".to_string(),
            };

            return StoreReport {
                connected: false,
                status,
                collections: Vec::new(),
            };
        };

        match self.timed(database.list_collection_names()).await {
            Ok(Ok(mut names)) => {
                names.truncate(StoreReport::MAX_COLLECTIONS);
                StoreReport {
                    connected: true,
                    status: "connected & working".to_string(),
                    collections: names,
                }
            }
            Ok(Err(e)) => StoreReport {
                connected: false,
                status: format!(
                    "configured but error: {}",
                    truncate(&e.to_string(), STATUS_ERROR_LEN)
                ),
                collections: Vec::new(),
            },
            Err(_) => StoreReport {
                connected: false,
                status: "configured but timed out".to_string(),
                collections: Vec::new(),
            },
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
