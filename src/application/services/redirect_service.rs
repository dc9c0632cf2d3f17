//! Short code resolution with click logging.

use std::sync::Arc;

use super::click_logger::ClickLogger;
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use serde_json::json;

/// Request metadata captured for the click log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Visit {
    pub source: Option<String>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Resolves short codes to destination URLs.
///
/// Each successful resolution logs exactly one click before returning. The
/// click is awaited so it is durable by the time the redirect is sent, but a
/// logging failure is only reported through `tracing` and never fails the
/// redirect.
pub struct RedirectService<L, C>
where
    L: LinkRepository + ?Sized,
    C: ClickRepository + ?Sized,
{
    link_repository: Arc<L>,
    click_logger: Arc<ClickLogger<C>>,
}

impl<L, C> RedirectService<L, C>
where
    L: LinkRepository + ?Sized,
    C: ClickRepository + ?Sized,
{
    /// Creates a new redirect service.
    pub fn new(link_repository: Arc<L>, click_logger: Arc<ClickLogger<C>>) -> Self {
        Self {
            link_repository,
            click_logger,
        }
    }

    /// Returns the destination URL for `code` and logs the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::StoreUnavailable`] if the lookup cannot reach the store.
    pub async fn resolve(&self, code: &str, visit: Visit) -> Result<String, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))?;

        if let Err(e) = self
            .click_logger
            .log(&link.code, visit.source, visit.ip, visit.user_agent)
            .await
        {
            tracing::warn!(code = %link.code, error = %e, "Failed to log click");
        }

        tracing::debug!(code = %link.code, url = %link.url, "Resolved redirect");

        Ok(link.url)
    }
}
