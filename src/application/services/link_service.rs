//! Link registration and listing service.

use std::sync::Arc;

use crate::domain::entities::{AffiliateLink, NewAffiliateLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Registry of affiliate links.
///
/// Enforces code uniqueness at registration. The existence check gives a
/// clear error in the common case; concurrent registrations of the same code
/// are settled by the store's unique index, which the repository reports as
/// [`AppError::DuplicateCode`] as well.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Registers a new link and returns its store identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `code` is empty.
    /// Returns [`AppError::DuplicateCode`] if a link with the same code exists.
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    pub async fn register(&self, new_link: NewAffiliateLink) -> Result<String, AppError> {
        if new_link.code.trim().is_empty() {
            return Err(AppError::validation(
                "Code must not be empty",
                json!({ "field": "code" }),
            ));
        }

        if self
            .link_repository
            .find_by_code(&new_link.code)
            .await?
            .is_some()
        {
            tracing::debug!(code = %new_link.code, "Rejected duplicate code");
            return Err(AppError::duplicate_code(new_link.code));
        }

        let link = self.link_repository.insert(new_link).await?;
        tracing::info!(code = %link.code, id = %link.id, "Registered affiliate link");

        Ok(link.id)
    }

    /// Lists links, optionally keeping only those tagged with `tag`.
    ///
    /// An empty tag is treated as no filter.
    pub async fn list(&self, tag: Option<&str>) -> Result<Vec<AffiliateLink>, AppError> {
        let tag = tag.filter(|t| !t.is_empty()).map(str::to_string);
        self.link_repository.list(tag).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn create_test_link(id: &str, code: &str, url: &str) -> AffiliateLink {
        NewAffiliateLink::new("Test", url, code).into_link(id.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "shoes1")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert()
            .withf(|link| link.code == "shoes1" && link.url == "https://merchant.example/shoes")
            .times(1)
            .returning(|link| Ok(link.into_link("64b000000000000000000001".to_string(), Utc::now())));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .register(NewAffiliateLink::new(
                "Shoes",
                "https://merchant.example/shoes",
                "shoes1",
            ))
            .await;

        assert_eq!(result.unwrap(), "64b000000000000000000001");
    }

    #[tokio::test]
    async fn test_register_duplicate_code() {
        let mut mock_repo = MockLinkRepository::new();

        let existing = create_test_link("1", "shoes1", "https://other.example");
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        mock_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .register(NewAffiliateLink::new(
                "Different title",
                "https://merchant.example/shoes",
                "shoes1",
            ))
            .await;

        assert!(matches!(result, Err(AppError::DuplicateCode { .. })));
    }

    #[tokio::test]
    async fn test_register_duplicate_from_unique_index() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_find_by_code().returning(|_| Ok(None));
        mock_repo
            .expect_insert()
            .times(1)
            .returning(|link| Err(AppError::duplicate_code(link.code)));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .register(NewAffiliateLink::new("Race", "https://a.example", "race"))
            .await;

        assert!(matches!(result, Err(AppError::DuplicateCode { .. })));
    }

    #[tokio::test]
    async fn test_register_empty_code() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_code().times(0);
        mock_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .register(NewAffiliateLink::new("Empty", "https://a.example", "  "))
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_register_store_unavailable_propagates() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .returning(|_| Err(AppError::store_unavailable("timeout")));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .register(NewAffiliateLink::new("A", "https://a.example", "a"))
            .await;

        assert!(matches!(result, Err(AppError::StoreUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_list_passes_tag_filter() {
        let mut mock_repo = MockLinkRepository::new();

        let link = create_test_link("1", "tech1", "https://a.example");
        mock_repo
            .expect_list()
            .withf(|tag| tag.as_deref() == Some("tech"))
            .times(1)
            .returning(move |_| Ok(vec![link.clone()]));

        let service = LinkService::new(Arc::new(mock_repo));

        let links = service.list(Some("tech")).await.unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].code, "tech1");
    }

    #[tokio::test]
    async fn test_list_empty_tag_means_no_filter() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_list()
            .withf(|tag| tag.is_none())
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(service.list(Some("")).await.unwrap().is_empty());
    }
}
