//! Click log service.

use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Appends a click record for every served redirect.
///
/// No validation beyond shape: request metadata is stored verbatim when
/// present and as absent otherwise.
pub struct ClickLogger<C: ClickRepository + ?Sized> {
    click_repository: Arc<C>,
}

impl<C: ClickRepository + ?Sized> ClickLogger<C> {
    /// Creates a new click logger.
    pub fn new(click_repository: Arc<C>) -> Self {
        Self { click_repository }
    }

    /// Logs one click for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    pub async fn log(
        &self,
        code: &str,
        source: Option<String>,
        client_ip: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Click, AppError> {
        let new_click = NewClick {
            link_code: code.to_string(),
            source,
            ip: client_ip,
            user_agent,
        };

        self.click_repository.insert(new_click).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockClickRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_log_records_request_metadata() {
        let mut mock_repo = MockClickRepository::new();

        mock_repo
            .expect_insert()
            .withf(|click| {
                click.link_code == "shoes1"
                    && click.source.as_deref() == Some("tiktok")
                    && click.ip.as_deref() == Some("192.168.1.1")
                    && click.user_agent.as_deref() == Some("Mozilla/5.0")
            })
            .times(1)
            .returning(|click| Ok(click.into_click("c1".to_string(), Utc::now())));

        let logger = ClickLogger::new(Arc::new(mock_repo));

        let click = logger
            .log(
                "shoes1",
                Some("tiktok".to_string()),
                Some("192.168.1.1".to_string()),
                Some("Mozilla/5.0".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(click.id, "c1");
        assert_eq!(click.link_code, "shoes1");
    }

    #[tokio::test]
    async fn test_log_stores_absent_metadata() {
        let mut mock_repo = MockClickRepository::new();

        mock_repo
            .expect_insert()
            .withf(|click| click.source.is_none() && click.ip.is_none() && click.user_agent.is_none())
            .times(1)
            .returning(|click| Ok(click.into_click("c2".to_string(), Utc::now())));

        let logger = ClickLogger::new(Arc::new(mock_repo));

        assert!(logger.log("shoes1", None, None, None).await.is_ok());
    }
}
