//! DTOs for link registration and listing.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{AffiliateLink, NewAffiliateLink};

/// Short codes must be usable as a single path segment in `/r/{code}`.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid code regex"));

/// Destinations are only ever web pages.
static HTTP_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("valid url scheme regex"));

/// Request body for `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Product or offer title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Destination URL visitors are redirected to.
    #[validate(url(message = "Invalid URL format"))]
    #[validate(regex(path = *HTTP_URL_REGEX, message = "URL must use http or https"))]
    pub url: String,

    /// Short code used in `/r/{code}`.
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = *CODE_REGEX, message = "Code may only contain letters, digits, '-' and '_'"))]
    pub code: String,

    /// Primary platform audience (Instagram, TikTok, YouTube, ...).
    pub platform: Option<String>,

    /// Estimated commission in percent.
    #[validate(range(min = 0.0, max = 100.0))]
    pub commission_rate: Option<f64>,

    pub tags: Option<Vec<String>>,

    /// Thumbnail image URL.
    pub image: Option<String>,
}

impl From<CreateLinkRequest> for NewAffiliateLink {
    fn from(req: CreateLinkRequest) -> Self {
        NewAffiliateLink {
            title: req.title,
            url: req.url,
            code: req.code,
            platform: req.platform,
            commission_rate: req.commission_rate,
            tags: req.tags,
            image: req.image,
        }
    }
}

/// Response for a successful registration.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub id: String,
}

/// Query parameters for `GET /api/links`.
#[derive(Debug, Deserialize)]
pub struct ListLinksQuery {
    pub tag: Option<String>,
}

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    pub code: String,
    pub platform: Option<String>,
    pub commission_rate: Option<f64>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<AffiliateLink> for LinkResponse {
    fn from(link: AffiliateLink) -> Self {
        Self {
            id: link.id,
            title: link.title,
            url: link.url,
            code: link.code,
            platform: link.platform,
            commission_rate: link.commission_rate,
            tags: link.tags,
            image: link.image,
            created_at: link.created_at,
        }
    }
}
