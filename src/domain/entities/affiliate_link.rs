//! Affiliate link entity.

use chrono::{DateTime, Utc};

/// A registered affiliate link.
///
/// The `code` is the public lookup key used in `/r/{code}` and is unique
/// across all links. The `id` is the store-generated identifier in string form.
#[derive(Debug, Clone, PartialEq)]
pub struct AffiliateLink {
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

impl AffiliateLink {
    /// Returns true if the link's tag list contains `tag`.
    ///
    /// Links without tags never match.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

/// Input data for registering a new affiliate link.
///
/// Fields are validated at the HTTP boundary before reaching the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAffiliateLink {
    pub title: String,
    pub url: String,
    pub code: String,
    pub platform: Option<String>,
    pub commission_rate: Option<f64>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
}

impl NewAffiliateLink {
    /// Minimal link with only the required fields set.
    pub fn new(title: impl Into<String>, url: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            code: code.into(),
            platform: None,
            commission_rate: None,
            tags: None,
            image: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Materializes the stored record once the store has assigned an id.
    pub fn into_link(self, id: String, created_at: DateTime<Utc>) -> AffiliateLink {
        AffiliateLink {
            id,
            title: self.title,
            url: self.url,
            code: self.code,
            platform: self.platform,
            commission_rate: self.commission_rate,
            tags: self.tags,
            image: self.image,
            created_at,
        }
    }
}
