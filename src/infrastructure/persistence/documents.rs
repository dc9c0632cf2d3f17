//! BSON document shapes for the stored records.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{AffiliateLink, Click, NewAffiliateLink, NewClick};

/// Stored form of an [`AffiliateLink`] in the `affiliatelink` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub url: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime",
        default = "Utc::now"
    )]
    pub created_at: DateTime<Utc>,
}

impl LinkDocument {
    pub fn from_new(new_link: NewAffiliateLink, created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: new_link.title,
            url: new_link.url,
            code: new_link.code,
            platform: new_link.platform,
            commission_rate: new_link.commission_rate,
            tags: new_link.tags,
            image: new_link.image,
            created_at,
        }
    }
}

impl From<LinkDocument> for AffiliateLink {
    fn from(doc: LinkDocument) -> Self {
        AffiliateLink {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: doc.title,
            url: doc.url,
            code: doc.code,
            platform: doc.platform,
            commission_rate: doc.commission_rate,
            tags: doc.tags,
            image: doc.image,
            created_at: doc.created_at,
        }
    }
}

/// Stored form of a [`Click`] in the `click` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub link_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime",
        default = "Utc::now"
    )]
    pub clicked_at: DateTime<Utc>,
}

impl ClickDocument {
    pub fn from_new(new_click: NewClick, clicked_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            link_code: new_click.link_code,
            source: new_click.source,
            ip: new_click.ip,
            user_agent: new_click.user_agent,
            clicked_at,
        }
    }
}

impl From<ClickDocument> for Click {
    fn from(doc: ClickDocument) -> Self {
        Click {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            link_code: doc.link_code,
            source: doc.source,
            ip: doc.ip,
            user_agent: doc.user_agent,
            clicked_at: doc.clicked_at,
        }
    }
}
