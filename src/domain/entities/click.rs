//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when an affiliate link redirect is served.
///
/// `link_code` is a soft reference to [`super::AffiliateLink::code`]; no
/// foreign-key constraint is enforced by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub id: String,
    pub link_code: String,
    pub source: Option<String>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub clicked_at: DateTime<Utc>,
}

/// Input data for logging a click.
///
/// All request metadata is optional; missing values are stored as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClick {
    pub link_code: String,
    pub source: Option<String>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl NewClick {
    pub fn into_click(self, id: String, clicked_at: DateTime<Utc>) -> Click {
        Click {
            id,
            link_code: self.link_code,
            source: self.source,
            ip: self.ip,
            user_agent: self.user_agent,
            clicked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_from_new_click() {
        let now = Utc::now();
        let click = NewClick {
            link_code: "shoes1".to_string(),
            source: Some("instagram".to_string()),
            ip: Some("192.168.1.1".to_string()),
            user_agent: None,
        }
        .into_click("c1".to_string(), now);

        assert_eq!(click.id, "c1");
        assert_eq!(click.link_code, "shoes1");
        assert_eq!(click.source.as_deref(), Some("instagram"));
        assert!(click.user_agent.is_none());
        assert_eq!(click.clicked_at, now);
    }
}
