//! DTOs for the redirect endpoint.

use serde::Deserialize;

/// Query parameters for `GET /r/{code}`.
#[derive(Debug, Default, Deserialize)]
pub struct RedirectQuery {
    /// Where the visitor came from (campaign, platform, ...).
    pub source: Option<String>,
}
