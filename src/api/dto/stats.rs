//! DTOs for the stats endpoint.

use serde::Serialize;

use crate::application::services::Stats;

/// Response for `GET /api/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_links: u64,
    pub total_clicks: u64,
}

impl From<Stats> for StatsResponse {
    fn from(stats: Stats) -> Self {
        Self {
            total_links: stats.total_links,
            total_clicks: stats.total_clicks,
        }
    }
}
