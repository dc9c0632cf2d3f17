//! DTOs for liveness and diagnostic endpoints.

use serde::Serialize;

use crate::domain::repositories::StoreReport;
use crate::state::StoreSettings;

/// Response for `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Response for `GET /test`.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl DiagnosticsResponse {
    pub fn new(report: StoreReport, settings: StoreSettings) -> Self {
        Self {
            backend: "running".to_string(),
            database: report.status,
            database_url: set_label(settings.database_url_set),
            database_name: set_label(settings.database_name_set),
            connection_status: if report.connected {
                "connected"
            } else {
                "not connected"
            }
            .to_string(),
            collections: report.collections,
        }
    }
}

fn set_label(is_set: bool) -> String {
    if is_set { "set" } else { "not set" }.to_string()
}
