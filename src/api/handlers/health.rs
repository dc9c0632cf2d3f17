//! Handlers for liveness and store diagnostics.

use axum::{Json, extract::State};

use crate::api::dto::health::{DiagnosticsResponse, RootResponse};
use crate::state::AppState;

/// Liveness message.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Affiliate tracker backend is running".to_string(),
    })
}

/// Reports store connectivity and configuration.
///
/// # Endpoint
///
/// `GET /test`
///
/// Always answers `200 OK`; store problems are described in the body.
///
/// # Response
///
/// ```json
/// {
///   "backend": "running",
///   "database": "connected & working",
///   "database_url": "set",
///   "database_name": "set",
///   "connection_status": "connected",
///   "collections": ["affiliatelink", "click"]
/// }
/// ```
pub async fn diagnostics_handler(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let report = state.store_health.report().await;
    Json(DiagnosticsResponse::new(report, state.store_settings))
}
