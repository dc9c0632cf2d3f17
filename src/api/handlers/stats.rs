//! Handler for global totals.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the number of registered links and logged clicks.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// { "total_links": 3, "total_clicks": 42 }
/// ```
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.stats().await?;
    Ok(Json(stats.into()))
}
