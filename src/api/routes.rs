//! API route configuration.

use crate::api::handlers::{create_link_handler, list_links_handler, stats_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /links` - List links, optionally filtered by `?tag=`
/// - `POST /links` - Register a link
/// - `GET  /stats` - Total links and clicks
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/stats", get(stats_handler))
}
