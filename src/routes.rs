//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Liveness message
//! - `GET  /test`      - Store diagnostics, always 200
//! - `GET  /r/{code}`  - Affiliate redirect with click logging
//! - `/api/*`          - Link registration, listing and stats
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, method and header

use crate::api;
use crate::api::handlers::{diagnostics_handler, redirect_handler, root_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/test", get(diagnostics_handler))
        .route("/r/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
