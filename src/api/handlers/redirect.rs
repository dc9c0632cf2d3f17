//! Handler for short code redirects.

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::redirect::RedirectQuery;
use crate::api::extract::ClientInfo;
use crate::application::services::Visit;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /r/{code}?source=<string>`
///
/// # Request Flow
///
/// 1. Look up the link by code
/// 2. Log one click with `source`, client IP and `User-Agent`
/// 3. Return `302 Found` with the destination in `Location`
///
/// A failed click write is logged and does not affect the response.
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    Query(query): Query<RedirectQuery>,
    State(state): State<AppState>,
    client: ClientInfo,
) -> Result<impl IntoResponse, AppError> {
    let visit = Visit {
        source: query.source,
        ip: client.ip,
        user_agent: client.user_agent,
    };

    let url = state.redirect_service.resolve(&code, visit).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}
