//! Handlers for link registration and listing.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse, LinkResponse, ListLinksQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new affiliate link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Shoes",
///   "url": "https://merchant.example/shoes",
///   "code": "shoes1",
///   "platform": "instagram",     // optional
///   "commission_rate": 7.5,      // optional, 0-100
///   "tags": ["fashion"],         // optional
///   "image": "https://..."       // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{"id": "<store id>"}`.
///
/// # Errors
///
/// Returns 400 Bad Request if the code already exists.
/// Returns 422 Unprocessable Entity if the body is malformed or fails validation.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let id = state.link_service.register(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(CreateLinkResponse { id })))
}

/// Lists registered links.
///
/// # Endpoint
///
/// `GET /api/links?tag=<string>`
///
/// When `tag` is given, only links whose tag list contains it are returned.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(query): Query<ListLinksQuery>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list(query.tag.as_deref()).await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}
