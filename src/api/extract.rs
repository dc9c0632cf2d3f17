//! Request extractors.

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{header, request::Parts},
};
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::state::AppState;
use crate::utils::client_ip::extract_client_ip;

/// Best-effort client metadata for click logging.
///
/// Never rejects: the peer address is only known when the server runs with
/// `into_make_service_with_connect_info`, and headers may be missing.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl FromRequestParts<AppState> for ClientInfo {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        let user_agent = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(Self {
            ip: extract_client_ip(&parts.headers, peer, state.behind_proxy),
            user_agent,
        })
    }
}
