use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Determines the client IP address for click logging.
///
/// When `behind_proxy` is set, the first entry of `X-Forwarded-For` wins,
/// then `X-Real-IP`. Otherwise only the socket peer address is trusted.
/// Returns `None` when nothing usable is available.
pub fn extract_client_ip(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    behind_proxy: bool,
) -> Option<String> {
    if behind_proxy {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        if let Some(ip) = forwarded {
            return Some(ip.to_string());
        }

        let real_ip = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        if let Some(ip) = real_ip {
            return Some(ip.to_string());
        }
    }

    peer.map(|addr| addr.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> Option<SocketAddr> {
        Some("10.0.0.7:5555".parse().unwrap())
    }

    #[test]
    fn test_peer_address_used_by_default() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("1.2.3.4"));

        assert_eq!(
            extract_client_ip(&headers, peer(), false),
            Some("10.0.0.7".to_string())
        );
    }

    #[test]
    fn test_forwarded_for_first_entry_behind_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static(" 203.0.113.9 , 10.0.0.1"),
        );

        assert_eq!(
            extract_client_ip(&headers, peer(), true),
            Some("203.0.113.9".to_string())
        );
    }

    #[test]
    fn test_real_ip_fallback_behind_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));

        assert_eq!(
            extract_client_ip(&headers, peer(), true),
            Some("198.51.100.2".to_string())
        );
    }

    #[test]
    fn test_absent_everything() {
        assert_eq!(extract_client_ip(&HeaderMap::new(), None, true), None);
    }
}
