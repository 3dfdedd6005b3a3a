//! Request origin extractor used to build absolute navigation links.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::http::uri::Authority;

use mottu_core::types::LinkOrigin;

use crate::state::AppState;

/// Scheme and host the client used to reach the server.
///
/// The scheme comes from `X-Forwarded-Proto` (default `http`); the host
/// from `Host`, then `X-Forwarded-Host`, then the request URI authority
/// (HTTP/2 `:authority`), then the configured bind address.
#[derive(Debug, Clone)]
pub struct RequestOrigin(pub LinkOrigin);

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').next().unwrap_or(v).trim())
        .filter(|v| !v.is_empty())
}

impl RequestOrigin {
    /// Resolve the origin from the request headers and URI authority.
    pub fn from_request_head(
        headers: &HeaderMap,
        authority: Option<&Authority>,
        fallback_host: &str,
    ) -> Self {
        let scheme = header(headers, "x-forwarded-proto").unwrap_or("http");
        let host = header(headers, "host")
            .or_else(|| header(headers, "x-forwarded-host"))
            .or_else(|| authority.map(Authority::as_str))
            .unwrap_or(fallback_host);
        Self(LinkOrigin::new(scheme, host))
    }
}

impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_request_head(
            &parts.headers,
            parts.uri.authority(),
            &state.config.server.bind_address(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_defaults_to_http_and_bind_address() {
        let origin = RequestOrigin::from_request_head(&HeaderMap::new(), None, "0.0.0.0:8080").0;
        assert_eq!(origin.scheme(), "http");
        assert_eq!(origin.host(), "0.0.0.0:8080");
    }

    #[test]
    fn test_host_header_wins_over_forwarded_host() {
        let mut headers = HeaderMap::new();
        headers.insert("host", HeaderValue::from_static("api.local:8080"));
        headers.insert("x-forwarded-host", HeaderValue::from_static("frota.example.com"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));

        let origin = RequestOrigin::from_request_head(&headers, None, "0.0.0.0:8080").0;
        assert_eq!(origin.url("/api/motos"), "https://api.local:8080/api/motos");
    }

    #[test]
    fn test_forwarded_host_used_without_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-host",
            HeaderValue::from_static("frota.example.com, proxy.internal"),
        );
        let origin = RequestOrigin::from_request_head(&headers, None, "0.0.0.0:8080").0;
        assert_eq!(origin.host(), "frota.example.com");
    }

    #[test]
    fn test_uri_authority_used_without_host_headers() {
        let authority = Authority::from_static("frota.example.com:8443");
        let origin =
            RequestOrigin::from_request_head(&HeaderMap::new(), Some(&authority), "0.0.0.0:8080").0;
        assert_eq!(origin.host(), "frota.example.com:8443");

        let mut headers = HeaderMap::new();
        headers.insert("host", HeaderValue::from_static("api.local:8080"));
        let origin = RequestOrigin::from_request_head(&headers, Some(&authority), "0.0.0.0:8080").0;
        assert_eq!(origin.host(), "api.local:8080");
    }
}
