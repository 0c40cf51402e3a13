//! Response shaping.
//!
//! # Responsibilities
//! - Classify the backend status code into a band (success, client
//!   error, server error)
//! - Synthesize the outbound header set: CORS headers on every response,
//!   backend metadata only for the success band
//! - Preserve the backend status code unchanged for every band
//!
//! # Design Decisions
//! - Shaping is a total function over status + headers; it cannot fail
//! - No retries and no logging here; failures originate upstream or in
//!   the store call

use axum::body::Body;
use axum::http::header::{
    HeaderMap, HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_LENGTH, CONTENT_TYPE, DATE,
};
use axum::http::{Response, StatusCode};
use hyper::body::Incoming;

/// `Access-Control-Allow-Origin` value sent on every response.
pub const ALLOW_ORIGIN: &str = "*";

/// `Access-Control-Allow-Methods` value sent on every response.
pub const ALLOW_METHODS: &str = "GET";

/// `Access-Control-Allow-Headers` value sent on every response.
pub const ALLOW_HEADERS: &str = "Content-Type,Authorization";

/// Backend `Date` is surfaced to clients under this name.
pub const TIMESTAMP: HeaderName = HeaderName::from_static("timestamp");

/// Coarse classification of a backend status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBand {
    Success,
    ClientError,
    ServerError,
}

impl StatusBand {
    /// Classify a status code: 4xx first, then 5xx, else success.
    pub fn classify(status: StatusCode) -> Self {
        match status.as_u16() {
            400..=499 => StatusBand::ClientError,
            500..=599 => StatusBand::ServerError,
            _ => StatusBand::Success,
        }
    }
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(6);
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
    headers
}

/// Build the outbound header set for a backend status and header map.
///
/// Total over any status in [100,599]: the three CORS headers always,
/// backend metadata only for the success band.
pub fn shaped_headers(status: StatusCode, upstream: &HeaderMap) -> HeaderMap {
    let mut headers = cors_headers();

    if StatusBand::classify(status) == StatusBand::Success {
        if let Some(date) = upstream.get(DATE) {
            headers.insert(TIMESTAMP, date.clone());
        }
        if let Some(length) = upstream.get(CONTENT_LENGTH) {
            headers.insert(CONTENT_LENGTH, length.clone());
        }
        if let Some(content_type) = upstream.get(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, content_type.clone());
        }
    }

    headers
}

/// Shape a backend response for the client.
///
/// The status code passes through unchanged for every band; error bands
/// keep only the CORS headers and drop the body.
pub fn shape(backend: Response<Incoming>) -> Response<Body> {
    let (parts, body) = backend.into_parts();
    let headers = shaped_headers(parts.status, &parts.headers);

    let body = match StatusBand::classify(parts.status) {
        StatusBand::Success => Body::new(body),
        StatusBand::ClientError | StatusBand::ServerError => Body::empty(),
    };

    let mut response = Response::new(body);
    *response.status_mut() = parts.status;
    *response.headers_mut() = headers;
    response
}

/// Gateway-originated outcome: the given status with the CORS-only
/// header shape and an empty body.
pub fn cors_only(status: StatusCode) -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    *response.headers_mut() = cors_headers();
    response
}
