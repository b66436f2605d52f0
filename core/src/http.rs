//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! services build `HttpRequest` values and parse `HttpResponse` values; a
//! `Transport` (or the caller directly) performs the network round-trip in
//! between. Keeping the boundary as data makes the request paths and the
//! response handling testable without a server.
//!
//! The remote API is read-only, so every request is a GET.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// GET `url` asking for a JSON body.
    pub fn get_json(url: String) -> Self {
        Self {
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`, then passed
/// to the services' `parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// A 200 response with `body`, mostly useful for tests and fakes.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
pub(crate) fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    tracing::warn!(status = response.status, "unexpected response status");
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Check the status, then deserialize the body.
pub(crate) fn decode_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn get_json_sets_accept_header() {
        let req = HttpRequest::get_json("http://localhost:3000/api/users/1".to_string());
        assert_eq!(req.url, "http://localhost:3000/api/users/1");
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn not_found_maps_to_dedicated_variant() {
        let err = check_status(&response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn server_error_keeps_status_and_body() {
        let err = check_status(&response(500, "boom")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, ref body } if body == "boom"));
    }

    #[test]
    fn decode_json_rejects_non_json_body() {
        let err = decode_json::<Vec<serde_json::Value>>(response(200, "<html>")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
