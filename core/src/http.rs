//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `RequestConfig` values and interprets `HttpResponse` values
//! without ever touching the network — the caller (host) is responsible for
//! executing the actual I/O. This separation keeps both interceptors pure,
//! synchronous functions and makes the core trivial to test.

use crate::headers::HeaderSpec;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An outgoing request described as plain data.
///
/// Built by `ApiClient::build` or constructed directly by the caller. The
/// `headers` field keeps the loose representation until authorization
/// injection replaces it with a normalized map; the transport should call
/// `headers::normalize` to obtain the final name → value pairs.
#[derive(Debug)]
pub struct RequestConfig {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Option<HeaderSpec>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing a `RequestConfig`, then passed
/// to `ApiClient::handle_response` for status interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
