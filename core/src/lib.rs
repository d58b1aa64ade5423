//! HTTP client core for the LMS frontend.
//!
//! # Overview
//! Builds `RequestConfig` values and interprets `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `ApiClient` composes explicit configuration, a read-only credential
//!   store, and a diagnostic sink — there is no shared global instance.
//! - Every outgoing request passes through authorization injection before
//!   transmission; every failed response is normalized into the uniform
//!   `ApiError { status, message, raw }` shape on the way back.
//! - Header representations are a tagged `HeaderSpec` variant resolved by an
//!   exhaustive match; all normalization failures degrade to omission.
//! - Types use owned `String` / `Vec` / map fields so request values can be
//!   handed to any transport without lifetime concerns.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod http;

pub use auth::{
    CredentialStore, DiagnosticSink, MemoryStore, StoredCredentials, TracingSink, AUTH_STORAGE_KEY,
};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use headers::{HeaderMap, HeaderSource, HeaderSpec, SerdeHeaders};
pub use http::{HttpMethod, HttpResponse, RequestConfig};
