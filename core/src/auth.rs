//! Authorization injection from locally persisted credentials.
//!
//! # Design
//! The frontend persists a serialized credential blob under a fixed key in a
//! key-value store this crate only ever reads. Before transmission every
//! request passes through `inject_authorization`, which attaches a bearer
//! `Authorization` header when a token is available. Authorization failure is
//! non-fatal: a missing or malformed blob lets the request proceed
//! unauthenticated, with a single diagnostic for the malformed case.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Deserialize;

use crate::headers::{self, HeaderSpec};
use crate::http::RequestConfig;

/// Fixed key the frontend stores its session credentials under.
pub const AUTH_STORAGE_KEY: &str = "lms_auth";

const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Read-only view of the credential key-value store.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Thread-safe in-memory credential store for hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    pub fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }
}

/// Session credentials as persisted by the frontend.
///
/// Both fields are optional: the blob is written by code outside this crate
/// and may predate the `tokenType` field.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredCredentials {
    pub token: Option<String>,
    #[serde(rename = "tokenType")]
    pub token_type: Option<String>,
}

/// Sink for diagnostics that should not surface to the caller.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Default sink; forwards to `tracing` at WARN level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Attach a bearer `Authorization` header from stored credentials.
///
/// Merges the request's existing headers (via `headers::normalize`) with the
/// new entry and replaces whatever representation was there before. Passes
/// the request through unchanged when the blob is absent, malformed, or
/// carries no token. Never fails.
pub fn inject_authorization(
    mut request: RequestConfig,
    store: &dyn CredentialStore,
    sink: &dyn DiagnosticSink,
) -> RequestConfig {
    let Some(blob) = store.get(AUTH_STORAGE_KEY) else {
        return request;
    };
    let credentials: StoredCredentials = match serde_json::from_str(&blob) {
        Ok(credentials) => credentials,
        Err(err) => {
            sink.warn(&format!("stored credentials are not valid JSON: {err}"));
            return request;
        }
    };
    let Some(token) = credentials.token else {
        return request;
    };
    let scheme = credentials.token_type.as_deref().unwrap_or(DEFAULT_TOKEN_TYPE);

    let mut merged = headers::normalize(request.headers.as_ref());
    merged.insert("Authorization".to_string(), format!("{scheme} {token}"));
    request.headers = Some(HeaderSpec::from_strings(merged));
    request
}
