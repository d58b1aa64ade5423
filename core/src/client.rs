//! The shared API client: configuration plus the two interceptors.
//!
//! # Design
//! `ApiClient` is an explicitly constructed object composing configuration,
//! a read-only credential store, and a diagnostic sink — the application's
//! composition root owns it, there is no process-wide global. It performs no
//! I/O: `build` produces an authorized `RequestConfig`, the host executes
//! it, and `handle_response` interprets what came back.

use std::sync::Arc;

use crate::auth::{self, CredentialStore, DiagnosticSink, TracingSink};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::headers::HeaderSpec;
use crate::http::{HttpMethod, HttpResponse, RequestConfig};

/// HTTP client wrapper for the LMS backend API.
pub struct ApiClient {
    config: ClientConfig,
    store: Arc<dyn CredentialStore>,
    sink: Arc<dyn DiagnosticSink>,
}

impl ApiClient {
    /// Create a client with the default `tracing`-backed diagnostic sink.
    pub fn new(config: ClientConfig, store: Arc<dyn CredentialStore>) -> Self {
        Self::with_sink(config, store, Arc::new(TracingSink))
    }

    /// Create a client with an explicit diagnostic sink.
    pub fn with_sink(
        config: ClientConfig,
        store: Arc<dyn CredentialStore>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self { config, store, sink }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build an authorized request for `path` relative to the base URL.
    ///
    /// Seeds the default `Content-Type` header, then runs authorization
    /// injection, so the returned value is ready for the transport.
    pub fn build(&self, method: HttpMethod, path: &str, body: Option<String>) -> RequestConfig {
        let mut entries = std::collections::BTreeMap::new();
        entries.insert(
            "Content-Type".to_string(),
            serde_json::Value::String(self.config.content_type.clone()),
        );
        let request = RequestConfig {
            method,
            url: format!("{}/{}", self.config.base_url, path.trim_start_matches('/')),
            headers: Some(HeaderSpec::Map(entries)),
            body,
        };
        self.authorize(request)
    }

    /// Run the authorization interceptor over a caller-constructed request.
    pub fn authorize(&self, request: RequestConfig) -> RequestConfig {
        auth::inject_authorization(request, self.store.as_ref(), self.sink.as_ref())
    }

    /// Interpret a response: 2xx passes through untouched, everything else
    /// is rejected as the normalized error shape.
    pub fn handle_response(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        if (200..300).contains(&response.status) {
            Ok(response)
        } else {
            Err(ApiError::from_response(&response))
        }
    }

    /// Normalize a transport failure where no response was received.
    pub fn transport_failure(&self, message: Option<String>) -> ApiError {
        ApiError::from_transport(message)
    }
}
