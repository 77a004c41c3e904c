//! API service wrapper with observability.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use super::{ApiProvider, ApiRequest, Result, TRACING_TARGET};

/// API service wrapper with observability.
///
/// Adds structured logging to any [`ApiProvider`]. The provider is wrapped in
/// `Arc` for cheap cloning.
#[derive(Clone)]
pub struct ApiService {
    inner: Arc<dyn ApiProvider>,
}

impl fmt::Debug for ApiService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiService").finish_non_exhaustive()
    }
}

impl ApiService {
    /// Creates a new service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: ApiProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Creates a service from an already shared provider.
    pub fn from_arc(provider: Arc<dyn ApiProvider>) -> Self {
        Self { inner: provider }
    }

    /// Sends one request through the provider.
    pub async fn send(&self, request: &ApiRequest) -> Result<Value> {
        let started_at = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET,
            method = %request.method,
            endpoint = %request.endpoint,
            query_len = request.query.len(),
            has_body = request.body.is_some(),
            "Sending API request"
        );

        let result = self.inner.send(request).await;
        let elapsed = started_at.elapsed();

        match &result {
            Ok(_) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    method = %request.method,
                    endpoint = %request.endpoint,
                    elapsed_ms = elapsed.as_millis(),
                    "API request completed"
                );
            }
            Err(error) if error.is_retryable() => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    method = %request.method,
                    endpoint = %request.endpoint,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "API request failed"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    method = %request.method,
                    endpoint = %request.endpoint,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "API request error"
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vodnode_catalog::HttpMethod;

    use super::*;
    use crate::mock::MockProvider;
    use crate::provider::ErrorKind;

    #[tokio::test]
    async fn test_send_passes_through() {
        let provider = MockProvider::new().with_response(json!({"id": "m1"}));
        let service = ApiService::new(provider.clone());

        let request = ApiRequest::new(HttpMethod::Get, "/media/m1");
        let response = service.send(&request).await.unwrap();

        assert_eq!(response, json!({"id": "m1"}));
        assert_eq!(provider.requests(), vec![request]);
    }

    #[tokio::test]
    async fn test_send_propagates_error() {
        let provider = MockProvider::new().with_status_error(503);
        let service = ApiService::new(provider);

        let request = ApiRequest::new(HttpMethod::Get, "/media");
        let error = service.send(&request).await.unwrap_err();
        assert_eq!(error.kind, ErrorKind::ServiceUnavailable);
    }
}
