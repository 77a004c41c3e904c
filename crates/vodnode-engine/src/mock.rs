//! Scripted API provider for testing.
//!
//! Available in this crate's tests and, for other crates, behind the
//! `test-utils` feature:
//!
//! ```toml
//! [dev-dependencies]
//! vodnode-engine = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use vodnode_engine::mock::MockProvider;
//!
//! let provider = MockProvider::new()
//!     .with_response(json!({"data": [{"id": 1}]}))
//!     .with_status_error(404);
//! let service = provider.clone().into_service();
//! // ... run the dispatcher ...
//! assert_eq!(provider.call_count(), 2);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use crate::provider::{ApiProvider, ApiRequest, ApiService, Error, Result};

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<Result<Value>>,
    requests: Vec<ApiRequest>,
}

/// Provider that records every request and replays scripted responses.
///
/// Responses are consumed in order; once the script is exhausted every call
/// answers `null`. Clones share the same script and request log.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    /// Creates a provider with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a successful response to the script.
    pub fn with_response(self, response: Value) -> Self {
        self.lock().responses.push_back(Ok(response));
        self
    }

    /// Appends several successful responses to the script.
    pub fn with_responses(self, responses: impl IntoIterator<Item = Value>) -> Self {
        self.lock().responses.extend(responses.into_iter().map(Ok));
        self
    }

    /// Appends a failure to the script.
    pub fn with_error(self, error: Error) -> Self {
        self.lock().responses.push_back(Err(error));
        self
    }

    /// Appends a failure classified from an HTTP status code.
    pub fn with_status_error(self, status: u16) -> Self {
        self.with_error(Error::from_status(status).with_message(format!("HTTP {status}")))
    }

    /// Returns every request received so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    /// Returns the number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Wraps a clone of this provider into an [`ApiService`].
    pub fn into_service(self) -> ApiService {
        ApiService::new(self)
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait::async_trait]
impl ApiProvider for MockProvider {
    async fn send(&self, request: &ApiRequest) -> Result<Value> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        state.responses.pop_front().unwrap_or(Ok(Value::Null))
    }
}
