//! Transport seam between the engine and the remote API.

mod error;
mod request;
mod service;

use serde_json::Value;

pub use self::error::{BoxedError, Error, ErrorKind, Result};
pub use self::request::ApiRequest;
pub use self::service::ApiService;

/// Tracing target for API calls.
pub const TRACING_TARGET: &str = "vodnode_engine::provider";

/// Executes authenticated calls against the remote API.
///
/// Implementations resolve `endpoint` against their base URL, inject
/// credentials and return the parsed JSON response. A non-2xx answer is an
/// error; an empty body is `null`.
#[async_trait::async_trait]
pub trait ApiProvider: Send + Sync {
    /// Sends one request and returns the parsed response body.
    async fn send(&self, request: &ApiRequest) -> Result<Value>;
}
