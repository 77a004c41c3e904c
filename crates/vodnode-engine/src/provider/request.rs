//! Outgoing API request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use vodnode_catalog::HttpMethod;

/// A single call against the remote API.
///
/// `endpoint` is the substituted path relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// HTTP method of the call.
    pub method: HttpMethod,
    /// Path relative to the API base URL, already percent-encoded.
    pub endpoint: String,
    /// Query-string parameters.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub query: Map<String, Value>,
    /// JSON request body, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request without query parameters or body.
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: Map::new(),
            body: None,
        }
    }

    /// Replaces the query parameters.
    pub fn with_query(mut self, query: Map<String, Value>) -> Self {
        self.query = query;
        self
    }

    /// Sets the body; `null` and empty objects leave the request without one.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = match body {
            Value::Null => None,
            Value::Object(ref map) if map.is_empty() => None,
            body => Some(body),
        };
        self
    }

    /// Flattens the query into string pairs.
    ///
    /// Strings are sent verbatim, numbers and booleans as their JSON text,
    /// arrays as repeated keys, objects as JSON text and `null` as an empty
    /// value.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.query.len());
        for (key, value) in &self.query {
            match value {
                Value::Array(values) => {
                    pairs.extend(values.iter().map(|value| (key.clone(), query_text(value))));
                }
                value => pairs.push((key.clone(), query_text(value))),
            }
        }
        pairs
    }
}

fn query_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
