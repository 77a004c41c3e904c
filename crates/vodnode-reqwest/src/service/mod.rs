//! API provider implementation.
//!
//! This module implements the [`ApiProvider`] trait for [`ReqwestClient`].

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use vodnode_engine::catalog::HttpMethod;
use vodnode_engine::provider::{self, ApiProvider, ApiRequest};

use crate::connect::{ReqwestClient, TRACING_TARGET};
use crate::error::Error;

/// Maximum number of characters of an error body kept in the error message.
const ERROR_BODY_LIMIT: usize = 512;

#[async_trait::async_trait]
impl ApiProvider for ReqwestClient {
    async fn send(&self, request: &ApiRequest) -> provider::Result<Value> {
        let url = self.endpoint_url(&request.endpoint);

        tracing::trace!(
            target: TRACING_TARGET,
            method = %request.method,
            url = %url,
            "Building HTTP request"
        );

        let mut http_request = self.http().request(http_method(request.method), &url);

        let query = request.query_pairs();
        if !query.is_empty() {
            http_request = http_request.query(&query);
        }

        if let Some(token) = &self.config().api_token {
            http_request = http_request.bearer_auth(token);
        }

        if let Some(body) = &request.body {
            http_request = http_request.json(body);
        }

        let http_response = http_request.send().await.map_err(Error::from)?;

        let status = http_response.status();
        let content_type = http_response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = http_response.bytes().await.map_err(Error::from)?;

        tracing::debug!(
            target: TRACING_TARGET,
            method = %request.method,
            url = %url,
            status_code = status.as_u16(),
            body_len = bytes.len(),
            "HTTP response received"
        );

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes);
            return Err(provider::Error::from_status(status.as_u16())
                .with_message(format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    truncate(body.trim(), ERROR_BODY_LIMIT)
                ))
                .with_context(format!("{} {}", request.method, request.endpoint)));
        }

        parse_body(&bytes, content_type.as_deref())
    }
}

fn http_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Parses a success body.
///
/// An empty body is `null`. A body that is not JSON is returned as a string,
/// unless the response declared a JSON content type.
fn parse_body(bytes: &[u8], content_type: Option<&str>) -> provider::Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    match serde_json::from_slice(bytes) {
        Ok(value) => Ok(value),
        Err(error) if content_type.is_some_and(is_json) => Err(Error::from(error).into()),
        Err(_) => Ok(Value::String(String::from_utf8_lossy(bytes).into_owned())),
    }
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json") || essence.ends_with("+json")
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vodnode_engine::provider::ErrorKind;

    use super::*;
    use crate::ReqwestConfig;

    #[test]
    fn test_parse_empty_body() {
        assert_eq!(parse_body(b"", None).unwrap(), Value::Null);
        assert_eq!(parse_body(b" \n", Some("application/json")).unwrap(), Value::Null);
    }

    #[test]
    fn test_parse_json_body() {
        let value = parse_body(br#"{"data": [1]}"#, Some("application/json")).unwrap();
        assert_eq!(value, json!({"data": [1]}));
    }

    #[test]
    fn test_parse_text_body() {
        let value = parse_body(b"<iframe></iframe>", Some("text/html")).unwrap();
        assert_eq!(value, json!("<iframe></iframe>"));
    }

    #[test]
    fn test_parse_broken_json_body() {
        let error = parse_body(b"{oops", Some("application/json; charset=utf-8")).unwrap_err();
        assert_eq!(error.kind, ErrorKind::Serialization);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("héllo", 2), "hé...");
    }

    #[test]
    fn test_http_method() {
        assert_eq!(http_method(HttpMethod::Patch), Method::PATCH);
        assert_eq!(http_method(HttpMethod::Delete), Method::DELETE);
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // Port 9 on loopback has no listener in test environments.
        let client = ReqwestClient::new(ReqwestConfig::new("http://127.0.0.1:9").with_timeout(2))
            .unwrap();

        let error = client
            .send(&ApiRequest::new(HttpMethod::Get, "/channels"))
            .await
            .unwrap_err();
        assert!(matches!(error.kind, ErrorKind::NetworkError | ErrorKind::Timeout));
    }
}
