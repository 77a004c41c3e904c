//! Internal error types for vodnode-reqwest.

use thiserror::Error;
use vodnode_engine::provider;

/// Result type alias for vodnode-reqwest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Internal error type for vodnode-reqwest operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The base URL could not be parsed.
    #[error("Invalid API URL: {0}")]
    Url(#[from] url::ParseError),
    /// The base URL is not HTTP(S).
    #[error("Unsupported API URL scheme: {0}")]
    UnsupportedScheme(String),
}

impl From<Error> for provider::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Reqwest(e) => {
                if e.is_timeout() {
                    provider::Error::timeout()
                        .with_message(e.to_string())
                        .with_source(e)
                } else if e.is_connect() {
                    provider::Error::network_error()
                        .with_message("Connection failed")
                        .with_source(e)
                } else if e.is_builder() {
                    provider::Error::configuration()
                        .with_message(e.to_string())
                        .with_source(e)
                } else {
                    provider::Error::network_error()
                        .with_message(e.to_string())
                        .with_source(e)
                }
            }
            Error::Serde(e) => provider::Error::serialization()
                .with_message(e.to_string())
                .with_source(e),
            Error::Url(e) => provider::Error::configuration()
                .with_message(e.to_string())
                .with_source(e),
            Error::UnsupportedScheme(scheme) => provider::Error::configuration()
                .with_message(format!("unsupported API URL scheme '{scheme}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use vodnode_engine::provider::ErrorKind;

    use super::*;

    #[test]
    fn test_serde_maps_to_serialization() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = provider::Error::from(Error::from(source));
        assert_eq!(error.kind, ErrorKind::Serialization);
        assert!(error.source.is_some());
    }

    #[test]
    fn test_url_maps_to_configuration() {
        let source = url::Url::parse("::").unwrap_err();
        let error = provider::Error::from(Error::from(source));
        assert_eq!(error.kind, ErrorKind::Configuration);
    }
}
