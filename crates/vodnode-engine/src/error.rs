//! Dispatch error types.

use strum::{AsRefStr, Display, IntoStaticStr};
use thiserror::Error;
use vodnode_catalog::OperationNotFound;

use crate::provider;

/// Result type for a single dispatch step.
pub type DispatchResult<T, E = DispatchError> = Result<T, E>;

/// Reasons a row can fail.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The selected resource/operation pair is not in the catalog.
    #[error(transparent)]
    OperationNotFound(#[from] OperationNotFound),

    /// A URL placeholder had no usable value.
    #[error("missing value for path parameter '{0}'")]
    MissingPathParameter(String),

    /// A control parameter had the wrong shape.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The provider failed, during a single call or inside a pagination loop.
    #[error("API call failed: {0}")]
    ApiCallFailed(#[from] provider::Error),

    /// A pagination loop received only full pages up to the page cap.
    #[error("pagination stopped after {max_pages} full pages")]
    PaginationLimitExceeded { max_pages: u32 },
}

impl DispatchError {
    /// Creates an [`InvalidParameter`](Self::InvalidParameter) error.
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Step of the row pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RowStage {
    ResolveOperation,
    BindParameters,
    SubstituteUrl,
    Execute,
    Normalize,
}

/// A failed row, as reported to the host.
#[derive(Debug, Error)]
#[error(
    "row {row} failed at {stage}{}: {source}",
    describe_operation(.resource.as_deref(), .operation.as_deref())
)]
pub struct RowError {
    /// Zero-based index of the input row.
    pub row: usize,
    /// Selected resource, when it could be read.
    pub resource: Option<String>,
    /// Selected operation, when it could be read.
    pub operation: Option<String>,
    /// Stage that failed.
    pub stage: RowStage,
    /// Underlying cause.
    #[source]
    pub source: DispatchError,
}

impl RowError {
    /// Returns true when the row failed inside the provider.
    pub fn is_api_failure(&self) -> bool {
        matches!(self.source, DispatchError::ApiCallFailed(_))
    }
}

fn describe_operation(resource: Option<&str>, operation: Option<&str>) -> String {
    match (resource, operation) {
        (Some(resource), Some(operation)) => format!(" ({resource}:{operation})"),
        (Some(resource), None) => format!(" ({resource})"),
        _ => String::new(),
    }
}
