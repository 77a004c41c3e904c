//! Catalog error types.

use thiserror::Error;

/// Result type for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The selected resource/operation pair is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation '{operation}' not found for resource '{resource}'")]
pub struct OperationNotFound {
    /// Requested resource group.
    pub resource: String,
    /// Requested operation name.
    pub operation: String,
}

impl OperationNotFound {
    pub fn new(resource: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            operation: operation.into(),
        }
    }
}

/// Errors raised while building a catalog from descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two descriptors share a resource/operation pair.
    #[error("duplicate operation {resource}:{operation}")]
    Duplicate {
        resource: String,
        operation: String,
    },

    /// The path template references a placeholder without a path binding.
    #[error("placeholder '{placeholder}' in {resource}:{operation} has no path binding")]
    UnboundPlaceholder {
        resource: String,
        operation: String,
        placeholder: String,
    },

    /// A path binding names a placeholder that the template does not contain.
    #[error("path binding '{name}' in {resource}:{operation} matches no placeholder")]
    UnusedPathParam {
        resource: String,
        operation: String,
        name: String,
    },
}
