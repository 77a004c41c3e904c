//! Two-level catalog: resource → operation → descriptor.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::builtin;
use crate::descriptor::OperationDescriptor;
use crate::error::{CatalogError, CatalogResult, OperationNotFound};
use crate::template;

/// Tracing target for catalog operations.
const TRACING_TARGET: &str = "vodnode_catalog";

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let catalog = Catalog::from_descriptors(builtin::operations())
        .unwrap_or_else(|error| panic!("builtin operation table is inconsistent: {error}"));

    tracing::debug!(
        target: TRACING_TARGET,
        resources = catalog.resources.len(),
        operations = catalog.len(),
        "Builtin catalog loaded"
    );

    catalog
});

/// Read-only lookup table of operation descriptors.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    resources: BTreeMap<&'static str, BTreeMap<&'static str, OperationDescriptor>>,
}

impl Catalog {
    /// Returns the catalog compiled into this crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Builds a catalog from descriptors, checking every table invariant.
    ///
    /// # Errors
    ///
    /// Fails when a resource/operation pair repeats, when a placeholder has no
    /// path binding, or when a path binding names no placeholder.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = OperationDescriptor>,
    ) -> CatalogResult<Self> {
        let mut resources: BTreeMap<_, BTreeMap<_, _>> = BTreeMap::new();

        for descriptor in descriptors {
            validate(&descriptor)?;

            let operations = resources.entry(descriptor.resource).or_default();
            if operations.contains_key(descriptor.operation) {
                return Err(CatalogError::Duplicate {
                    resource: descriptor.resource.to_owned(),
                    operation: descriptor.operation.to_owned(),
                });
            }
            operations.insert(descriptor.operation, descriptor);
        }

        Ok(Self { resources })
    }

    /// Looks up the descriptor for `resource` + `operation`.
    ///
    /// Keys are matched exactly.
    pub fn lookup(
        &self,
        resource: &str,
        operation: &str,
    ) -> Result<&OperationDescriptor, OperationNotFound> {
        self.resources
            .get(resource)
            .and_then(|operations| operations.get(operation))
            .ok_or_else(|| OperationNotFound::new(resource, operation))
    }

    /// Iterates over the resource names in sorted order.
    pub fn resources(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.keys().copied()
    }

    /// Iterates over the descriptors of one resource, sorted by operation.
    pub fn operations(&self, resource: &str) -> impl Iterator<Item = &OperationDescriptor> {
        self.resources
            .get(resource)
            .into_iter()
            .flat_map(|operations| operations.values())
    }

    /// Iterates over every descriptor, sorted by resource then operation.
    pub fn iter(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.resources.values().flat_map(|operations| operations.values())
    }

    /// Returns the number of descriptors.
    pub fn len(&self) -> usize {
        self.resources.values().map(BTreeMap::len).sum()
    }

    /// Returns true if the catalog holds no descriptors.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

fn validate(descriptor: &OperationDescriptor) -> CatalogResult<()> {
    for placeholder in template::placeholders(descriptor.path) {
        if descriptor.path_param(placeholder.name).is_none() {
            return Err(CatalogError::UnboundPlaceholder {
                resource: descriptor.resource.to_owned(),
                operation: descriptor.operation.to_owned(),
                placeholder: placeholder.name.to_owned(),
            });
        }
    }

    for binding in descriptor.path_params {
        let declared =
            template::placeholders(descriptor.path).any(|placeholder| placeholder.name == binding.name);
        if !declared {
            return Err(CatalogError::UnusedPathParam {
                resource: descriptor.resource.to_owned(),
                operation: descriptor.operation.to_owned(),
                name: binding.name.to_owned(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{HttpMethod, ParamBinding};

    const FOLDER_ID: &[ParamBinding] = &[ParamBinding::id("folder_id", "folderId")];

    fn folder_get() -> OperationDescriptor {
        OperationDescriptor::new("folder", "get", HttpMethod::Get, "/folders/{folder_id}")
            .with_path_params(FOLDER_ID)
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let catalog = Catalog::from_descriptors([folder_get()]).unwrap();

        let descriptor = catalog.lookup("folder", "get").unwrap();
        assert_eq!(descriptor.path, "/folders/{folder_id}");

        let miss = catalog.lookup("folder", "delete").unwrap_err();
        assert_eq!(miss.resource, "folder");
        assert_eq!(miss.operation, "delete");
        assert!(catalog.lookup("Folder", "get").is_err());
    }

    #[test]
    fn test_duplicate_rejected() {
        let error = Catalog::from_descriptors([folder_get(), folder_get()]).unwrap_err();
        assert!(matches!(error, CatalogError::Duplicate { .. }));
    }

    #[test]
    fn test_unbound_placeholder_rejected() {
        let descriptor =
            OperationDescriptor::new("folder", "get", HttpMethod::Get, "/folders/{folder_id}");
        let error = Catalog::from_descriptors([descriptor]).unwrap_err();
        assert!(error.to_string().contains("folder_id"));
    }

    #[test]
    fn test_unused_path_param_rejected() {
        let descriptor = OperationDescriptor::new("folder", "getAll", HttpMethod::Get, "/folders")
            .with_path_params(FOLDER_ID);
        let error = Catalog::from_descriptors([descriptor]).unwrap_err();
        assert!(matches!(error, CatalogError::UnusedPathParam { .. }));
    }

    #[test]
    fn test_builtin_lookup_every_pair() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());

        for descriptor in catalog.iter() {
            let found = catalog
                .lookup(descriptor.resource, descriptor.operation)
                .unwrap();
            assert_eq!(found, descriptor);
        }
    }

    #[test]
    fn test_builtin_placeholders_match_path_params() {
        for descriptor in Catalog::builtin().iter() {
            let mut placeholders = descriptor.placeholders();
            let mut bound: Vec<_> = descriptor.path_params.iter().map(|b| b.name).collect();
            placeholders.sort_unstable();
            bound.sort_unstable();
            assert_eq!(
                placeholders, bound,
                "{}:{} path {}",
                descriptor.resource, descriptor.operation, descriptor.path
            );
        }
    }

    #[test]
    fn test_builtin_body_field_is_exclusive() {
        for descriptor in Catalog::builtin().iter() {
            if descriptor.body_field.is_some() {
                assert!(descriptor.body_fields.is_empty());
                assert!(descriptor.body_collection.is_none());
            }
        }
    }

    #[test]
    fn test_builtin_pagination_only_on_get() {
        for descriptor in Catalog::builtin().iter() {
            if descriptor.pagination.is_paginated() {
                assert!(descriptor.method.is_get(), "{}", descriptor.operation);
            }
        }
    }

    #[test]
    fn test_operations_by_resource() {
        let catalog = Catalog::builtin();
        assert!(catalog.resources().any(|resource| resource == "media"));
        assert!(catalog.operations("media").all(|d| d.resource == "media"));
        assert_eq!(catalog.operations("nope").count(), 0);
    }

    #[test]
    fn test_builtin_nested_resources() {
        let catalog = Catalog::builtin();

        let attach = catalog.lookup("tag", "attach").unwrap();
        assert_eq!(attach.placeholders(), ["media_id", "tag_id"]);

        let chapters = catalog.lookup("chapter", "getAll").unwrap();
        assert_eq!(chapters.path, "/media/{media_id}/chapters");
        assert!(chapters.supports_pagination());

        assert!(catalog.resources().count() >= 18);
    }
}
