//! Operation descriptor types.
//!
//! Descriptors are plain `'static` data so that the builtin table can live in
//! a `static` slice and be shared without allocation.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

use crate::template;

/// HTTP verbs used by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Returns whether this is a read (`GET`) request.
    #[inline]
    pub const fn is_get(&self) -> bool {
        matches!(self, Self::Get)
    }
}

/// Pagination strategy advertised by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PaginationMode {
    /// Single request, no pagination parameters.
    #[default]
    None,
    /// Offset pagination through `limit` and `skip` query parameters.
    LimitSkip,
    /// Page pagination through `page` and `per_page` query parameters.
    PagePerPage,
}

impl PaginationMode {
    /// Returns whether the operation can page through results.
    #[inline]
    pub const fn is_paginated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Value type of a bound parameter, as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[derive(AsRefStr, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    String,
    Number,
    Boolean,
    Json,
}

/// Binds a request parameter `name` to the node parameter `field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ParamBinding {
    /// Name on the wire: placeholder, query key or body key.
    pub name: &'static str,
    /// Name of the node parameter holding the value.
    pub field: &'static str,
    /// Value type shown in the parameter form.
    pub kind: FieldKind,
    /// Whether the form marks the parameter as required.
    pub required: bool,
}

impl ParamBinding {
    /// Creates an optional binding of the given kind.
    pub const fn new(name: &'static str, field: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            field,
            kind,
            required: false,
        }
    }

    /// Creates a required string binding, the usual shape of an identifier.
    pub const fn id(name: &'static str, field: &'static str) -> Self {
        Self::new(name, field, FieldKind::String).required()
    }

    /// Creates an optional string binding.
    pub const fn string(name: &'static str, field: &'static str) -> Self {
        Self::new(name, field, FieldKind::String)
    }

    /// Creates an optional number binding.
    pub const fn number(name: &'static str, field: &'static str) -> Self {
        Self::new(name, field, FieldKind::Number)
    }

    /// Creates an optional boolean binding.
    pub const fn boolean(name: &'static str, field: &'static str) -> Self {
        Self::new(name, field, FieldKind::Boolean)
    }

    /// Marks the binding as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Describes how a single `resource` + `operation` pair maps onto the API.
///
/// Built with `const` setters so the builtin table reads as data:
///
/// ```rust
/// use vodnode_catalog::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};
///
/// const GET_ALL: OperationDescriptor =
///     OperationDescriptor::new("folder", "getAll", HttpMethod::Get, "/folders")
///         .with_pagination(PaginationMode::LimitSkip)
///         .with_query_collection("filters");
///
/// assert!(GET_ALL.pagination.is_paginated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationDescriptor {
    /// Resource group the operation belongs to.
    pub resource: &'static str,
    /// Operation name within the resource group.
    pub operation: &'static str,
    /// Human readable summary shown next to the operation.
    pub summary: &'static str,
    /// HTTP method of the request.
    pub method: HttpMethod,
    /// Path template relative to the API base URL.
    pub path: &'static str,
    /// Paging protocol of the endpoint.
    pub pagination: PaginationMode,
    /// Bindings substituted into the path template.
    pub path_params: &'static [ParamBinding],
    /// Bindings sent as query parameters.
    pub query_params: &'static [ParamBinding],
    /// Bindings sent as top-level body fields.
    pub body_fields: &'static [ParamBinding],
    /// Freeform collection merged into the query after stripping `query_`.
    pub query_collection: Option<&'static str>,
    /// Freeform collection merged into the body after stripping `body_`.
    pub body_collection: Option<&'static str>,
    /// Parameter supplying the entire request body.
    pub body_field: Option<&'static str>,
}

impl OperationDescriptor {
    /// Creates a descriptor without bindings or pagination.
    pub const fn new(
        resource: &'static str,
        operation: &'static str,
        method: HttpMethod,
        path: &'static str,
    ) -> Self {
        Self {
            resource,
            operation,
            summary: "",
            method,
            path,
            pagination: PaginationMode::None,
            path_params: &[],
            query_params: &[],
            body_fields: &[],
            query_collection: None,
            body_collection: None,
            body_field: None,
        }
    }

    /// Sets the summary.
    pub const fn with_summary(mut self, summary: &'static str) -> Self {
        self.summary = summary;
        self
    }

    /// Sets the pagination mode.
    pub const fn with_pagination(mut self, pagination: PaginationMode) -> Self {
        self.pagination = pagination;
        self
    }

    /// Sets the path bindings.
    pub const fn with_path_params(mut self, params: &'static [ParamBinding]) -> Self {
        self.path_params = params;
        self
    }

    /// Sets the query bindings.
    pub const fn with_query_params(mut self, params: &'static [ParamBinding]) -> Self {
        self.query_params = params;
        self
    }

    /// Sets the body field bindings.
    pub const fn with_body_fields(mut self, fields: &'static [ParamBinding]) -> Self {
        self.body_fields = fields;
        self
    }

    /// Names the collection merged into the query.
    pub const fn with_query_collection(mut self, name: &'static str) -> Self {
        self.query_collection = Some(name);
        self
    }

    /// Names the collection merged into the body.
    pub const fn with_body_collection(mut self, name: &'static str) -> Self {
        self.body_collection = Some(name);
        self
    }

    /// Names the parameter sent verbatim as the body.
    pub const fn with_body_field(mut self, name: &'static str) -> Self {
        self.body_field = Some(name);
        self
    }

    /// Returns whether `return_all` and `limit` apply to this operation.
    ///
    /// Only `GET` operations with a pagination mode expose them.
    #[inline]
    pub const fn supports_pagination(&self) -> bool {
        self.method.is_get() && self.pagination.is_paginated()
    }

    /// Returns the path binding for the placeholder `name`, if declared.
    pub fn path_param(&self, name: &str) -> Option<&ParamBinding> {
        self.path_params.iter().find(|binding| binding.name == name)
    }

    /// Returns the placeholder names of the path template in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        template::placeholders(self.path)
            .map(|placeholder| placeholder.name)
            .collect()
    }

    /// Iterates over every scalar binding: path, then query, then body.
    pub fn bindings(&self) -> impl Iterator<Item = &ParamBinding> {
        self.path_params
            .iter()
            .chain(self.query_params)
            .chain(self.body_fields)
    }
}
