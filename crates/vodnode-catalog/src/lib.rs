#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod builtin;
mod catalog;
mod descriptor;
mod error;

pub mod params;
pub mod schema;
pub mod template;

pub use catalog::Catalog;
pub use descriptor::{FieldKind, HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};
pub use error::{CatalogError, CatalogResult, OperationNotFound};
pub use schema::{LimitOptions, NodeDescription};
