use super::UPDATE_FIELDS;
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const CATEGORY_ID: &[ParamBinding] = &[ParamBinding::id("category_id", "categoryId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("category", "getAll", HttpMethod::Get, "/categories")
        .with_summary("List categories")
        .with_pagination(PaginationMode::LimitSkip),
    OperationDescriptor::new("category", "get", HttpMethod::Get, "/categories/{category_id}")
        .with_summary("Get a category")
        .with_path_params(CATEGORY_ID),
    OperationDescriptor::new("category", "create", HttpMethod::Post, "/categories")
        .with_summary("Create a category")
        .with_body_fields(&[
            ParamBinding::string("name", "name").required(),
            ParamBinding::string("parent_id", "parentId"),
        ]),
    OperationDescriptor::new("category", "update", HttpMethod::Put, "/categories/{category_id}")
        .with_summary("Update a category")
        .with_path_params(CATEGORY_ID)
        .with_body_collection(UPDATE_FIELDS),
    OperationDescriptor::new("category", "delete", HttpMethod::Delete, "/categories/{category_id}")
        .with_summary("Delete a category")
        .with_path_params(CATEGORY_ID),
];
