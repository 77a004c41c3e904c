use super::{FILTERS, UPDATE_FIELDS};
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const FOLDER_ID: &[ParamBinding] = &[ParamBinding::id("folder_id", "folderId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("folder", "getAll", HttpMethod::Get, "/folders")
        .with_summary("List folders")
        .with_pagination(PaginationMode::LimitSkip)
        .with_query_collection(FILTERS),
    OperationDescriptor::new("folder", "get", HttpMethod::Get, "/folders/{folder_id}")
        .with_summary("Get a folder")
        .with_path_params(FOLDER_ID),
    OperationDescriptor::new("folder", "create", HttpMethod::Post, "/folders")
        .with_summary("Create a folder")
        .with_body_fields(&[
            ParamBinding::string("name", "name").required(),
            ParamBinding::string("parent_id", "parentId"),
        ]),
    OperationDescriptor::new("folder", "update", HttpMethod::Patch, "/folders/{folder_id}")
        .with_summary("Update a folder")
        .with_path_params(FOLDER_ID)
        .with_body_collection(UPDATE_FIELDS),
    OperationDescriptor::new("folder", "delete", HttpMethod::Delete, "/folders/{folder_id}")
        .with_summary("Delete a folder")
        .with_path_params(FOLDER_ID)
        .with_query_params(&[ParamBinding::boolean("recursive", "recursive")]),
    OperationDescriptor::new("folder", "getChildren", HttpMethod::Get, "/folders/{folder_id}/folders")
        .with_summary("List the subfolders of a folder")
        .with_path_params(FOLDER_ID)
        .with_pagination(PaginationMode::LimitSkip),
    OperationDescriptor::new("folder", "getMedia", HttpMethod::Get, "/folders/{folder_id}/media")
        .with_summary("List the media of a folder")
        .with_path_params(FOLDER_ID)
        .with_pagination(PaginationMode::LimitSkip)
        .with_query_collection(FILTERS),
    OperationDescriptor::new("folder", "move", HttpMethod::Post, "/folders/{folder_id}/move")
        .with_summary("Move a folder under another folder")
        .with_path_params(FOLDER_ID)
        .with_body_fields(&[ParamBinding::id("parent_id", "parentId")]),
];
