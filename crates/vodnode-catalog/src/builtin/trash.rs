use super::FILTERS;
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const ITEM_ID: &[ParamBinding] = &[ParamBinding::id("item_id", "itemId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("trash", "getAll", HttpMethod::Get, "/trash")
        .with_summary("List deleted media and folders")
        .with_pagination(PaginationMode::LimitSkip)
        .with_query_collection(FILTERS),
    OperationDescriptor::new("trash", "get", HttpMethod::Get, "/trash/{item_id}")
        .with_summary("Get a deleted item")
        .with_path_params(ITEM_ID),
    OperationDescriptor::new("trash", "restore", HttpMethod::Post, "/trash/{item_id}/restore")
        .with_summary("Restore a deleted item")
        .with_path_params(ITEM_ID),
    OperationDescriptor::new("trash", "purge", HttpMethod::Delete, "/trash/{item_id}")
        .with_summary("Permanently delete an item")
        .with_path_params(ITEM_ID),
    OperationDescriptor::new("trash", "empty", HttpMethod::Delete, "/trash")
        .with_summary("Empty the trash"),
];
