use super::UPDATE_FIELDS;
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const LOGO_ID: &[ParamBinding] = &[ParamBinding::id("logo_id", "logoId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("logo", "getAll", HttpMethod::Get, "/logos")
        .with_summary("List logos")
        .with_pagination(PaginationMode::PagePerPage),
    OperationDescriptor::new("logo", "get", HttpMethod::Get, "/logos/{logo_id}")
        .with_summary("Get a logo")
        .with_path_params(LOGO_ID),
    OperationDescriptor::new("logo", "create", HttpMethod::Post, "/logos")
        .with_summary("Import a logo from a URL")
        .with_body_fields(&[
            ParamBinding::string("name", "name").required(),
            ParamBinding::string("url", "url").required(),
            ParamBinding::string("link", "link"),
            ParamBinding::string("position", "position"),
        ]),
    OperationDescriptor::new("logo", "update", HttpMethod::Patch, "/logos/{logo_id}")
        .with_summary("Update a logo")
        .with_path_params(LOGO_ID)
        .with_body_collection(UPDATE_FIELDS),
    OperationDescriptor::new("logo", "delete", HttpMethod::Delete, "/logos/{logo_id}")
        .with_summary("Delete a logo")
        .with_path_params(LOGO_ID),
];
