use super::ADDITIONAL_FIELDS;
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const UPLOAD_ID: &[ParamBinding] = &[ParamBinding::id("upload_id", "uploadId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("upload", "getAll", HttpMethod::Get, "/uploads")
        .with_summary("List upload sessions")
        .with_pagination(PaginationMode::LimitSkip)
        .with_query_params(&[ParamBinding::string("status", "status")]),
    OperationDescriptor::new("upload", "get", HttpMethod::Get, "/uploads/{upload_id}")
        .with_summary("Get the progress of an upload session")
        .with_path_params(UPLOAD_ID),
    OperationDescriptor::new("upload", "createToken", HttpMethod::Post, "/uploads")
        .with_summary("Open a signed upload session")
        .with_body_fields(&[
            ParamBinding::string("filename", "filename").required(),
            ParamBinding::number("size", "size"),
            ParamBinding::string("folder_id", "folderId"),
        ])
        .with_body_collection(ADDITIONAL_FIELDS),
    OperationDescriptor::new("upload", "cancel", HttpMethod::Delete, "/uploads/{upload_id}")
        .with_summary("Cancel an upload session")
        .with_path_params(UPLOAD_ID),
];
