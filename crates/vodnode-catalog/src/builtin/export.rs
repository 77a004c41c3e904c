use crate::descriptor::{FieldKind, HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const EXPORT_ID: &[ParamBinding] = &[ParamBinding::id("export_id", "exportId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("export", "getAll", HttpMethod::Get, "/exports")
        .with_summary("List export jobs")
        .with_pagination(PaginationMode::LimitSkip),
    OperationDescriptor::new("export", "get", HttpMethod::Get, "/exports/{export_id}")
        .with_summary("Get an export job")
        .with_path_params(EXPORT_ID),
    OperationDescriptor::new("export", "create", HttpMethod::Post, "/exports")
        .with_summary("Export media to an external storage target")
        .with_body_fields(&[
            ParamBinding::new("media_ids", "mediaIds", FieldKind::Json).required(),
            ParamBinding::string("target", "target").required(),
            ParamBinding::boolean("include_renditions", "includeRenditions"),
        ]),
    OperationDescriptor::new("export", "cancel", HttpMethod::Delete, "/exports/{export_id}")
        .with_summary("Cancel an export job")
        .with_path_params(EXPORT_ID),
];
