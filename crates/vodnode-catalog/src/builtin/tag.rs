use super::FILTERS;
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const TAG_ID: &[ParamBinding] = &[ParamBinding::id("tag_id", "tagId")];
const MEDIA_TAG: &[ParamBinding] = &[
    ParamBinding::id("media_id", "mediaId"),
    ParamBinding::id("tag_id", "tagId"),
];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("tag", "getAll", HttpMethod::Get, "/tags")
        .with_summary("List tags")
        .with_pagination(PaginationMode::LimitSkip)
        .with_query_params(&[ParamBinding::string("search", "search")]),
    OperationDescriptor::new("tag", "get", HttpMethod::Get, "/tags/{tag_id}")
        .with_summary("Get a tag")
        .with_path_params(TAG_ID),
    OperationDescriptor::new("tag", "create", HttpMethod::Post, "/tags")
        .with_summary("Create a tag")
        .with_body_fields(&[
            ParamBinding::string("name", "name").required(),
            ParamBinding::string("color", "color"),
        ]),
    OperationDescriptor::new("tag", "update", HttpMethod::Put, "/tags/{tag_id}")
        .with_summary("Rename a tag")
        .with_path_params(TAG_ID)
        .with_body_fields(&[
            ParamBinding::string("name", "name"),
            ParamBinding::string("color", "color"),
        ]),
    OperationDescriptor::new("tag", "delete", HttpMethod::Delete, "/tags/{tag_id}")
        .with_summary("Delete a tag")
        .with_path_params(TAG_ID),
    OperationDescriptor::new("tag", "getMedia", HttpMethod::Get, "/tags/{tag_id}/media")
        .with_summary("List the media carrying a tag")
        .with_path_params(TAG_ID)
        .with_pagination(PaginationMode::LimitSkip)
        .with_query_collection(FILTERS),
    OperationDescriptor::new("tag", "attach", HttpMethod::Put, "/media/{media_id}/tags/{tag_id}")
        .with_summary("Attach a tag to a media")
        .with_path_params(MEDIA_TAG),
    OperationDescriptor::new("tag", "detach", HttpMethod::Delete, "/media/{media_id}/tags/{tag_id}")
        .with_summary("Detach a tag from a media")
        .with_path_params(MEDIA_TAG),
];
