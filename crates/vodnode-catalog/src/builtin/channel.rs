use super::{ADDITIONAL_FIELDS, FILTERS, UPDATE_FIELDS};
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const CHANNEL_ID: &[ParamBinding] = &[ParamBinding::id("channel_id", "channelId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("channel", "getAll", HttpMethod::Get, "/channels")
        .with_summary("List channels")
        .with_pagination(PaginationMode::PagePerPage)
        .with_query_collection(FILTERS),
    OperationDescriptor::new("channel", "get", HttpMethod::Get, "/channels/{channel_id}")
        .with_summary("Get a channel")
        .with_path_params(CHANNEL_ID),
    OperationDescriptor::new("channel", "create", HttpMethod::Post, "/channels")
        .with_summary("Create a channel")
        .with_body_fields(&[ParamBinding::string("name", "name").required()])
        .with_body_collection(ADDITIONAL_FIELDS),
    OperationDescriptor::new("channel", "update", HttpMethod::Put, "/channels/{channel_id}")
        .with_summary("Update a channel")
        .with_path_params(CHANNEL_ID)
        .with_body_collection(UPDATE_FIELDS),
    OperationDescriptor::new("channel", "delete", HttpMethod::Delete, "/channels/{channel_id}")
        .with_summary("Delete a channel")
        .with_path_params(CHANNEL_ID),
    OperationDescriptor::new("channel", "getMedia", HttpMethod::Get, "/channels/{channel_id}/media")
        .with_summary("List the media of a channel")
        .with_path_params(CHANNEL_ID)
        .with_pagination(PaginationMode::LimitSkip)
        .with_query_collection(FILTERS),
    OperationDescriptor::new("channel", "addMedia", HttpMethod::Post, "/channels/{channel_id}/media")
        .with_summary("Add a media to a channel")
        .with_path_params(CHANNEL_ID)
        .with_body_fields(&[ParamBinding::id("media_id", "mediaId")]),
    OperationDescriptor::new(
        "channel",
        "removeMedia",
        HttpMethod::Delete,
        "/channels/{channel_id}/media/{media_id}",
    )
    .with_summary("Remove a media from a channel")
    .with_path_params(&[
        ParamBinding::id("channel_id", "channelId"),
        ParamBinding::id("media_id", "mediaId"),
    ]),
];
