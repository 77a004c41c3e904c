use super::{ADDITIONAL_FIELDS, UPDATE_FIELDS};
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const SHARE_ID: &[ParamBinding] = &[ParamBinding::id("share_id", "shareId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("share", "getAll", HttpMethod::Get, "/shares")
        .with_summary("List share links")
        .with_pagination(PaginationMode::LimitSkip)
        .with_query_params(&[ParamBinding::string("media_id", "mediaId")]),
    OperationDescriptor::new("share", "get", HttpMethod::Get, "/shares/{share_id}")
        .with_summary("Get a share link")
        .with_path_params(SHARE_ID),
    OperationDescriptor::new("share", "create", HttpMethod::Post, "/shares")
        .with_summary("Create a share link for a media")
        .with_body_fields(&[
            ParamBinding::string("media_id", "mediaId").required(),
            ParamBinding::string("player_id", "playerId"),
            ParamBinding::string("expires_at", "expiresAt"),
            ParamBinding::string("password", "password"),
        ])
        .with_body_collection(ADDITIONAL_FIELDS),
    OperationDescriptor::new("share", "update", HttpMethod::Patch, "/shares/{share_id}")
        .with_summary("Update a share link")
        .with_path_params(SHARE_ID)
        .with_body_collection(UPDATE_FIELDS),
    OperationDescriptor::new("share", "delete", HttpMethod::Delete, "/shares/{share_id}")
        .with_summary("Revoke a share link")
        .with_path_params(SHARE_ID),
];
