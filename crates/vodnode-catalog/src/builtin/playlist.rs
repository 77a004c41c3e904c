use super::{ADDITIONAL_FIELDS, FILTERS, UPDATE_FIELDS};
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const PLAYLIST_ID: &[ParamBinding] = &[ParamBinding::id("playlist_id", "playlistId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("playlist", "getAll", HttpMethod::Get, "/playlists")
        .with_summary("List playlists")
        .with_pagination(PaginationMode::PagePerPage)
        .with_query_collection(FILTERS),
    OperationDescriptor::new("playlist", "get", HttpMethod::Get, "/playlists/{playlist_id}")
        .with_summary("Get a playlist")
        .with_path_params(PLAYLIST_ID),
    OperationDescriptor::new("playlist", "create", HttpMethod::Post, "/playlists")
        .with_summary("Create a playlist")
        .with_body_fields(&[
            ParamBinding::string("name", "name").required(),
            ParamBinding::string("type", "playlistType"),
        ])
        .with_body_collection(ADDITIONAL_FIELDS),
    OperationDescriptor::new("playlist", "update", HttpMethod::Put, "/playlists/{playlist_id}")
        .with_summary("Update a playlist")
        .with_path_params(PLAYLIST_ID)
        .with_body_collection(UPDATE_FIELDS),
    OperationDescriptor::new("playlist", "delete", HttpMethod::Delete, "/playlists/{playlist_id}")
        .with_summary("Delete a playlist")
        .with_path_params(PLAYLIST_ID),
    OperationDescriptor::new("playlist", "getItems", HttpMethod::Get, "/playlists/{playlist_id}/items")
        .with_summary("List the items of a playlist")
        .with_path_params(PLAYLIST_ID)
        .with_pagination(PaginationMode::PagePerPage),
    OperationDescriptor::new("playlist", "addItem", HttpMethod::Post, "/playlists/{playlist_id}/items")
        .with_summary("Append a media to a playlist")
        .with_path_params(PLAYLIST_ID)
        .with_body_fields(&[
            ParamBinding::id("media_id", "mediaId"),
            ParamBinding::number("position", "position"),
        ]),
    OperationDescriptor::new(
        "playlist",
        "removeItem",
        HttpMethod::Delete,
        "/playlists/{playlist_id}/items/{item_id}",
    )
    .with_summary("Remove an item from a playlist")
    .with_path_params(&[
        ParamBinding::id("playlist_id", "playlistId"),
        ParamBinding::id("item_id", "itemId"),
    ]),
    OperationDescriptor::new("playlist", "reorder", HttpMethod::Put, "/playlists/{playlist_id}/items")
        .with_summary("Replace the item order of a playlist")
        .with_path_params(PLAYLIST_ID)
        .with_body_field("orderJson"),
];
