use super::{ADDITIONAL_FIELDS, FILTERS, UPDATE_FIELDS};
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const PLAYER_ID: &[ParamBinding] = &[ParamBinding::id("player_id", "playerId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("player", "getAll", HttpMethod::Get, "/players")
        .with_summary("List players")
        .with_pagination(PaginationMode::PagePerPage)
        .with_query_collection(FILTERS),
    OperationDescriptor::new("player", "get", HttpMethod::Get, "/players/{player_id}")
        .with_summary("Get a player")
        .with_path_params(PLAYER_ID),
    OperationDescriptor::new("player", "create", HttpMethod::Post, "/players")
        .with_summary("Create a player")
        .with_body_fields(&[
            ParamBinding::string("name", "name").required(),
            ParamBinding::boolean("autoplay", "autoplay"),
            ParamBinding::boolean("loop", "loop"),
        ])
        .with_body_collection(ADDITIONAL_FIELDS),
    OperationDescriptor::new("player", "update", HttpMethod::Patch, "/players/{player_id}")
        .with_summary("Update a player")
        .with_path_params(PLAYER_ID)
        .with_body_collection(UPDATE_FIELDS),
    OperationDescriptor::new("player", "delete", HttpMethod::Delete, "/players/{player_id}")
        .with_summary("Delete a player")
        .with_path_params(PLAYER_ID),
    OperationDescriptor::new(
        "player",
        "getEmbedCode",
        HttpMethod::Get,
        "/players/{player_id}/embed/{media_id}",
    )
    .with_summary("Get the embed code of a media in a player")
    .with_path_params(&[
        ParamBinding::id("player_id", "playerId"),
        ParamBinding::id("media_id", "mediaId"),
    ])
    .with_query_params(&[
        ParamBinding::number("width", "width"),
        ParamBinding::number("height", "height"),
        ParamBinding::boolean("responsive", "responsive"),
    ]),
    OperationDescriptor::new("player", "setLogo", HttpMethod::Put, "/players/{player_id}/logo")
        .with_summary("Set the logo of a player")
        .with_path_params(PLAYER_ID)
        .with_body_fields(&[
            ParamBinding::string("url", "logoUrl").required(),
            ParamBinding::string("link", "logoLink"),
            ParamBinding::string("position", "logoPosition"),
        ]),
    OperationDescriptor::new("player", "deleteLogo", HttpMethod::Delete, "/players/{player_id}/logo")
        .with_summary("Remove the logo of a player")
        .with_path_params(PLAYER_ID),
];
