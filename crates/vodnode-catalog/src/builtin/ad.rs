use super::{ADDITIONAL_FIELDS, UPDATE_FIELDS};
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const AD_ID: &[ParamBinding] = &[ParamBinding::id("ad_id", "adId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("ad", "getAll", HttpMethod::Get, "/ads")
        .with_summary("List advertising configurations")
        .with_pagination(PaginationMode::PagePerPage),
    OperationDescriptor::new("ad", "get", HttpMethod::Get, "/ads/{ad_id}")
        .with_summary("Get an advertising configuration")
        .with_path_params(AD_ID),
    OperationDescriptor::new("ad", "create", HttpMethod::Post, "/ads")
        .with_summary("Create an advertising configuration")
        .with_body_fields(&[
            ParamBinding::string("name", "name").required(),
            ParamBinding::string("vast_url", "vastUrl").required(),
            ParamBinding::number("offset", "offset"),
            ParamBinding::boolean("skippable", "skippable"),
        ])
        .with_body_collection(ADDITIONAL_FIELDS),
    OperationDescriptor::new("ad", "update", HttpMethod::Put, "/ads/{ad_id}")
        .with_summary("Update an advertising configuration")
        .with_path_params(AD_ID)
        .with_body_collection(UPDATE_FIELDS),
    OperationDescriptor::new("ad", "delete", HttpMethod::Delete, "/ads/{ad_id}")
        .with_summary("Delete an advertising configuration")
        .with_path_params(AD_ID),
    OperationDescriptor::new("ad", "assignToPlayer", HttpMethod::Put, "/players/{player_id}/ads/{ad_id}")
        .with_summary("Enable an advertising configuration on a player")
        .with_path_params(&[
            ParamBinding::id("player_id", "playerId"),
            ParamBinding::id("ad_id", "adId"),
        ]),
];
