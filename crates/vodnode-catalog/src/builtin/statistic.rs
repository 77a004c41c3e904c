use super::FILTERS;
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const PERIOD: &[ParamBinding] = &[
    ParamBinding::string("from", "from").required(),
    ParamBinding::string("to", "to").required(),
    ParamBinding::string("granularity", "granularity"),
];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("statistic", "getAccount", HttpMethod::Get, "/statistics")
        .with_summary("Get account-wide audience statistics")
        .with_query_params(PERIOD)
        .with_query_collection(FILTERS),
    OperationDescriptor::new("statistic", "getMedia", HttpMethod::Get, "/statistics/media/{media_id}")
        .with_summary("Get the audience statistics of a media")
        .with_path_params(&[ParamBinding::id("media_id", "mediaId")])
        .with_query_params(PERIOD),
    OperationDescriptor::new(
        "statistic",
        "getChannel",
        HttpMethod::Get,
        "/statistics/channels/{channel_id}",
    )
    .with_summary("Get the audience statistics of a channel")
    .with_path_params(&[ParamBinding::id("channel_id", "channelId")])
    .with_query_params(PERIOD),
    OperationDescriptor::new("statistic", "getTopMedia", HttpMethod::Get, "/statistics/top/media")
        .with_summary("Rank media by views over a period")
        .with_pagination(PaginationMode::LimitSkip)
        .with_query_params(&[
            ParamBinding::string("from", "from").required(),
            ParamBinding::string("to", "to").required(),
        ]),
    OperationDescriptor::new(
        "statistic",
        "getViewers",
        HttpMethod::Get,
        "/statistics/media/{media_id}/viewers",
    )
    .with_summary("List the viewing sessions of a media")
    .with_path_params(&[ParamBinding::id("media_id", "mediaId")])
    .with_pagination(PaginationMode::PagePerPage)
    .with_query_collection(FILTERS),
    OperationDescriptor::new("statistic", "getStorage", HttpMethod::Get, "/statistics/storage")
        .with_summary("Get storage and bandwidth consumption"),
];
