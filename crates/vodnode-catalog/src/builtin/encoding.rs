use super::FILTERS;
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const PROFILE_ID: &[ParamBinding] = &[ParamBinding::id("profile_id", "profileId")];
const JOB_ID: &[ParamBinding] = &[ParamBinding::id("job_id", "jobId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("encoding", "getProfiles", HttpMethod::Get, "/encodings/profiles")
        .with_summary("List encoding profiles")
        .with_pagination(PaginationMode::LimitSkip),
    OperationDescriptor::new(
        "encoding",
        "getProfile",
        HttpMethod::Get,
        "/encodings/profiles/{profile_id}",
    )
    .with_summary("Get an encoding profile")
    .with_path_params(PROFILE_ID),
    OperationDescriptor::new("encoding", "createProfile", HttpMethod::Post, "/encodings/profiles")
        .with_summary("Create an encoding profile from a JSON definition")
        .with_body_field("profileJson"),
    OperationDescriptor::new(
        "encoding",
        "deleteProfile",
        HttpMethod::Delete,
        "/encodings/profiles/{profile_id}",
    )
    .with_summary("Delete an encoding profile")
    .with_path_params(PROFILE_ID),
    OperationDescriptor::new("encoding", "getJobs", HttpMethod::Get, "/encodings/jobs")
        .with_summary("List encoding jobs")
        .with_pagination(PaginationMode::LimitSkip)
        .with_query_params(&[ParamBinding::string("status", "status")])
        .with_query_collection(FILTERS),
    OperationDescriptor::new("encoding", "getJob", HttpMethod::Get, "/encodings/jobs/{job_id}")
        .with_summary("Get an encoding job")
        .with_path_params(JOB_ID),
    OperationDescriptor::new("encoding", "cancelJob", HttpMethod::Delete, "/encodings/jobs/{job_id}")
        .with_summary("Cancel an encoding job")
        .with_path_params(JOB_ID),
    OperationDescriptor::new("encoding", "start", HttpMethod::Post, "/media/{media_id}/encodings")
        .with_summary("Start encoding a media with a profile")
        .with_path_params(&[ParamBinding::id("media_id", "mediaId")])
        .with_body_fields(&[
            ParamBinding::id("profile_id", "profileId"),
            ParamBinding::number("priority", "priority"),
        ]),
    OperationDescriptor::new(
        "encoding",
        "getForMedia",
        HttpMethod::Get,
        "/media/{media_id}/encodings",
    )
    .with_summary("List the renditions of a media")
    .with_path_params(&[ParamBinding::id("media_id", "mediaId")]),
];
