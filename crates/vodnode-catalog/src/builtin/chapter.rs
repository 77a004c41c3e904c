use super::UPDATE_FIELDS;
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const MEDIA_ID: &[ParamBinding] = &[ParamBinding::id("media_id", "mediaId")];
const CHAPTER_ID: &[ParamBinding] = &[
    ParamBinding::id("media_id", "mediaId"),
    ParamBinding::id("chapter_id", "chapterId"),
];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("chapter", "getAll", HttpMethod::Get, "/media/{media_id}/chapters")
        .with_summary("List the chapters of a media")
        .with_path_params(MEDIA_ID)
        .with_pagination(PaginationMode::LimitSkip),
    OperationDescriptor::new(
        "chapter",
        "get",
        HttpMethod::Get,
        "/media/{media_id}/chapters/{chapter_id}",
    )
    .with_summary("Get a chapter")
    .with_path_params(CHAPTER_ID),
    OperationDescriptor::new("chapter", "create", HttpMethod::Post, "/media/{media_id}/chapters")
        .with_summary("Add a chapter to a media")
        .with_path_params(MEDIA_ID)
        .with_body_fields(&[
            ParamBinding::string("title", "title").required(),
            ParamBinding::number("start", "start").required(),
            ParamBinding::number("end", "end"),
            ParamBinding::string("description", "description"),
        ]),
    OperationDescriptor::new(
        "chapter",
        "update",
        HttpMethod::Put,
        "/media/{media_id}/chapters/{chapter_id}",
    )
    .with_summary("Update a chapter")
    .with_path_params(CHAPTER_ID)
    .with_body_collection(UPDATE_FIELDS),
    OperationDescriptor::new(
        "chapter",
        "delete",
        HttpMethod::Delete,
        "/media/{media_id}/chapters/{chapter_id}",
    )
    .with_summary("Delete a chapter")
    .with_path_params(CHAPTER_ID),
    OperationDescriptor::new("chapter", "deleteAll", HttpMethod::Delete, "/media/{media_id}/chapters")
        .with_summary("Delete every chapter of a media")
        .with_path_params(MEDIA_ID),
];
