use super::{ADDITIONAL_FIELDS, FILTERS, UPDATE_FIELDS};
use crate::descriptor::{FieldKind, HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const MEDIA_ID: &[ParamBinding] = &[ParamBinding::id("media_id", "mediaId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("media", "getAll", HttpMethod::Get, "/media")
        .with_summary("List media")
        .with_pagination(PaginationMode::LimitSkip)
        .with_query_params(&[ParamBinding::string("sort", "sort")])
        .with_query_collection(FILTERS),
    OperationDescriptor::new("media", "get", HttpMethod::Get, "/media/{media_id}")
        .with_summary("Get a media")
        .with_path_params(MEDIA_ID),
    OperationDescriptor::new("media", "create", HttpMethod::Post, "/media")
        .with_summary("Create a media entry")
        .with_body_fields(&[
            ParamBinding::string("title", "title").required(),
            ParamBinding::string("folder_id", "folderId"),
        ])
        .with_body_collection(ADDITIONAL_FIELDS),
    OperationDescriptor::new("media", "update", HttpMethod::Put, "/media/{media_id}")
        .with_summary("Update a media")
        .with_path_params(MEDIA_ID)
        .with_body_collection(UPDATE_FIELDS),
    OperationDescriptor::new("media", "delete", HttpMethod::Delete, "/media/{media_id}")
        .with_summary("Delete a media")
        .with_path_params(MEDIA_ID),
    OperationDescriptor::new("media", "uploadFromUrl", HttpMethod::Post, "/media/{media_id}/upload")
        .with_summary("Import the source file of a media from a URL")
        .with_path_params(MEDIA_ID)
        .with_body_fields(&[
            ParamBinding::string("url", "url").required(),
            ParamBinding::boolean("encode", "encode"),
        ]),
    OperationDescriptor::new("media", "getFile", HttpMethod::Get, "/media/{media_id}/files/{file?}")
        .with_summary("Get the files of a media, or a single file")
        .with_path_params(&[
            ParamBinding::id("media_id", "mediaId"),
            ParamBinding::string("file", "file"),
        ]),
    OperationDescriptor::new("media", "getThumbnails", HttpMethod::Get, "/media/{media_id}/thumbnails")
        .with_summary("List the thumbnails of a media")
        .with_path_params(MEDIA_ID),
    OperationDescriptor::new(
        "media",
        "setThumbnail",
        HttpMethod::Put,
        "/media/{media_id}/thumbnails/{thumbnail_id}",
    )
    .with_summary("Select the default thumbnail of a media")
    .with_path_params(&[
        ParamBinding::id("media_id", "mediaId"),
        ParamBinding::id("thumbnail_id", "thumbnailId"),
    ]),
    OperationDescriptor::new("media", "getSubtitles", HttpMethod::Get, "/media/{media_id}/subtitles")
        .with_summary("List the subtitle tracks of a media")
        .with_path_params(MEDIA_ID),
    OperationDescriptor::new("media", "addSubtitle", HttpMethod::Post, "/media/{media_id}/subtitles")
        .with_summary("Attach a subtitle track to a media")
        .with_path_params(MEDIA_ID)
        .with_body_fields(&[
            ParamBinding::string("language", "language").required(),
            ParamBinding::string("url", "subtitleUrl").required(),
            ParamBinding::string("label", "label"),
        ]),
    OperationDescriptor::new(
        "media",
        "deleteSubtitle",
        HttpMethod::Delete,
        "/media/{media_id}/subtitles/{subtitle_id}",
    )
    .with_summary("Remove a subtitle track")
    .with_path_params(&[
        ParamBinding::id("media_id", "mediaId"),
        ParamBinding::id("subtitle_id", "subtitleId"),
    ]),
    OperationDescriptor::new("media", "getMetadata", HttpMethod::Get, "/media/{media_id}/metadata")
        .with_summary("Get the custom metadata of a media")
        .with_path_params(MEDIA_ID),
    OperationDescriptor::new("media", "setMetadata", HttpMethod::Put, "/media/{media_id}/metadata")
        .with_summary("Replace the custom metadata of a media")
        .with_path_params(MEDIA_ID)
        .with_body_field("metadataJson"),
    OperationDescriptor::new("media", "search", HttpMethod::Post, "/media/search")
        .with_summary("Search media with a query document")
        .with_body_field("queryJson"),
    OperationDescriptor::new("media", "getChannels", HttpMethod::Get, "/media/{media_id}/channels")
        .with_summary("List the channels a media belongs to")
        .with_path_params(MEDIA_ID)
        .with_pagination(PaginationMode::LimitSkip),
    OperationDescriptor::new("media", "publish", HttpMethod::Post, "/media/{media_id}/publish")
        .with_summary("Publish a media")
        .with_path_params(MEDIA_ID)
        .with_body_fields(&[ParamBinding::new("publish_at", "publishAt", FieldKind::String)]),
    OperationDescriptor::new("media", "unpublish", HttpMethod::Post, "/media/{media_id}/unpublish")
        .with_summary("Unpublish a media")
        .with_path_params(MEDIA_ID),
];
