use crate::descriptor::{FieldKind, HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const WEBHOOK_ID: &[ParamBinding] = &[ParamBinding::id("webhook_id", "webhookId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("webhook", "getAll", HttpMethod::Get, "/webhooks")
        .with_summary("List webhook subscriptions"),
    OperationDescriptor::new("webhook", "get", HttpMethod::Get, "/webhooks/{webhook_id}")
        .with_summary("Get a webhook subscription")
        .with_path_params(WEBHOOK_ID),
    OperationDescriptor::new("webhook", "create", HttpMethod::Post, "/webhooks")
        .with_summary("Subscribe a URL to account events")
        .with_body_fields(&[
            ParamBinding::string("url", "url").required(),
            ParamBinding::new("events", "events", FieldKind::Json).required(),
            ParamBinding::string("secret", "secret"),
        ]),
    OperationDescriptor::new("webhook", "update", HttpMethod::Patch, "/webhooks/{webhook_id}")
        .with_summary("Change the URL or events of a subscription")
        .with_path_params(WEBHOOK_ID)
        .with_body_fields(&[
            ParamBinding::string("url", "url"),
            ParamBinding::new("events", "events", FieldKind::Json),
            ParamBinding::boolean("enabled", "enabled"),
        ]),
    OperationDescriptor::new("webhook", "delete", HttpMethod::Delete, "/webhooks/{webhook_id}")
        .with_summary("Delete a webhook subscription")
        .with_path_params(WEBHOOK_ID),
    OperationDescriptor::new("webhook", "test", HttpMethod::Post, "/webhooks/{webhook_id}/test")
        .with_summary("Send a test event to a subscription")
        .with_path_params(WEBHOOK_ID),
    OperationDescriptor::new(
        "webhook",
        "getDeliveries",
        HttpMethod::Get,
        "/webhooks/{webhook_id}/deliveries",
    )
    .with_summary("List recent delivery attempts of a subscription")
    .with_path_params(WEBHOOK_ID)
    .with_pagination(PaginationMode::PagePerPage),
];
