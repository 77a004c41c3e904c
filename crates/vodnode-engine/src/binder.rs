//! Gathers path, query and body values for an operation.

use serde_json::{Map, Value};
use vodnode_catalog::OperationDescriptor;
use vodnode_catalog::params::{BODY_PREFIX, QUERY_PREFIX};

/// Values bound from one row, grouped by destination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundParameters {
    /// Values for the URL placeholders, keyed by placeholder name.
    pub path: Map<String, Value>,
    /// Query-string values.
    pub query: Map<String, Value>,
    /// Request body. An object unless the operation sends a verbatim body
    /// field; `null` when that field is undefined.
    pub body: Value,
}

/// Binds the descriptor's parameters using `get` to read field values.
///
/// Fields for which `get` returns `None` are not stored. Never fails; values
/// are not type-checked.
pub fn bind<F>(descriptor: &OperationDescriptor, get: F) -> BoundParameters
where
    F: Fn(&str) -> Option<Value>,
{
    let collect = |bindings: &[vodnode_catalog::ParamBinding]| {
        let mut values = Map::new();
        for binding in bindings {
            if let Some(value) = get(binding.field) {
                values.insert(binding.name.to_owned(), value);
            }
        }
        values
    };

    let path = collect(descriptor.path_params);

    let mut query = collect(descriptor.query_params);
    if let Some(collection) = descriptor.query_collection {
        query = merge_overlay(query, &collection_map(get(collection)), QUERY_PREFIX);
    }

    let body = match descriptor.body_field {
        Some(field) => get(field).unwrap_or(Value::Null),
        None => {
            let mut body = collect(descriptor.body_fields);
            if let Some(collection) = descriptor.body_collection {
                body = merge_overlay(body, &collection_map(get(collection)), BODY_PREFIX);
            }
            Value::Object(body)
        }
    };

    BoundParameters { path, query, body }
}

/// Merges `overlay` into `base`, stripping `prefix` from overlay keys.
///
/// Overlay entries replace same-named base entries. Keys without the prefix
/// are kept as they are.
pub fn merge_overlay(
    mut base: Map<String, Value>,
    overlay: &Map<String, Value>,
    prefix: &str,
) -> Map<String, Value> {
    for (key, value) in overlay {
        let key = key.strip_prefix(prefix).unwrap_or(key);
        base.insert(key.to_owned(), value.clone());
    }
    base
}

fn collection_map(value: Option<Value>) -> Map<String, Value> {
    match value {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vodnode_catalog::{HttpMethod, ParamBinding};

    use super::*;

    const PATH: &[ParamBinding] = &[ParamBinding::id("channel_id", "channelId")];
    const QUERY: &[ParamBinding] = &[ParamBinding::number("limit", "pageLimit")];
    const BODY: &[ParamBinding] = &[
        ParamBinding::string("foo", "foo"),
        ParamBinding::string("title", "title"),
    ];

    fn row(value: Value) -> impl Fn(&str) -> Option<Value> {
        move |name| value.get(name).cloned()
    }

    fn update() -> OperationDescriptor {
        OperationDescriptor::new("channel", "update", HttpMethod::Put, "/channels/{channel_id}")
            .with_path_params(PATH)
            .with_query_params(QUERY)
            .with_body_fields(BODY)
            .with_query_collection("filters")
            .with_body_collection("updateFields")
    }

    #[test]
    fn test_merge_overlay_strips_prefix() {
        let base = json!({"foo": "unset"}).as_object().cloned().unwrap();
        let overlay = json!({"body_foo": "x", "body_bar": 2}).as_object().cloned().unwrap();

        let merged = merge_overlay(base, &overlay, "body_");
        assert_eq!(Value::Object(merged), json!({"foo": "x", "bar": 2}));
    }

    #[test]
    fn test_merge_overlay_keeps_unprefixed_keys() {
        let overlay = json!({"query_sort": "asc", "status": "ready"})
            .as_object()
            .cloned()
            .unwrap();

        let merged = merge_overlay(Map::new(), &overlay, "query_");
        assert_eq!(Value::Object(merged), json!({"sort": "asc", "status": "ready"}));
    }

    #[test]
    fn test_bind_all_destinations() {
        let bound = bind(
            &update(),
            row(json!({
                "channelId": "c1",
                "pageLimit": 5,
                "foo": "unset",
                "filters": {"query_q": "cats"},
                "updateFields": {"body_foo": "x", "body_bar": 2},
            })),
        );

        assert_eq!(Value::Object(bound.path), json!({"channel_id": "c1"}));
        assert_eq!(Value::Object(bound.query), json!({"limit": 5, "q": "cats"}));
        assert_eq!(bound.body, json!({"foo": "x", "bar": 2}));
    }

    #[test]
    fn test_undefined_fields_skipped_and_null_kept() {
        let bound = bind(&update(), row(json!({"title": null})));

        assert!(bound.path.is_empty());
        assert!(bound.query.is_empty());
        assert_eq!(bound.body, json!({"title": null}));
    }

    #[test]
    fn test_non_object_collection_ignored() {
        let bound = bind(&update(), row(json!({"filters": "oops"})));
        assert!(bound.query.is_empty());
    }

    #[test]
    fn test_body_field_bypasses_fields_and_collection() {
        let descriptor = update().with_body_field("payload");

        let bound = bind(
            &descriptor,
            row(json!({
                "foo": "ignored",
                "updateFields": {"body_bar": 1},
                "payload": [1, 2, 3],
            })),
        );
        assert_eq!(bound.body, json!([1, 2, 3]));

        let bound = bind(&descriptor, row(json!({})));
        assert_eq!(bound.body, Value::Null);
    }
}
