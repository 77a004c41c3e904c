//! Parameter schema rendered by the workflow host as a configuration form.
//!
//! The schema is derived from the catalog so that every descriptor binding
//! has exactly one form field per operation. Fields are scoped with
//! `display_options` to the resource and operation they belong to.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Value, json};

use crate::catalog::Catalog;
use crate::descriptor::{FieldKind, OperationDescriptor, ParamBinding};
use crate::params;

/// Bounds of the `limit` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitOptions {
    pub default: u32,
    pub max: u32,
}

impl Default for LimitOptions {
    fn default() -> Self {
        Self {
            default: 50,
            max: 100,
        }
    }
}

/// Form field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    Options,
    String,
    Number,
    Boolean,
    Json,
    Collection,
}

impl From<FieldKind> for PropertyType {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::String => Self::String,
            FieldKind::Number => Self::Number,
            FieldKind::Boolean => Self::Boolean,
            FieldKind::Json => Self::Json,
        }
    }
}

/// One selectable value of an `options` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyOption {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Restricts a field to the listed parameter values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayOptions {
    pub show: BTreeMap<String, Vec<Value>>,
}

impl DisplayOptions {
    fn resource(resource: &str) -> Self {
        let mut show = BTreeMap::new();
        show.insert(params::RESOURCE.to_owned(), vec![json!(resource)]);
        Self { show }
    }

    fn operation(descriptor: &OperationDescriptor) -> Self {
        let mut options = Self::resource(descriptor.resource);
        options
            .show
            .insert(params::OPERATION.to_owned(), vec![json!(descriptor.operation)]);
        options
    }

    fn with(mut self, name: &str, value: Value) -> Self {
        self.show.insert(name.to_owned(), vec![value]);
        self
    }
}

/// Numeric bounds of a `number` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeOptions {
    pub min_value: u32,
    pub max_value: u32,
}

/// A single form field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub required: bool,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_options: Option<DisplayOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_options: Option<TypeOptions>,
}

impl NodeProperty {
    fn new(name: &str, kind: PropertyType, default: Value) -> Self {
        Self {
            name: name.to_owned(),
            display_name: display_name(name),
            kind,
            required: false,
            default,
            description: None,
            options: Vec::new(),
            display_options: None,
            type_options: None,
        }
    }

    fn from_binding(binding: &ParamBinding, descriptor: &OperationDescriptor) -> Self {
        let kind = PropertyType::from(binding.kind);
        let default = match binding.kind {
            FieldKind::String => json!(""),
            FieldKind::Number => json!(0),
            FieldKind::Boolean => json!(false),
            FieldKind::Json => json!({}),
        };

        let mut property = Self::new(binding.field, kind, default);
        property.required = binding.required;
        property.display_options = Some(DisplayOptions::operation(descriptor));
        property
    }

    fn collection(name: &str, prefix: &str, descriptor: &OperationDescriptor) -> Self {
        let mut property = Self::new(name, PropertyType::Collection, json!({}));
        property.description = Some(format!(
            "Extra fields; keys are sent without the '{prefix}' prefix"
        ));
        property.display_options = Some(DisplayOptions::operation(descriptor));
        property
    }
}

/// Complete parameter schema of the node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub name: String,
    pub display_name: String,
    pub version: u32,
    pub properties: Vec<NodeProperty>,
}

impl NodeDescription {
    /// Derives the schema of every descriptor in `catalog`.
    pub fn from_catalog(catalog: &Catalog, limits: LimitOptions) -> Self {
        let mut properties = vec![resource_property(catalog)];

        for resource in catalog.resources() {
            properties.push(operation_property(catalog, resource));

            for descriptor in catalog.operations(resource) {
                properties.extend(operation_fields(descriptor, limits));
            }
        }

        Self {
            name: "vodnode".to_owned(),
            display_name: "Video on Demand".to_owned(),
            version: 1,
            properties,
        }
    }

    /// Returns the fields visible for one resource/operation selection.
    pub fn visible(&self, resource: &str, operation: &str) -> Vec<&NodeProperty> {
        self.properties
            .iter()
            .filter(|property| match &property.display_options {
                None => true,
                Some(options) => {
                    matches_value(options, params::RESOURCE, resource)
                        && matches_value(options, params::OPERATION, operation)
                }
            })
            .collect()
    }
}

fn matches_value(options: &DisplayOptions, name: &str, value: &str) -> bool {
    options
        .show
        .get(name)
        .is_none_or(|allowed| allowed.iter().any(|v| v.as_str() == Some(value)))
}

fn resource_property(catalog: &Catalog) -> NodeProperty {
    let options: Vec<_> = catalog
        .resources()
        .map(|resource| PropertyOption {
            name: display_name(resource),
            value: resource.to_owned(),
            description: None,
        })
        .collect();

    let default = options
        .first()
        .map(|option| json!(option.value))
        .unwrap_or(Value::Null);

    let mut property = NodeProperty::new(params::RESOURCE, PropertyType::Options, default);
    property.required = true;
    property.options = options;
    property
}

fn operation_property(catalog: &Catalog, resource: &str) -> NodeProperty {
    let options: Vec<_> = catalog
        .operations(resource)
        .map(|descriptor| PropertyOption {
            name: display_name(descriptor.operation),
            value: descriptor.operation.to_owned(),
            description: (!descriptor.summary.is_empty()).then(|| descriptor.summary.to_owned()),
        })
        .collect();

    let default = options
        .first()
        .map(|option| json!(option.value))
        .unwrap_or(Value::Null);

    let mut property = NodeProperty::new(params::OPERATION, PropertyType::Options, default);
    property.required = true;
    property.options = options;
    property.display_options = Some(DisplayOptions::resource(resource));
    property
}

fn operation_fields(descriptor: &OperationDescriptor, limits: LimitOptions) -> Vec<NodeProperty> {
    let mut fields: Vec<_> = descriptor
        .bindings()
        .map(|binding| NodeProperty::from_binding(binding, descriptor))
        .collect();

    if let Some(name) = descriptor.body_field {
        let mut body = NodeProperty::new(name, PropertyType::Json, json!({}));
        body.required = true;
        body.description = Some("Request body sent as-is".to_owned());
        body.display_options = Some(DisplayOptions::operation(descriptor));
        fields.push(body);
    } else if let Some(name) = descriptor.body_collection {
        fields.push(NodeProperty::collection(name, params::BODY_PREFIX, descriptor));
    }

    if let Some(name) = descriptor.query_collection {
        fields.push(NodeProperty::collection(name, params::QUERY_PREFIX, descriptor));
    }

    if descriptor.supports_pagination() {
        let mut return_all =
            NodeProperty::new(params::RETURN_ALL, PropertyType::Boolean, json!(false));
        return_all.description =
            Some("Whether to return all results or only up to a given limit".to_owned());
        return_all.display_options = Some(DisplayOptions::operation(descriptor));
        fields.push(return_all);

        let mut limit =
            NodeProperty::new(params::LIMIT, PropertyType::Number, json!(limits.default));
        limit.description = Some("Max number of results to return".to_owned());
        limit.type_options = Some(TypeOptions {
            min_value: 1,
            max_value: limits.max,
        });
        limit.display_options = Some(
            DisplayOptions::operation(descriptor).with(params::RETURN_ALL, json!(false)),
        );
        fields.push(limit);
    }

    let mut full_response =
        NodeProperty::new(params::RETURN_FULL_RESPONSE, PropertyType::Boolean, json!(false));
    full_response.description =
        Some("Whether to return the unprocessed response object".to_owned());
    full_response.display_options = Some(DisplayOptions::operation(descriptor));
    fields.push(full_response);

    fields
}

/// Turns `camelCase`/`snake_case` names into title-cased labels.
///
/// Common acronyms are upper-cased: `channelId` becomes `Channel ID`.
pub fn display_name(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in name.chars() {
        if ch == '_' || ch == '-' || ch == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| match word.to_ascii_lowercase().as_str() {
            "id" | "url" | "json" => word.to_ascii_uppercase(),
            _ => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
