//! `schema` command.

use clap::Args;
use vodnode_catalog::{Catalog, NodeDescription};
use vodnode_engine::EngineConfig;

/// Arguments of the `schema` command.
#[derive(Debug, Clone, Args)]
pub struct SchemaArgs {
    /// Only print the fields visible for this resource
    #[arg(long, requires = "operation")]
    pub resource: Option<String>,

    /// Only print the fields visible for this operation
    #[arg(long, requires = "resource")]
    pub operation: Option<String>,

    /// Emit compact JSON instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,
}

/// Renders the parameter schema of the builtin catalog.
pub fn render(args: &SchemaArgs, engine: &EngineConfig) -> anyhow::Result<String> {
    let description = NodeDescription::from_catalog(Catalog::builtin(), engine.limit_options());

    let output = match (&args.resource, &args.operation) {
        (Some(resource), Some(operation)) => {
            Catalog::builtin().lookup(resource, operation)?;
            let visible = description.visible(resource, operation);
            to_json(&visible, args.compact)?
        }
        _ => to_json(&description, args.compact)?,
    };

    Ok(output)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn args(resource: Option<&str>, operation: Option<&str>) -> SchemaArgs {
        SchemaArgs {
            resource: resource.map(str::to_owned),
            operation: operation.map(str::to_owned),
            compact: true,
        }
    }

    #[test]
    fn test_full_schema() {
        let output = render(&args(None, None), &EngineConfig::default()).unwrap();
        let schema: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(schema["name"], "vodnode");
        assert!(schema["properties"].as_array().unwrap().len() > 10);
    }

    #[test]
    fn test_visible_fields() {
        let output =
            render(&args(Some("media"), Some("get")), &EngineConfig::default()).unwrap();
        let fields: Value = serde_json::from_str(&output).unwrap();
        let names: Vec<_> = fields
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|field| field["name"].as_str())
            .collect();
        assert!(names.contains(&"mediaId"));
        assert!(!names.contains(&"folderId"));
    }

    #[test]
    fn test_unknown_operation() {
        assert!(render(&args(Some("media"), Some("nope")), &EngineConfig::default()).is_err());
    }
}
