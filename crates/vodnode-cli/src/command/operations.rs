//! `operations` command.

use std::fmt::Write;

use anyhow::bail;
use clap::Args;
use vodnode_catalog::{Catalog, OperationDescriptor, PaginationMode};

/// Arguments of the `operations` command.
#[derive(Debug, Clone, Args)]
pub struct OperationsArgs {
    /// Only list the operations of this resource
    #[arg(long)]
    pub resource: Option<String>,
}

/// Renders one line per catalog operation.
pub fn render(args: &OperationsArgs) -> anyhow::Result<String> {
    let catalog = Catalog::builtin();

    let descriptors: Vec<&OperationDescriptor> = match &args.resource {
        Some(resource) => catalog.operations(resource).collect(),
        None => catalog.iter().collect(),
    };

    if descriptors.is_empty()
        && let Some(resource) = &args.resource
    {
        bail!("unknown resource '{resource}'");
    }

    let mut output = String::new();
    for descriptor in descriptors {
        let pagination = match descriptor.pagination {
            PaginationMode::None => String::new(),
            mode => format!(" [{mode}]"),
        };
        writeln!(
            output,
            "{:<10} {:<15} {:<6} {}{}",
            descriptor.resource, descriptor.operation, descriptor.method, descriptor.path, pagination
        )?;
    }

    Ok(output)
}
