#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod command;
mod config;

use std::process;

use anyhow::Context;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "vodnode_cli::startup";
pub const TRACING_TARGET_CONFIG: &str = "vodnode_cli::config";
pub const TRACING_TARGET_COMMAND: &str = "vodnode_cli::command";

#[tokio::main]
async fn main() {
    let error = match run().await {
        Ok(outcome) => process::exit(outcome.code()),
        Err(error) => error,
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_COMMAND,
            error = %format_args!("{error:#}"),
            "command terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<command::Outcome> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.log();
    cli.validate()?;

    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        command = cli.command.name(),
        "starting vodnode"
    );

    let command = cli.command.name();
    command::execute(cli)
        .await
        .with_context(|| format!("{command} command failed"))
}
