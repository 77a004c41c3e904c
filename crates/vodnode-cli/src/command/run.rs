//! `run` command.

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use vodnode_engine::{Dispatcher, EngineConfig, ExecutionReport, JsonRows, OutputItem, RowError};
use vodnode_reqwest::{ReqwestClient, ReqwestConfig};

use super::Outcome;
use crate::TRACING_TARGET_COMMAND;

/// Arguments of the `run` command.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// API client configuration.
    #[clap(flatten)]
    pub client: ReqwestConfig,

    /// JSON file with the input rows, or `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Pretty-print the output document
    #[arg(long)]
    pub pretty: bool,
}

/// Output document of the `run` command.
#[derive(Debug, Serialize)]
pub struct ReportDocument {
    /// Items of every successful row.
    pub items: Vec<OutputItem>,
    /// One entry per failed row.
    pub errors: Vec<RowFailure>,
}

/// A failed row in the output document.
#[derive(Debug, Serialize)]
pub struct RowFailure {
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    pub stage: &'static str,
    pub message: String,
}

impl From<&RowError> for RowFailure {
    fn from(error: &RowError) -> Self {
        Self {
            row: error.row,
            resource: error.resource.clone(),
            operation: error.operation.clone(),
            stage: error.stage.into(),
            message: error.source.to_string(),
        }
    }
}

impl From<&ExecutionReport> for ReportDocument {
    fn from(report: &ExecutionReport) -> Self {
        Self {
            items: report.items(),
            errors: report.errors().map(RowFailure::from).collect(),
        }
    }
}

/// Reads the rows, runs them through the dispatcher and prints the report.
pub async fn execute(args: RunArgs, engine: EngineConfig) -> anyhow::Result<Outcome> {
    let text = read_input(&args.input).await?;
    let rows = parse_rows(&text).with_context(|| format!("invalid input rows in '{}'", args.input))?;

    let client = ReqwestClient::new(args.client).context("failed to create API client")?;
    let dispatcher = Dispatcher::builtin(client.into_service(), engine);
    let report = dispatcher.execute(&rows).await;

    tracing::info!(
        target: TRACING_TARGET_COMMAND,
        rows = report.len(),
        failed = report.errors().count(),
        "Run finished"
    );

    let document = ReportDocument::from(&report);
    let mut output = if args.pretty {
        serde_json::to_vec_pretty(&document)?
    } else {
        serde_json::to_vec(&document)?
    };
    output.push(b'\n');

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&output).await?;
    stdout.flush().await?;

    Ok(if report.is_success() {
        Outcome::Success
    } else {
        Outcome::RowsFailed
    })
}

/// Parses input rows: an array of objects or a single object.
pub fn parse_rows(text: &str) -> serde_json::Result<JsonRows> {
    serde_json::from_str(text)
}

async fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("failed to read rows from stdin")?;
        return Ok(text);
    }

    tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("failed to read rows from '{input}'"))
}
