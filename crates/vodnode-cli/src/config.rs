//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── engine: EngineConfig      # Page size, limits, page cap, optional segments
//! └── command: Command
//!     ├── run                   # ReqwestConfig + input rows
//!     ├── operations            # Catalog listing
//!     └── schema                # Parameter schema
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.

use std::process;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vodnode_engine::EngineConfig;

use crate::command::{OperationsArgs, RunArgs, SchemaArgs};
use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "vodnode")]
#[command(about = "Video-on-demand API integration node")]
#[command(version)]
pub struct Cli {
    /// Dispatch engine configuration.
    #[clap(flatten)]
    pub engine: EngineConfig,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Execute input rows against the API and print the resulting items.
    Run(RunArgs),
    /// List the operations of the catalog.
    Operations(OperationsArgs),
    /// Print the generated parameter schema as JSON.
    Schema(SchemaArgs),
}

impl Command {
    /// Returns the command name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Run(_) => "run",
            Self::Operations(_) => "operations",
            Self::Schema(_) => "schema",
        }
    }
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is loaded before clap parses arguments, so its values can
    /// serve as defaults through clap's `env` support.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    ///
    /// Events go to stderr; stdout carries command output only.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.engine
            .validate()
            .map_err(|reason| anyhow!(reason))
            .context("invalid engine configuration")?;
        Ok(())
    }

    /// Logs configuration at debug level (no sensitive information).
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            command = self.command.name(),
            page_size = self.engine.page_size,
            default_limit = self.engine.default_limit,
            max_limit = self.engine.max_limit,
            max_pages = self.engine.max_pages,
            optional_segments = %self.engine.optional_segments,
            "Engine configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
