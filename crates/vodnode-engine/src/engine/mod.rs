//! Dispatcher, its configuration and batch results.

mod config;
mod dispatcher;
mod report;

pub use config::{EngineConfig, EngineConfigBuilder, EngineConfigBuilderError};
pub use dispatcher::{Dispatcher, TRACING_TARGET};
pub use report::{ExecutionReport, OutputItem, PairedItem, RowOutcome};
