//! Command implementations.

mod operations;
mod run;
mod schema;

pub use operations::OperationsArgs;
pub use run::RunArgs;
pub use schema::SchemaArgs;
use tokio::io::AsyncWriteExt;

use crate::config::{Cli, Command};

/// How the process should exit after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything succeeded.
    Success,
    /// The command ran, but at least one input row failed.
    RowsFailed,
}

impl Outcome {
    /// Process exit code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::RowsFailed => 1,
        }
    }
}

/// Runs the selected command.
pub async fn execute(cli: Cli) -> anyhow::Result<Outcome> {
    match cli.command {
        Command::Run(args) => run::execute(args, cli.engine).await,
        Command::Operations(args) => {
            write_stdout(&operations::render(&args)?).await?;
            Ok(Outcome::Success)
        }
        Command::Schema(args) => {
            write_stdout(&schema::render(&args, &cli.engine)?).await?;
            Ok(Outcome::Success)
        }
    }
}

async fn write_stdout(output: &str) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}
