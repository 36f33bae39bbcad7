pub mod check;
pub mod element;
pub mod equation;
pub mod formula;

use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use serde::Serialize;
use stoich::engine::config::ValidationConfig;

/// Settings shared by every subcommand once the CLI and config file have been merged.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub config: ValidationConfig,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl CommandContext {
    /// Writes `value` as pretty JSON, or the text produced by `render`, to stdout.
    pub fn emit<T: Serialize>(&self, value: &T, render: impl FnOnce() -> String) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value)
                .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to serialize output: {}", e)))?,
            OutputFormat::Text => render(),
        };
        println!("{}", rendered.trim_end());
        Ok(())
    }
}
