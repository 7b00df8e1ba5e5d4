// Output formatting for CLI

use serde::Serialize;
use std::io::Write;

use crate::cli::OutputFormat;

/// What a command wrote
#[derive(Debug, Serialize)]
pub struct Summary {
    pub file: String,
    pub pages: usize,
    pub bytes: usize,
    pub last_sequence: Option<u32>,
}

/// Format and output data
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Output a command summary
    pub fn output_summary(&self, summary: &Summary, writer: &mut impl Write) -> anyhow::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let text = match self.format {
            OutputFormat::Pretty => serde_json::to_string_pretty(summary)?,
            OutputFormat::Json => serde_json::to_string(summary)?,
        };
        writeln!(writer, "{}", text)?;
        Ok(())
    }
}
