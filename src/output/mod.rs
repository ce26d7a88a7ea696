//! Output formatting for parsed dependencies
//!
//! This module provides:
//! - Text output, one dependency per line, ready for a `Requires:` field
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::MangledDependency;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text, one dependency per line
    #[default]
    Text,
    /// JSON array of dependency objects
    Json,
}

/// Configuration for output formatting
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        Self { format }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write parsed dependencies
    fn format(&self, deps: &[MangledDependency], writer: &mut dyn Write) -> std::io::Result<()>;

    /// Format and write bare mangled names
    fn format_names(&self, names: &[String], writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
