//! JSON output formatter for machine processing
//!
//! Each dependency becomes an object with `name` and, when constrained,
//! `operator`, `version` and the combined `requires` string.

use crate::domain::MangledDependency;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of one dependency
#[derive(Serialize)]
struct JsonDependency<'a> {
    #[serde(flatten)]
    dependency: &'a MangledDependency,
    /// Rendered dependency string
    requires: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, deps: &[MangledDependency], writer: &mut dyn Write) -> std::io::Result<()> {
        let output: Vec<JsonDependency<'_>> = deps
            .iter()
            .map(|dependency| JsonDependency {
                dependency,
                requires: dependency.to_string(),
            })
            .collect();

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }

    fn format_names(&self, names: &[String], writer: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, names)?;
        writeln!(writer)
    }
}
