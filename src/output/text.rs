//! Text output formatter
//!
//! Writes one dependency per line with no decoration, so the output can be
//! pasted into (or generated into) an RPM `Requires:` list.

use crate::domain::MangledDependency;
use crate::output::OutputFormatter;
use std::io::Write;

/// Plain text formatter
#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, deps: &[MangledDependency], writer: &mut dyn Write) -> std::io::Result<()> {
        for dep in deps {
            writeln!(writer, "{}", dep)?;
        }
        Ok(())
    }

    fn format_names(&self, names: &[String], writer: &mut dyn Write) -> std::io::Result<()> {
        for name in names {
            writeln!(writer, "{}", name)?;
        }
        Ok(())
    }
}
