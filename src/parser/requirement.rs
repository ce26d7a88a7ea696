//! `requires.txt` requirement-line parser
//!
//! Handles lines like:
//! - Bare name: `requests`
//! - Single constraint: `google-auth>=1.4.1`
//! - Multiple constraints: `six<2dev,>=1.6.1`
//! - Compatible release: `foo~=0.0.4` (emitted as `>=`)
//!
//! A line starting with `[` opens an extras section; nothing from that
//! line onwards is a runtime dependency, so parsing stops there.

use crate::domain::{Constraint, MangledDependency, Operator};
use crate::error::RequirementError;
use crate::mangle::NameMangler;

/// Splits requirement lines into mangled, versioned dependencies
#[derive(Debug, Clone, Default)]
pub struct RequirementParser {
    mangler: NameMangler,
}

impl RequirementParser {
    /// Create a parser that names packages with `mangler`
    pub fn new(mangler: NameMangler) -> Self {
        Self { mangler }
    }

    /// Returns the mangler used for package names
    pub fn mangler(&self) -> &NameMangler {
        &self.mangler
    }

    /// Parse requirement lines into one dependency per comma-separated clause
    ///
    /// Output order follows input order (line, then clause). The first
    /// malformed clause aborts the whole call.
    pub fn parse<I, S>(&self, lines: I) -> Result<Vec<MangledDependency>, RequirementError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut requires = Vec::new();

        for (idx, raw) in lines.into_iter().enumerate() {
            let line_no = idx + 1;
            let line = normalize_line(raw.as_ref());

            if line.is_empty() {
                continue;
            }
            if line.starts_with('[') {
                log::debug!("line {}: extras section {}, stopping", line_no, line);
                break;
            }

            log::debug!("line {}: {}", line_no, line);
            self.parse_line(line_no, &line, &mut requires)?;
        }

        Ok(requires)
    }

    /// Like [`parse`](Self::parse), rendered as `"<name>"` / `"<name> <op> <version>"`
    pub fn gen_requires<I, S>(&self, lines: I) -> Result<Vec<String>, RequirementError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self
            .parse(lines)?
            .iter()
            .map(ToString::to_string)
            .collect())
    }

    fn parse_line(
        &self,
        line_no: usize,
        line: &str,
        out: &mut Vec<MangledDependency>,
    ) -> Result<(), RequirementError> {
        // The package name only appears on the first clause; later clauses
        // of the same line reuse it.
        let mut current: Option<&str> = None;

        for token in line.split(',') {
            let (name, constraint) = parse_token(line_no, token)?;

            if !name.is_empty() {
                current = Some(name);
            }
            let name = current.ok_or_else(|| RequirementError::missing_name(line_no, token))?;

            out.push(MangledDependency {
                name: self.mangler.mangle(name),
                constraint,
            });
        }

        Ok(())
    }
}

/// Trim the line and drop every space inside it
fn normalize_line(raw: &str) -> String {
    raw.trim().replace(' ', "")
}

/// Split one comma-separated clause into its name part and constraint
///
/// The name part may be empty (e.g. `>=1.0` following `foo<2`). `line_no`
/// is only used for error reporting.
pub fn parse_token(
    line_no: usize,
    token: &str,
) -> Result<(&str, Option<Constraint>), RequirementError> {
    let Some((operator, idx)) = Operator::find_in(token) else {
        return Ok((token.trim(), None));
    };

    let name = token[..idx].trim();
    let version = token[idx + operator.symbol().len()..].trim();

    if version.contains(operator.symbol()) {
        return Err(RequirementError::ambiguous_operator(line_no, token, operator));
    }
    if version.is_empty() {
        return Err(RequirementError::missing_version(line_no, token, operator));
    }

    Ok((name, Some(Constraint::new(operator, version))))
}
