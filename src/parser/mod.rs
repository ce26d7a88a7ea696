//! Requirement-line parsing
//!
//! Turns the textual dependency list found in Python package metadata
//! (`requires.txt`) into RPM dependency strings.

mod requirement;

pub use requirement::{parse_token, RequirementParser};

use crate::domain::LangPrefix;
use crate::error::RequirementError;
use crate::mangle::NameMangler;

/// Parse `lines` with the given prefix and render each dependency as a string
pub fn gen_requires<I, S>(lines: I, prefix: &LangPrefix) -> Result<Vec<String>, RequirementError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    RequirementParser::new(NameMangler::new(prefix.clone())).gen_requires(lines)
}
