//! Language-version prefix for generated package names

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix prepended to every mangled package name (e.g. `python3`)
///
/// Distributions ship one package per interpreter major version, so the
/// same upstream name maps to `python2-six` or `python3-six` depending on
/// which interpreter the package is built for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LangPrefix(String);

impl LangPrefix {
    /// Creates the prefix for a Python major version (`python<major>`)
    pub fn python(major: u8) -> Self {
        Self(format!("python{}", major))
    }

    /// Returns the prefix as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LangPrefix {
    fn default() -> Self {
        Self::python(3)
    }
}

impl FromStr for LangPrefix {
    type Err = ConfigError;

    /// Accepts either a bare major version (`3`) or a full prefix (`python3`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix("python").unwrap_or(s);

        match digits.parse::<u8>() {
            Ok(major) if major > 0 => Ok(Self::python(major)),
            _ => Err(ConfigError::InvalidLangPrefix {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LangPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
