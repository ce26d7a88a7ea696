//! Upstream name to distribution package name mapping
//!
//! Most names simply gain the language prefix (`six` -> `python3-six`).
//! A handful of well-known packages are packaged under different names by
//! the distribution, and names with a leading `py` lose it
//! (`pyyaml` -> `python3-yaml`).

mod rules;

use crate::domain::LangPrefix;
use rules::{CASE_FOLDS, FIXED_TARGETS, RULES};

/// Maps upstream Python package names to distribution package names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMangler {
    prefix: LangPrefix,
}

impl NameMangler {
    /// Create a mangler producing names with `prefix`
    pub fn new(prefix: LangPrefix) -> Self {
        Self { prefix }
    }

    /// Returns the language prefix in use
    pub fn prefix(&self) -> &LangPrefix {
        &self.prefix
    }

    /// Mangle a single upstream package name
    ///
    /// Never fails: names no rule recognizes fall back to
    /// `<prefix>-<name>`.
    pub fn mangle(&self, name: &str) -> String {
        let name = name.trim_end();
        let prefix = self.prefix.as_str();

        if let Some(target) = FIXED_TARGETS
            .iter()
            .find(|target| target.matches(name))
        {
            log::trace!("{}: fixed target {}", name, target.package);
            return format!("{}-{}", prefix, target.package);
        }

        let name = CASE_FOLDS
            .iter()
            .find(|(from, _)| *from == name)
            .map_or(name, |(_, to)| *to);

        match RULES.iter().find(|rule| (rule.applies)(name)) {
            Some(rule) => {
                log::trace!("{}: rule {}", name, rule.label);
                (rule.render)(prefix, name)
            }
            None => format!("{}-{}", prefix, name),
        }
    }
}

/// Mangle `name` with the given prefix
pub fn mangle_name(name: &str, prefix: &LangPrefix) -> String {
    NameMangler::new(prefix.clone()).mangle(name)
}
