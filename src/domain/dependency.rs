//! Dependency information structures

use super::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single version constraint: operator plus version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Output operator (already normalized, so never `~=`)
    pub operator: Operator,
    /// Version string exactly as written upstream
    pub version: String,
}

impl Constraint {
    /// Creates a new constraint, normalizing the operator for RPM
    pub fn new(operator: Operator, version: impl Into<String>) -> Self {
        Self {
            operator: operator.normalized(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.version)
    }
}

/// A target package name with an optional constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangledDependency {
    /// Mangled package name (e.g. `python3-six`)
    pub name: String,
    /// Version constraint, if the token carried one
    #[serde(flatten)]
    pub constraint: Option<Constraint>,
}

impl MangledDependency {
    /// Creates a dependency without a version constraint
    pub fn unversioned(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
        }
    }

    /// Creates a dependency constrained by `operator` and `version`
    pub fn versioned(
        name: impl Into<String>,
        operator: Operator,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            constraint: Some(Constraint::new(operator, version)),
        }
    }

    /// Returns true if this dependency carries a version constraint
    pub fn is_versioned(&self) -> bool {
        self.constraint.is_some()
    }
}

impl fmt::Display for MangledDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(constraint) => write!(f, "{} {}", self.name, constraint),
            None => f.write_str(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_normalizes_compatible() {
        let constraint = Constraint::new(Operator::Compatible, "0.0.4");
        assert_eq!(constraint.operator, Operator::GreaterOrEqual);
        assert_eq!(constraint.version, "0.0.4");
    }

    #[test]
    fn test_display_unversioned() {
        let dep = MangledDependency::unversioned("python3-six");
        assert!(!dep.is_versioned());
        assert_eq!(dep.to_string(), "python3-six");
    }

    #[test]
    fn test_display_versioned() {
        let dep = MangledDependency::versioned("python3-six", Operator::Less, "2dev");
        assert!(dep.is_versioned());
        assert_eq!(dep.to_string(), "python3-six < 2dev");
    }

    #[test]
    fn test_display_compatible_as_greater_or_equal() {
        let dep = MangledDependency::versioned("python3-someshit", Operator::Compatible, "0.0.4");
        assert_eq!(dep.to_string(), "python3-someshit >= 0.0.4");
    }

    #[test]
    fn test_serde_versioned_is_flat() {
        let dep = MangledDependency::versioned("python3-six", Operator::GreaterOrEqual, "1.6.1");
        let value = serde_json::to_value(&dep).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "python3-six", "operator": ">=", "version": "1.6.1"})
        );
    }

    #[test]
    fn test_serde_unversioned_omits_constraint() {
        let dep = MangledDependency::unversioned("python3-six");
        let value = serde_json::to_value(&dep).unwrap();
        assert_eq!(value, serde_json::json!({"name": "python3-six"}));
    }
}
