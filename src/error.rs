//! Application error types using thiserror
//!
//! Error hierarchy:
//! - RequirementError: Malformed requirement lines
//! - ConfigError: Issues with CLI configuration
//! - IoError: Failures reading requirement files

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Operator;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Requirement parsing errors
    #[error(transparent)]
    Requirement(#[from] RequirementError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors raised while splitting requirement lines
///
/// Input is expected to be already-validated package metadata, so any of
/// these aborts the whole batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequirementError {
    /// An operator was found with nothing after it
    #[error("line {line}: operator '{operator}' without a version in '{token}'")]
    MissingVersion {
        line: usize,
        token: String,
        operator: Operator,
    },

    /// The operator occurs more than once in a single clause
    #[error("line {line}: operator '{operator}' appears more than once in '{token}'")]
    AmbiguousOperator {
        line: usize,
        token: String,
        operator: Operator,
    },

    /// A version-only clause with no package name before it on the line
    #[error("line {line}: no package name before '{token}'")]
    MissingName { line: usize, token: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Language prefix is neither a major version nor `python<major>`
    #[error("invalid language prefix '{value}': expected a major version like '3' or 'python3'")]
    InvalidLangPrefix { value: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to read a requirement file
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RequirementError {
    /// Creates a new MissingVersion error
    pub fn missing_version(line: usize, token: impl Into<String>, operator: Operator) -> Self {
        RequirementError::MissingVersion {
            line,
            token: token.into(),
            operator,
        }
    }

    /// Creates a new AmbiguousOperator error
    pub fn ambiguous_operator(line: usize, token: impl Into<String>, operator: Operator) -> Self {
        RequirementError::AmbiguousOperator {
            line,
            token: token.into(),
            operator,
        }
    }

    /// Creates a new MissingName error
    pub fn missing_name(line: usize, token: impl Into<String>) -> Self {
        RequirementError::MissingName {
            line,
            token: token.into(),
        }
    }

    /// Returns the 1-based input line the error refers to
    pub fn line(&self) -> usize {
        match self {
            RequirementError::MissingVersion { line, .. }
            | RequirementError::AmbiguousOperator { line, .. }
            | RequirementError::MissingName { line, .. } => *line,
        }
    }
}

impl IoError {
    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Read {
            path: path.into(),
            source,
        }
    }
}
