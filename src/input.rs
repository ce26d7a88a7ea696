//! Reading requirement lines from files or stdin

use crate::error::IoError;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where a batch of requirement lines comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A requirement file on disk
    File(PathBuf),
}

impl InputSource {
    /// Map a command-line path to a source; `-` means stdin
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::File(path.to_path_buf())
        }
    }

    /// Read the whole source and split it into lines
    pub fn read_lines(&self) -> Result<Vec<String>, IoError> {
        let content = match self {
            InputSource::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|e| IoError::read("<stdin>", e))?;
                buf
            }
            InputSource::File(path) => {
                fs::read_to_string(path).map_err(|e| IoError::read(path, e))?
            }
        };

        Ok(content.lines().map(str::to_string).collect())
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
