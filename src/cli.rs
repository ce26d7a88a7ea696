//! CLI argument parsing module for pyreq2rpm

use crate::domain::LangPrefix;
use crate::input::InputSource;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Translate Python requirement lines into RPM dependencies
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pyreq2rpm",
    version,
    about = "Translate Python requirement lines into RPM dependencies"
)]
pub struct CliArgs {
    /// requires.txt-style files to translate (stdin when omitted or `-`)
    pub files: Vec<PathBuf>,

    /// Language prefix for package names, as a major version or `python<N>`
    #[arg(
        short = 'p',
        long = "python",
        env = "PYREQ2RPM_PYTHON",
        default_value = "3"
    )]
    pub prefix: LangPrefix,

    /// Mangle a bare package name instead of reading requirement files (repeatable)
    #[arg(short, long, action = ArgAction::Append)]
    pub mangle: Vec<String>,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Returns the inputs to read, in command-line order
    pub fn sources(&self) -> Vec<InputSource> {
        if self.files.is_empty() {
            return vec![InputSource::Stdin];
        }
        self.files.iter().map(InputSource::from_path).collect()
    }

    /// Check if the run mangles bare names rather than parsing files
    pub fn is_mangle_mode(&self) -> bool {
        !self.mangle.is_empty()
    }
}
