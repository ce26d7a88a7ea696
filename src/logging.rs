//! Terminal logger setup
//!
//! Logs always go to stderr; stdout is reserved for dependency output.

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Log verbosity chosen on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Per-line debug output
    Verbose,
}

impl Verbosity {
    /// Create verbosity from CLI flags; `quiet` wins over `verbose`
    pub fn from_cli(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    /// Returns the log level filter for this verbosity
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Warn,
            Verbosity::Verbose => LevelFilter::Debug,
        }
    }
}

/// Install the global terminal logger
pub fn initialize_logger(verbosity: Verbosity) -> anyhow::Result<()> {
    let config = ConfigBuilder::new()
        .add_filter_allow_str("pyreq2rpm")
        .build();

    TermLogger::init(
        verbosity.level_filter(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    Ok(())
}
