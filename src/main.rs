//! pyreq2rpm - Python requirement to RPM dependency CLI tool
//!
//! Reads `requires.txt`-style files (or stdin) and prints one RPM
//! dependency per line.

use anyhow::Context;
use clap::Parser;
use pyreq2rpm::cli::CliArgs;
use pyreq2rpm::domain::MangledDependency;
use pyreq2rpm::logging::{initialize_logger, Verbosity};
use pyreq2rpm::mangle::NameMangler;
use pyreq2rpm::output::{create_formatter, OutputConfig};
use pyreq2rpm::parser::RequirementParser;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = initialize_logger(Verbosity::from_cli(args.verbose, args.quiet)) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    log::debug!("pyreq2rpm v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("prefix: {}", args.prefix);

    let mangler = NameMangler::new(args.prefix.clone());
    let formatter = create_formatter(OutputConfig::from_cli(args.json));
    let mut stdout = io::stdout().lock();

    if args.is_mangle_mode() {
        let names: Vec<String> = args.mangle.iter().map(|n| mangler.mangle(n)).collect();
        formatter.format_names(&names, &mut stdout)?;
        stdout.flush()?;
        return Ok(());
    }

    // Nothing is printed until every source has parsed cleanly.
    let parser = RequirementParser::new(mangler);
    let mut requires: Vec<MangledDependency> = Vec::new();
    for source in args.sources() {
        log::debug!("reading {}", source);
        let lines = source.read_lines()?;
        let deps = parser
            .parse(&lines)
            .with_context(|| format!("invalid requirements in {}", source))?;
        log::debug!("{}: {} dependencies", source, deps.len());
        requires.extend(deps);
    }

    formatter.format(&requires, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
