//! ruleset command-line interface.
//!
//! - `ruleset build` - compile the data directory and write every export
//! - `ruleset check` - parse and resolve the data directory only

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ruleset::cli::{BuildArgs, CheckArgs, run_build, run_check};

/// ruleset CLI.
#[derive(Parser)]
#[command(
    name = "ruleset",
    version,
    about = "Compile domain lists into proxy rule sets",
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile and write all export formats.
    #[command(name = "build", alias = "generate")]
    Build(BuildArgs),

    /// Validate the data directory without writing output.
    #[command(name = "check")]
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build(args) => run_build(args),
        Commands::Check(args) => run_check(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
