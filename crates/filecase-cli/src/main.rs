//! filecase CLI - fails CI when a repository filename is not lowercase
//!
//! Walks the repository tree, skips `.git` metadata and exempted paths,
//! and lists every file whose name contains uppercase characters.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

// Use modules from the library crate
use filecase_cli::commands;

/// filecase - Lowercase Filename Checker
#[derive(Parser)]
#[command(name = "filecase")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repository root to scan
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Exemptions file (default: <root>/.github/.filename_exemptions)
    #[arg(long)]
    exemptions: Option<PathBuf>,

    /// Print scan context and a summary line
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = commands::check::run(&cli.root, cli.exemptions.as_deref(), cli.verbose);

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
