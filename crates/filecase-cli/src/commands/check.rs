//! Check command implementation
//!
//! Scans a repository tree and fails when any filename contains uppercase
//! characters.

use anyhow::{Context, Result};
use colored::Colorize;
use filecase_lint::{load_exemptions, scan, Exemptions, ScanReport, DEFAULT_EXEMPTIONS_FILE};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Run the check command
///
/// # Arguments
/// * `root` - Repository root to scan
/// * `exemptions_path` - Exemptions file (default: `<root>/.github/.filename_exemptions`)
/// * `verbose` - Print scan context and a summary line
///
/// # Returns
/// Exit code: 0 if every filename is lowercase, 1 if violations were found
pub fn run(root: &Path, exemptions_path: Option<&Path>, verbose: bool) -> Result<ExitCode> {
    let exemptions_path = resolve_exemptions_path(root, exemptions_path);
    let exemptions = load_exemptions(&exemptions_path)
        .with_context(|| format!("Failed to load exemptions: {}", exemptions_path.display()))?;

    if verbose {
        print_context(root, &exemptions_path, &exemptions);
    }

    let report = scan(root, &exemptions)
        .with_context(|| format!("Failed to scan repository: {}", root.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report).context("Failed to write report")?;
    if verbose {
        writeln!(
            out,
            "{}",
            format!(
                "Checked {} files ({} exempt)",
                report.files_checked, report.exempt
            )
            .dimmed()
        )
        .context("Failed to write report")?;
    }

    Ok(ExitCode::from(exit_status(&report)))
}

/// Exemptions file to use when none was given on the command line.
fn resolve_exemptions_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => root.join(DEFAULT_EXEMPTIONS_FILE),
    }
}

fn print_context(root: &Path, exemptions_path: &Path, exemptions: &Exemptions) {
    println!("{} {}", "Root:".cyan().bold(), root.display());
    match exemptions.source() {
        Some(source) => println!(
            "{} {} ({} patterns)",
            "Exemptions:".cyan().bold(),
            source.display(),
            exemptions.len()
        ),
        None => println!(
            "{} {} {}",
            "Exemptions:".cyan().bold(),
            exemptions_path.display(),
            "(not found)".dimmed()
        ),
    }
    for pattern in exemptions.invalid_globs() {
        println!(
            "{} exemption {:?} is not a valid glob, only exact matches apply",
            "WARNING".yellow().bold(),
            pattern.as_str()
        );
    }
}

/// Writes the pass/fail listing for a scan.
pub fn write_report<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    if report.is_clean() {
        return writeln!(out, "{} All filenames are lowercase", "PASSED".green().bold());
    }

    writeln!(
        out,
        "{} {} file(s) with uppercase characters in their names:",
        "FAILED".red().bold(),
        report.violations.len()
    )?;
    for violation in &report.violations {
        writeln!(out, "  - {}", violation)?;
    }
    Ok(())
}

/// Process exit status for a scan: 0 when clean, 1 otherwise.
pub fn exit_status(report: &ScanReport) -> u8 {
    if report.is_clean() {
        0
    } else {
        1
    }
}
