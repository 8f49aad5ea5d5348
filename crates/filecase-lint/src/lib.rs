//! Filename case lint for repository trees.
//!
//! Walks a repository, skips version-control metadata directories and
//! exempted paths, and collects every file whose name contains an
//! uppercase character.
//!
//! # Example
//!
//! ```no_run
//! use filecase_lint::{load_exemptions, scan, DEFAULT_EXEMPTIONS_FILE};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let exemptions = load_exemptions(&root.join(DEFAULT_EXEMPTIONS_FILE)).unwrap();
//! let report = scan(root, &exemptions).unwrap();
//!
//! for violation in &report.violations {
//!     eprintln!("uppercase filename: {}", violation);
//! }
//! ```

pub mod error;
pub mod exemptions;
pub mod rule;
pub mod scan;

pub use error::CaseCheckError;
pub use exemptions::{load_exemptions, parse_exemptions, Exemption, Exemptions};
pub use rule::{has_uppercase, has_uppercase_filename};
pub use scan::{scan, to_posix, Candidate, ScanReport, Violation, VCS_MARKER};

/// Exemptions file location, relative to the repository root.
pub const DEFAULT_EXEMPTIONS_FILE: &str = ".github/.filename_exemptions";
