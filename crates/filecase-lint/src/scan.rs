//! Repository walk that collects filename case violations.

use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{CaseCheckError, Result};
use crate::exemptions::Exemptions;
use crate::rule::has_uppercase;

/// Directories whose relative path contains this substring are not walked.
///
/// The match is a plain substring test, so `.github/` and
/// `legit.git-archive/` are pruned along with `.git/`. Only the part of the
/// path below the scan root is tested; the root's own path is not.
pub const VCS_MARKER: &str = ".git";

/// Relative POSIX path of a file whose name breaks the lowercase rule.
pub type Violation = String;

/// A file found during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Path as produced by the walk (rooted at the scan root).
    pub path: PathBuf,
    /// Path relative to the repository root, with `/` separators.
    pub relative: String,
    /// Final path component.
    pub file_name: String,
}

impl Candidate {
    fn from_entry(root: &Path, entry: &DirEntry) -> Self {
        let path = entry.path().to_path_buf();
        let relative = to_posix(path.strip_prefix(root).unwrap_or(path.as_path()));
        let file_name = entry.file_name().to_string_lossy().into_owned();
        Self {
            path,
            relative,
            file_name,
        }
    }
}

/// Result of scanning one repository tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Violations in walk order.
    pub violations: Vec<Violation>,
    /// Number of files visited, exempt ones included.
    pub files_checked: usize,
    /// Number of files skipped because an exemption matched.
    pub exempt: usize,
}

impl ScanReport {
    /// True if no violations were found.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Renders a path with `/` separators.
///
/// Root and prefix components are dropped and `.` segments are skipped.
pub fn to_posix(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Walks `root` and returns every non-exempt file with an uppercase name.
///
/// Siblings are visited in file-name order. The walk stops at the first
/// traversal error.
pub fn scan(root: &Path, exemptions: &Exemptions) -> Result<ScanReport> {
    if !root.is_dir() {
        return Err(CaseCheckError::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }

    let mut report = ScanReport::default();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_pruned(root, entry));

    for entry in walker {
        let entry = entry?;
        if !is_file_entry(&entry) {
            continue;
        }

        let candidate = Candidate::from_entry(root, &entry);
        report.files_checked += 1;

        // Exemption wins over the case rule.
        if exemptions.matches(&candidate.relative) {
            report.exempt += 1;
            continue;
        }
        if has_uppercase(&candidate.file_name) {
            report.violations.push(candidate.relative);
        }
    }

    Ok(report)
}

fn is_pruned(root: &Path, entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    to_posix(relative).contains(VCS_MARKER)
}

/// Regular files, plus symlinks that do not resolve to a directory.
fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}
