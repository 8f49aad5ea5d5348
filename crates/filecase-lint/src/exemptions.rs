//! Exemption list loading and matching.
//!
//! An exemptions file holds one pattern per line. Blank lines and lines
//! starting with `#` are ignored. Each pattern is either an exact relative
//! path or a glob, always written with `/` separators.
//!
//! Globs are anchored at the end of the path only: `README.md` exempts a
//! `README.md` at any depth and `vendor/*` exempts `third_party/vendor/x`.
//! A leading `/` anchors the pattern at the repository root instead.

use glob::{MatchOptions, Pattern};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{CaseCheckError, Result};
use crate::scan::to_posix;

/// Glob options: wildcards stay inside one path segment unless `**` is used.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A single exemption pattern.
#[derive(Debug, Clone)]
pub struct Exemption {
    text: String,
    glob: Option<Pattern>,
    anchored: bool,
}

impl Exemption {
    /// Creates an exemption from its pattern text.
    ///
    /// Text that is not valid glob syntax is kept and can still match by
    /// exact string equality.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let anchored = text.starts_with('/');
        let glob = Pattern::new(text.trim_start_matches('/')).ok();
        Self {
            text,
            glob,
            anchored,
        }
    }

    /// Returns the pattern text as written in the exemptions file.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if the pattern text is usable as a glob.
    pub fn is_valid_glob(&self) -> bool {
        self.glob.is_some()
    }

    /// Tests a POSIX-style path relative to the repository root.
    pub fn matches(&self, relative: &str) -> bool {
        if self.text == relative {
            return true;
        }
        let Some(glob) = &self.glob else {
            return false;
        };
        if self.anchored {
            return glob.matches_with(relative, MATCH_OPTIONS);
        }
        segment_suffixes(relative).any(|tail| glob.matches_with(tail, MATCH_OPTIONS))
    }
}

/// `a/b/c` yields `a/b/c`, `b/c`, `c`.
fn segment_suffixes(relative: &str) -> impl Iterator<Item = &str> {
    std::iter::once(relative).chain(
        relative
            .match_indices('/')
            .map(move |(i, _)| &relative[i + 1..]),
    )
}

/// The ordered exemption list for one run.
#[derive(Debug, Clone, Default)]
pub struct Exemptions {
    patterns: Vec<Exemption>,
    source: Option<PathBuf>,
}

impl Exemptions {
    /// Builds an exemption list from pattern strings.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Exemption::new).collect(),
            source: None,
        }
    }

    /// The file these exemptions were read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterates over the patterns in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Exemption> {
        self.patterns.iter()
    }

    /// Patterns that only match by exact string equality.
    pub fn invalid_globs(&self) -> impl Iterator<Item = &Exemption> {
        self.patterns.iter().filter(|p| !p.is_valid_glob())
    }

    /// Returns true if any pattern matches the POSIX relative path.
    pub fn matches(&self, relative: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(relative))
    }

    /// Returns true if `path` is exempt.
    ///
    /// `path` may be absolute (under `root`) or already relative to `root`.
    pub fn is_exempt(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.matches(&to_posix(relative))
    }
}

/// Parses exemptions file contents.
///
/// Lines are trimmed; empty lines and `#` comments are dropped.
pub fn parse_exemptions(content: &str) -> Exemptions {
    Exemptions::new(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

/// Loads the exemptions file at `path`.
///
/// A missing file yields an empty list. Any other read failure, including
/// invalid UTF-8, is an error.
pub fn load_exemptions(path: &Path) -> Result<Exemptions> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Exemptions::default()),
        Err(source) => {
            return Err(CaseCheckError::ReadExemptions {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut exemptions = parse_exemptions(&content);
    exemptions.source = Some(path.to_path_buf());
    Ok(exemptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn texts(exemptions: &Exemptions) -> Vec<&str> {
        exemptions.iter().map(Exemption::as_str).collect()
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let exemptions = parse_exemptions("# comment line\n\nvendor/*\n   \n  # indented\n  README.md  \n");
        assert_eq!(texts(&exemptions), vec!["vendor/*", "README.md"]);
    }

    #[test]
    fn test_parse_ignores_interspersed_comments() {
        let plain = parse_exemptions("docs/*.MD\nLICENSE\n");
        let noisy = parse_exemptions("\n# docs\ndocs/*.MD\n\n\n#LICENSE below\nLICENSE\n# end\n");
        assert_eq!(texts(&plain), texts(&noisy));
    }

    #[test]
    fn test_parse_keeps_trailing_hash() {
        let exemptions = parse_exemptions("notes#1.txt\n");
        assert_eq!(texts(&exemptions), vec!["notes#1.txt"]);
    }

    #[test]
    fn test_parse_handles_crlf() {
        let exemptions = parse_exemptions("Makefile\r\n# skip\r\nDockerfile\r\n");
        assert_eq!(texts(&exemptions), vec!["Makefile", "Dockerfile"]);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let exemptions = load_exemptions(&dir.path().join("missing.txt")).unwrap();
        assert!(exemptions.is_empty());
        assert!(exemptions.source().is_none());
    }

    #[test]
    fn test_load_reads_patterns_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exemptions.txt");
        fs::write(&path, "Zeta.md\n# skip\nAlpha.md\n").unwrap();

        let exemptions = load_exemptions(&path).unwrap();
        assert_eq!(texts(&exemptions), vec!["Zeta.md", "Alpha.md"]);
        assert_eq!(exemptions.source(), Some(path.as_path()));
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exemptions.txt");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, 0x0a]).unwrap();

        let err = load_exemptions(&path).unwrap_err();
        assert!(matches!(err, CaseCheckError::ReadExemptions { .. }));
    }

    #[test]
    fn test_load_directory_is_error() {
        let dir = tempdir().unwrap();
        assert!(load_exemptions(dir.path()).is_err());
    }

    #[test]
    fn test_bare_name_matches_at_any_depth() {
        let exemptions = Exemptions::new(["Readme.md"]);
        assert!(exemptions.matches("Readme.md"));
        assert!(exemptions.matches("docs/Readme.md"));
        assert!(exemptions.matches("a/b/c/Readme.md"));
        assert!(!exemptions.matches("readme.md"));
        assert!(!exemptions.matches("docs/MyReadme.md"));
    }

    #[test]
    fn test_leading_slash_anchors_at_root() {
        let exemptions = Exemptions::new(["/Readme.md"]);
        assert!(exemptions.matches("Readme.md"));
        assert!(!exemptions.matches("docs/Readme.md"));
    }

    #[test]
    fn test_directory_pattern_matches_nested_suffix() {
        let exemptions = Exemptions::new(["vendor/*"]);
        assert!(exemptions.matches("vendor/LICENSE.txt"));
        assert!(exemptions.matches("third_party/vendor/LICENSE.txt"));
        assert!(!exemptions.matches("vendor/lib/LICENSE.txt"));
        assert!(!exemptions.matches("myvendor/LICENSE.txt"));
    }

    #[test]
    fn test_glob_match_within_segment() {
        let exemptions = Exemptions::new(["docs/*.MD"]);
        assert!(exemptions.matches("docs/Guide.MD"));
        assert!(!exemptions.matches("docs/api/Guide.MD"));
        assert!(!exemptions.matches("Guide.MD"));
    }

    #[test]
    fn test_star_matches_last_segment_at_any_depth() {
        let exemptions = Exemptions::new(["*.md"]);
        assert!(exemptions.matches("README.md"));
        assert!(exemptions.matches("docs/README.md"));
        assert!(!exemptions.matches("docs/README.txt"));
    }

    #[test]
    fn test_recursive_wildcard_spans_directories() {
        let exemptions = Exemptions::new(["assets/**/*.PNG"]);
        assert!(exemptions.matches("assets/ui/icons/Logo.PNG"));
        assert!(!exemptions.matches("other/ui/Logo.PNG"));
    }

    #[test]
    fn test_metacharacters_fall_back_to_exact_match() {
        let exemptions = Exemptions::new(["assets/[Legacy]/Logo.png"]);
        assert!(exemptions.matches("assets/[Legacy]/Logo.png"));
    }

    #[test]
    fn test_invalid_glob_still_matches_exactly() {
        let exemptions = Exemptions::new(["Notes[draft.txt", "*.MD"]);
        assert!(exemptions.matches("Notes[draft.txt"));
        let invalid: Vec<&str> = exemptions.invalid_globs().map(Exemption::as_str).collect();
        assert_eq!(invalid, vec!["Notes[draft.txt"]);
    }

    #[test]
    fn test_empty_list_exempts_nothing() {
        let exemptions = Exemptions::default();
        assert!(!exemptions.matches("Anything.txt"));
    }

    #[test]
    fn test_is_exempt_accepts_absolute_and_relative_paths() {
        let root = Path::new("/repo");
        let exemptions = Exemptions::new(["vendor/*"]);
        assert!(exemptions.is_exempt(root, Path::new("/repo/vendor/LICENSE.txt")));
        assert!(exemptions.is_exempt(root, Path::new("vendor/LICENSE.txt")));
        assert!(!exemptions.is_exempt(root, Path::new("/repo/Other.txt")));
    }
}
