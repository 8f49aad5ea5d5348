//! The lowercase filename rule.

use std::path::Path;

/// Returns true if `name` contains an uppercase character.
///
/// Characters without case (digits, punctuation, uncased scripts) never
/// count.
pub fn has_uppercase(name: &str) -> bool {
    name.chars().any(char::is_uppercase)
}

/// Returns true if the final component of `path` contains an uppercase
/// character. Directory components are ignored.
pub fn has_uppercase_filename(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| has_uppercase(&name.to_string_lossy()))
}
