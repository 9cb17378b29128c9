//! Text and path utilities shared by the taggers and the note writer.

use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

/// Counts words in the text.
///
/// A word is a maximal run of ASCII letters, digits, and apostrophes;
/// punctuation, whitespace, and symbols never count.
///
/// # Examples
///
/// ```
/// use versenotes::utils::word_count;
///
/// assert_eq!(
///     word_count("In the beginning God created the heaven and the earth."),
///     10
/// );
/// assert_eq!(word_count("don't"), 1);
/// ```
#[must_use]
pub fn word_count(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for c in text.chars() {
        let is_word_char = c.is_ascii_alphanumeric() || c == '\'';
        if is_word_char && !in_word {
            count += 1;
        }
        in_word = is_word_char;
    }
    count
}

/// Removes later duplicates from a sequence, keeping each item's first
/// position.
///
/// Idempotent: applying it twice yields the same result as once. Used after
/// every tagging pass since multiple rules may emit the same label.
#[must_use]
pub fn dedup_preserve<T: Eq + Hash + Clone>(sequence: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    sequence
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Strips every character outside `[A-Za-z0-9 .:-]` and trims the result.
///
/// # Examples
///
/// ```
/// use versenotes::utils::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Genesis 1.1.md"), "Genesis 1.1.md");
/// assert_eq!(sanitize_filename("a/b\"c?.md"), "abc.md");
/// ```
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | ':' | '-'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or on systems where the home directory
/// cannot be determined, pass through unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}
