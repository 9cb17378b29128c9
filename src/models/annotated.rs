use serde::{Deserialize, Serialize};

/// A fully classified verse, ready for note emission.
///
/// This is a derived, stateless projection of a validated [`super::VerseRecord`]:
/// canonical book name, genre, word count, and the two independent tag sets.
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedVerse {
    /// Canonical book name.
    pub book: String,
    pub chapter: i64,
    pub verse: i64,
    pub ordinal_verse: i64,
    /// Human-readable reference, e.g. `"Genesis 1:1"`.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Fixed genre classification of the book.
    pub genre: String,
    pub word_count: usize,
    /// Structural tags, insertion order preserved, duplicates suppressed.
    pub grammar_tags: Vec<String>,
    /// Content tags, independent of the grammar set.
    pub thematic_tags: Vec<String>,
    /// Trimmed verse text.
    pub text: String,
}
