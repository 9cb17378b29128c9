//! Note emission: annotation, front-matter rendering, and file output.
//!
//! A record either produces a complete note or no note; there is no partial
//! output. Writing is idempotent for a given overwrite policy: an existing
//! note is skipped unless overwriting was requested.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::canon;
use crate::models::{AnnotatedVerse, RecordError, VerseRecord};
use crate::tagger::{grammar_tags, thematic_tags};
use crate::utils::{sanitize_filename, word_count};

/// Output policy for note emission.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Overwrite existing notes instead of skipping them.
    pub overwrite: bool,
    /// Zero-pad width for the ordinal folder prefix (0 = unpadded).
    pub pad: usize,
    /// Value of the `translation` front-matter key.
    pub translation: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            overwrite: false,
            pad: 2,
            translation: "KJV".to_string(),
        }
    }
}

/// Classifies a validated record into an [`AnnotatedVerse`].
///
/// This is the data-integrity gate: a book name that does not normalize to
/// the canon, or text that is empty after trimming, rejects the record.
///
/// # Errors
///
/// Returns [`RecordError::UnknownBook`] or [`RecordError::EmptyText`].
pub fn annotate(record: &VerseRecord) -> Result<AnnotatedVerse, RecordError> {
    let book = canon::normalize_book(&record.book)
        .ok_or_else(|| RecordError::UnknownBook(record.book.clone()))?;
    let text = record.text.trim();
    if text.is_empty() {
        return Err(RecordError::EmptyText);
    }

    Ok(AnnotatedVerse {
        book: book.to_string(),
        chapter: record.chapter,
        verse: record.verse,
        ordinal_verse: record.ordinal_verse,
        reference: format!("{book} {}:{}", record.chapter, record.verse),
        genre: canon::genre_of(book).to_string(),
        word_count: word_count(text),
        grammar_tags: grammar_tags(text),
        thematic_tags: thematic_tags(text),
        text: text.to_string(),
    })
}

/// Destination path for a verse note under `out_root`.
///
/// Folder is the ordinal-prefixed book name; filename is the sanitized
/// `"<Book> <chapter>.<verse>.md"`.
#[must_use]
pub fn note_path(verse: &AnnotatedVerse, out_root: &Path, pad: usize) -> PathBuf {
    // annotate() guarantees a canonical book name
    let folder = canon::folder_name(&verse.book, pad).unwrap_or_else(|| verse.book.clone());
    let filename = sanitize_filename(&format!(
        "{} {}.{}.md",
        verse.book, verse.chapter, verse.verse
    ));
    out_root.join(folder).join(filename)
}

/// Renders the note content: key-value front matter followed by the verse
/// text.
///
/// The key order and list formatting are fixed; tag lists render unquoted
/// and comma-separated. `topics` and `cross_references` start empty for
/// downstream curation.
#[must_use]
pub fn render_note(verse: &AnnotatedVerse, translation: &str) -> String {
    let booktag = verse.book.replace(' ', "-");
    format!(
        "---\n\
         book: \"{}\"\n\
         chapter: {}\n\
         verse: {}\n\
         ordinal_verse: {}\n\
         ref: \"{}\"\n\
         translation: \"{}\"\n\
         genre: \"{}\"\n\
         word_count: {}\n\
         topics: []\n\
         cross_references: []\n\
         grammar_tags: [{}]\n\
         thematic_tags: [{}]\n\
         tags: [\"Bible\",\"KJV\",\"{}\"]\n\
         ---\n\
         {}\n",
        verse.book,
        verse.chapter,
        verse.verse,
        verse.ordinal_verse,
        verse.reference,
        translation,
        verse.genre,
        verse.word_count,
        verse.grammar_tags.join(", "),
        verse.thematic_tags.join(", "),
        booktag,
        verse.text,
    )
}

/// Writes the note for an annotated verse under `out_root`.
///
/// Creates the book folder if needed. Returns the written path, or `None`
/// when the destination already exists and overwriting was not requested.
///
/// # Errors
///
/// Returns an error when the folder cannot be created or the file cannot
/// be written.
pub fn write_note(
    verse: &AnnotatedVerse,
    out_root: &Path,
    options: &WriteOptions,
) -> Result<Option<PathBuf>> {
    let path = note_path(verse, out_root, options.pad);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create book folder: {}", parent.display()))?;
    }

    if path.exists() && !options.overwrite {
        return Ok(None);
    }

    fs::write(&path, render_note(verse, &options.translation))
        .with_context(|| format!("failed to write note: {}", path.display()))?;
    Ok(Some(path))
}
