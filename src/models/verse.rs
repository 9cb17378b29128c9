use serde_json::{Map, Value};
use thiserror::Error;

/// Reasons a record is rejected during validation.
///
/// Rejections are per-record and non-fatal: the record is counted as
/// skipped and the batch continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required field is absent from the record.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field that must be text carries another JSON type.
    #[error("field `{0}` is not a string")]
    NotAString(&'static str),

    /// chapter/verse/ordinal_verse did not parse as an integer.
    #[error("non-integer value for field `{0}`")]
    NonInteger(&'static str),

    /// Verse text is empty after trimming.
    #[error("empty verse text")]
    EmptyText,

    /// Book name did not normalize to one of the 66 canonical names.
    #[error("unrecognized book name `{0}`")]
    UnknownBook(String),
}

/// A raw verse record as decoded from the input corpus.
///
/// Immutable once read. Chapter, verse, and ordinal are accepted as JSON
/// numbers or numeric strings; anything else rejects the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRecord {
    /// Raw book name; normalized later by the annotation step.
    pub book: String,
    pub chapter: i64,
    pub verse: i64,
    /// 1-based position of the verse within the full corpus.
    pub ordinal_verse: i64,
    pub text: String,
}

impl VerseRecord {
    /// Extracts a record from a decoded JSON object.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError`] when a required field is missing, a text
    /// field is not a string, or a numeric field does not parse as an
    /// integer.
    pub fn from_object(entry: &Map<String, Value>) -> Result<Self, RecordError> {
        Ok(Self {
            book: string_field(entry, "book")?,
            chapter: int_field(entry, "chapter")?,
            verse: int_field(entry, "verse")?,
            ordinal_verse: int_field(entry, "ordinal_verse")?,
            text: string_field(entry, "text")?,
        })
    }
}

fn string_field(entry: &Map<String, Value>, key: &'static str) -> Result<String, RecordError> {
    match entry.get(key).ok_or(RecordError::MissingField(key))? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(RecordError::NotAString(key)),
    }
}

fn int_field(entry: &Map<String, Value>, key: &'static str) -> Result<i64, RecordError> {
    match entry.get(key).ok_or(RecordError::MissingField(key))? {
        Value::Number(n) => n.as_i64().ok_or(RecordError::NonInteger(key)),
        Value::String(s) => s.trim().parse().map_err(|_| RecordError::NonInteger(key)),
        _ => Err(RecordError::NonInteger(key)),
    }
}
