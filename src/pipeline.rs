//! Batch driving loop: corpus loading, per-record processing, and summary
//! counts.
//!
//! One synchronous pass over the record sequence. Fatal conditions (missing
//! or unparseable source, wrong top-level shape) abort before any per-record
//! work; everything after that is caught, counted, and the batch continues.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;

use crate::models::{RecordError, VerseRecord};
use crate::writer::{self, WriteOptions};

/// Conditions that abort the whole run.
///
/// Each maps to a stable process exit code so callers can script against
/// the failure mode.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("failed to read input file: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("expected a top-level array in {0}")]
    NotAnArray(PathBuf),
}

impl FatalError {
    /// Stable exit code for the fatal condition.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            FatalError::InputNotFound(_) | FatalError::Unreadable { .. } => 2,
            FatalError::Parse(_) => 3,
            FatalError::NotAnArray(_) => 4,
        }
    }
}

/// Run configuration, as resolved from the CLI.
#[derive(Debug, Clone)]
pub struct Options {
    /// Path to the JSON corpus.
    pub infile: PathBuf,
    /// Destination vault root; created if absent.
    pub out_root: PathBuf,
    /// Overwrite existing notes instead of skipping them.
    pub overwrite: bool,
    /// Print per-record diagnostics and progress lines.
    pub verbose: bool,
    /// Zero-pad width for book ordinals (0 = unpadded).
    pub pad: usize,
    /// Value of the `translation` front-matter key.
    pub translation: String,
}

/// Aggregate outcome counts for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub written: u64,
    pub skipped: u64,
    pub errors: u64,
}

/// Outcome of one record.
enum Outcome {
    Written(PathBuf),
    SkippedExisting(PathBuf),
    Rejected(RecordError),
}

/// Interval between progress diagnostics in verbose mode.
const PROGRESS_INTERVAL: usize = 2000;

/// Runs one batch over the corpus and returns the outcome counts.
///
/// # Errors
///
/// Returns a [`FatalError`] (wrapped in `anyhow::Error`) for whole-run
/// aborts, or a plain error when the destination root cannot be created.
/// Per-record problems never surface as errors; they are aggregated into
/// the summary.
pub fn run(options: &Options) -> Result<Summary> {
    fs::create_dir_all(&options.out_root).with_context(|| {
        format!(
            "failed to create output folder: {}",
            options.out_root.display()
        )
    })?;

    if options.verbose {
        println!("[info] Reading: {}", options.infile.display());
        println!("[info] Output : {}", options.out_root.display());
        println!("[info] Ordinal padding: {}", options.pad);
    }

    let entries = load_corpus(&options.infile)?;

    let write_options = WriteOptions {
        overwrite: options.overwrite,
        pad: options.pad,
        translation: options.translation.clone(),
    };

    let mut summary = Summary::default();
    for (index, entry) in entries.iter().enumerate() {
        match process_entry(entry, &options.out_root, &write_options) {
            Ok(Outcome::Written(path)) => {
                summary.written += 1;
                if options.verbose {
                    println!("[write] {}", path.display());
                }
            }
            Ok(Outcome::SkippedExisting(path)) => {
                summary.skipped += 1;
                if options.verbose {
                    println!("[skip] exists: {}", path.display());
                }
            }
            Ok(Outcome::Rejected(reason)) => {
                summary.skipped += 1;
                if options.verbose {
                    println!("[warn] entry {index} rejected: {reason}");
                }
            }
            Err(e) => {
                summary.errors += 1;
                if options.verbose {
                    println!("[error] entry {index} failed: {e:#}");
                }
            }
        }

        if options.verbose && (index + 1) % PROGRESS_INTERVAL == 0 {
            println!("[info] Progress: {} entries processed...", index + 1);
        }
    }

    Ok(summary)
}

/// Loads and shape-checks the corpus.
///
/// # Errors
///
/// Returns the matching [`FatalError`] when the file is missing or
/// unreadable, is not valid JSON, or the top level is not an array.
fn load_corpus(infile: &Path) -> Result<Vec<Value>> {
    if !infile.exists() {
        return Err(FatalError::InputNotFound(infile.to_path_buf()).into());
    }

    let raw = fs::read_to_string(infile).map_err(|source| FatalError::Unreadable {
        path: infile.to_path_buf(),
        source,
    })?;
    let raw = raw.trim_start_matches('\u{feff}').trim();

    let data: Value = serde_json::from_str(raw).map_err(FatalError::Parse)?;
    match data {
        Value::Array(entries) => Ok(entries),
        _ => Err(FatalError::NotAnArray(infile.to_path_buf()).into()),
    }
}

/// Validates, classifies, and writes one record.
///
/// Rejections come back as `Ok(Outcome::Rejected(..))` so the caller counts
/// them as skips; only unexpected failures (a non-object entry, I/O errors)
/// propagate as errors.
fn process_entry(entry: &Value, out_root: &Path, options: &WriteOptions) -> Result<Outcome> {
    let object = entry.as_object().context("entry is not a JSON object")?;

    let record = match VerseRecord::from_object(object) {
        Ok(record) => record,
        Err(reason) => return Ok(Outcome::Rejected(reason)),
    };
    let verse = match writer::annotate(&record) {
        Ok(verse) => verse,
        Err(reason) => return Ok(Outcome::Rejected(reason)),
    };

    match writer::write_note(&verse, out_root, options)? {
        Some(path) => Ok(Outcome::Written(path)),
        None => Ok(Outcome::SkippedExisting(writer::note_path(
            &verse,
            out_root,
            options.pad,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_errors_map_to_stable_exit_codes() {
        assert_eq!(
            FatalError::InputNotFound(PathBuf::from("kjv.json")).exit_code(),
            2
        );
        let parse = serde_json::from_str::<Value>("not json").unwrap_err();
        assert_eq!(FatalError::Parse(parse).exit_code(), 3);
        assert_eq!(
            FatalError::NotAnArray(PathBuf::from("kjv.json")).exit_code(),
            4
        );
    }

    #[test]
    fn load_corpus_rejects_missing_files() {
        let err = load_corpus(Path::new("/nonexistent/kjv.json")).unwrap_err();
        let fatal = err.downcast_ref::<FatalError>().expect("fatal error");
        assert_eq!(fatal.exit_code(), 2);
    }

    #[test]
    fn load_corpus_rejects_non_array_top_level() {
        let dir = tempfile::tempdir().unwrap();
        let infile = dir.path().join("kjv.json");
        fs::write(&infile, "{\"book\": \"Genesis\"}").unwrap();

        let err = load_corpus(&infile).unwrap_err();
        let fatal = err.downcast_ref::<FatalError>().expect("fatal error");
        assert_eq!(fatal.exit_code(), 4);
    }

    #[test]
    fn load_corpus_strips_a_leading_bom() {
        let dir = tempfile::tempdir().unwrap();
        let infile = dir.path().join("kjv.json");
        fs::write(&infile, "\u{feff}[]").unwrap();

        let entries = load_corpus(&infile).unwrap();
        assert!(entries.is_empty());
    }
}
