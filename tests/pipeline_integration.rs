//! End-to-end tests for the batch pipeline: corpus in, vault of notes out.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde_json::{Value, json};
use versenotes::pipeline::{self, FatalError, Options};

/// Builds run options over temp paths with the default policy.
fn options(infile: &Path, out_root: &Path) -> Options {
    Options {
        infile: infile.to_path_buf(),
        out_root: out_root.to_path_buf(),
        overwrite: false,
        verbose: false,
        pad: 2,
        translation: "KJV".to_string(),
    }
}

/// A small corpus with two good records, two rejectable ones, and one
/// entry that is not an object at all.
fn mixed_corpus() -> Value {
    json!([
        {
            "book": "Genesis",
            "chapter": 1,
            "verse": 1,
            "ordinal_verse": 1,
            "text": "In the beginning God created the heaven and the earth."
        },
        {
            "book": "1Samuel",
            "chapter": 3,
            "verse": 4,
            "ordinal_verse": 7300,
            "text": "That the LORD called Samuel: and he answered, Here am I."
        },
        {
            "book": "Atlantis",
            "chapter": 1,
            "verse": 1,
            "ordinal_verse": 2,
            "text": "No such book."
        },
        {
            "book": "Genesis",
            "chapter": "one",
            "verse": 2,
            "ordinal_verse": 2,
            "text": "And the earth was without form, and void."
        },
        42
    ])
}

fn write_corpus(dir: &Path, corpus: &Value) -> std::path::PathBuf {
    let infile = dir.join("kjv.json");
    fs::write(&infile, serde_json::to_string(corpus).unwrap()).unwrap();
    infile
}

#[test]
fn mixed_corpus_yields_exact_outcome_counts() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out_root = dir.path().join("vault");
    let infile = write_corpus(dir.path(), &mixed_corpus());

    let summary = pipeline::run(&options(&infile, &out_root))?;
    assert_eq!(summary.written, 2);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.errors, 1);

    assert!(out_root.join("01 - Genesis/Genesis 1.1.md").exists());
    assert!(out_root.join("09 - 1 Samuel/1 Samuel 3.4.md").exists());
    // the rejected records leave nothing behind
    assert!(!out_root.join("01 - Genesis/Genesis 1.2.md").exists());

    Ok(())
}

#[test]
fn written_notes_carry_the_full_front_matter() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out_root = dir.path().join("vault");
    let infile = write_corpus(dir.path(), &mixed_corpus());

    pipeline::run(&options(&infile, &out_root))?;

    let content = fs::read_to_string(out_root.join("01 - Genesis/Genesis 1.1.md"))?;
    let expected = "---\n\
        book: \"Genesis\"\n\
        chapter: 1\n\
        verse: 1\n\
        ordinal_verse: 1\n\
        ref: \"Genesis 1:1\"\n\
        translation: \"KJV\"\n\
        genre: \"Law\"\n\
        word_count: 10\n\
        topics: []\n\
        cross_references: []\n\
        grammar_tags: []\n\
        thematic_tags: [names-of-god]\n\
        tags: [\"Bible\",\"KJV\",\"Genesis\"]\n\
        ---\n\
        In the beginning God created the heaven and the earth.\n";
    assert_eq!(content, expected);

    Ok(())
}

#[test]
fn rerun_without_force_skips_existing_notes() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out_root = dir.path().join("vault");
    let infile = write_corpus(dir.path(), &mixed_corpus());
    let opts = options(&infile, &out_root);

    pipeline::run(&opts)?;
    let second = pipeline::run(&opts)?;

    assert_eq!(second.written, 0);
    // the two existing notes plus the two rejected records
    assert_eq!(second.skipped, 4);
    assert_eq!(second.errors, 1);

    Ok(())
}

#[test]
fn rerun_with_force_rewrites_notes() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out_root = dir.path().join("vault");
    let infile = write_corpus(dir.path(), &mixed_corpus());

    pipeline::run(&options(&infile, &out_root))?;

    let forced = Options {
        overwrite: true,
        ..options(&infile, &out_root)
    };
    let summary = pipeline::run(&forced)?;
    assert_eq!(summary.written, 2);
    assert_eq!(summary.skipped, 2);

    Ok(())
}

#[test]
fn empty_text_records_are_skipped_not_fatal() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out_root = dir.path().join("vault");
    let corpus = json!([
        {
            "book": "Genesis",
            "chapter": 1,
            "verse": 3,
            "ordinal_verse": 3,
            "text": "   "
        }
    ]);
    let infile = write_corpus(dir.path(), &corpus);

    let summary = pipeline::run(&options(&infile, &out_root))?;
    assert_eq!(summary.written, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.errors, 0);

    Ok(())
}

#[test]
fn pad_zero_leaves_ordinals_unpadded() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out_root = dir.path().join("vault");
    let infile = write_corpus(dir.path(), &mixed_corpus());

    let unpadded = Options {
        pad: 0,
        ..options(&infile, &out_root)
    };
    pipeline::run(&unpadded)?;

    assert!(out_root.join("1 - Genesis/Genesis 1.1.md").exists());
    assert!(out_root.join("9 - 1 Samuel/1 Samuel 3.4.md").exists());

    Ok(())
}

#[test]
fn missing_input_is_fatal_with_exit_code_2() {
    let dir = tempfile::tempdir().unwrap();
    let out_root = dir.path().join("vault");
    let infile = dir.path().join("missing.json");

    let err = pipeline::run(&options(&infile, &out_root)).unwrap_err();
    let fatal = err.downcast_ref::<FatalError>().expect("fatal error");
    assert_eq!(fatal.exit_code(), 2);
}

#[test]
fn unparseable_input_is_fatal_with_exit_code_3() {
    let dir = tempfile::tempdir().unwrap();
    let out_root = dir.path().join("vault");
    let infile = dir.path().join("kjv.json");
    fs::write(&infile, "not json at all").unwrap();

    let err = pipeline::run(&options(&infile, &out_root)).unwrap_err();
    let fatal = err.downcast_ref::<FatalError>().expect("fatal error");
    assert_eq!(fatal.exit_code(), 3);
}

#[test]
fn non_array_top_level_is_fatal_before_any_note_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let out_root = dir.path().join("vault");
    let infile = dir.path().join("kjv.json");
    fs::write(&infile, "{\"book\": \"Genesis\"}").unwrap();

    let err = pipeline::run(&options(&infile, &out_root)).unwrap_err();
    let fatal = err.downcast_ref::<FatalError>().expect("fatal error");
    assert_eq!(fatal.exit_code(), 4);

    // output root may exist, but no notes were emitted
    let entries: Vec<_> = fs::read_dir(&out_root).unwrap().collect();
    assert!(entries.is_empty());
}
