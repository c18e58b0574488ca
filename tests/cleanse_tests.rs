//! End-to-end tests for the cleanse run and the `word-cleanser` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use word_cleanser::cleanser::{cleanse_lines, cleanse_text, CleanseConfig, CleanseOptions, Cleanser};
use word_cleanser::encoding::split_lines;
use word_cleanser::{cleanse_file, WordList};

const STORY: &str = "\
I went out to see the sun. My friend said the sunshine was bright.
\"Friend\", I said, \"the SUN is a star, not a friend.\"\r
Nothing to see here
friend/sun\\friend friend
";

fn setup(dir: &Path, words: &str, input: &str) -> (PathBuf, PathBuf, PathBuf) {
    let words_path = dir.join("censoredWords.txt");
    let input_path = dir.join("inputText.txt");
    let output_path = dir.join("outputText.txt");
    fs::write(&words_path, words).unwrap();
    fs::write(&input_path, input).unwrap();
    (words_path, input_path, output_path)
}

fn all_modes() -> Vec<CleanseOptions> {
    vec![
        CleanseOptions::new(false, false),
        CleanseOptions::new(false, true),
        CleanseOptions::new(true, false),
        CleanseOptions::new(true, true),
    ]
}

#[test]
fn second_pass_finds_nothing() {
    let words = WordList::from_words(["sun", "friend", "star"], '*', true);

    for options in all_modes() {
        let (first, _) = cleanse_text(STORY, &words, options);
        let (second, count) = cleanse_text(&first, &words, options);
        assert_eq!(count, 0, "{:?}", options);
        assert_eq!(second, first);
    }
}

#[test]
fn line_lengths_are_preserved() {
    let words = WordList::from_words(["sun", "friend", "star"], '*', true);

    for options in all_modes() {
        let input = split_lines(STORY);
        let (output, _) = cleanse_lines(input.clone(), &words, options);
        assert_eq!(output.len(), input.len());
        for (before, after) in input.iter().zip(&output) {
            assert_eq!(before.text.chars().count(), after.text.chars().count());
            assert_eq!(before.terminator, after.terminator);
        }
    }
}

#[test]
fn count_matches_mask_characters_introduced() {
    // The story contains no '*', so every mask character came from a redaction
    let words = WordList::from_words(["sun", "friend", "star"], '*', false);

    for options in all_modes() {
        let (lines, report) = cleanse_lines(split_lines(STORY), &words, options);
        let introduced: u64 = lines.iter().map(|l| l.text.matches('*').count() as u64).sum();
        let masked: u64 = report
            .word_hits
            .iter()
            .map(|h| h.count * h.word.chars().count() as u64)
            .sum();
        let per_word: u64 = report.word_hits.iter().map(|h| h.count).sum();

        assert_eq!(report.redactions, per_word);
        assert_eq!(masked, introduced, "{:?}", options);
    }
}

#[test]
fn story_whole_word_case_insensitive() {
    let words = WordList::from_words(["sun", "friend"], '*', true);
    let (out, count) = cleanse_text(STORY, &words, CleanseOptions::new(true, true));

    assert_eq!(
        out,
        "\
I went out to see the ***. My ****** said the sunshine was bright.
\"******\", I said, \"the *** is a star, not a ******.\"\r
Nothing to see here
friend/***\\****** friend
"
    );
    assert_eq!(count, 7);
}

#[test]
fn story_substring_case_sensitive() {
    let words = WordList::from_words(["sun", "friend"], '*', false);
    let (out, count) = cleanse_text(STORY, &words, CleanseOptions::new(false, false));

    assert!(out.contains("the ***shine"));
    assert!(out.contains("\"Friend\""));
    assert!(out.contains("the SUN is"));
    assert!(out.starts_with("I went out to see the ***."));
    assert!(out.ends_with("******/***\\****** ******\n"));
    assert_eq!(count, 8);
}

#[test]
fn empty_word_list_copies_input() {
    let dir = TempDir::new().unwrap();
    let (words, input, output) = setup(dir.path(), "", STORY);

    let count = cleanse_file(&words, &input, &output, false, false).unwrap();
    assert_eq!(count, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), STORY);
}

#[test]
fn missing_word_list_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "text\n").unwrap();

    assert!(cleanse_file(dir.path().join("nope.txt"), &input, &output, false, false).is_err());
    assert!(!output.exists());
}

#[test]
fn report_from_run() {
    let dir = TempDir::new().unwrap();
    let (words, input, output) = setup(dir.path(), "sun\nsun\n*\n", "sun sun\nmoon\n");

    let report = Cleanser::new(CleanseConfig::new(&words, &input, &output, CleanseOptions::default()))
        .run()
        .unwrap();

    assert_eq!(report.redactions, 2);
    assert_eq!(report.lines_read, 2);
    assert_eq!(report.lines_changed, 1);
    assert_eq!(report.word_hits.len(), 1);
    assert_eq!(report.skipped_words.len(), 2);
    assert_eq!(report.encoding, "UTF-8");
    assert_eq!(report.output.as_deref(), Some(output.as_path()));
    assert_eq!(fs::read_to_string(&output).unwrap(), "*** ***\nmoon\n");
}

#[test]
fn binary_quiet_prints_count() {
    let dir = TempDir::new().unwrap();
    let (words, input, output) = setup(dir.path(), "friend\n", "I hate the show Friends\n");

    Command::cargo_bin("word-cleanser")
        .unwrap()
        .args(["-q", "-c", "-w"])
        .arg(&words)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("1\n");

    assert_eq!(fs::read_to_string(&output).unwrap(), "I hate the show ******s\n");
}

#[test]
fn binary_missing_input_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let words = dir.path().join("words.txt");
    fs::write(&words, "sun\n").unwrap();

    Command::cargo_bin("word-cleanser")
        .unwrap()
        .arg("-q")
        .arg("-w")
        .arg(&words)
        .arg("-i")
        .arg(dir.path().join("missing.txt"))
        .arg("-o")
        .arg(dir.path().join("out.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn binary_rejects_newline_mask() {
    let dir = TempDir::new().unwrap();
    let (words, input, output) = setup(dir.path(), "sun\n", "sun\n");

    Command::cargo_bin("word-cleanser")
        .unwrap()
        .arg("-q")
        .arg("-w")
        .arg(&words)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--mask")
        .arg("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mask character"));
}

#[test]
fn binary_verbose_reports_writer_stats() {
    let dir = TempDir::new().unwrap();
    let (words, input, output) = setup(dir.path(), "sun\n", "sun\nmoon\n");

    Command::cargo_bin("word-cleanser")
        .unwrap()
        .arg("-v")
        .arg("-w")
        .arg(&words)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 lines (9 B)"));
}
