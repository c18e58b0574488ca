//! Target word list loading
//!
//! Reads the list of words to censor, one per line, and drops entries that
//! could never be redacted safely.

use ahash::AHashSet;
use std::path::Path;

use crate::censor::{contains_mask, fold_case};
use crate::encoding::{line_bodies, read_text};
use crate::error::Result;

/// Why a word-list entry was not loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Blank line
    Empty,
    /// Already present earlier in the list (after case folding, if enabled)
    Duplicate,
    /// Contains the mask character and would be re-matched forever
    ContainsMask,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Duplicate => "duplicate",
            Self::ContainsMask => "contains the mask character",
        }
    }
}

/// A rejected word-list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedWord {
    /// 1-based line in the word-list file
    pub line_number: usize,
    pub word: String,
    pub reason: SkipReason,
}

/// Ordered list of target words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    skipped: Vec<SkippedWord>,
}

impl WordList {
    /// Build a word list from raw text, one word per line
    pub fn parse(text: &str, mask: char, case_insensitive: bool) -> Self {
        let mut words = Vec::new();
        let mut skipped = Vec::new();
        let mut seen = AHashSet::new();

        for (i, word) in line_bodies(text).enumerate() {
            let reason = if word.is_empty() {
                Some(SkipReason::Empty)
            } else if contains_mask(word, mask, case_insensitive) {
                Some(SkipReason::ContainsMask)
            } else {
                let key = if case_insensitive {
                    fold_case(word)
                } else {
                    word.to_string()
                };
                if seen.insert(key) {
                    None
                } else {
                    Some(SkipReason::Duplicate)
                }
            };

            match reason {
                None => {
                    log::info!("Loaded target word: {}", word);
                    words.push(word.to_string());
                }
                Some(SkipReason::Empty) => {}
                Some(reason) => {
                    log::warn!("Skipping word list line {} ({:?}): {}", i + 1, word, reason.describe());
                    skipped.push(SkippedWord {
                        line_number: i + 1,
                        word: word.to_string(),
                        reason,
                    });
                }
            }
        }

        Self { words, skipped }
    }

    /// Build a word list from individual words, applying the same checks as [`WordList::parse`]
    pub fn from_words<I, S>(words: I, mask: char, case_insensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::parse(&text, mask, case_insensitive)
    }

    /// Load a word list file
    pub fn load(path: &Path, mask: char, case_insensitive: bool) -> Result<Self> {
        let decoded = read_text(path)?;
        Ok(Self::parse(&decoded.text, mask, case_insensitive))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Entries dropped for a reason worth reporting (blank lines are not listed)
    pub fn skipped(&self) -> &[SkippedWord] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
