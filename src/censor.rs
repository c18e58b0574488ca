//! Word matching and masking
//!
//! Locates a target word inside a single line and overwrites it with a mask
//! character. Two policies are available: plain substring matching and
//! whole-word matching, where the word must be flanked by one of
//! [`WHOLE_WORD_DELIMITERS`] on both sides.

use std::borrow::Cow;

/// Characters that may bound a whole word, in the order they are tried
pub const WHOLE_WORD_DELIMITERS: [char; 6] = [' ', '"', '/', '\\', '.', ','];

/// Default mask character
pub const DEFAULT_MASK: char = '*';

/// Matching policy used when searching a line for a target word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Match anywhere, including inside longer words
    #[default]
    Substring,
    /// Match only when surrounded by whole-word delimiters
    WholeWord,
}

impl MatchPolicy {
    pub fn from_whole_word(whole_word: bool) -> Self {
        if whole_word {
            Self::WholeWord
        } else {
            Self::Substring
        }
    }

    /// Mask the first occurrence of `word` in `line` under this policy
    #[inline]
    pub fn censor(self, word: &str, line: String, mask: char, case_insensitive: bool) -> MatchOutcome {
        match self {
            Self::Substring => censor_word_in_line(word, line, mask, case_insensitive),
            Self::WholeWord => censor_whole_word_in_line(word, line, mask, case_insensitive),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::WholeWord => "whole word",
        }
    }
}

/// Result of a single match attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Character index where the masked word starts, if one was found
    pub index: Option<usize>,
    /// The line after masking (unchanged on a miss)
    pub line: String,
}

impl MatchOutcome {
    fn hit(index: usize, line: String) -> Self {
        Self { index: Some(index), line }
    }

    fn miss(line: String) -> Self {
        Self { index: None, line }
    }

    #[inline]
    pub fn found(&self) -> bool {
        self.index.is_some()
    }
}

/// Replace `length` characters starting at character offset `start` with `mask`
///
/// Offsets are counted in characters, not bytes. The caller guarantees
/// `start + length <= source.chars().count()`.
pub fn replace_with_char(source: &str, start: usize, length: usize, mask: char) -> String {
    let end = start + length;
    source
        .chars()
        .enumerate()
        .map(|(i, c)| if i >= start && i < end { mask } else { c })
        .collect()
}

/// Mask the first occurrence of `word` anywhere in `line`
///
/// `"sun"` in `"You are my sunshine"` becomes `"You are my ***shine"`.
pub fn censor_word_in_line(word: &str, line: String, mask: char, case_insensitive: bool) -> MatchOutcome {
    if word.is_empty() {
        return MatchOutcome::miss(line);
    }

    let check_line = fold(&line, case_insensitive);
    let found = check_line
        .find(&*fold(word, case_insensitive))
        .map(|byte| char_index(&check_line, byte));

    match found {
        Some(index) => mask_at(word, &line, index, mask),
        None => MatchOutcome::miss(line),
    }
}

/// Mask the first delimited occurrence of `word` in `line`
///
/// Every (left, right) pair of [`WHOLE_WORD_DELIMITERS`] is tried in order and
/// the first pair present wins, even if another pair occurs earlier in the
/// line. Only the word itself is masked, never the delimiters. A word at the
/// very start or end of the line has no delimiter on that side and is left
/// alone.
pub fn censor_whole_word_in_line(word: &str, line: String, mask: char, case_insensitive: bool) -> MatchOutcome {
    if word.is_empty() {
        return MatchOutcome::miss(line);
    }

    match find_whole_word(word, &line, case_insensitive) {
        Some(index) => mask_at(word, &line, index, mask),
        None => MatchOutcome::miss(line),
    }
}

/// Character index of the first delimited occurrence of `word`, in pair order
fn find_whole_word(word: &str, line: &str, case_insensitive: bool) -> Option<usize> {
    let check_word = fold(word, case_insensitive);
    let check_line = fold(line, case_insensitive);
    let mut needle = String::with_capacity(check_word.len() + 2);

    for left in WHOLE_WORD_DELIMITERS {
        for right in WHOLE_WORD_DELIMITERS {
            needle.clear();
            needle.push(left);
            needle.push_str(&check_word);
            needle.push(right);

            if let Some(byte) = check_line.find(needle.as_str()) {
                // Skip the left delimiter
                return Some(char_index(&check_line, byte) + 1);
            }
        }
    }

    None
}

/// Mask `word`'s span starting at character `index` of `line`
fn mask_at(word: &str, line: &str, index: usize, mask: char) -> MatchOutcome {
    let masked = replace_with_char(line, index, word.chars().count(), mask);
    MatchOutcome::hit(index, masked)
}

/// Whether `word` contains the mask character under the given case folding
///
/// Such a word would be found again after every masking pass.
pub fn contains_mask(word: &str, mask: char, case_insensitive: bool) -> bool {
    if case_insensitive {
        let mask = fold_char(mask);
        word.chars().any(|c| fold_char(c) == mask)
    } else {
        word.contains(mask)
    }
}

/// Lowercase `s` one character at a time
///
/// The result always has the same number of characters as `s`, so character
/// offsets found in the folded text apply to the original.
pub fn fold_case(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Lowercase a character, keeping it unchanged when its lowercase form is
/// more than one character (e.g. `'İ'`)
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

#[inline]
fn fold(s: &str, case_insensitive: bool) -> Cow<'_, str> {
    if case_insensitive {
        Cow::Owned(fold_case(s))
    } else {
        Cow::Borrowed(s)
    }
}

#[inline]
fn char_index(s: &str, byte: usize) -> usize {
    if s.is_ascii() {
        byte
    } else {
        s[..byte].chars().count()
    }
}
