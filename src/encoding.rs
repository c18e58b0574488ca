//! Input decoding and line splitting
//!
//! Detects the encoding of input files, transcodes them to UTF-8, and splits
//! text into lines that remember their own terminators so output can be
//! written back with the same structure.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs;
use std::path::Path;

use crate::error::{CleanseError, Result};

/// Number of bytes sampled for encoding detection
const DETECTION_SAMPLE: usize = 64 * 1024;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Detect the encoding of raw file content
pub fn detect_encoding(content: &[u8]) -> EncodingInfo {
    if content.is_empty() {
        return EncodingInfo::default();
    }

    if let Some((encoding, _)) = Encoding::for_bom(content) {
        return EncodingInfo {
            name: encoding.name(),
            encoding,
        };
    }

    let sample = &content[..content.len().min(DETECTION_SAMPLE)];

    // Valid UTF-8 needs no guessing
    if std::str::from_utf8(sample).is_ok() {
        return EncodingInfo::default();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == content.len());
    let encoding = detector.guess(None, true);

    EncodingInfo {
        name: encoding.name(),
        encoding,
    }
}

/// Decoded text file
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub encoding: EncodingInfo,
    /// Size of the file on disk
    pub size: u64,
}

/// Read a whole file and transcode it to UTF-8
///
/// A byte order mark is consumed. Malformed sequences are replaced with
/// U+FFFD and logged rather than failing the run.
pub fn read_text(path: &Path) -> Result<DecodedText> {
    let bytes = fs::read(path).map_err(|e| CleanseError::read(path, e))?;
    let encoding = detect_encoding(&bytes);

    let (decoded, _, had_errors) = encoding.encoding.decode(&bytes);
    if had_errors {
        log::warn!("Encoding errors in {:?}, using lossy conversion", path);
    }
    log::debug!("Decoded {:?} as {}", path, encoding.name);

    Ok(DecodedText {
        text: decoded.into_owned(),
        encoding,
        size: bytes.len() as u64,
    })
}

/// A line of text together with the terminator that ended it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    /// `"\n"`, `"\r\n"`, or empty for a final unterminated line
    pub terminator: &'static str,
}

impl Line {
    pub fn new(text: impl Into<String>, terminator: &'static str) -> Self {
        Self {
            text: text.into(),
            terminator,
        }
    }
}

/// Split text into lines, keeping each line's terminator
///
/// Concatenating `text + terminator` for every line reproduces the input.
pub fn split_lines(text: &str) -> Vec<Line> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut position = 0;

    while position < bytes.len() {
        let remaining = &bytes[position..];
        match memchr::memchr(b'\n', remaining) {
            Some(newline) => {
                let end = position + newline;
                let (body_end, terminator) = if newline > 0 && bytes[end - 1] == b'\r' {
                    (end - 1, "\r\n")
                } else {
                    (end, "\n")
                };
                lines.push(Line::new(&text[position..body_end], terminator));
                position = end + 1;
            }
            None => {
                lines.push(Line::new(&text[position..], ""));
                break;
            }
        }
    }

    lines
}

/// Iterate the non-terminator content of each line
///
/// Both `\n` and `\r\n` are stripped.
pub fn line_bodies(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
