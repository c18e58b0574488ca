//! # Word Cleanser
//!
//! Redacts a list of forbidden words from a text file.
//!
//! ## Features
//!
//! - **Substring mode**: censor a word wherever it appears, even inside longer words
//! - **Whole-word mode**: censor only words bounded by space, `"`, `/`, `\`, `.` or `,`
//! - **Case-insensitive mode**: fold ASCII case before comparing, keep original case elsewhere
//! - **Structure preserving**: masks replace characters one for one and line endings are kept
//!
//! ## Usage
//!
//! ```bash
//! # Censor inputText.txt using censoredWords.txt, writing outputText.txt
//! word-cleanser
//!
//! # Whole words only, any capitalization
//! word-cleanser -w words.txt -i story.txt -o clean.txt -W -c
//! ```
//!
//! ## Example
//!
//! ```rust
//! use word_cleanser::censor::censor_word_in_line;
//!
//! let outcome = censor_word_in_line("sun", "You are my sunshine".to_string(), '*', false);
//! assert_eq!(outcome.line, "You are my ***shine");
//! assert_eq!(outcome.index, Some(11));
//! ```
//!
//! ```rust,no_run
//! let redactions = word_cleanser::cleanse_file(
//!     "censoredWords.txt",
//!     "inputText.txt",
//!     "outputText.txt",
//!     true,
//!     true,
//! ).unwrap();
//! println!("Found this many censored words: {}", redactions);
//! ```

pub mod censor;
pub mod cleanser;
pub mod cli;
pub mod encoding;
pub mod error;
pub mod output;
pub mod progress;
pub mod wordlist;

pub use censor::{MatchOutcome, MatchPolicy};
pub use cleanser::{cleanse_file, CleanseConfig, CleanseOptions, CleanseReport, Cleanser, Redaction};
pub use cli::Args;
pub use error::CleanseError;
pub use wordlist::WordList;
