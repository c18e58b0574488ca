//! Command-line interface definition for word-cleanser
//!
//! Provides argument parsing for the cleansing tool.

use clap::Parser;
use std::path::PathBuf;

/// Redact forbidden words from a text file
///
/// Every occurrence of every word in the word list is overwritten with the
/// mask character, character for character, and the total number of
/// redactions is reported.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "word-cleanser",
    version,
    about = "Redact forbidden words from a text file",
    long_about = r#"
Redact a list of forbidden words from a text file. Each occurrence is
replaced by the mask character, one mask per character, so line lengths and
line endings are preserved.

EXAMPLES:
    # Censor with the default file names
    word-cleanser

    # Only whole words, ignoring case
    word-cleanser -w words.txt -i story.txt -o clean.txt --whole-word --case-insensitive

    # Use '#' as the mask and only report what would change
    word-cleanser -i story.txt --mask '#' --dry-run --stats

WHOLE-WORD DELIMITERS:
    space  "  /  \  .  ,
    A word at the very start or end of a line is not a whole-word match.
"#
)]
pub struct Args {
    /// Word list file, one target word per line
    #[arg(short, long, value_name = "PATH", default_value = "censoredWords.txt")]
    pub words: PathBuf,

    /// Input text file
    #[arg(short, long, value_name = "PATH", default_value = "inputText.txt")]
    pub input: PathBuf,

    /// Output text file (overwritten)
    #[arg(short, long, value_name = "PATH", default_value = "outputText.txt")]
    pub output: PathBuf,

    /// Only censor whole words bounded by delimiters
    #[arg(short = 'W', long, default_value_t = false)]
    pub whole_word: bool,

    /// Ignore ASCII letter case when matching
    #[arg(short, long, default_value_t = false)]
    pub case_insensitive: bool,

    /// Mask character
    #[arg(short, long, value_name = "CHAR", default_value_t = '*')]
    pub mask: char,

    /// Show per-word redaction counts
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Dry run - report redactions without writing the output file
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false, conflicts_with = "quiet")]
    pub verbose: bool,
}
