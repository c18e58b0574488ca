//! Cleanse orchestration
//!
//! Loads the word list and input text, masks every occurrence of every target
//! word line by line, and writes the result with the original line structure.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::censor::{MatchPolicy, DEFAULT_MASK};
use crate::cli::Args;
use crate::encoding::{read_text, split_lines, Line};
use crate::error::{CleanseError, Result};
use crate::output::{OutputWriter, DEFAULT_BUFFER_SIZE};
use crate::progress::{create_progress_bar, print_header, print_info, print_success, print_warning};
use crate::wordlist::{SkippedWord, WordList};

/// Matching options shared by every line of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanseOptions {
    pub policy: MatchPolicy,
    pub case_insensitive: bool,
    pub mask: char,
}

impl Default for CleanseOptions {
    fn default() -> Self {
        Self {
            policy: MatchPolicy::Substring,
            case_insensitive: false,
            mask: DEFAULT_MASK,
        }
    }
}

impl CleanseOptions {
    pub fn new(whole_word: bool, case_insensitive: bool) -> Self {
        Self {
            policy: MatchPolicy::from_whole_word(whole_word),
            case_insensitive,
            ..Self::default()
        }
    }

    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    /// Reject masks that would alter line structure
    pub fn validate(&self) -> Result<()> {
        if self.mask == '\n' || self.mask == '\r' {
            return Err(CleanseError::InvalidMask(self.mask));
        }
        Ok(())
    }
}

/// Redaction count for one target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordHits {
    pub word: String,
    pub count: u64,
}

/// A single mask operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redaction {
    pub word: String,
    /// 1-based line in the input
    pub line_number: usize,
    /// Character index where the masked word starts
    pub index: usize,
}

/// Outcome of a cleanse run
#[derive(Debug, Clone, Default)]
pub struct CleanseReport {
    /// Total number of mask operations
    pub redactions: u64,
    pub lines_read: u64,
    pub lines_changed: u64,
    /// Per-word counts, in word-list order
    pub word_hits: Vec<WordHits>,
    /// Every mask operation, in the order performed
    pub events: Vec<Redaction>,
    pub skipped_words: Vec<SkippedWord>,
    pub input_bytes: u64,
    pub encoding: &'static str,
    /// Destination actually written (None in dry-run mode)
    pub output: Option<PathBuf>,
    pub elapsed: Duration,
}

/// Applies every target word to one line at a time, accumulating counts
pub struct LineCleanser<'a> {
    words: &'a WordList,
    options: CleanseOptions,
    hits: Vec<u64>,
    events: Vec<Redaction>,
    lines_read: u64,
    lines_changed: u64,
}

impl<'a> LineCleanser<'a> {
    pub fn new(words: &'a WordList, options: CleanseOptions) -> Self {
        Self {
            words,
            options,
            hits: vec![0; words.len()],
            events: Vec::new(),
            lines_read: 0,
            lines_changed: 0,
        }
    }

    /// Mask all occurrences of all target words in `text`
    ///
    /// Each word is applied repeatedly until it no longer matches before the
    /// next word is tried. `line_number` is 1-based.
    pub fn cleanse(&mut self, line_number: usize, text: String) -> String {
        self.lines_read += 1;
        let mut line = text;
        let mut changed = false;

        for (slot, word) in self.words.iter().enumerate() {
            loop {
                let outcome = self.options.policy.censor(
                    word,
                    line,
                    self.options.mask,
                    self.options.case_insensitive,
                );
                line = outcome.line;

                match outcome.index {
                    Some(index) => {
                        log::info!("{} found on line {} at index {}", word, line_number, index);
                        self.hits[slot] += 1;
                        self.events.push(Redaction {
                            word: word.to_string(),
                            line_number,
                            index,
                        });
                        changed = true;
                    }
                    None => break,
                }
            }
        }

        if changed {
            self.lines_changed += 1;
        }
        line
    }

    pub fn redactions(&self) -> u64 {
        self.hits.iter().sum()
    }

    /// Consume the cleanser into a report with the line and word counts filled in
    pub fn finish(self) -> CleanseReport {
        let redactions = self.redactions();
        let word_hits = self
            .words
            .iter()
            .zip(self.hits)
            .map(|(word, count)| WordHits {
                word: word.to_string(),
                count,
            })
            .collect();

        CleanseReport {
            redactions,
            lines_read: self.lines_read,
            lines_changed: self.lines_changed,
            word_hits,
            events: self.events,
            skipped_words: self.words.skipped().to_vec(),
            ..CleanseReport::default()
        }
    }
}

/// Cleanse in-memory lines without touching the filesystem
pub fn cleanse_lines(lines: Vec<Line>, words: &WordList, options: CleanseOptions) -> (Vec<Line>, CleanseReport) {
    cleanse_lines_with_progress(lines, words, options, || {})
}

/// Like [`cleanse_lines`], calling `on_line` after each line is done
pub fn cleanse_lines_with_progress<F>(
    lines: Vec<Line>,
    words: &WordList,
    options: CleanseOptions,
    mut on_line: F,
) -> (Vec<Line>, CleanseReport)
where
    F: FnMut(),
{
    let mut cleanser = LineCleanser::new(words, options);
    let output = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let text = cleanser.cleanse(i + 1, line.text);
            on_line();
            Line {
                text,
                terminator: line.terminator,
            }
        })
        .collect();
    (output, cleanser.finish())
}

/// Cleanse a block of text, returning the new text and the redaction count
pub fn cleanse_text(text: &str, words: &WordList, options: CleanseOptions) -> (String, u64) {
    let (lines, report) = cleanse_lines(split_lines(text), words, options);
    let mut out = String::with_capacity(text.len());
    for line in &lines {
        out.push_str(&line.text);
        out.push_str(line.terminator);
    }
    (out, report.redactions)
}

/// Cleanser configuration
#[derive(Debug, Clone)]
pub struct CleanseConfig {
    pub words_path: PathBuf,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub options: CleanseOptions,
    pub buffer_size: usize,
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl CleanseConfig {
    pub fn new(
        words_path: impl Into<PathBuf>,
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        options: CleanseOptions,
    ) -> Self {
        Self {
            words_path: words_path.into(),
            input_path: input_path.into(),
            output_path: output_path.into(),
            options,
            buffer_size: DEFAULT_BUFFER_SIZE,
            dry_run: false,
            quiet: true,
            verbose: false,
        }
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        let options = CleanseOptions::new(args.whole_word, args.case_insensitive).with_mask(args.mask);
        options.validate()?;

        Ok(Self {
            words_path: args.words.clone(),
            input_path: args.input.clone(),
            output_path: args.output.clone(),
            options,
            buffer_size: DEFAULT_BUFFER_SIZE,
            dry_run: args.dry_run,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}

/// Runs a complete cleanse: load, mask, write
pub struct Cleanser {
    config: CleanseConfig,
}

impl Cleanser {
    pub fn new(config: CleanseConfig) -> Self {
        Self { config }
    }

    /// Execute the run
    ///
    /// Both inputs are fully read before the output file is created, so a
    /// missing source never leaves a partial destination behind.
    pub fn run(&self) -> Result<CleanseReport> {
        let start = Instant::now();
        let config = &self.config;
        config.options.validate()?;

        if !config.quiet {
            print_header("Loading target words...");
        }
        let words = WordList::load(&config.words_path, config.options.mask, config.options.case_insensitive)?;
        if !config.quiet {
            print_info(&format!("{} target words from {:?}", words.len(), config.words_path));
            for skipped in words.skipped() {
                print_warning(&format!(
                    "Skipped line {} ({:?}): {}",
                    skipped.line_number,
                    skipped.word,
                    skipped.reason.describe()
                ));
            }
        }

        if !config.quiet {
            print_header("Opening input file...");
        }
        let input = read_text(&config.input_path)?;
        let lines = split_lines(&input.text);
        if !config.quiet {
            print_info(&format!("{} lines ({}) from {:?}", lines.len(), bytesize::ByteSize(input.size), config.input_path));
            print_info(&format!(
                "Mode: {}, {}",
                config.options.policy.name(),
                if config.options.case_insensitive { "case-insensitive" } else { "case-sensitive" }
            ));
        }

        let pb = if config.quiet {
            indicatif::ProgressBar::hidden()
        } else {
            create_progress_bar(lines.len() as u64, "Cleansing...")
        };

        let (output, mut report) = cleanse_lines_with_progress(lines, &words, config.options, || pb.inc(1));
        pb.finish_and_clear();

        report.input_bytes = input.size;
        report.encoding = input.encoding.name;

        if config.dry_run {
            if !config.quiet {
                print_warning("Dry run: output file not written");
            }
        } else {
            let mut writer = OutputWriter::new(config.output_path.clone(), config.buffer_size)?;
            writer.write_all_lines(&output)?;
            writer.flush()?;
            if !config.quiet {
                print_success(&format!("Output written to: {:?}", writer.path()));
            }
            if config.verbose {
                print_info(&format!(
                    "Wrote {} lines ({})",
                    writer.lines_written(),
                    bytesize::ByteSize(writer.bytes_written())
                ));
            }
            report.output = Some(config.output_path.clone());
        }

        report.elapsed = start.elapsed();
        Ok(report)
    }
}

/// Cleanse `input_path` into `output_path` and return the number of redactions
///
/// Uses the default `*` mask and prints nothing to the console; per-match
/// details still go to the `log` facade.
pub fn cleanse_file(
    words_path: impl Into<PathBuf>,
    input_path: impl Into<PathBuf>,
    output_path: impl Into<PathBuf>,
    whole_word: bool,
    case_insensitive: bool,
) -> Result<u64> {
    let config = CleanseConfig::new(
        words_path,
        input_path,
        output_path,
        CleanseOptions::new(whole_word, case_insensitive),
    );
    Ok(Cleanser::new(config).run()?.redactions)
}
