//! Console output module
//!
//! Styled status lines, the line progress bar, and the end-of-run summary.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::cleanser::CleanseReport;

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║    W O R D - C L E A N S E R                                 ║
║    Redact forbidden words from text files                    ║
║                                                              ║
╚══════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".green(), text);
}

/// Create a styled progress bar counting lines
pub fn create_progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);

    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {pos}/{len} lines ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░");

    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Print final statistics
///
/// With `per_word` set, every target word is listed with its redaction count.
pub fn print_summary(report: &CleanseReport, per_word: bool) {
    println!();
    println!("{}", "═".repeat(60).green());
    println!("{}", "                    CLEANSE COMPLETE".green().bold());
    println!("{}", "═".repeat(60).green());
    println!();

    println!("  {} {} ({})", "Input size:     ".green(), ByteSize(report.input_bytes), report.encoding);
    println!("  {} {}", "Lines read:     ".green(), format_number(report.lines_read));
    println!("  {} {}", "Lines changed:  ".green(), format_number(report.lines_changed));
    println!("  {} {}", "Target words:   ".green(), format_number(report.word_hits.len() as u64));

    if !report.skipped_words.is_empty() {
        println!("  {} {}", "Skipped words:  ".yellow(), format_number(report.skipped_words.len() as u64));
    }

    println!(
        "  {} {}",
        "Redactions:     ".green().bold(),
        format_number(report.redactions).green().bold()
    );

    if per_word {
        println!();
        for hits in &report.word_hits {
            print_bullet(&format!("{:<24} {}", hits.word, format_number(hits.count)));
        }
    }

    println!();
    println!("  {} {}", "Duration:       ".green(), format_duration(report.elapsed));
    match report.output {
        Some(ref path) => println!("  {} {:?}", "Output:         ".green(), path),
        None => println!("  {} {}", "Output:         ".yellow(), "not written (dry run)".yellow()),
    }
    println!();
    println!("{}", "═".repeat(60).green());
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}
