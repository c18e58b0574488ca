//! Word Cleanser - redact forbidden words from text files
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use word_cleanser::cleanser::{CleanseConfig, Cleanser};
use word_cleanser::cli::Args;
use word_cleanser::progress::{print_banner, print_error, print_header, print_info, print_summary};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if !args.quiet {
        print_banner();
    }

    let config = CleanseConfig::from_args(&args)?;

    if !args.quiet && args.verbose {
        print_config(&config);
    }

    let report = Cleanser::new(config).run()?;

    if args.quiet {
        println!("{}", report.redactions);
    } else {
        print_summary(&report, args.stats);
    }

    Ok(())
}

/// Print configuration summary
fn print_config(config: &CleanseConfig) {
    print_header("Configuration");

    print_info(&format!("Word list:    {:?}", config.words_path));
    print_info(&format!("Input:        {:?}", config.input_path));
    print_info(&format!("Output:       {:?}", config.output_path));
    print_info(&format!("Policy:       {}", config.options.policy.name()));
    print_info(&format!("Ignore case:  {}", config.options.case_insensitive));
    print_info(&format!("Mask:         {:?}", config.options.mask));
    print_info(&format!("Dry run:      {}", config.dry_run));
}
