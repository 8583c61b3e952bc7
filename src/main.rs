//! Anagram Builder - dictionary words grouped by anagram family
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::io;
use std::process;

use anagram_builder::cli::Args;
use anagram_builder::config::AnagramConfig;
use anagram_builder::loader::Loader;
use anagram_builder::progress::{
    create_spinner, print_banner, print_config, print_error, print_success, print_summary,
    print_warning,
};
use anagram_builder::report::Reporter;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet && std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

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
    let config = AnagramConfig::from_args(&args)?;

    if config.verbose {
        print_banner();
        print_config(&config);
    }

    let mut loader = if config.quiet {
        Loader::new()
    } else {
        Loader::with_progress(create_spinner("Loading dictionary..."))
    };
    let outcome = loader.load(&config.dictionary);

    if outcome.is_unavailable() && config.verbose {
        print_warning("Dictionary unavailable, no groups to print");
    }

    let index = outcome.into_index();

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    let summary = reporter.report(&index, config.anagram_length)?;

    if config.stats {
        print_summary(loader.stats(), &summary, config.anagram_length);
    }

    if config.verbose {
        print_success(&format!(
            "{} groups of length {} printed",
            summary.groups, config.anagram_length
        ));
    }

    Ok(())
}
