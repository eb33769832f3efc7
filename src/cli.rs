// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "corpus-crawler",
    version = "0.1.0",
    about = "A polite crawler for academic subdomains that builds corpus statistics",
    long_about = "corpus-crawler visits a restricted set of academic subdomains, follows the links \
                  it finds, and accumulates corpus statistics (unique pages, longest page, word \
                  frequencies, per-subdomain counts) into a plain-text report."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (crawl, scope)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl starting from one or more seed URLs and write a statistics report
    ///
    /// Example: corpus-crawler crawl https://www.ics.uci.edu --workers 4
    Crawl {
        /// Seed URLs to start crawling from (at least one required)
        ///
        /// These are positional arguments; every seed must pass the scope
        /// filter or it is skipped with a warning
        #[arg(required = true)]
        seed_urls: Vec<String>,

        /// Path to a JSON crawl-policy config file
        ///
        /// Fields you leave out fall back to the built-in defaults,
        /// so a config file only needs the values you want to change
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of concurrent workers (overrides the config file)
        #[arg(long)]
        workers: Option<usize>,

        /// Politeness delay between fetches per worker, in milliseconds
        /// (overrides the config file)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Where to write the plain-text report
        #[arg(long, default_value = "report.txt")]
        report: PathBuf,

        /// Print the report as JSON to stdout instead of writing the text file
        #[arg(long)]
        json: bool,
    },

    /// Explain whether a single URL is in crawl scope
    ///
    /// Prints the first filter rule the URL fails, which makes the
    /// crawl policy easy to debug without running a crawl
    ///
    /// Example: corpus-crawler scope "https://www.ics.uci.edu/events?date=2024-01-01"
    Scope {
        /// The URL to test against the scope filter
        url: String,

        /// Path to a JSON crawl-policy config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<usize> for --workers?
//    - Option lets us tell "flag not given" apart from "flag given"
//    - None = user didn't pass --workers, keep the config file's value
//    - Some(n) = user passed --workers n, override the config
//
// 2. What is PathBuf?
//    - An owned filesystem path (the owned version of &Path)
//    - Like String vs &str, but for paths
//    - clap parses path arguments straight into it
//
// 3. What does #[arg(required = true)] on a Vec do?
//    - A Vec positional normally accepts zero or more values
//    - required = true makes clap demand at least one seed URL
// -----------------------------------------------------------------------------
