// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load and validate the crawl-policy config (fatal if broken)
// 3. Seed the frontier and spawn the worker tasks
// 4. Wait for every worker to finish, then write the report exactly once
// 5. Exit with proper code (0 = success, 1 = URL out of scope, 2 = error)
//
// Rust concepts used:
// - async/await: Because workers fetch many pages concurrently
// - Arc: To share the frontier, fetcher, stats, and config across workers
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - crawl-policy configuration
mod crawl;    // src/crawl/ - frontier, fetcher, and worker loop
mod report;   // src/report.rs - report rendering
mod scrape;   // src/scrape/ - the per-page processing pipeline
mod stats;    // src/stats.rs - shared corpus statistics

// Import items we need from our modules
use cli::{Cli, Commands};
use clap::Parser; // Parser trait enables the parse() method
use config::CrawlConfig;
use crawl::{Frontier, HttpFetcher, Worker};
use scrape::{check_scope, is_in_scope, normalize_url};
use stats::CorpusStats;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // RUST_LOG=info shows per-download log lines from the workers
    env_logger::init();

    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl finished / URL in scope
//   Ok(1) = URL out of scope (scope subcommand)
//   Ok(2) = internal error
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Crawl {
            seed_urls,
            config,
            workers,
            delay_ms,
            report,
            json,
        } => handle_crawl(seed_urls, config, workers, delay_ms, report, json).await,
        Commands::Scope { url, config } => handle_scope(&url, config),
    }
}

// Handles the 'crawl' subcommand
//
// Parameters:
//   seed_urls: where the crawl starts
//   config_path: optional JSON policy file
//   workers / delay_ms: CLI overrides for the config
//   report_path: where the text report goes
//   json: print the report as JSON instead
async fn handle_crawl(
    seed_urls: Vec<String>,
    config_path: Option<PathBuf>,
    workers: Option<usize>,
    delay_ms: Option<u64>,
    report_path: PathBuf,
    json: bool,
) -> Result<i32> {
    // Load the policy, apply CLI overrides, then validate
    // A broken configuration is fatal: the crawl must not begin
    let mut config = CrawlConfig::load(config_path.as_deref())?;
    if let Some(workers) = workers {
        config.worker_count = workers;
    }
    if let Some(delay_ms) = delay_ms {
        config.politeness_delay_ms = delay_ms;
    }
    config.validate()?;

    println!("🔍 Starting crawl with {} worker(s)", config.worker_count);
    println!("⏱️  Politeness delay: {} ms between fetches", config.politeness_delay_ms);

    // Shared state: one frontier, one aggregator, one HTTP client
    let config = Arc::new(config);
    let frontier = Arc::new(Frontier::new());
    let stats = Arc::new(CorpusStats::new(&config));
    let fetcher = Arc::new(HttpFetcher::new(&config)?);

    // Seed the frontier; out-of-scope or malformed seeds are skipped
    let mut seeded = 0;
    for seed in &seed_urls {
        match normalize_url(seed) {
            Ok(normalized) if is_in_scope(&normalized, &config) => {
                if frontier.add(&normalized) {
                    seeded += 1;
                }
            }
            Ok(normalized) => {
                eprintln!("⚠️  Seed URL is out of scope, skipping: {}", normalized);
            }
            Err(e) => {
                eprintln!("⚠️  Invalid seed URL '{}': {}", seed, e);
            }
        }
    }
    if seeded == 0 {
        anyhow::bail!("No usable seed URLs - nothing to crawl");
    }
    println!("🌐 Seeded {} URL(s)\n", seeded);

    // Spawn the workers and wait for all of them to finish
    let mut handles = Vec::new();
    for worker_id in 0..config.worker_count {
        let worker = Worker::new(
            worker_id,
            frontier.clone(),
            fetcher.clone(),
            stats.clone(),
            config.clone(),
        );
        handles.push(tokio::spawn(worker.run()));
    }
    for result in futures::future::join_all(handles).await {
        if let Err(e) = result {
            eprintln!("⚠️  Worker task failed: {}", e);
        }
    }

    // Every worker has joined: flush the report exactly once
    let snapshot = stats.snapshot();
    if json {
        // Serialize the report to JSON and print
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        report::write_report(&snapshot, &report_path)?;
        print_summary(&snapshot, &report_path);
    }

    Ok(0)
}

// Handles the 'scope' subcommand
//
// Normalizes the URL the way the crawler would, then explains the
// first scope rule it fails (if any)
fn handle_scope(url: &str, config_path: Option<PathBuf>) -> Result<i32> {
    let config = CrawlConfig::load(config_path.as_deref())?;
    config.validate()?;

    let normalized = match normalize_url(url) {
        Ok(normalized) => normalized,
        Err(e) => {
            println!("❌ Out of scope: {}", url);
            println!("   Failing rule: URL could not be parsed ({})", e);
            return Ok(1);
        }
    };

    match check_scope(&normalized, &config) {
        Ok(()) => {
            println!("✅ In scope: {}", normalized);
            Ok(0)
        }
        Err(rejection) => {
            println!("❌ Out of scope: {}", normalized);
            println!("   Failing rule: {}", rejection);
            Ok(1)
        }
    }
}

// Prints a human-readable summary after the crawl
fn print_summary(report: &stats::CrawlReport, report_path: &Path) {
    println!("\n📊 Crawl summary:");
    println!("   📄 Unique pages: {}", report.unique_count);
    match &report.longest_page {
        Some(page) => println!("   📏 Longest page: {} ({} tokens)", page.url, page.token_count),
        None => println!("   📏 Longest page: (none processed)"),
    }
    println!("   🌐 Subdomains seen: {}", report.subdomains.len());
    println!("   📋 Report written to {}", report_path.display());
}
