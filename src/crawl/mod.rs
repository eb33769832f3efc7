// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl loop itself.
//
// Submodules:
// - fetch: The download front-end (the only place that touches HTTP)
// - frontier: The shared queue of URLs waiting to be crawled
// - worker: The loop that pulls, fetches, scrapes, and feeds links back
//
// Politeness:
// - Every worker sleeps a configured delay between fetches
// - The frontier hands out each URL at most once, so no page is re-fetched
//
// Rust concepts:
// - Async programming: Workers are tokio tasks awaiting network I/O
// - Traits: The Fetch trait lets tests swap in a canned downloader
// =============================================================================

mod fetch;
mod frontier;
mod worker;

// Re-export the crawl building blocks
pub use fetch::{Fetch, FetchResult, HttpFetcher};
pub use frontier::Frontier;
pub use worker::Worker;
