// src/scrape/mod.rs
// =============================================================================
// This module contains the per-page processing pipeline.
//
// Submodules:
// - normalize: Canonicalizes URLs into stable comparison keys
// - scope: Decides whether a URL is in crawl scope (pure, no crawl history)
// - classify: Decides whether a fetched page is worth processing
// - tokenize: Turns page text into lowercase alphanumeric tokens
// - extract: Pulls hyperlinks out of parsed HTML
// - pipeline: Composes the above into the per-page `scrape` entry point
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod classify;
mod extract;
mod normalize;
mod pipeline;
mod scope;
mod tokenize;

// Re-export public items from submodules
// This lets users write `scrape::scrape()` instead of
// `scrape::pipeline::scrape()`
pub use classify::{classify_document, classify_response, has_robots_opt_out, Classification};
pub use extract::extract_links;
pub use normalize::normalize_url;
pub use pipeline::scrape;
pub use scope::{check_scope, is_in_scope, ScopeRejection};
pub use tokenize::{extract_text, tokenize};
