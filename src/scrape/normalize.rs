// src/scrape/normalize.rs
// =============================================================================
// This module canonicalizes URLs into stable comparison keys.
//
// Two URLs that differ only by fragment (#section) point at the same page,
// so the fragment is stripped unconditionally. The `url` crate's parser
// already lowercases the scheme and host and normalizes the path for us.
//
// The normalized string is the identity key used everywhere else:
// the frontier dedups on it and the statistics aggregator counts it.
//
// Rust concepts:
// - Result<T, E>: For operations that can fail
// - The ? operator: Early-returns the error to the caller
// =============================================================================

use url::Url;

// Normalizes a raw absolute URL into its canonical form
//
// Parameters:
//   raw: an absolute URL string (already resolved against a base)
//
// Returns: Ok(canonical string), or Err for a malformed URL
//   Callers drop malformed links instead of aborting the page
//
// Examples:
//   "https://www.ics.uci.edu/page#section" -> "https://www.ics.uci.edu/page"
//   "HTTP://WWW.ICS.UCI.EDU/Page"          -> "http://www.ics.uci.edu/Page"
//
// Normalizing an already-normalized URL returns it unchanged (idempotent)
pub fn normalize_url(raw: &str) -> Result<String, url::ParseError> {
    let mut parsed = Url::parse(raw)?;
    parsed.set_fragment(None);
    Ok(parsed.to_string())
}
