// src/scrape/extract.rs
// =============================================================================
// This module extracts candidate links from parsed HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// html5ever recovers from malformed markup instead of erroring, so a broken
// page degrades to "whatever links parsed" rather than aborting the page.
//
// We also use the `url` crate to:
// - Resolve relative hrefs against the page's final (post-redirect) URL
// - Normalize each result into its canonical comparison key
//
// Rust concepts:
// - HashSet: Set semantics collapse duplicate raw links for free
// - let-else: Skip an element early when its href can't be resolved
// =============================================================================

use crate::scrape::normalize::normalize_url;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

// Extracts all candidate links from a parsed document
//
// Parameters:
//   doc: the parsed HTML document
//   final_url: the page's final URL after redirects (relative links
//              resolve against this, the way a browser would)
//
// Returns: a set of normalized absolute http/https URLs
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   final_url = "https://www.ics.uci.edu/"
//   result = {"https://www.ics.uci.edu/docs"}
//
// Duplicate raw links collapse here by set semantics; uniqueness across
// the whole crawl is the statistics aggregator's job, not this function's
pub fn extract_links(doc: &Html, final_url: &Url) -> HashSet<String> {
    let mut links = HashSet::new();

    // Create a CSS selector to find all <a> tags with an href
    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    for element in doc.select(&selector) {
        // Elements without a usable target are skipped without error
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        // Resolve relative hrefs against the final URL
        // join() handles "/abs", "../up", "page", and full URLs alike
        let Ok(resolved) = final_url.join(href) else {
            continue;
        };

        // Only http/https targets are crawl candidates
        // (mailto:, tel:, javascript:, data: all fall out here)
        if resolved.scheme() != "http" && resolved.scheme() != "https" {
            continue;
        }

        // Normalize so the rest of the crawler compares apples to apples
        if let Ok(normalized) = normalize_url(resolved.as_str()) {
            links.insert(normalized);
        }
    }

    links
}
