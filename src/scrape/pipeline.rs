// src/scrape/pipeline.rs
// =============================================================================
// This module is the per-page entry point: classify, tokenize, record,
// extract, filter.
//
// The ordering matters and is easy to get wrong:
// - Rejected pages contribute nothing: no statistics, no links
// - Accepted pages are recorded with ALL of their raw extracted links,
//   and only then is the link set narrowed by the scope filter
//
// That way a page's out-of-scope links still count toward the unique-URL
// statistics, but only in-scope links go back to the frontier.
//
// Everything in here is synchronous: parsing, tokenizing, and the
// statistics update are bounded-latency operations. Only the fetch
// (outside this module) and the politeness sleep ever suspend.
// =============================================================================

use crate::config::CrawlConfig;
use crate::crawl::FetchResult;
use crate::scrape::classify::{classify_document, classify_response, has_robots_opt_out};
use crate::scrape::extract::extract_links;
use crate::scrape::scope::is_in_scope;
use crate::scrape::tokenize::{extract_text, tokenize};
use crate::stats::CorpusStats;
use scraper::Html;
use std::collections::HashSet;
use url::Url;

// Processes one fetched page and returns its in-scope outbound links
//
// Parameters:
//   seed_url: the URL the worker pulled from the frontier
//   page: the download result (status, final URL, headers, body)
//   stats: the shared statistics aggregator
//   config: the crawl policy
//
// Returns: the normalized links that survive the scope filter, ready to
// be offered back to the frontier. Empty when the page is rejected.
pub fn scrape(
    seed_url: &str,
    page: &FetchResult,
    stats: &CorpusStats,
    config: &CrawlConfig,
) -> Vec<String> {
    // Response gate first: never parse bodies we are going to throw away
    let response_class = classify_response(page.status, page.content_type.as_deref());
    if !response_class.is_accept() {
        log::debug!("skipping {}: {:?}", seed_url, response_class);
        return Vec::new();
    }

    // Decode and parse once; classification, tokenizing, and link
    // extraction all read the same document
    let body = String::from_utf8_lossy(&page.body);
    let doc = Html::parse_document(&body);

    let text = extract_text(&doc);
    let tokens: Vec<String> = tokenize(&text).collect();

    let document_class = classify_document(has_robots_opt_out(&doc), tokens.len(), config);
    if !document_class.is_accept() {
        log::debug!("skipping {}: {:?}", seed_url, document_class);
        return Vec::new();
    }

    // Relative links resolve against the final (post-redirect) URL;
    // fall back to the seed URL if the fetcher reported something odd
    let raw_links = match Url::parse(&page.final_url).or_else(|_| Url::parse(seed_url)) {
        Ok(base) => extract_links(&doc, &base),
        Err(_) => HashSet::new(),
    };

    // Statistics see the page and every raw link, in or out of scope
    stats.record(seed_url, &tokens, &raw_links);

    // Only in-scope links are returned to the frontier
    raw_links
        .into_iter()
        .filter(|link| is_in_scope(link, config))
        .collect()
}
