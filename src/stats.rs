// src/stats.rs
// =============================================================================
// This module is the corpus statistics aggregator.
//
// It is the single piece of state shared by every worker, so all four
// counters live behind one mutex and are only reachable through two
// operations:
// - record():   called once per accepted page, applies the whole update
//               (unique URLs, subdomain counts, word frequencies, longest
//               page) under one lock acquisition
// - snapshot(): builds the report data; it takes the same lock, so it can
//               never observe half of a record() call
//
// The raw counters are private on purpose. Nothing outside this file can
// mutate them without going through record().
//
// Rust concepts:
// - Arc<T>: Shared ownership across worker tasks
// - Mutex<T>: One writer at a time; the guard unlocks when dropped
// - Entry API: or_insert(0) gives "insert or update" in one lookup
// =============================================================================

use crate::config::CrawlConfig;
use crate::scrape::normalize_url;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use url::Url;

/// The page with the most tokens seen so far
#[derive(Debug, Clone, Serialize)]
pub struct LongestPage {
    pub url: String,
    pub token_count: usize,
}

/// One entry of the top-words table
#[derive(Debug, Clone, Serialize)]
pub struct WordCount {
    pub token: String,
    pub count: u64,
}

/// One entry of the subdomain table
#[derive(Debug, Clone, Serialize)]
pub struct SubdomainCount {
    pub host: String,
    pub count: u64,
}

// Everything the report needs, in report order
//
// #[derive(Serialize)] lets the --json flag print this directly
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    pub unique_count: usize,
    pub unique_urls: Vec<String>,
    pub longest_page: Option<LongestPage>,
    pub top_words: Vec<WordCount>,
    pub subdomains: Vec<SubdomainCount>,
}

// The counters themselves - only this file can touch them
#[derive(Debug, Default)]
struct StatsInner {
    unique_urls: HashSet<String>,
    longest_page: Option<(String, usize)>,
    word_frequency: HashMap<String, u64>,
    subdomain_counts: HashMap<String, u64>,
}

// The shared aggregator handed to every worker inside an Arc
pub struct CorpusStats {
    inner: Mutex<StatsInner>,
    // Immutable policy data lives outside the mutex
    stop_words: HashSet<String>,
    root_domain: String,
}

impl CorpusStats {
    pub fn new(config: &CrawlConfig) -> Self {
        Self {
            inner: Mutex::new(StatsInner::default()),
            stop_words: config.stop_words.clone(),
            root_domain: config.root_domain.clone(),
        }
    }

    // Records one accepted page: its URL, its tokens, and its raw links
    //
    // Parameters:
    //   page_url: the URL the worker just crawled
    //   tokens: the page's token sequence (its length is the token count)
    //   links: every link extracted from the page, before scope filtering
    //
    // The page URL and all extracted links go through uniqueness tracking,
    // so discovered-but-not-yet-crawled pages count toward the totals.
    // All updates happen under one lock acquisition: concurrent callers can
    // never double-count a URL or lose a word-frequency increment.
    pub fn record(&self, page_url: &str, tokens: &[String], links: &HashSet<String>) {
        let mut inner = self.inner.lock().expect("statistics lock poisoned");

        inner.track_url(page_url, &self.root_domain);
        for link in links {
            inner.track_url(link, &self.root_domain);
        }

        for token in tokens {
            if self.stop_words.contains(token.as_str()) {
                continue;
            }
            *inner.word_frequency.entry(token.clone()).or_insert(0) += 1;
        }

        let token_count = tokens.len();
        let is_longer = match &inner.longest_page {
            None => true,
            Some((_, best)) => token_count > *best,
        };
        if is_longer {
            let url = normalize_url(page_url).unwrap_or_else(|_| page_url.to_string());
            inner.longest_page = Some((url, token_count));
        }
    }

    // Builds a consistent view of the statistics for the report
    //
    // Returns: unique URL list (sorted), the longest page, the 50 most
    // frequent words (descending count, ties by ascending token), and the
    // subdomain table sorted by hostname
    pub fn snapshot(&self) -> CrawlReport {
        let inner = self.inner.lock().expect("statistics lock poisoned");

        let mut unique_urls: Vec<String> = inner.unique_urls.iter().cloned().collect();
        unique_urls.sort();

        let mut subdomains: Vec<SubdomainCount> = inner
            .subdomain_counts
            .iter()
            .map(|(host, count)| SubdomainCount {
                host: host.clone(),
                count: *count,
            })
            .collect();
        subdomains.sort_by(|a, b| a.host.cmp(&b.host));

        CrawlReport {
            unique_count: unique_urls.len(),
            unique_urls,
            longest_page: inner
                .longest_page
                .clone()
                .map(|(url, token_count)| LongestPage { url, token_count }),
            top_words: top_words(&inner.word_frequency, 50),
            subdomains,
        }
    }
}

impl StatsInner {
    // Tracks one URL for uniqueness and subdomain counting
    //
    // Malformed URLs are dropped here rather than propagated - one bad
    // link must never poison the whole record() call
    fn track_url(&mut self, url: &str, root_domain: &str) {
        let Ok(normalized) = normalize_url(url) else {
            return;
        };
        if !self.unique_urls.insert(normalized.clone()) {
            return;
        }
        // First sighting: if the host falls under the crawl's root domain,
        // bump its subdomain count
        if let Ok(parsed) = Url::parse(&normalized) {
            if let Some(host) = parsed.host_str() {
                if host == root_domain || host.ends_with(&format!(".{}", root_domain)) {
                    *self.subdomain_counts.entry(host.to_string()).or_insert(0) += 1;
                }
            }
        }
    }
}

// Sorts a frequency table into its top entries
//
// Ordering: descending count, ties broken by ascending token.
// With fewer than `limit` distinct tokens, all of them come back.
fn top_words(frequency: &HashMap<String, u64>, limit: usize) -> Vec<WordCount> {
    let mut words: Vec<WordCount> = frequency
        .iter()
        .map(|(token, count)| WordCount {
            token: token.clone(),
            count: *count,
        })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    words.truncate(limit);
    words
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Arc<Mutex<...>> and not plain globals?
//    - Multiple workers mutate these counters at the same time
//    - Unsynchronized shared mutation is a data race; Rust won't compile it
//    - The Mutex serializes writers, the Arc shares ownership across tasks
//
// 2. What does .lock().expect(...) return?
//    - A MutexGuard that derefs to the inner data
//    - The lock is released automatically when the guard goes out of scope
//    - expect() only fires if another thread panicked while holding the lock
//
// 3. What is the Entry API?
//    - map.entry(key).or_insert(0) returns a mutable reference to the value,
//      inserting 0 first if the key was missing
//    - One hash lookup instead of a contains_key/get_mut pair
//
// 4. Why does record() take everything at once?
//    - The three updates must land together: if unique-URL insertion and
//      word counting took the lock separately, a snapshot could see a page
//      counted in one table but not the other
// -----------------------------------------------------------------------------
