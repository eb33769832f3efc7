// src/config.rs
// =============================================================================
// This module holds the crawl-policy configuration.
//
// Everything that decides what the crawler may touch lives here:
// - Which host suffixes are allowed (plus one host+path-prefix exception)
// - Which file extensions and URL patterns are rejected
// - The stop-word set excluded from word-frequency statistics
// - Tuning knobs: informative-content thresholds, politeness delay,
//   worker count, fetch timeout
//
// The defaults target four academic subdomains of uci.edu. A JSON config
// file can override any subset of fields; missing fields keep their
// defaults thanks to #[serde(default)].
//
// Rust concepts:
// - serde derive: Automatic JSON (de)serialization
// - Default trait: One place that defines the built-in policy
// =============================================================================

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

// The four subdomains the crawl is restricted to
const DEFAULT_ALLOWED_SUFFIXES: &[&str] = &[
    "ics.uci.edu",
    "cs.uci.edu",
    "informatics.uci.edu",
    "stat.uci.edu",
];

// File extensions that never contain crawlable HTML
// (stylesheets, scripts, images, audio/video, archives, office docs, binaries)
const DEFAULT_DISALLOWED_EXTENSIONS: &[&str] = &[
    "css", "js", "bmp", "gif", "jpeg", "jpg", "ico", "png", "tiff", "mid", "mp2", "mp3", "mp4",
    "wav", "avi", "mov", "mpeg", "ram", "m4v", "mkv", "ogg", "ogv", "pdf", "ps", "eps", "tex",
    "ppt", "pptx", "doc", "docx", "xls", "xlsx", "names", "data", "dat", "exe", "bz2", "tar",
    "msi", "bin", "7z", "psd", "dmg", "iso", "epub", "dll", "cnf", "tgz", "sha1", "thmx", "mso",
    "arff", "rtf", "jar", "csv", "rm", "smil", "wmv", "swf", "wma", "zip", "rar", "gz",
];

// Substrings in the path or query that mark session ids, login/export/upload
// pages, calendar and sort/filter views, and pagination traps
const DEFAULT_TRAP_PATTERNS: &[&str] = &[
    "sessionid",
    "session_id",
    "jsessionid",
    "phpsessid",
    "login",
    "logout",
    "signin",
    "export",
    "attachment",
    "upload",
    "download",
    "calendar",
    "ical",
    "date=",
    "day=",
    "month=",
    "year=",
    "sort=",
    "order=",
    "filter=",
    "page=",
    "offset=",
    "limit=",
];

// Substrings anywhere in the URL that usually mean a dead or error page
const DEFAULT_DEAD_PAGE_MARKERS: &[&str] = &["404", "not-found", "error", "invalid"];

// Common English function words excluded from word-frequency statistics
const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's",
    "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some",
    "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then",
    "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we",
    "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's",
    "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with",
    "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself",
];

// A host that is only in scope below a specific path prefix
//
// Example: the campus announcements site is crawlable only under the
// department's own section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostPathException {
    pub host: String,
    pub path_prefix: String,
}

// The complete crawl policy
//
// #[serde(default)] means a config file may specify any subset of fields;
// everything else keeps the value from CrawlConfig::default()
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Hosts are in scope when they equal, or end with "." + one of these
    pub allowed_host_suffixes: Vec<String>,
    /// Hosts in scope only below a given path prefix
    pub path_exceptions: Vec<HostPathException>,
    /// Root domain used for the per-subdomain page counts in the report
    pub root_domain: String,
    /// Path extensions that are rejected outright
    pub disallowed_extensions: Vec<String>,
    /// Path/query substrings that mark URL traps
    pub trap_patterns: Vec<String>,
    /// URL substrings that mark dead or error pages
    pub dead_page_markers: Vec<String>,
    /// Words excluded from frequency statistics
    pub stop_words: HashSet<String>,
    /// Pages with fewer tokens than this are not informative enough to index
    pub min_informative_tokens: usize,
    /// Pages with more tokens than this are degenerate and skipped
    pub max_informative_tokens: usize,
    /// Pause between consecutive fetches by one worker, in milliseconds
    pub politeness_delay_ms: u64,
    /// Number of concurrent worker tasks
    pub worker_count: usize,
    /// Per-request timeout for the HTTP client, in seconds
    pub fetch_timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            allowed_host_suffixes: DEFAULT_ALLOWED_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            path_exceptions: vec![HostPathException {
                host: "today.uci.edu".to_string(),
                path_prefix: "/department/information_computer_sciences".to_string(),
            }],
            root_domain: "uci.edu".to_string(),
            disallowed_extensions: DEFAULT_DISALLOWED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            trap_patterns: DEFAULT_TRAP_PATTERNS.iter().map(|s| s.to_string()).collect(),
            dead_page_markers: DEFAULT_DEAD_PAGE_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            min_informative_tokens: 50,
            max_informative_tokens: 100_000,
            politeness_delay_ms: 500,
            worker_count: 4,
            fetch_timeout_secs: 10,
            user_agent: "corpus-crawler/0.1".to_string(),
        }
    }
}

impl CrawlConfig {
    // Loads the config from a JSON file, or returns the defaults
    //
    // Parameters:
    //   path: Some(file) to load overrides from, None for pure defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| anyhow!("Cannot read config file '{}': {}", path.display(), e))?;
                serde_json::from_str(&raw)
                    .map_err(|e| anyhow!("Invalid config file '{}': {}", path.display(), e))
            }
            None => Ok(Self::default()),
        }
    }

    // Validates the policy before the crawl starts
    //
    // A broken policy is fatal: we refuse to start rather than crawl with
    // an empty allow-list or nonsense thresholds
    pub fn validate(&self) -> Result<()> {
        if self.allowed_host_suffixes.is_empty() && self.path_exceptions.is_empty() {
            bail!("configuration error: the host allow-list is empty, nothing would be crawled");
        }
        if self.worker_count == 0 {
            bail!("configuration error: worker_count must be at least 1");
        }
        if self.min_informative_tokens > self.max_informative_tokens {
            bail!(
                "configuration error: min_informative_tokens ({}) exceeds max_informative_tokens ({})",
                self.min_informative_tokens,
                self.max_informative_tokens
            );
        }
        Ok(())
    }

    /// The politeness delay as a Duration, ready for tokio::time::sleep
    pub fn politeness_delay(&self) -> Duration {
        Duration::from_millis(self.politeness_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CrawlConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_allow_list_is_rejected() {
        let config = CrawlConfig {
            allowed_host_suffixes: Vec::new(),
            path_exceptions: Vec::new(),
            ..CrawlConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        let config = CrawlConfig {
            worker_count: 0,
            ..CrawlConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_thresholds_are_rejected() {
        let config = CrawlConfig {
            min_informative_tokens: 1000,
            max_informative_tokens: 100,
            ..CrawlConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_file_keeps_defaults() {
        // A config file only needs the fields it wants to change
        let config: CrawlConfig =
            serde_json::from_str(r#"{"worker_count": 8, "politeness_delay_ms": 250}"#).unwrap();
        assert_eq!(config.worker_count, 8);
        assert_eq!(config.politeness_delay_ms, 250);
        assert_eq!(config.root_domain, "uci.edu");
        assert!(config.stop_words.contains("the"));
    }
}
