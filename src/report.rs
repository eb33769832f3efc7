// src/report.rs
// =============================================================================
// This module renders the final crawl report.
//
// The text artifact has four sections, in this order:
// 1. UNIQUE URLS - every distinct normalized URL, one per line
// 2. LONGEST PAGE - its URL and token count
// 3. TOP 50 WORDS - "word: count", most frequent first
// 4. SUBDOMAINS - "hostname: count", sorted by hostname
//
// All ordering decisions (top-50 ranking, subdomain sort) are made by the
// statistics snapshot; this module only formats what it is given.
// =============================================================================

use crate::stats::CrawlReport;
use anyhow::{anyhow, Result};
use std::fmt::Write as _;
use std::path::Path;

// Renders the report as the plain-text artifact
pub fn render_report(report: &CrawlReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "UNIQUE URLS ({} total)", report.unique_count);
    for url in &report.unique_urls {
        let _ = writeln!(out, "{}", url);
    }

    let _ = writeln!(out, "\nLONGEST PAGE");
    match &report.longest_page {
        Some(page) => {
            let _ = writeln!(out, "{} ({} tokens)", page.url, page.token_count);
        }
        None => {
            let _ = writeln!(out, "(no pages processed)");
        }
    }

    let _ = writeln!(out, "\nTOP 50 WORDS");
    for word in &report.top_words {
        let _ = writeln!(out, "{}: {}", word.token, word.count);
    }

    let _ = writeln!(out, "\nSUBDOMAINS");
    for subdomain in &report.subdomains {
        let _ = writeln!(out, "{}: {}", subdomain.host, subdomain.count);
    }

    out
}

// Writes the rendered report to disk
pub fn write_report(report: &CrawlReport, path: &Path) -> Result<()> {
    std::fs::write(path, render_report(report))
        .map_err(|e| anyhow!("Failed to write report to '{}': {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{LongestPage, SubdomainCount, WordCount};

    fn sample_report() -> CrawlReport {
        CrawlReport {
            unique_count: 2,
            unique_urls: vec![
                "https://www.cs.uci.edu/a".to_string(),
                "https://www.ics.uci.edu/b".to_string(),
            ],
            longest_page: Some(LongestPage {
                url: "https://www.ics.uci.edu/b".to_string(),
                token_count: 1234,
            }),
            top_words: vec![
                WordCount {
                    token: "research".to_string(),
                    count: 40,
                },
                WordCount {
                    token: "students".to_string(),
                    count: 12,
                },
            ],
            subdomains: vec![
                SubdomainCount {
                    host: "www.cs.uci.edu".to_string(),
                    count: 1,
                },
                SubdomainCount {
                    host: "www.ics.uci.edu".to_string(),
                    count: 1,
                },
            ],
        }
    }

    #[test]
    fn test_sections_appear_in_order() {
        let text = render_report(&sample_report());
        let urls_at = text.find("UNIQUE URLS").unwrap();
        let longest_at = text.find("LONGEST PAGE").unwrap();
        let words_at = text.find("TOP 50 WORDS").unwrap();
        let subdomains_at = text.find("SUBDOMAINS").unwrap();
        assert!(urls_at < longest_at);
        assert!(longest_at < words_at);
        assert!(words_at < subdomains_at);
    }

    #[test]
    fn test_line_formats() {
        let text = render_report(&sample_report());
        assert!(text.contains("UNIQUE URLS (2 total)"));
        assert!(text.contains("https://www.ics.uci.edu/b (1234 tokens)"));
        assert!(text.contains("research: 40"));
        assert!(text.contains("www.cs.uci.edu: 1"));
    }

    #[test]
    fn test_empty_crawl_renders_placeholder() {
        let report = CrawlReport {
            unique_count: 0,
            unique_urls: Vec::new(),
            longest_page: None,
            top_words: Vec::new(),
            subdomains: Vec::new(),
        };
        let text = render_report(&report);
        assert!(text.contains("UNIQUE URLS (0 total)"));
        assert!(text.contains("(no pages processed)"));
    }
}
