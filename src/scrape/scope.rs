// src/scrape/scope.rs
// =============================================================================
// This module decides whether a normalized URL is in crawl scope.
//
// The rules run in order and the first failing rule wins:
// 1. Scheme must be http or https
// 2. Host must end with an allowed suffix, or match a host+path-prefix
//    exception (e.g. the announcements site below one department section)
// 3. Path must not end with a disallowed file extension
// 4. Path and query must not contain a trap pattern (session ids, login/
//    export/attachment/upload/download markers, calendar/date/sort/filter
//    markers, pagination traps)
// 5. The URL must not contain a dead-page marker (404, not-found, ...)
//
// The filter is pure: it never looks at crawl history. "Have we seen this
// URL before" is the statistics aggregator's job, not ours.
//
// Rust concepts:
// - Result<(), E>: Success carries no data, failure says which rule failed
// - Iterator adapters: any() and find() over the configured rule lists
// =============================================================================

use crate::config::CrawlConfig;
use std::fmt;
use url::Url;

// Which rule a URL failed, used by the `scope` subcommand to explain
// rejections to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeRejection {
    MalformedUrl,
    DisallowedScheme(String),
    HostNotAllowed(String),
    DisallowedExtension(String),
    TrapPattern(String),
    DeadPageMarker(String),
}

impl fmt::Display for ScopeRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeRejection::MalformedUrl => write!(f, "URL could not be parsed"),
            ScopeRejection::DisallowedScheme(scheme) => {
                write!(f, "scheme '{}' is not http or https", scheme)
            }
            ScopeRejection::HostNotAllowed(host) => {
                write!(f, "host '{}' is not on the allow-list", host)
            }
            ScopeRejection::DisallowedExtension(ext) => {
                write!(f, "path ends with disallowed extension '.{}'", ext)
            }
            ScopeRejection::TrapPattern(pattern) => {
                write!(f, "path or query contains trap pattern '{}'", pattern)
            }
            ScopeRejection::DeadPageMarker(marker) => {
                write!(f, "URL contains dead-page marker '{}'", marker)
            }
        }
    }
}

// Checks a URL against every scope rule
//
// Parameters:
//   url: a normalized absolute URL
//   config: the crawl policy
//
// Returns: Ok(()) if the URL is in scope, or the first failing rule
pub fn check_scope(url: &str, config: &CrawlConfig) -> Result<(), ScopeRejection> {
    let parsed = Url::parse(url).map_err(|_| ScopeRejection::MalformedUrl)?;

    // Rule 1: scheme
    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ScopeRejection::DisallowedScheme(scheme.to_string()));
    }

    let host = parsed.host_str().unwrap_or("").to_ascii_lowercase();
    let path = parsed.path().to_ascii_lowercase();

    // Rule 2: host allow-list, with the path-prefix exceptions
    // The "." boundary stops "ics.uci.edu" from matching hosts like
    // "statistics.uci.edu" that merely end in the same letters
    let allowed_by_suffix = config
        .allowed_host_suffixes
        .iter()
        .any(|suffix| host == *suffix || host.ends_with(&format!(".{}", suffix)));
    let allowed_by_exception = config
        .path_exceptions
        .iter()
        .any(|exception| host == exception.host && path.starts_with(&exception.path_prefix));
    if !allowed_by_suffix && !allowed_by_exception {
        return Err(ScopeRejection::HostNotAllowed(host));
    }

    // Rule 3: disallowed file extensions
    if let Some(ext) = config
        .disallowed_extensions
        .iter()
        .find(|ext| path.ends_with(&format!(".{}", ext)))
    {
        return Err(ScopeRejection::DisallowedExtension(ext.clone()));
    }

    // Rule 4: trap patterns in path or query
    let query = parsed.query().unwrap_or("").to_ascii_lowercase();
    if let Some(pattern) = config
        .trap_patterns
        .iter()
        .find(|pattern| path.contains(pattern.as_str()) || query.contains(pattern.as_str()))
    {
        return Err(ScopeRejection::TrapPattern(pattern.clone()));
    }

    // Rule 5: dead-page heuristic over the whole URL
    let full = url.to_ascii_lowercase();
    if let Some(marker) = config
        .dead_page_markers
        .iter()
        .find(|marker| full.contains(marker.as_str()))
    {
        return Err(ScopeRejection::DeadPageMarker(marker.clone()));
    }

    Ok(())
}

// Boolean convenience wrapper used by the crawl pipeline
pub fn is_in_scope(url: &str, config: &CrawlConfig) -> bool {
    check_scope(url, config).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_host() {
        let config = CrawlConfig::default();
        assert!(is_in_scope("https://www.ics.uci.edu/about", &config));
        assert!(is_in_scope("http://vision.ics.uci.edu/papers", &config));
        assert!(is_in_scope("https://www.stat.uci.edu/faculty", &config));
    }

    #[test]
    fn test_rejects_unlisted_host() {
        let config = CrawlConfig::default();
        assert_eq!(
            check_scope("https://www.example.com/about", &config),
            Err(ScopeRejection::HostNotAllowed("www.example.com".to_string()))
        );
        // The root campus domain itself is not on the allow-list
        assert!(!is_in_scope("https://www.uci.edu/", &config));
    }

    #[test]
    fn test_suffix_match_requires_dot_boundary() {
        let config = CrawlConfig::default();
        // Ends with the same letters as "ics.uci.edu" but is a different host
        assert!(!is_in_scope("https://forensics-uci.edu.evil.com/", &config));
        assert!(!is_in_scope("https://notics.uci.edu.example.org/", &config));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let config = CrawlConfig::default();
        assert_eq!(
            check_scope("ftp://www.ics.uci.edu/files", &config),
            Err(ScopeRejection::DisallowedScheme("ftp".to_string()))
        );
        assert!(!is_in_scope("mailto:chair@ics.uci.edu", &config));
    }

    #[test]
    fn test_rejects_disallowed_extension_on_any_host() {
        let config = CrawlConfig::default();
        // On an allow-listed host the extension rule is what fires
        assert_eq!(
            check_scope("https://www.ics.uci.edu/brochure.pdf", &config),
            Err(ScopeRejection::DisallowedExtension("pdf".to_string()))
        );
        // On any other host the URL is rejected as well (host rule fires first)
        assert!(!is_in_scope("https://www.example.com/brochure.pdf", &config));
        assert!(!is_in_scope("https://www.cs.uci.edu/theme/style.css", &config));
        assert!(!is_in_scope("https://www.cs.uci.edu/archive.tar.gz", &config));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let config = CrawlConfig::default();
        assert!(!is_in_scope("https://www.ics.uci.edu/Brochure.PDF", &config));
    }

    #[test]
    fn test_announcements_exception_is_scoped_to_path_prefix() {
        let config = CrawlConfig::default();
        assert!(is_in_scope(
            "https://today.uci.edu/department/information_computer_sciences/news",
            &config
        ));
        assert!(!is_in_scope("https://today.uci.edu/campus-life", &config));
    }

    #[test]
    fn test_rejects_trap_patterns() {
        let config = CrawlConfig::default();
        assert_eq!(
            check_scope("https://www.ics.uci.edu/events?date=2024-01-01", &config),
            Err(ScopeRejection::TrapPattern("date=".to_string()))
        );
        assert!(!is_in_scope("https://www.ics.uci.edu/wp/login", &config));
        assert!(!is_in_scope("https://www.cs.uci.edu/list?sort=name", &config));
        assert!(!is_in_scope("https://www.cs.uci.edu/news?page=47", &config));
    }

    #[test]
    fn test_accepts_clean_query_on_allowed_host() {
        let config = CrawlConfig::default();
        // A query string alone is fine as long as no trap marker appears
        assert!(is_in_scope("https://www.ics.uci.edu/search?q=grad", &config));
    }

    #[test]
    fn test_rejects_dead_page_markers() {
        let config = CrawlConfig::default();
        assert_eq!(
            check_scope("https://www.ics.uci.edu/404.html", &config),
            Err(ScopeRejection::DeadPageMarker("404".to_string()))
        );
        assert!(!is_in_scope("https://www.cs.uci.edu/page-not-found", &config));
    }

    #[test]
    fn test_rejects_malformed_url() {
        let config = CrawlConfig::default();
        assert_eq!(
            check_scope("://missing-scheme", &config),
            Err(ScopeRejection::MalformedUrl)
        );
    }
}
