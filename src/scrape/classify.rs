// src/scrape/classify.rs
// =============================================================================
// This module decides whether a fetched page is worth processing.
//
// A page must clear two gates:
// - Response gate (cheap, before any parsing): status must be 200 and the
//   Content-Type header must contain text/html
// - Document gate (after parsing): no robots meta opt-out, and the token
//   count must sit inside the informative-content thresholds
//
// Pages failing either gate contribute no links and no statistics.
//
// Rust concepts:
// - Enums with data: Each reject variant carries what the caller may want
//   to log (the status code, the offending token count)
// - matches!: Concise one-line pattern check for enum variants
// =============================================================================

use crate::config::CrawlConfig;
use scraper::{Html, Selector};

// The outcome of classifying a page
//
// Accept means "index this page"; every other variant says why not
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Page is worth processing
    Accept,
    /// HTTP status was not 200
    NonOkStatus(u16),
    /// Content-Type is missing or does not contain text/html
    WrongContentType,
    /// Fewer tokens than the minimum informative threshold
    TooShort(usize),
    /// More tokens than the maximum threshold (degenerate document)
    TooLong(usize),
    /// A robots meta tag asked us not to index or follow
    NoIndexMeta,
}

impl Classification {
    /// Helper to check for the accepting variant
    pub fn is_accept(&self) -> bool {
        matches!(self, Classification::Accept)
    }
}

// Response gate: checks status code and Content-Type header
//
// Runs before the body is parsed so PDFs, images, and error responses
// never reach the HTML parser
pub fn classify_response(status: u16, content_type: Option<&str>) -> Classification {
    if status != 200 {
        return Classification::NonOkStatus(status);
    }
    let is_html = content_type
        .map(|ct| ct.to_ascii_lowercase().contains("text/html"))
        .unwrap_or(false);
    if !is_html {
        return Classification::WrongContentType;
    }
    Classification::Accept
}

// Document gate: checks the robots meta opt-out and the token thresholds
//
// Parameters:
//   has_noindex: result of has_robots_opt_out on the parsed document
//   token_count: number of tokens in the page text
pub fn classify_document(
    has_noindex: bool,
    token_count: usize,
    config: &CrawlConfig,
) -> Classification {
    if has_noindex {
        return Classification::NoIndexMeta;
    }
    if token_count < config.min_informative_tokens {
        return Classification::TooShort(token_count);
    }
    if token_count > config.max_informative_tokens {
        return Classification::TooLong(token_count);
    }
    Classification::Accept
}

// Looks for <meta name="robots"> whose content opts out of indexing
//
// Both the tag name and the directives are matched case-insensitively,
// since real pages write ROBOTS, NoIndex, etc.
pub fn has_robots_opt_out(doc: &Html) -> bool {
    // Constant selector, known valid
    let selector = Selector::parse("meta[name][content]").unwrap();
    doc.select(&selector).any(|element| {
        let meta = element.value();
        let name = meta.attr("name").unwrap_or("");
        if !name.eq_ignore_ascii_case("robots") {
            return false;
        }
        let content = meta.attr("content").unwrap_or("").to_ascii_lowercase();
        content.contains("noindex") || content.contains("nofollow")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_ok_status() {
        assert_eq!(
            classify_response(404, Some("text/html")),
            Classification::NonOkStatus(404)
        );
        assert_eq!(
            classify_response(301, Some("text/html")),
            Classification::NonOkStatus(301)
        );
    }

    #[test]
    fn test_rejects_non_html_content_type() {
        assert_eq!(
            classify_response(200, Some("application/pdf")),
            Classification::WrongContentType
        );
        assert_eq!(classify_response(200, None), Classification::WrongContentType);
    }

    #[test]
    fn test_accepts_html_with_charset_parameter() {
        assert_eq!(
            classify_response(200, Some("text/html; charset=UTF-8")),
            Classification::Accept
        );
        assert_eq!(
            classify_response(200, Some("TEXT/HTML")),
            Classification::Accept
        );
    }

    #[test]
    fn test_document_gate_thresholds() {
        let config = CrawlConfig {
            min_informative_tokens: 50,
            max_informative_tokens: 1000,
            ..CrawlConfig::default()
        };
        assert_eq!(
            classify_document(false, 10, &config),
            Classification::TooShort(10)
        );
        assert_eq!(
            classify_document(false, 5000, &config),
            Classification::TooLong(5000)
        );
        assert_eq!(classify_document(false, 500, &config), Classification::Accept);
        // Thresholds are inclusive on both ends
        assert_eq!(classify_document(false, 50, &config), Classification::Accept);
        assert_eq!(classify_document(false, 1000, &config), Classification::Accept);
    }

    #[test]
    fn test_noindex_beats_token_count() {
        let config = CrawlConfig::default();
        assert_eq!(
            classify_document(true, 500, &config),
            Classification::NoIndexMeta
        );
    }

    #[test]
    fn test_detects_robots_noindex_meta() {
        let doc = Html::parse_document(
            r#"<html><head><meta name="ROBOTS" content="NOINDEX, NOFOLLOW"></head></html>"#,
        );
        assert!(has_robots_opt_out(&doc));
    }

    #[test]
    fn test_detects_robots_nofollow_meta() {
        let doc = Html::parse_document(
            r#"<html><head><meta name="robots" content="nofollow"></head></html>"#,
        );
        assert!(has_robots_opt_out(&doc));
    }

    #[test]
    fn test_ignores_other_meta_tags() {
        let doc = Html::parse_document(
            r#"<html><head>
                <meta name="keywords" content="noindex is just a keyword here">
                <meta name="robots" content="index, follow">
            </head></html>"#,
        );
        assert!(!has_robots_opt_out(&doc));
    }

    #[test]
    fn test_no_meta_tags_at_all() {
        let doc = Html::parse_document("<html><body><p>hello</p></body></html>");
        assert!(!has_robots_opt_out(&doc));
    }
}
