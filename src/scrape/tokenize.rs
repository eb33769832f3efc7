// src/scrape/tokenize.rs
// =============================================================================
// This module turns page text into tokens for the corpus statistics.
//
// A token is a maximal run of ASCII letters and digits; every other
// character is a separator. Tokens come out lowercased, so "Hello," and
// "hello" count as the same word.
//
// Rust concepts:
// - impl Iterator: Return "some iterator" without naming the exact type
// - Closures: The |c: char| predicate passed to split
// - Lazy evaluation: Nothing is tokenized until the caller iterates
// =============================================================================

use scraper::Html;

// Tokenizes text into lowercase alphanumeric tokens
//
// Parameters:
//   text: the raw page text (already extracted from HTML)
//
// Returns: a lazy iterator of tokens, in document order
//
// Example:
//   "Hello, World! 123" -> ["hello", "world", "123"]
//
// The iterator borrows `text`, so it can be restarted by calling
// tokenize again on the same string; the sequence is deterministic
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.to_ascii_lowercase())
}

// Extracts the visible text of a parsed HTML document
//
// Text nodes are joined with single spaces, which keeps words from
// adjacent elements from running together
pub fn extract_text(doc: &Html) -> String {
    doc.root_element().text().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world_123() {
        let tokens: Vec<String> = tokenize("Hello, World! 123").collect();
        assert_eq!(tokens, vec!["hello", "world", "123"]);
    }

    #[test]
    fn test_punctuation_and_case_are_dropped() {
        let tokens: Vec<String> = tokenize("Don't STOP-me_now...").collect();
        assert_eq!(tokens, vec!["don", "t", "stop", "me", "now"]);
    }

    #[test]
    fn test_empty_and_separator_only_input() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("  ,;:!  ").count(), 0);
    }

    #[test]
    fn test_non_ascii_characters_are_separators() {
        let tokens: Vec<String> = tokenize("café naïve").collect();
        assert_eq!(tokens, vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_same_input_yields_same_sequence() {
        let text = "The quick brown fox, 42 times.";
        let first: Vec<String> = tokenize(text).collect();
        let second: Vec<String> = tokenize(text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_text_joins_elements_with_spaces() {
        let doc = Html::parse_document("<html><body><h1>Title</h1><p>Body text</p></body></html>");
        let text = extract_text(&doc);
        let tokens: Vec<String> = tokenize(&text).collect();
        assert_eq!(tokens, vec!["title", "body", "text"]);
    }
}
