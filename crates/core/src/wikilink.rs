//! Wiki-link extraction and resolve-batch validation.
//!
//! Articles reference each other with `[[Title]]` markers embedded in their
//! markdown content. This module pulls the distinct target titles out of raw
//! content and validates resolve-request batches before any storage access.

use std::sync::OnceLock;

use regex::Regex;

use crate::article::normalize_title;
use crate::error::CoreError;

/// Maximum number of titles accepted by a single resolve request.
pub const MAX_RESOLVE_BATCH: usize = 50;

/// Matcher for `[[Title]]`. Unclosed brackets simply do not match, and a
/// marker never spans a line break, matching how the renderer treats text.
fn wikilink_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\[([^\]\n]+)\]\]").expect("wikilink regex is valid"))
}

/// Extract the distinct wiki-link target titles from markdown content.
///
/// Titles are trimmed of surrounding whitespace and deduplicated
/// case-insensitively; the first-seen spelling is kept. Content without any
/// markers yields an empty vec.
pub fn extract_titles(content: &str) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for cap in wikilink_regex().captures_iter(content) {
        let title = cap[1].trim();
        if title.is_empty() {
            continue;
        }
        let normalized = normalize_title(title);
        if !seen.contains(&normalized) {
            seen.push(normalized);
            titles.push(title.to_string());
        }
    }

    titles
}

/// Validate a resolve-request batch (each title non-empty, at most
/// [`MAX_RESOLVE_BATCH`] entries).
///
/// An empty batch is valid; the resolver returns an empty mapping for it
/// without querying storage.
pub fn validate_resolve_batch(titles: &[String]) -> Result<(), CoreError> {
    if titles.len() > MAX_RESOLVE_BATCH {
        return Err(CoreError::Validation(format!(
            "At most {MAX_RESOLVE_BATCH} titles may be resolved per request"
        )));
    }
    for title in titles {
        if title.trim().is_empty() {
            return Err(CoreError::Validation(
                "Titles must not be empty".into(),
            ));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- extract_titles ------------------------------------------------------

    #[test]
    fn no_markers_yields_empty() {
        assert!(extract_titles("Plain markdown with a [link](http://x).").is_empty());
        assert!(extract_titles("").is_empty());
    }

    #[test]
    fn single_marker() {
        let titles = extract_titles("See [[Getting Started]] for details.");
        assert_eq!(titles, vec!["Getting Started"]);
    }

    #[test]
    fn markers_are_trimmed() {
        let titles = extract_titles("See [[  Getting Started  ]].");
        assert_eq!(titles, vec!["Getting Started"]);
    }

    #[test]
    fn duplicates_collapse_case_insensitively() {
        let titles = extract_titles("[[Home]] then [[home]] then [[ HOME ]]");
        assert_eq!(titles, vec!["Home"]);
    }

    #[test]
    fn multiple_distinct_titles() {
        let titles = extract_titles("[[Alpha]] links to [[Beta]] and back to [[Alpha]].");
        assert_eq!(titles, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn unclosed_brackets_ignored() {
        assert!(extract_titles("broken [[marker without close").is_empty());
        let titles = extract_titles("broken [[one then [[Two]]");
        assert_eq!(titles, vec!["one then [[Two"]);
    }

    #[test]
    fn empty_marker_ignored() {
        assert!(extract_titles("[[   ]]").is_empty());
    }

    #[test]
    fn marker_spanning_lines_ignored() {
        assert!(extract_titles("[[Some\nTitle]]").is_empty());
        let titles = extract_titles("[[broken\nstart]] but [[Whole]] works");
        assert_eq!(titles, vec!["Whole"]);
    }

    // -- validate_resolve_batch ----------------------------------------------

    #[test]
    fn empty_batch_is_valid() {
        assert!(validate_resolve_batch(&[]).is_ok());
    }

    #[test]
    fn batch_of_fifty_accepted() {
        let titles: Vec<String> = (0..50).map(|i| format!("Title {i}")).collect();
        assert!(validate_resolve_batch(&titles).is_ok());
    }

    #[test]
    fn batch_of_fifty_one_rejected() {
        let titles: Vec<String> = (0..51).map(|i| format!("Title {i}")).collect();
        assert!(validate_resolve_batch(&titles).is_err());
    }

    #[test]
    fn empty_title_rejected() {
        let titles = vec!["Valid".to_string(), "   ".to_string()];
        assert!(validate_resolve_batch(&titles).is_err());
    }
}
