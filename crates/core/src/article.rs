//! Article validation and title normalization.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the API/repository layer and any future CLI tooling.

use crate::error::CoreError;

/// Maximum article title length in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum article content length in characters.
pub const MAX_CONTENT_LEN: usize = 100_000;

/// Maximum number of tags per article.
pub const MAX_TAGS: usize = 20;

/// Maximum length of a single tag.
pub const MAX_TAG_LEN: usize = 50;

// ---------------------------------------------------------------------------
// Title matching
// ---------------------------------------------------------------------------

/// Normalize a title for case-insensitive, whitespace-trimmed comparison.
///
/// Wiki-link resolution matches titles through this normal form on both the
/// query side and the stored side.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Check whether two titles refer to the same article name.
pub fn titles_match(a: &str, b: &str) -> bool {
    normalize_title(a) == normalize_title(b)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an article title (non-empty, <= 200 chars).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate article content (non-empty, <= 100 000 chars).
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.is_empty() {
        return Err(CoreError::Validation("Content must not be empty".into()));
    }
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(CoreError::Validation(format!(
            "Content must be at most {MAX_CONTENT_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate article tags (each non-empty, <= 50 chars, max 20 tags).
pub fn validate_tags(tags: &[String]) -> Result<(), CoreError> {
    if tags.len() > MAX_TAGS {
        return Err(CoreError::Validation(format!(
            "A maximum of {MAX_TAGS} tags is allowed"
        )));
    }
    for tag in tags {
        if tag.trim().is_empty() {
            return Err(CoreError::Validation("Tags must not be empty".into()));
        }
        if tag.chars().count() > MAX_TAG_LEN {
            return Err(CoreError::Validation(format!(
                "Each tag must be at most {MAX_TAG_LEN} characters"
            )));
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

    // -- normalize_title -----------------------------------------------------

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_title("  Getting Started  "), "getting started");
    }

    #[test]
    fn titles_match_ignores_case_and_whitespace() {
        assert!(titles_match("Existing Article", "  existing article  "));
        assert!(!titles_match("Existing Article", "Other Article"));
    }

    // -- validate_title ------------------------------------------------------

    #[test]
    fn title_valid() {
        assert!(validate_title("My Article").is_ok());
    }

    #[test]
    fn title_empty_rejected() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn title_too_long_rejected() {
        let long = "a".repeat(201);
        assert!(validate_title(&long).is_err());
        let at_limit = "a".repeat(200);
        assert!(validate_title(&at_limit).is_ok());
    }

    // -- validate_content ----------------------------------------------------

    #[test]
    fn content_valid() {
        assert!(validate_content("Hello world").is_ok());
    }

    #[test]
    fn content_empty_rejected() {
        assert!(validate_content("").is_err());
    }

    #[test]
    fn content_too_long_rejected() {
        let long = "x".repeat(100_001);
        assert!(validate_content(&long).is_err());
    }

    // -- validate_tags -------------------------------------------------------

    #[test]
    fn tags_valid() {
        let tags = vec!["rust".to_string(), "wiki".to_string()];
        assert!(validate_tags(&tags).is_ok());
    }

    #[test]
    fn tags_too_many_rejected() {
        let tags: Vec<String> = (0..21).map(|i| format!("tag-{i}")).collect();
        assert!(validate_tags(&tags).is_err());
    }

    #[test]
    fn tags_empty_string_rejected() {
        let tags = vec!["".to_string()];
        assert!(validate_tags(&tags).is_err());
    }
}
