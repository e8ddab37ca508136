//! Listing pagination defaults and clamp helpers.

/// Default number of articles per listing page.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum number of articles per listing page.
pub const MAX_LIST_LIMIT: i64 = 200;

/// Clamp a requested limit into `1..=max`, falling back to `default`.
pub fn clamp_limit(requested: Option<i64>, default: i64, max: i64) -> i64 {
    match requested {
        Some(l) if l >= 1 => l.min(max),
        _ => default,
    }
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_offset(requested: Option<i64>) -> i64 {
    requested.unwrap_or(0).max(0)
}
