//! Caller-supplied result limits.

/// Largest number of rows a single listing request may ask for.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Resolves a requested `?limit=` against its default, bounded to `1..=MAX_PAGE_SIZE`.
pub fn page_size(requested: Option<u64>, default: u64) -> u64 {
    requested.unwrap_or(default).clamp(1, MAX_PAGE_SIZE)
}
