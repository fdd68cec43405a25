//! Slug derivation
//!
//! Slugs are derived deterministically from titles: lowercased, spaces
//! replaced with hyphens. Uniqueness against an existing collection is the
//! repository's concern, not the derivation's.

/// Derive a URL-safe slug from a title.
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}
