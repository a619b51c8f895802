//! Local validation of content input and the fixed page-slug set.
//!
//! Validation here runs before any query is issued, so a missing title or
//! body never costs a round trip.

use crate::error::CoreError;

/// Slugs of the static pages seeded by migration.
pub const SEEDED_PAGE_SLUGS: &[&str] = &["terms", "privacy", "services", "faq", "resources"];

/// Slugs that may be created on demand through the editor.
pub const ON_DEMAND_PAGE_SLUGS: &[&str] = &["about", "legal"];

/// Validate input for creating a post.
///
/// Title and content are required; everything else is optional.
pub fn validate_post_input(title: &str, content: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title is required".into()));
    }
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Content is required".into()));
    }
    Ok(())
}

/// Validate input for updating a page.
pub fn validate_page_input(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Content is required".into()));
    }
    Ok(())
}

/// Validate an explicitly supplied slug.
///
/// Accepts lowercase alphanumerics, hyphens, and underscores, with no
/// leading or trailing hyphen.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(CoreError::Validation(
            "Slug must not start or end with a hyphen".into(),
        ));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}': only lowercase letters, digits, hyphens, and underscores are allowed"
        )));
    }
    Ok(())
}
