//! Slug derivation for posts and pages.
//!
//! A slug is the URL-safe unique identifier of a content row. When the editor
//! submits a post without an explicit slug, one is derived from the title.

/// Derive a URL slug from a title.
///
/// Lowercases, drops every character that is not alphanumeric, `_`, or
/// whitespace, then replaces each run of whitespace with a single hyphen.
/// Leading and trailing hyphens are trimmed so consecutive or surrounding
/// whitespace never produces dangling separators.
///
/// # Examples
///
/// ```
/// use inkpot_core::slug::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Rust   in Production  "), "rust-in-production");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_whitespace() {
            if !slug.is_empty() {
                pending_hyphen = true;
            }
            continue;
        }
        if ch.is_alphanumeric() || ch == '_' || ch == '-' {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        }
    }

    slug.trim_matches('-').to_string()
}

/// Derive a default page title from a slug.
///
/// Splits on hyphens and capitalizes the first letter of each word, so
/// `"privacy-policy"` becomes `"Privacy Policy"`. Used when a page is created
/// on demand for a slug that has no row yet.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
