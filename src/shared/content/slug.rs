// src/shared/content/slug.rs

/// Lowercase, alphanumeric runs joined by single hyphens, no leading or
/// trailing hyphen. Deterministic: the same input always yields the same slug.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for ch in input.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Slug selection on create: an explicitly supplied slug is normalized,
/// an absent or blank one falls back to the title-like field.
pub fn derive_slug(explicit: Option<&str>, fallback: &str) -> String {
    match explicit {
        Some(s) if !s.trim().is_empty() => slugify(s),
        _ => slugify(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Test Technology"), "test-technology");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("Rust  &  Actix -- Web"), "rust-actix-web");
    }

    #[test]
    fn slugify_trims_edge_separators() {
        assert_eq!(slugify("  --Hello World--  "), "hello-world");
    }

    #[test]
    fn slugify_keeps_digits() {
        assert_eq!(slugify("Project 2026 v2"), "project-2026-v2");
    }

    #[test]
    fn derive_slug_prefers_explicit_value() {
        assert_eq!(derive_slug(Some("My Slug"), "Ignored Title"), "my-slug");
    }

    #[test]
    fn derive_slug_falls_back_on_blank() {
        assert_eq!(derive_slug(Some("   "), "Test Technology"), "test-technology");
        assert_eq!(derive_slug(None, "Test Technology"), "test-technology");
    }

    #[test]
    fn derive_slug_is_deterministic() {
        assert_eq!(
            derive_slug(None, "Test Technology"),
            derive_slug(None, "Test Technology")
        );
    }
}
