//! Slug derivation for category names.

/// Converts a category name to a URL-friendly slug.
///
/// - Converts to lowercase
/// - Keeps only ASCII alphanumeric characters
/// - Maps each run of other characters to a single hyphen
/// - Trims leading/trailing hyphens
/// - Returns "untitled" for empty results
///
/// # Examples
///
/// ```
/// use jot::infra::slugify;
///
/// assert_eq!(slugify("Side Projects"), "side-projects");
/// assert_eq!(slugify("Work / Clients"), "work-clients");
/// assert_eq!(slugify(""), "untitled");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            // Runs of punctuation and whitespace collapse to one hyphen
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        return "untitled".to_string();
    }
    slug
}

/// Resolves a slug collision by appending `-1`, `-2`, ... until `taken`
/// reports the candidate free.
///
/// The base slug itself is tried first, so callers renaming a record should
/// exclude that record's own slug from `taken` to keep it stable.
///
/// # Examples
///
/// ```
/// use jot::infra::dedupe_slug;
///
/// assert_eq!(dedupe_slug("work", |_| false), "work");
/// assert_eq!(dedupe_slug("work", |s| s == "work"), "work-1");
/// ```
pub fn dedupe_slug<F>(base: &str, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    if !taken(base) {
        return base.to_string();
    }

    let mut n = 1u64;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugify_converts_to_lowercase() {
        assert_eq!(slugify("Work"), "work");
        assert_eq!(slugify("SIDE PROJECTS"), "side-projects");
    }

    #[test]
    fn slugify_replaces_spaces_with_hyphens() {
        assert_eq!(slugify("home lab"), "home-lab");
        assert_eq!(slugify("one two three"), "one-two-three");
    }

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("Work / Clients"), "work-clients");
        assert_eq!(slugify("notes -- drafts"), "notes-drafts");
        assert_eq!(slugify("a...b"), "a-b");
    }

    #[test]
    fn slugify_trims_leading_trailing_separators() {
        assert_eq!(slugify("  padded  "), "padded");
        assert_eq!(slugify("-edge-"), "edge");
        assert_eq!(slugify("(draft)"), "draft");
    }

    #[test]
    fn slugify_preserves_numbers() {
        assert_eq!(slugify("2024 Goals"), "2024-goals");
        assert_eq!(slugify("v2.0"), "v2-0");
    }

    #[test]
    fn slugify_drops_non_ascii() {
        assert_eq!(slugify("Café"), "caf");
        assert_eq!(slugify("日本語"), "untitled");
    }

    #[test]
    fn slugify_empty_returns_untitled() {
        assert_eq!(slugify(""), "untitled");
        assert_eq!(slugify("!!!"), "untitled");
    }

    #[test]
    fn dedupe_returns_base_when_free() {
        assert_eq!(dedupe_slug("work", |_| false), "work");
    }

    #[test]
    fn dedupe_appends_numeric_suffix() {
        let taken: HashSet<&str> = ["work"].into_iter().collect();
        assert_eq!(dedupe_slug("work", |s| taken.contains(s)), "work-1");
    }

    #[test]
    fn dedupe_skips_taken_suffixes() {
        let taken: HashSet<&str> = ["work", "work-1", "work-2"].into_iter().collect();
        assert_eq!(dedupe_slug("work", |s| taken.contains(s)), "work-3");
    }
}
