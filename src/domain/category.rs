//! Category type for grouping notes.

use std::fmt;

/// A category a note may belong to (work, study, personal, ...).
///
/// The slug is derived from the name once, at creation or rename, with
/// numeric suffixes resolving collisions. Both name and slug are unique
/// across the store at all times.
///
/// Notes hold a weak reference to their category: deleting a category
/// clears the reference instead of deleting the note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: i64,
    name: String,
    slug: String,
}

impl Category {
    /// Creates a category from stored fields.
    pub fn new(id: i64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
        }
    }

    /// Returns the category's unique identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the category's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category's unique slug.
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_stored_fields() {
        let category = Category::new(3, "Side Projects", "side-projects");
        assert_eq!(category.id(), 3);
        assert_eq!(category.name(), "Side Projects");
        assert_eq!(category.slug(), "side-projects");
    }

    #[test]
    fn display_shows_name_and_slug() {
        let category = Category::new(1, "Work", "work");
        assert_eq!(category.to_string(), "Work [work]");
    }
}
