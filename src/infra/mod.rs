//! Slug generation

mod slug;

pub use slug::{dedupe_slug, slugify};
