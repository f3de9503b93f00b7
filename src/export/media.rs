//! Media reference resolution for document export.
//!
//! The document renderer reads images from disk, not over HTTP, so every
//! media reference a note carries as a public URL has to be rewritten to
//! an absolute filesystem path before rendering.

use regex::{Captures, Regex};
use std::path::{Path, PathBuf};

/// Rewrites media references from public URLs to filesystem paths.
///
/// Operates on copies only; stored notes are never mutated.
pub struct MediaResolver {
    media_root: PathBuf,
    media_url: String,
}

impl MediaResolver {
    /// Creates a resolver for the given media root directory and public
    /// media URL prefix (e.g. `/media/`).
    pub fn new(media_root: impl Into<PathBuf>, media_url: impl Into<String>) -> Self {
        Self {
            media_root: media_root.into(),
            media_url: media_url.into(),
        }
    }

    /// Resolves a stored web-relative image path to an absolute path under
    /// the media root, with separators normalized to forward slashes for
    /// the renderer.
    ///
    /// # Examples
    ///
    /// ```
    /// use jot::export::MediaResolver;
    ///
    /// let media = MediaResolver::new("/data/media", "/media/");
    /// assert_eq!(media.resolve_field("pasos/img1.png"), "/data/media/pasos/img1.png");
    /// ```
    pub fn resolve_field(&self, relative: &str) -> String {
        let rel = relative.trim_start_matches('/');
        normalize_separators(&self.media_root.join(rel))
    }

    /// Rewrites every `<img>` tag whose `src` starts with the public media
    /// URL prefix to a bare `<img src="...">` pointing at the resolved
    /// filesystem path. The original attribute set of rewritten tags is
    /// dropped entirely.
    ///
    /// Everything else passes through character-for-character: tags whose
    /// `src` merely *contains* the prefix, tags without a `src`, non-image
    /// markup, and malformed fragments the tag pattern cannot recognize.
    /// This pass never fails.
    pub fn rewrite_html(&self, content: &str) -> String {
        // An unterminated "<img ..." never matches and is left as-is
        let img_re = Regex::new(r"(?is)<img\b[^>]*>").unwrap();
        let src_re = Regex::new(r#"(?is)\bsrc\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#).unwrap();

        img_re
            .replace_all(content, |caps: &Captures| {
                let tag = &caps[0];
                let src = src_re.captures(tag).and_then(|sc| {
                    sc.get(1)
                        .or_else(|| sc.get(2))
                        .or_else(|| sc.get(3))
                        .map(|m| m.as_str())
                });
                let Some(src) = src else {
                    return tag.to_string();
                };

                // Strict prefix match: a path merely containing the public
                // prefix is somebody else's URL
                match src.strip_prefix(&self.media_url) {
                    Some(rest) => format!(r#"<img src="{}">"#, self.resolve_field(rest)),
                    None => tag.to_string(),
                }
            })
            .into_owned()
    }
}

fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media() -> MediaResolver {
        MediaResolver::new("/data/media", "/media/")
    }

    // ===========================================
    // Field-level paths
    // ===========================================

    #[test]
    fn field_path_joins_under_media_root() {
        assert_eq!(
            media().resolve_field("pasos/img1.png"),
            "/data/media/pasos/img1.png"
        );
    }

    #[test]
    fn field_path_tolerates_leading_slash() {
        assert_eq!(media().resolve_field("/x.png"), "/data/media/x.png");
    }

    #[test]
    fn field_path_uses_forward_slashes() {
        let media = MediaResolver::new(r"C:\data\media", "/media/");
        let resolved = media.resolve_field("pasos/img1.png");
        assert!(!resolved.contains('\\'), "got {resolved}");
    }

    // ===========================================
    // Embedded HTML
    // ===========================================

    #[test]
    fn img_with_media_prefix_is_rewritten_and_stripped() {
        let html = r#"<p>before</p><img src="/media/x.png" alt="a"><p>after</p>"#;
        let out = media().rewrite_html(html);
        assert_eq!(
            out,
            r#"<p>before</p><img src="/data/media/x.png"><p>after</p>"#
        );
    }

    #[test]
    fn external_img_is_untouched() {
        let html = r#"<img src="https://cdn.example/x.png" alt="a">"#;
        assert_eq!(media().rewrite_html(html), html);
    }

    #[test]
    fn prefix_in_the_middle_of_a_src_is_not_a_match() {
        let html = r#"<img src="/cdn/media/x.png">"#;
        assert_eq!(media().rewrite_html(html), html);
    }

    #[test]
    fn img_without_src_is_untouched() {
        let html = r#"<img class="placeholder">"#;
        assert_eq!(media().rewrite_html(html), html);
    }

    #[test]
    fn malformed_img_is_left_alone() {
        let html = r#"<p>text</p><img src="/media/x.png"#;
        assert_eq!(media().rewrite_html(html), html);
    }

    #[test]
    fn single_quoted_and_bare_src_are_recognized() {
        assert_eq!(
            media().rewrite_html("<img src='/media/a.png'>"),
            r#"<img src="/data/media/a.png">"#
        );
        assert_eq!(
            media().rewrite_html("<img src=/media/b.png>"),
            r#"<img src="/data/media/b.png">"#
        );
    }

    #[test]
    fn multiple_imgs_rewrite_independently() {
        let html = concat!(
            r#"<img src="/media/a.png">"#,
            r#"<img src="https://cdn.example/b.png">"#,
            r#"<img src="/media/c.png" width="40">"#,
        );
        let out = media().rewrite_html(html);
        assert_eq!(
            out,
            concat!(
                r#"<img src="/data/media/a.png">"#,
                r#"<img src="https://cdn.example/b.png">"#,
                r#"<img src="/data/media/c.png">"#,
            )
        );
    }

    #[test]
    fn rewriting_is_idempotent_once_paths_are_absolute() {
        let html = r#"<img src="/media/x.png">"#;
        let once = media().rewrite_html(html);
        let twice = media().rewrite_html(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn non_image_markup_is_untouched() {
        let html = r#"<a href="/media/x.png">link</a><div data-src="/media/y.png"></div>"#;
        assert_eq!(media().rewrite_html(html), html);
    }
}
