//! Document templates for export.

use std::path::Path;

use minijinja::{Environment, context};

use super::document::{ExportDocument, ExportError, ExportResult};

/// Default template for structured note documents.
pub const DEFAULT_STRUCTURED_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{{ title }}</title>
    <style>
        body { font-family: Georgia, serif; max-width: 48rem; margin: 2rem auto; color: #1a1a1a; }
        header { border-bottom: 2px solid #1a1a1a; margin-bottom: 1.5rem; }
        .generated { color: #666; font-size: 0.85rem; }
        section.step { margin-bottom: 1.5rem; page-break-inside: avoid; }
        pre { background: #f4f4f4; padding: 0.75rem; overflow-x: auto; }
        img { max-width: 100%; }
    </style>
</head>
<body>
    <article>
        <header>
            <h1>{{ title }}</h1>
            <p class="generated">Generated {{ generated_at }}</p>
        </header>
        {% for item in items %}
        <section class="step">
            {% if item.title %}
            <h2>{{ loop.index }}. {{ item.title }}</h2>
            {% else %}
            <h2>{{ loop.index }}.</h2>
            {% endif %}
            {% if item.description %}
            <p>{{ item.description }}</p>
            {% endif %}
            {% if item.code %}
            <pre><code>{{ item.code }}</code></pre>
            {% endif %}
            {% if item.image_path %}
            <img src="{{ item.image_path }}">
            {% endif %}
        </section>
        {% endfor %}
    </article>
</body>
</html>"##;

/// Default template for free-form note documents. `content` arrives as
/// already-sanitized HTML and is inserted as-is.
pub const DEFAULT_FREE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{{ title }}</title>
    <style>
        body { font-family: Georgia, serif; max-width: 48rem; margin: 2rem auto; color: #1a1a1a; }
        header { border-bottom: 2px solid #1a1a1a; margin-bottom: 1.5rem; }
        .generated { color: #666; font-size: 0.85rem; }
        img { max-width: 100%; }
    </style>
</head>
<body>
    <article>
        <header>
            <h1>{{ title }}</h1>
            <p class="generated">Generated {{ generated_at }}</p>
        </header>
        <main>{{ content }}</main>
    </article>
</body>
</html>"##;

/// Renders an export document to a print-ready HTML byte stream.
///
/// Uses the embedded default template for the document's kind unless
/// `template_path` points at a custom one. Rendering is deterministic for
/// a given document; failures surface as [`ExportError::Render`] and are
/// not retried.
pub fn render_document(
    doc: &ExportDocument,
    template_path: Option<&Path>,
) -> ExportResult<Vec<u8>> {
    let template_str = match template_path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| ExportError::Template {
            path: path.to_path_buf(),
            source: e,
        })?,
        None => match doc {
            ExportDocument::Structured { .. } => DEFAULT_STRUCTURED_TEMPLATE.to_string(),
            ExportDocument::Free { .. } => DEFAULT_FREE_TEMPLATE.to_string(),
        },
    };

    let mut env = Environment::new();
    env.add_template("document", &template_str)?;
    let tmpl = env.get_template("document")?;

    let html = match doc {
        ExportDocument::Structured {
            title,
            items,
            generated_at,
        } => tmpl.render(context! {
            title => title,
            items => items,
            generated_at => generated_at.format("%Y-%m-%d %H:%M").to_string(),
        })?,
        ExportDocument::Free {
            title,
            html,
            generated_at,
        } => tmpl.render(context! {
            title => title,
            content => html,
            generated_at => generated_at.format("%Y-%m-%d %H:%M").to_string(),
        })?,
    };

    Ok(html.into_bytes())
}
