//! Document export: media resolution, assembly, rendering.
//!
//! Converts heterogeneous note content into a single normalized,
//! print-ready document with media references resolved to disk paths.

mod document;
mod media;
pub mod template;

pub use document::{
    ExportDocument, ExportError, ExportItem, ExportResult, assemble_free, assemble_structured,
};
pub use media::MediaResolver;
pub use template::{DEFAULT_FREE_TEMPLATE, DEFAULT_STRUCTURED_TEMPLATE, render_document};
