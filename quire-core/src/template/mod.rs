//! Template renderers producing the raw text of each package artifact
//!
//! Renderers return markup that may still contain `[[TAG]]` tokens; the
//! package builder runs every artifact through [`crate::tags::TagValues`]
//! afterwards.

mod epub2;

pub use epub2::Epub2Templates;

use crate::types::Document;

/// Produces the text of every generated package file
pub trait TemplateRenderer: Send + Sync {
    /// `META-INF/container.xml`
    fn container(&self, doc: &Document) -> String;

    /// OPF package manifest
    fn package(&self, doc: &Document) -> String;

    /// NCX navigation map
    fn navigation(&self, doc: &Document) -> String;

    /// XHTML page wrapping the cover image
    fn cover(&self, doc: &Document) -> String;

    /// Stylesheet shared by all pages
    fn stylesheet(&self, doc: &Document) -> String {
        doc.css().to_string()
    }

    /// XHTML page for the section at 1-based `position`
    fn section(&self, doc: &Document, position: usize) -> String;

    /// Contents page, optionally with a body produced by the document's
    /// contents generator
    fn contents(&self, doc: &Document, generated: Option<&str>) -> String;
}

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
