//! Book manifest: the JSON file describing a book to package
//!
//! ```json
//! {
//!   "metadata": { "id": "urn:isbn:123", "title": "T", "author": "A", "genre": "G" },
//!   "cover": "images/cover.png",
//!   "css": "style.css",
//!   "sections": [
//!     { "title": "Title Page", "html": "<h1>T</h1>", "excludeFromContents": true, "isFrontMatter": true },
//!     { "title": "Chapter 1", "file": "chapters/01.html" }
//!   ]
//! }
//! ```
//!
//! Relative paths are resolved against the folder holding the manifest.

use anyhow::{bail, Context, Result};
use quire_core::{Document, Metadata};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookManifest {
    pub metadata: Option<Metadata>,
    pub cover: Option<String>,
    pub css: Option<PathBuf>,
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSpec {
    pub title: String,
    pub html: Option<String>,
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub exclude_from_contents: bool,
    #[serde(default)]
    pub is_front_matter: bool,
}

/// A manifest turned into a document
pub struct LoadedBook {
    pub document: Document,
    /// Folder relative asset paths are resolved against
    pub base_dir: PathBuf,
}

/// Parse a manifest file without building the document
pub fn read_manifest(path: &Path) -> Result<BookManifest> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse manifest: {}", path.display()))
}

/// Load a manifest and build its document
pub fn load(path: &Path) -> Result<LoadedBook> {
    let manifest = read_manifest(path)?;
    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let mut document = Document::from_parts(manifest.metadata, manifest.cover)
        .with_context(|| format!("Invalid book in {}", path.display()))?;

    if let Some(css) = &manifest.css {
        let css_path = base_dir.join(css);
        let content = fs::read_to_string(&css_path)
            .with_context(|| format!("Failed to read stylesheet: {}", css_path.display()))?;
        document.add_css(content);
    }

    for (i, section) in manifest.sections.into_iter().enumerate() {
        let content = match (section.html, &section.file) {
            (Some(html), None) => html,
            (None, Some(file)) => {
                let file_path = base_dir.join(file);
                fs::read_to_string(&file_path).with_context(|| {
                    format!("Failed to read section {}: {}", i + 1, file_path.display())
                })?
            }
            (Some(_), Some(_)) => bail!(
                "Section {} ('{}') sets both \"html\" and \"file\"",
                i + 1,
                section.title
            ),
            (None, None) => String::new(),
        };
        document.add_section(
            section.title,
            content,
            section.exclude_from_contents,
            section.is_front_matter,
        );
    }

    tracing::debug!(
        "Loaded '{}' with {} sections from {}",
        document.metadata().title,
        document.section_count(),
        path.display()
    );

    Ok(LoadedBook { document, base_dir })
}

/// Default output name: the manifest's file stem
pub fn default_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("book")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_resolves_relative_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "style.css", "p { margin: 0; }");
        write(dir.path(), "chapters/01.html", "<p>One</p>");
        let manifest = write(
            dir.path(),
            "book.json",
            r#"{
                "metadata": { "id": "urn:1", "title": "T", "author": "A", "genre": "G" },
                "cover": "cover.png",
                "css": "style.css",
                "sections": [
                    { "title": "Title", "html": "<h1>T</h1>", "isFrontMatter": true },
                    { "title": "Chapter 1", "file": "chapters/01.html" }
                ]
            }"#,
        );

        let book = load(&manifest).unwrap();
        assert_eq!(book.base_dir, dir.path());
        assert_eq!(book.document.css(), "p { margin: 0; }");
        assert_eq!(book.document.section_count(), 2);
        assert!(book.document.sections()[0].is_front_matter);
        assert_eq!(book.document.sections()[1].content, "<p>One</p>");
    }

    #[test]
    fn test_load_reports_missing_cover() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write(
            dir.path(),
            "book.json",
            r#"{ "metadata": { "id": "urn:1", "title": "T", "author": "A", "genre": "G" } }"#,
        );
        let err = load(&manifest).err().unwrap();
        assert!(format!("{:#}", err).contains("Missing cover image"));
    }

    #[test]
    fn test_default_name() {
        assert_eq!(default_name(Path::new("books/hollow-road.json")), "hollow-road");
    }
}
