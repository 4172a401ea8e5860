//! The Document type - the root of the model

use super::{Metadata, Section, TocEntry, TocItemKind};
use crate::error::ValidationError;
use std::fmt;
use std::sync::Arc;

/// Filename of the generated contents page
pub const CONTENTS_FILENAME: &str = "toc.xhtml";

/// Heading used for the contents page when the metadata names none
pub const DEFAULT_CONTENTS_TITLE: &str = "Contents";

/// Caller-supplied generator for the contents page body.
///
/// Receives the TOC entries in reading order and returns XHTML markup that
/// replaces the default listing.
pub type ContentsGenerator = Arc<dyn Fn(&[TocEntry]) -> String + Send + Sync>;

/// One e-book, ready to be packaged.
///
/// A document is validated once on construction and then only grows through
/// [`Document::add_section`] and [`Document::add_css`].
#[derive(Clone)]
pub struct Document {
    metadata: Metadata,
    cover_image: String,
    css: String,
    sections: Vec<Section>,
    contents_generator: Option<ContentsGenerator>,
}

impl Document {
    /// Create a document from validated metadata and a cover image path
    pub fn new(metadata: Metadata, cover_image: impl Into<String>) -> Result<Self, ValidationError> {
        Self::from_parts(Some(metadata), Some(cover_image.into()))
    }

    /// Create a document from parts that may be absent.
    ///
    /// Only the presence of the cover image is checked; an empty path is
    /// accepted here and fails later when the image is read.
    pub fn from_parts(
        metadata: Option<Metadata>,
        cover_image: Option<String>,
    ) -> Result<Self, ValidationError> {
        let metadata = metadata.ok_or(ValidationError::MissingMetadata)?;
        metadata.validate()?;
        let cover_image = cover_image.ok_or(ValidationError::MissingCoverImage)?;

        Ok(Self {
            metadata,
            cover_image,
            css: String::new(),
            sections: Vec::new(),
            contents_generator: None,
        })
    }

    /// Install a generator for the contents page body
    pub fn with_contents_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn(&[TocEntry]) -> String + Send + Sync + 'static,
    {
        self.contents_generator = Some(Arc::new(generator));
        self
    }

    /// Append a section. Its position decides its filename (`s1.xhtml`, ...).
    pub fn add_section(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        exclude_from_contents: bool,
        is_front_matter: bool,
    ) {
        self.sections.push(
            Section::new(title, content)
                .excluded_from_contents(exclude_from_contents)
                .front_matter(is_front_matter),
        );
    }

    /// Append a regular chapter
    pub fn add_chapter(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.add_section(title, content, false, false);
    }

    /// Set the stylesheet shared by all sections, replacing any previous one
    pub fn add_css(&mut self, content: impl Into<String>) {
        self.css = content.into();
    }

    /// Number of sections added so far
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    /// Path of the cover image
    pub fn cover_image(&self) -> &str {
        &self.cover_image
    }

    /// Additional image paths from the metadata
    pub fn image_references(&self) -> &[String] {
        &self.metadata.images
    }

    pub fn contents_generator(&self) -> Option<&ContentsGenerator> {
        self.contents_generator.as_ref()
    }

    /// Heading of the contents page
    pub fn contents_title(&self) -> &str {
        self.metadata
            .contents
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CONTENTS_TITLE)
    }

    /// Sections in reading order, paired with their 1-based position.
    ///
    /// Front matter comes first; the contents page sits between the two
    /// groups. Section filenames keep following append order.
    pub fn reading_order(&self) -> (Vec<(usize, &Section)>, Vec<(usize, &Section)>) {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, s)| (i + 1, s))
            .partition(|(_, s)| s.is_front_matter)
    }

    /// Entries listed on the contents page and in the navigation map
    pub fn toc_entries(&self) -> Vec<TocEntry> {
        let (front, main) = self.reading_order();
        let entry = |(position, section): (usize, &Section), kind| {
            TocEntry::new(section.title.clone(), Section::filename(position), kind)
        };

        let mut entries: Vec<TocEntry> = front
            .into_iter()
            .filter(|(_, s)| !s.exclude_from_contents)
            .map(|item| entry(item, TocItemKind::FrontMatter))
            .collect();
        entries.push(TocEntry::new(
            self.contents_title(),
            CONTENTS_FILENAME,
            TocItemKind::Contents,
        ));
        entries.extend(
            main.into_iter()
                .filter(|(_, s)| !s.exclude_from_contents)
                .map(|item| entry(item, TocItemKind::Main)),
        );
        entries
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("metadata", &self.metadata)
            .field("cover_image", &self.cover_image)
            .field("css", &self.css)
            .field("sections", &self.sections)
            .field("contents_generator", &self.contents_generator.is_some())
            .finish()
    }
}
