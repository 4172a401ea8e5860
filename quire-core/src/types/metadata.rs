//! Book metadata as consumed by the package templates

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Book metadata.
///
/// `id`, `title`, `author` and `genre` are required and must be non-blank;
/// everything else is optional and renders as an empty string when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    /// Unique identifier (ISBN, URN, UUID...)
    pub id: String,

    /// Book title
    pub title: String,

    /// Author display name
    pub author: String,

    /// Primary genre, written as the first subject
    pub genre: String,

    /// Series name
    pub series: Option<String>,

    /// Position in the series
    pub sequence: Option<String>,

    /// Copyright/rights statement
    pub copyright: Option<String>,

    /// Language code (ISO 639-1)
    pub language: Option<String>,

    /// Author name in sortable form ("Surname, Forename")
    pub file_as: Option<String>,

    /// Publisher name
    pub publisher: Option<String>,

    /// Book description/summary
    pub description: Option<String>,

    /// Publication date, free form
    pub published: Option<String>,

    /// Comma separated subject tags
    pub tags: Option<String>,

    /// Heading of the contents page
    pub contents: Option<String>,

    /// Source URL or reference
    pub source: Option<String>,

    /// Paths of additional images packaged next to the cover
    pub images: Vec<String>,
}

impl Metadata {
    /// Create metadata with the four required fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            ..Self::default()
        }
    }

    /// Set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set publisher
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Set the contents page heading
    pub fn with_contents_title(mut self, contents: impl Into<String>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    /// Add an image to be packaged alongside the cover
    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.images.push(path.into());
        self
    }

    /// Check that every required field is present and non-blank.
    ///
    /// Fields are checked in the order id, title, author, genre and the
    /// first failure is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("id", &self.id),
            ("title", &self.title),
            ("author", &self.author),
            ("genre", &self.genre),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Subject tags split on commas, trimmed, blanks dropped
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}
