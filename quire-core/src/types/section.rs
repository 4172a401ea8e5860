//! Section type representing a single chapter/section of a book

use serde::{Deserialize, Serialize};

/// A single section of a book (usually a chapter)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    /// Section title
    pub title: String,

    /// XHTML body markup
    pub content: String,

    /// Leave this section out of the contents page and navigation map
    #[serde(default)]
    pub exclude_from_contents: bool,

    /// Read this section before the contents page
    #[serde(default)]
    pub is_front_matter: bool,
}

impl Section {
    /// Create a new section with a title and body
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            exclude_from_contents: false,
            is_front_matter: false,
        }
    }

    /// Exclude the section from the contents listing
    pub fn excluded_from_contents(mut self, exclude: bool) -> Self {
        self.exclude_from_contents = exclude;
        self
    }

    /// Mark the section as front matter
    pub fn front_matter(mut self, is_front_matter: bool) -> Self {
        self.is_front_matter = is_front_matter;
        self
    }

    /// Package filename for the section at 1-based `position`
    pub fn filename(position: usize) -> String {
        format!("s{}.xhtml", position)
    }
}
