//! Table of contents types

use serde::{Deserialize, Serialize};

/// Where an entry sits in reading order relative to the contents page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TocItemKind {
    /// Front matter, read before the contents page
    FrontMatter,

    /// The contents page itself
    Contents,

    /// Main body
    Main,
}

/// A single entry in the table of contents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TocEntry {
    /// Display title
    pub title: String,

    /// Target file, relative to the content folder
    pub link: String,

    /// Position in reading order
    pub kind: TocItemKind,
}

impl TocEntry {
    /// Create a new TOC entry
    pub fn new(title: impl Into<String>, link: impl Into<String>, kind: TocItemKind) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            kind,
        }
    }
}
