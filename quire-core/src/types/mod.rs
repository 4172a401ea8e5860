//! Core types for the Quire document model

mod document;
mod file;
mod metadata;
mod section;
mod toc;

pub use document::{ContentsGenerator, Document, CONTENTS_FILENAME, DEFAULT_CONTENTS_TITLE};
pub use file::FileEntry;
pub use metadata::Metadata;
pub use section::Section;
pub use toc::{TocEntry, TocItemKind};
