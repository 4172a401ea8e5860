//! Quire Core Library
//!
//! This crate assembles EPUB packages from an in-memory [`Document`]:
//! metadata, ordered sections, a stylesheet and images. Package files are
//! rendered from templates, filled through `[[TAG]]` substitution, and
//! written either as a folder tree or as a single `.epub` archive.

pub mod error;
pub mod package;
pub mod storage;
pub mod tags;
pub mod template;
pub mod types;

pub use error::{QuireError, Result, StorageError, ValidationError};
pub use package::Packager;
pub use storage::{AssetSource, LocalAssets, MemoryAssets};
pub use tags::TagValues;
pub use template::{Epub2Templates, TemplateRenderer};
pub use types::{
    ContentsGenerator, Document, FileEntry, Metadata, Section, TocEntry, TocItemKind,
};
