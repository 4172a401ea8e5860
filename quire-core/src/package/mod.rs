//! Packaging: turning a [`Document`] into files, a folder, or an EPUB
//!
//! [`Packager`] carries the collaborators used during generation: the
//! template renderer, the asset source images are read from, and the
//! modification date stamped into the package. The convenience methods on
//! [`Document`] use [`Packager::default`].

mod builder;
pub mod layout;
mod writer;

pub use builder::{build_file_list, image_entries, text_entries};
pub use writer::{write_archive, write_directory};

use crate::error::{QuireError, Result};
use crate::storage::{AssetSource, LocalAssets};
use crate::template::{Epub2Templates, TemplateRenderer};
use crate::types::{Document, FileEntry};
use chrono::{NaiveDate, Utc};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Generates package files for documents
#[derive(Clone)]
pub struct Packager {
    renderer: Arc<dyn TemplateRenderer>,
    assets: Arc<dyn AssetSource>,
    modified: Option<NaiveDate>,
}

impl Packager {
    /// EPUB 2 templates, images read from the local filesystem, stamped
    /// with the current date
    pub fn new() -> Self {
        Self {
            renderer: Arc::new(Epub2Templates::new()),
            assets: Arc::new(LocalAssets::new()),
            modified: None,
        }
    }

    /// Use a different template renderer
    pub fn with_renderer(mut self, renderer: impl TemplateRenderer + 'static) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    /// Read images from a different source
    pub fn with_assets(mut self, assets: impl AssetSource + 'static) -> Self {
        self.assets = Arc::new(assets);
        self
    }

    /// Share an existing asset source
    pub fn with_shared_assets(mut self, assets: Arc<dyn AssetSource>) -> Self {
        self.assets = assets;
        self
    }

    /// Pin the modification date written to the package
    pub fn with_modified(mut self, modified: NaiveDate) -> Self {
        self.modified = Some(modified);
        self
    }

    /// Modification date used for the next generation
    pub fn modified(&self) -> NaiveDate {
        self.modified.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Build the ordered file list of a document
    pub async fn files(&self, doc: &Document) -> Result<Vec<FileEntry>> {
        build_file_list(
            doc,
            self.renderer.as_ref(),
            self.assets.as_ref(),
            self.modified(),
        )
        .await
    }

    /// Write the unpacked package below `folder`
    pub async fn write_directory(&self, doc: &Document, folder: impl AsRef<Path>) -> Result<()> {
        let folder = folder.as_ref();
        let files = self.files(doc).await?;
        write_directory(&files, folder).await?;
        tracing::info!(
            "Wrote {} files for '{}' to {}",
            files.len(),
            doc.metadata().title,
            folder.display()
        );
        Ok(())
    }

    /// Write `folder/filename.epub`. `filename` has no extension.
    ///
    /// The file list is built before anything is written, so a failed image
    /// read leaves no output file behind. Returns the path of the archive.
    pub async fn write_epub(
        &self,
        doc: &Document,
        folder: impl AsRef<Path>,
        filename: &str,
    ) -> Result<PathBuf> {
        let files = self.files(doc).await?;

        let folder = folder.as_ref();
        tokio::fs::create_dir_all(folder).await?;
        let path = folder.join(format!("{}.{}", filename, layout::EPUB_EXTENSION));

        let target = path.clone();
        tokio::task::spawn_blocking(move || write_epub_file(&files, &target))
            .await
            .map_err(|e| QuireError::Task(e.to_string()))??;

        tracing::info!("Wrote '{}' to {}", doc.metadata().title, path.display());
        Ok(path)
    }

    /// Hook-style [`Packager::write_epub`]: exactly one of the hooks runs
    pub async fn write_epub_with_hooks<E, S>(
        &self,
        doc: &Document,
        folder: impl AsRef<Path>,
        filename: &str,
        on_error: E,
        on_success: S,
    ) where
        E: FnOnce(QuireError),
        S: FnOnce(),
    {
        match self.write_epub(doc, folder, filename).await {
            Ok(_) => on_success(),
            Err(e) => on_error(e),
        }
    }
}

impl Default for Packager {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the archive and flush it to disk, removing the file on failure
fn write_epub_file(files: &[FileEntry], path: &Path) -> Result<()> {
    let result = File::create(path)
        .map_err(QuireError::from)
        .and_then(|file| write_archive(files, BufWriter::new(file)))
        .and_then(|mut out| {
            out.flush()?;
            out.get_ref().sync_all()?;
            Ok(())
        });

    if result.is_err() {
        let _ = std::fs::remove_file(path);
    }
    result
}

impl Document {
    /// Files of the package, in archive order
    pub async fn files(&self) -> Result<Vec<FileEntry>> {
        Packager::default().files(self).await
    }

    /// Write the unpacked package below `folder`
    pub async fn write_to_directory(&self, folder: impl AsRef<Path>) -> Result<()> {
        Packager::default().write_directory(self, folder).await
    }

    /// Write `folder/filename.epub`
    pub async fn write_epub(&self, folder: impl AsRef<Path>, filename: &str) -> Result<PathBuf> {
        Packager::default().write_epub(self, folder, filename).await
    }
}
