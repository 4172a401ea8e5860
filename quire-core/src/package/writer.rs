//! Writers serializing a file list to a directory tree or a ZIP container

use crate::error::Result;
use crate::types::FileEntry;
use futures::future::join_all;
use std::io::{Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Write every entry below `root`, creating folders as needed.
///
/// Writes are issued concurrently and are not transactional: when one fails
/// its siblings may already be on disk. The first error is returned once all
/// writes have settled.
pub async fn write_directory(files: &[FileEntry], root: &Path) -> Result<()> {
    tokio::fs::create_dir_all(root).await?;

    let writes = files.iter().map(|file| async move {
        let path = file.path_in(root);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &file.content).await?;
        tracing::debug!("Wrote {}", path.display());
        Ok::<_, std::io::Error>(())
    });

    for result in join_all(writes).await {
        result?;
    }
    Ok(())
}

/// Append every entry, in order, to a ZIP container.
///
/// Entries flagged `compress == false` are stored; everything else is
/// deflated. The archive is finalized only after the last entry is written,
/// and the underlying writer is handed back.
pub fn write_archive<W: Write + Seek>(files: &[FileEntry], writer: W) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let stored = FileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        let options = if file.compress { deflated } else { stored };
        zip.start_file(file.path(), options)?;
        zip.write_all(&file.content)?;
    }

    Ok(zip.finish()?)
}
