//! Files command implementation

use crate::manifest;
use anyhow::Result;
use quire_core::{LocalAssets, Packager};
use serde::Serialize;
use std::path::Path;

/// One package entry, as listed
#[derive(Serialize)]
struct EntryInfo {
    path: String,
    compress: bool,
    size: usize,
}

/// List the entries that would be packaged, in archive order
pub async fn files(manifest_path: &str, json: bool) -> Result<()> {
    let book = manifest::load(Path::new(manifest_path))?;
    let packager = Packager::new().with_assets(LocalAssets::with_root(&book.base_dir));

    let entries: Vec<EntryInfo> = packager
        .files(&book.document)
        .await?
        .into_iter()
        .map(|file| EntryInfo {
            path: file.path(),
            compress: file.compress,
            size: file.content.len(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            let method = if entry.compress { "deflate" } else { "store" };
            println!("{:<8} {:>9}  {}", method, entry.size, entry.path);
        }
        println!("{} entries", entries.len());
    }

    Ok(())
}
