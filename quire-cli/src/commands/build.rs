//! Build command implementation

use crate::manifest;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use quire_core::{LocalAssets, Packager};
use std::path::Path;
use std::time::Duration;

/// Options for a single build
pub struct BuildArgs<'a> {
    pub manifest: &'a str,
    pub output: &'a str,
    pub name: Option<&'a str>,
    pub unpacked: bool,
    pub modified: Option<NaiveDate>,
}

/// Package the book described by a manifest
pub async fn build(args: BuildArgs<'_>) -> Result<()> {
    let manifest_path = Path::new(args.manifest);
    let output_path = Path::new(args.output);

    // Set up progress bar with animation
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Reading manifest...");
    let book = manifest::load(manifest_path)?;

    let mut packager = Packager::new().with_assets(LocalAssets::with_root(&book.base_dir));
    if let Some(modified) = args.modified {
        packager = packager.with_modified(modified);
    }

    tracing::info!(
        "Packaging '{}' with {} sections",
        book.document.metadata().title,
        book.document.section_count()
    );

    if args.unpacked {
        pb.set_message("Writing files...");
        packager
            .write_directory(&book.document, output_path)
            .await
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

        pb.finish_with_message(format!(
            "Wrote '{}' -> {}",
            book.document.metadata().title,
            output_path.display()
        ));
    } else {
        let name = args
            .name
            .map(str::to_string)
            .unwrap_or_else(|| manifest::default_name(manifest_path));

        pb.set_message("Writing EPUB...");
        let path = packager
            .write_epub(&book.document, output_path, &name)
            .await
            .with_context(|| format!("Failed to write {}.epub", name))?;

        pb.finish_with_message(format!(
            "Packaged '{}' -> {}",
            book.document.metadata().title,
            path.display()
        ));
    }

    Ok(())
}
