//! Validate command implementation

use crate::manifest;
use anyhow::{bail, Result};
use std::path::Path;

/// Check that a manifest describes a buildable book
pub fn validate(manifest_path: &str) -> Result<()> {
    match manifest::load(Path::new(manifest_path)) {
        Ok(book) => {
            let doc = &book.document;
            println!("Valid book manifest");
            println!("  Title: {}", doc.metadata().title);
            println!("  Author: {}", doc.metadata().author);
            println!("  Sections: {}", doc.section_count());
            println!("  Images: {}", doc.image_references().len() + 1);
            Ok(())
        }
        Err(e) => {
            eprintln!("Invalid book manifest: {:#}", e);
            bail!("Validation failed for {}", manifest_path);
        }
    }
}
