//! Asset sources for images referenced by a document

use crate::error::StorageError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Resolves an image reference to its bytes
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Read the asset at the given path
    async fn read(&self, path: &str) -> StorageResult<Vec<u8>>;
}

/// Local filesystem asset source
///
/// Relative references are resolved against the root when one is set, and
/// against the process working directory otherwise.
#[derive(Debug, Clone, Default)]
pub struct LocalAssets {
    root: Option<PathBuf>,
}

impl LocalAssets {
    /// Read references exactly as given
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative references against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        match &self.root {
            Some(root) if Path::new(path).is_relative() => root.join(path),
            _ => PathBuf::from(path),
        }
    }
}

#[async_trait]
impl AssetSource for LocalAssets {
    async fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        let full_path = self.full_path(path);
        tokio::fs::read(&full_path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(full_path.display().to_string()),
            _ => StorageError::BackendError(e.to_string()),
        })
    }
}

/// In-memory asset source (for testing and generated images)
#[derive(Default)]
pub struct MemoryAssets {
    data: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bytes under a reference
    pub fn insert(&self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.data
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(path.into(), data.into());
    }

    /// Builder-style [`MemoryAssets::insert`]
    pub fn with(self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }
}

#[async_trait]
impl AssetSource for MemoryAssets {
    async fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        self.data
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }
}
