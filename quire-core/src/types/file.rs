//! File entries making up a generated package

use std::path::{Path, PathBuf};

/// One file of the package: a directory entry or an archive entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name within its folder
    pub name: String,

    /// Folder relative to the package root, empty for the root itself
    pub folder: String,

    /// Whether the archive entry may be deflated
    pub compress: bool,

    /// File bytes
    pub content: Vec<u8>,
}

impl FileEntry {
    /// Create a compressed entry
    pub fn new(name: impl Into<String>, folder: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            folder: folder.into(),
            compress: true,
            content: content.into(),
        }
    }

    /// Create an entry that must be stored uncompressed
    pub fn stored(name: impl Into<String>, folder: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            compress: false,
            ..Self::new(name, folder, content)
        }
    }

    /// Archive path: `folder/name`, or just `name` at the root
    pub fn path(&self) -> String {
        if self.folder.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.folder, self.name)
        }
    }

    /// Location of this entry below `root` on disk
    pub fn path_in(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        for part in self.folder.split('/').filter(|p| !p.is_empty()) {
            path.push(part);
        }
        path.push(&self.name);
        path
    }

    /// Content as UTF-8 text, if it is valid UTF-8
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }
}
