//! Fixed folder and file names of the package

use std::path::Path;

/// Content of the `mimetype` entry
pub const MIMETYPE: &str = "application/epub+zip";
pub const MIMETYPE_FILE: &str = "mimetype";

pub const META_INF_DIR: &str = "META-INF";
pub const CONTAINER_FILE: &str = "container.xml";

/// Root of the publication inside the container
pub const PACKAGE_DIR: &str = "OEBPF";
pub const PACKAGE_FILE: &str = "ebook.opf";
pub const NAVIGATION_FILE: &str = "navigation.ncx";
pub const COVER_PAGE_FILE: &str = "cover.xhtml";

pub const CSS_DIR: &str = "OEBPF/css";
pub const CSS_FILE: &str = "ebook.css";

pub const CONTENT_DIR: &str = "OEBPF/content";

pub const IMAGES_DIR: &str = "OEBPF/images";
pub const COVER_IMAGE_FILE: &str = "cover.png";

/// File extension of the packaged archive
pub const EPUB_EXTENSION: &str = "epub";

/// Name an image reference is packaged under: the last path component
pub fn image_name(reference: &str) -> String {
    Path::new(reference)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| reference.to_string())
}

/// Media type of an image, guessed from its extension
pub fn image_media_type(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_name_is_basename() {
        assert_eq!(image_name("assets/art/map.jpg"), "map.jpg");
        assert_eq!(image_name("b.png"), "b.png");
    }

    #[test]
    fn test_image_media_type() {
        assert_eq!(image_media_type("a.JPG"), "image/jpeg");
        assert_eq!(image_media_type("b.svg"), "image/svg+xml");
        assert_eq!(image_media_type("cover.png"), "image/png");
        assert_eq!(image_media_type("noext"), "image/png");
    }
}
