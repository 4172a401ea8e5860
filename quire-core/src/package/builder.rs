//! Builds the ordered file list of a package

use super::layout::{
    image_name, COVER_IMAGE_FILE, COVER_PAGE_FILE, CONTAINER_FILE, CONTENT_DIR, CSS_DIR, CSS_FILE,
    IMAGES_DIR, META_INF_DIR, MIMETYPE, MIMETYPE_FILE, NAVIGATION_FILE, PACKAGE_DIR, PACKAGE_FILE,
};
use crate::error::{QuireError, Result};
use crate::storage::AssetSource;
use crate::tags::TagValues;
use crate::template::TemplateRenderer;
use crate::types::{Document, FileEntry, Section, CONTENTS_FILENAME};
use chrono::NaiveDate;
use futures::future::try_join_all;
use std::collections::HashSet;

/// Generate the text entries of the package, in archive order.
///
/// Every artifact, the stylesheet included, goes through the double tag
/// substitution pass. The mimetype entry comes first and is stored.
pub fn text_entries(
    doc: &Document,
    renderer: &dyn TemplateRenderer,
    modified: NaiveDate,
) -> Vec<FileEntry> {
    let tags = TagValues::new(doc.metadata(), modified);
    let render = |text: String| tags.render(&text);

    let mut files = Vec::with_capacity(doc.section_count() + 7);
    files.push(FileEntry::stored(MIMETYPE_FILE, "", MIMETYPE));
    files.push(FileEntry::new(
        CONTAINER_FILE,
        META_INF_DIR,
        render(renderer.container(doc)),
    ));
    files.push(FileEntry::new(
        PACKAGE_FILE,
        PACKAGE_DIR,
        render(renderer.package(doc)),
    ));
    files.push(FileEntry::new(
        NAVIGATION_FILE,
        PACKAGE_DIR,
        render(renderer.navigation(doc)),
    ));
    files.push(FileEntry::new(
        COVER_PAGE_FILE,
        PACKAGE_DIR,
        render(renderer.cover(doc)),
    ));
    files.push(FileEntry::new(
        CSS_FILE,
        CSS_DIR,
        render(renderer.stylesheet(doc)),
    ));

    for position in 1..=doc.section_count() {
        files.push(FileEntry::new(
            Section::filename(position),
            CONTENT_DIR,
            render(renderer.section(doc, position)),
        ));
    }

    let generated = doc
        .contents_generator()
        .map(|generate| generate(doc.toc_entries().as_slice()));
    files.push(FileEntry::new(
        CONTENTS_FILENAME,
        CONTENT_DIR,
        render(renderer.contents(doc, generated.as_deref())),
    ));

    tracing::debug!(
        "Rendered {} text entries for '{}'",
        files.len(),
        doc.metadata().title
    );
    files
}

/// Load the cover and every metadata image.
///
/// Reads run concurrently; the result keeps declared order (cover first)
/// whatever order the reads complete in. The first failed read fails the
/// whole load. Images are packaged under their basename, so two references
/// sharing one (or an image named like the cover) are rejected before any
/// read starts.
pub async fn image_entries(doc: &Document, assets: &dyn AssetSource) -> Result<Vec<FileEntry>> {
    let references: Vec<(String, &str)> =
        std::iter::once((COVER_IMAGE_FILE.to_string(), doc.cover_image()))
            .chain(
                doc.image_references()
                    .iter()
                    .map(|reference| (image_name(reference), reference.as_str())),
            )
            .collect();

    let mut seen = HashSet::with_capacity(references.len());
    for (name, _) in &references {
        if !seen.insert(name.as_str()) {
            return Err(QuireError::DuplicateEntry(format!("{}/{}", IMAGES_DIR, name)));
        }
    }

    let reads = references.into_iter().map(|(name, reference)| async move {
        let content = assets
            .read(reference)
            .await
            .map_err(|source| QuireError::Asset {
                path: reference.to_string(),
                source,
            })?;
        tracing::debug!("Loaded image {} ({} bytes) as {}", reference, content.len(), name);
        Ok::<_, QuireError>(FileEntry::new(name, IMAGES_DIR, content))
    });

    try_join_all(reads).await
}

/// Build the complete, ordered file list of a package
pub async fn build_file_list(
    doc: &Document,
    renderer: &dyn TemplateRenderer,
    assets: &dyn AssetSource,
    modified: NaiveDate,
) -> Result<Vec<FileEntry>> {
    let mut files = text_entries(doc, renderer, modified);
    let images = image_entries(doc, assets).await?;
    files.extend(images);
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryAssets;
    use crate::template::Epub2Templates;
    use crate::types::{Metadata, TocItemKind};

    fn modified() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 24).unwrap()
    }

    fn document() -> Document {
        let mut metadata = Metadata::new("urn:test:7", "Sample", "Writer", "Fiction")
            .with_image("img/a.png")
            .with_image("b.jpg");
        metadata.description = Some("Line one[[EOL]]Line two".to_string());
        let mut doc = Document::new(metadata, "cover.png").unwrap();
        doc.add_css("/* [[TITLE]] */ body { margin: 0; }");
        doc.add_chapter("One", "<p>by [[AUTHOR]]</p>");
        doc.add_chapter("Two", "<p>2</p>");
        doc
    }

    fn assets() -> MemoryAssets {
        MemoryAssets::new()
            .with("cover.png", b"cover".to_vec())
            .with("img/a.png", b"a".to_vec())
            .with("b.jpg", b"b".to_vec())
    }

    #[test]
    fn test_text_entries_order() {
        let files = text_entries(&document(), &Epub2Templates::new(), modified());
        let paths: Vec<_> = files.iter().map(FileEntry::path).collect();
        assert_eq!(
            paths,
            vec![
                "mimetype",
                "META-INF/container.xml",
                "OEBPF/ebook.opf",
                "OEBPF/navigation.ncx",
                "OEBPF/cover.xhtml",
                "OEBPF/css/ebook.css",
                "OEBPF/content/s1.xhtml",
                "OEBPF/content/s2.xhtml",
                "OEBPF/content/toc.xhtml",
            ]
        );
        assert!(!files[0].compress);
        assert!(files[1..].iter().all(|f| f.compress));
        assert_eq!(files[0].content, b"application/epub+zip");
    }

    #[test]
    fn test_text_entries_are_substituted() {
        let files = text_entries(&document(), &Epub2Templates::new(), modified());
        let opf = files[2].as_text().unwrap();
        assert!(opf.contains("<dc:identifier id=\"BookId\" opf:scheme=\"URI\">urn:test:7</dc:identifier>"));
        assert!(opf.contains("<dc:description>Line one\nLine two</dc:description>"));
        assert!(opf.contains("2023-12-24"));
        assert!(!opf.contains("[["));

        assert_eq!(files[5].as_text().unwrap(), "/* Sample */ body { margin: 0; }");
        assert!(files[6].as_text().unwrap().contains("<p>by Writer</p>"));
    }

    #[test]
    fn test_contents_generator_receives_toc_entries() {
        let doc = document().with_contents_generator(|entries| {
            let mains = entries.iter().filter(|e| e.kind == TocItemKind::Main).count();
            format!("<p>[[TITLE]] has {} chapters</p>", mains)
        });
        let files = text_entries(&doc, &Epub2Templates::new(), modified());
        let toc = files.last().unwrap();
        assert_eq!(toc.name, "toc.xhtml");
        assert!(toc.as_text().unwrap().contains("<p>Sample has 2 chapters</p>"));
    }

    #[tokio::test]
    async fn test_build_file_list_appends_images_in_order() {
        let doc = document();
        let files = build_file_list(&doc, &Epub2Templates::new(), &assets(), modified())
            .await
            .unwrap();

        assert_eq!(files.len(), 5 + 1 + 2 + 1 + 1 + 2);
        let images: Vec<_> = files[9..].iter().map(|f| (f.path(), f.content.clone())).collect();
        assert_eq!(
            images,
            vec![
                ("OEBPF/images/cover.png".to_string(), b"cover".to_vec()),
                ("OEBPF/images/a.png".to_string(), b"a".to_vec()),
                ("OEBPF/images/b.jpg".to_string(), b"b".to_vec()),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_image_fails_build() {
        let doc = document();
        let assets = MemoryAssets::new().with("cover.png", b"cover".to_vec());
        let err = build_file_list(&doc, &Epub2Templates::new(), &assets, modified())
            .await
            .unwrap_err();
        assert!(matches!(err, QuireError::Asset { ref path, .. } if path == "img/a.png" || path == "b.jpg"));
    }

    #[tokio::test]
    async fn test_shared_basename_is_rejected() {
        let metadata = Metadata::new("urn:test:8", "Sample", "Writer", "Fiction")
            .with_image("x/a.png")
            .with_image("y/a.png");
        let doc = Document::new(metadata, "cover.png").unwrap();
        let assets = assets()
            .with("x/a.png", b"x".to_vec())
            .with("y/a.png", b"y".to_vec());

        let err = build_file_list(&doc, &Epub2Templates::new(), &assets, modified())
            .await
            .unwrap_err();
        assert!(matches!(err, QuireError::DuplicateEntry(ref path) if path == "OEBPF/images/a.png"));
    }

    #[tokio::test]
    async fn test_image_named_like_cover_is_rejected() {
        let metadata = Metadata::new("urn:test:9", "Sample", "Writer", "Fiction")
            .with_image("art/cover.png");
        let doc = Document::new(metadata, "front.png").unwrap();
        let assets = MemoryAssets::new()
            .with("front.png", b"front".to_vec())
            .with("art/cover.png", b"art".to_vec());

        let err = image_entries(&doc, &assets).await.unwrap_err();
        assert_eq!(err.to_string(), "Duplicate package entry: OEBPF/images/cover.png");
    }
}
