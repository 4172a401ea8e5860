//! Default EPUB 2 templates

use super::{escape_xml, TemplateRenderer};
use crate::package::layout::{
    image_media_type, image_name, COVER_IMAGE_FILE, COVER_PAGE_FILE, CSS_FILE, NAVIGATION_FILE,
    PACKAGE_DIR, PACKAGE_FILE,
};
use crate::types::{Document, Section, TocItemKind, CONTENTS_FILENAME};
use std::fmt::Write as _;

/// Renderer for an EPUB 2.0.1 package (OPF + NCX)
#[derive(Debug, Clone, Copy, Default)]
pub struct Epub2Templates;

impl Epub2Templates {
    pub fn new() -> Self {
        Self
    }

    /// Wrap body markup in an XHTML page living in the content folder
    fn xhtml_page(&self, title: &str, body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="[[LANGUAGE]]">
<head>
  <title>{}</title>
  <meta http-equiv="Content-Type" content="text/html; charset=UTF-8"/>
  <link rel="stylesheet" type="text/css" href="../css/{}"/>
</head>
<body>
{}
</body>
</html>"#,
            escape_xml(title),
            CSS_FILE,
            body
        )
    }

    fn manifest_items(&self, doc: &Document) -> String {
        let mut items = String::new();
        let mut item = |id: &str, href: &str, media_type: &str| {
            let _ = writeln!(
                items,
                r#"    <item id="{}" href="{}" media-type="{}"/>"#,
                id,
                escape_xml(href),
                media_type
            );
        };

        item("ncx", NAVIGATION_FILE, "application/x-dtbncx+xml");
        item(
            "cover-image",
            &format!("images/{}", COVER_IMAGE_FILE),
            image_media_type(COVER_IMAGE_FILE),
        );
        item("cover", COVER_PAGE_FILE, "application/xhtml+xml");
        item("css", &format!("css/{}", CSS_FILE), "text/css");
        for (i, reference) in doc.image_references().iter().enumerate() {
            let name = image_name(reference);
            item(
                &format!("image-{}", i + 1),
                &format!("images/{}", name),
                image_media_type(&name),
            );
        }
        for position in 1..=doc.section_count() {
            item(
                &format!("s{}", position),
                &format!("content/{}", Section::filename(position)),
                "application/xhtml+xml",
            );
        }
        item(
            "toc",
            &format!("content/{}", CONTENTS_FILENAME),
            "application/xhtml+xml",
        );
        items
    }

    fn spine_items(&self, doc: &Document) -> String {
        let (front, main) = doc.reading_order();
        let mut spine = String::from("    <itemref idref=\"cover\" linear=\"no\"/>\n");
        for (position, _) in &front {
            let _ = writeln!(spine, "    <itemref idref=\"s{}\"/>", position);
        }
        spine.push_str("    <itemref idref=\"toc\"/>\n");
        for (position, _) in &main {
            let _ = writeln!(spine, "    <itemref idref=\"s{}\"/>", position);
        }
        spine
    }

    fn subjects(&self, doc: &Document) -> String {
        let mut subjects = String::from("    <dc:subject>[[GENRE]]</dc:subject>\n");
        for tag in doc.metadata().tag_list() {
            let _ = writeln!(subjects, "    <dc:subject>{}</dc:subject>", escape_xml(tag));
        }
        subjects
    }
}

impl TemplateRenderer for Epub2Templates {
    fn container(&self, _doc: &Document) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="{}/{}" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#,
            PACKAGE_DIR, PACKAGE_FILE
        )
    }

    fn package(&self, doc: &Document) -> String {
        let series = if doc.metadata().series.is_some() {
            "    <meta name=\"calibre:series\" content=\"[[SERIES]]\"/>\n    \
             <meta name=\"calibre:series_index\" content=\"[[SEQUENCE]]\"/>\n"
        } else {
            ""
        };

        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="BookId">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
    <dc:identifier id="BookId" opf:scheme="URI">[[ID]]</dc:identifier>
    <dc:title>[[TITLE]]</dc:title>
    <dc:rights>[[COPYRIGHT]]</dc:rights>
    <dc:language>[[LANGUAGE]]</dc:language>
    <dc:creator opf:role="aut" opf:file-as="[[FILEAS]]">[[AUTHOR]]</dc:creator>
    <dc:publisher>[[PUBLISHER]]</dc:publisher>
    <dc:description>[[DESCRIPTION]]</dc:description>
    <dc:date opf:event="publication">[[PUBLISHED]]</dc:date>
    <dc:date opf:event="modification">[[MODIFIED]]</dc:date>
    <dc:source>[[SOURCE]]</dc:source>
{}{}    <meta name="cover" content="cover-image"/>
  </metadata>
  <manifest>
{}  </manifest>
  <spine toc="ncx">
{}  </spine>
  <guide>
    <reference type="cover" title="Cover" href="{}"/>
    <reference type="toc" title="{}" href="content/{}"/>
  </guide>
</package>"#,
            self.subjects(doc),
            series,
            self.manifest_items(doc),
            self.spine_items(doc),
            COVER_PAGE_FILE,
            escape_xml(doc.contents_title()),
            CONTENTS_FILENAME
        )
    }

    fn navigation(&self, doc: &Document) -> String {
        let mut nav_points = String::new();
        for (i, entry) in doc.toc_entries().iter().enumerate() {
            let _ = write!(
                nav_points,
                r#"    <navPoint id="navpoint-{n}" playOrder="{n}">
      <navLabel><text>{}</text></navLabel>
      <content src="content/{}"/>
    </navPoint>
"#,
                escape_xml(&entry.title),
                escape_xml(&entry.link),
                n = i + 1
            );
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE ncx PUBLIC "-//NISO//DTD ncx 2005-1//EN" "http://www.daisy.org/z3986/2005/ncx-2005-1.dtd">
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head>
    <meta name="dtb:uid" content="[[ID]]"/>
    <meta name="dtb:depth" content="1"/>
    <meta name="dtb:totalPageCount" content="0"/>
    <meta name="dtb:maxPageNumber" content="0"/>
  </head>
  <docTitle><text>[[TITLE]]</text></docTitle>
  <docAuthor><text>[[AUTHOR]]</text></docAuthor>
  <navMap>
{}  </navMap>
</ncx>"#,
            nav_points
        )
    }

    fn cover(&self, _doc: &Document) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="[[LANGUAGE]]">
<head>
  <title>[[TITLE]]</title>
  <meta http-equiv="Content-Type" content="text/html; charset=UTF-8"/>
  <style type="text/css">
    body {{ margin: 0; padding: 0; text-align: center; }}
    img {{ max-width: 100%; max-height: 100%; }}
  </style>
</head>
<body>
  <div><img src="images/{}" alt="Cover Image" title="Cover Image"/></div>
</body>
</html>"#,
            COVER_IMAGE_FILE
        )
    }

    fn section(&self, doc: &Document, position: usize) -> String {
        match position.checked_sub(1).and_then(|i| doc.sections().get(i)) {
            Some(section) => self.xhtml_page(&section.title, &section.content),
            None => String::new(),
        }
    }

    fn contents(&self, doc: &Document, generated: Option<&str>) -> String {
        let body = match generated {
            Some(markup) => markup.to_string(),
            None => {
                let mut listing = format!(
                    "<h1>{}</h1>\n<div class=\"contents\">\n",
                    escape_xml(doc.contents_title())
                );
                for entry in doc.toc_entries() {
                    if entry.kind == TocItemKind::Contents {
                        continue;
                    }
                    let _ = writeln!(
                        listing,
                        "  <a href=\"{}\">{}</a><br/>",
                        escape_xml(&entry.link),
                        escape_xml(&entry.title)
                    );
                }
                listing.push_str("</div>");
                listing
            }
        };
        self.xhtml_page(doc.contents_title(), &body)
    }
}
