//! Packaging benchmarks

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use quire_core::{Document, MemoryAssets, Metadata, Packager};

fn sample_document(sections: usize) -> Document {
    let mut doc = Document::new(
        Metadata::new("urn:bench", "Benchmark", "Author", "Reference"),
        "cover.png",
    )
    .expect("valid metadata");
    doc.add_css("body { margin: 0 5%; } p { text-indent: 1.2em; }");
    for i in 1..=sections {
        doc.add_chapter(
            format!("Chapter {}", i),
            "<p>[[TITLE]] by [[AUTHOR]].</p>".repeat(200),
        );
    }
    doc
}

fn packaging_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let doc = sample_document(40);
    let packager = Packager::new()
        .with_assets(MemoryAssets::new().with("cover.png", vec![0u8; 64 * 1024]))
        .with_modified(NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"));

    c.bench_function("build_file_list_40_sections", |b| {
        b.to_async(&runtime)
            .iter(|| async { std::hint::black_box(packager.files(&doc).await.expect("files")) })
    });

    let files = runtime.block_on(packager.files(&doc)).expect("files");
    c.bench_function("write_archive_40_sections", |b| {
        b.iter(|| {
            let out = quire_core::package::write_archive(&files, std::io::Cursor::new(Vec::new()))
                .expect("archive");
            std::hint::black_box(out.into_inner().len())
        })
    });
}

criterion_group!(benches, packaging_benchmark);
criterion_main!(benches);
