//! Criterion benchmarks for svgicons critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Reader: lenient SVG parsing
//! - Naming: camel casing and collision resolution
//! - Generation: a full in-memory run over a batch of icons

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::path::Path;
use svgicons::build::{process_source, NullProgress};
use svgicons::fs::MemoryFileSystem;
use svgicons::naming::{to_camel_case, NameRegistry, NamingPolicy};
use svgicons::svg::{extract, parse, IconAttributes, SizeDefaults};
use svgicons::{generate, GenerateOptions};

// =============================================================================
// Test Data Generators
// =============================================================================

/// Generate an SVG document with `paths` path elements
fn make_svg(title: &str, paths: usize) -> String {
    let body: String = (0..paths)
        .map(|i| format!("<path d=\"M{} {}h4v4h-4z\" fill-rule=\"evenodd\"/>", i % 24, i / 24))
        .collect();
    format!(
        r#"<?xml version="1.0"?><svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><title>{}</title>{}</svg>"#,
        title, body
    )
}

fn titled(title: &str) -> IconAttributes {
    IconAttributes {
        width: "24px".to_string(),
        height: "24px".to_string(),
        view_box: None,
        raw_title: Some(title.to_string()),
    }
}

/// Build an in-memory input directory with `count` icons
fn make_batch(count: usize) -> MemoryFileSystem {
    let fs = MemoryFileSystem::new();
    fs.add_dir("out");
    for i in 0..count {
        // Groups of four share a title to exercise collision handling
        let title = format!("icon {}", i / 4);
        fs.add_file(format!("in/icon_{:04}.svg", i), make_svg(&title, 8));
    }
    fs
}

// =============================================================================
// Reader Benchmarks
// =============================================================================

fn bench_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader");

    for paths in [1, 16, 128].iter() {
        let svg = make_svg("Bench", *paths);
        group.throughput(Throughput::Bytes(svg.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", paths), &svg, |b, svg| {
            b.iter(|| parse(black_box(svg)))
        });
    }

    let svg = make_svg("Bench", 16);
    let doc = parse(&svg).unwrap();
    let defaults = SizeDefaults::default();
    group.bench_function("extract", |b| b.iter(|| extract(black_box(&doc), &defaults)));

    group.finish();
}

// =============================================================================
// Naming Benchmarks
// =============================================================================

fn bench_naming(c: &mut Criterion) {
    let mut group = c.benchmark_group("naming");

    group.bench_function("camel_case_short", |b| b.iter(|| to_camel_case(black_box("arrow-left"))));
    group.bench_function("camel_case_long", |b| {
        b.iter(|| to_camel_case(black_box("material symbols / outlined / keyboard_arrow_down 24")))
    });

    // Worst case: every icon has the same title
    let attrs = titled("Duplicate");
    let policy = NamingPolicy::default();
    group.bench_function("synthesize_100_collisions", |b| {
        b.iter(|| {
            let mut registry = NameRegistry::new();
            for _ in 0..100 {
                let _ = registry.synthesize(black_box(&attrs), "duplicate", &policy);
            }
        })
    });

    group.finish();
}

// =============================================================================
// Generation Benchmarks
// =============================================================================

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    let options = GenerateOptions::default();

    let svg = make_svg("Home", 16);
    group.bench_function("process_source", |b| {
        b.iter(|| {
            let mut registry = NameRegistry::new();
            process_source(black_box(&svg), "home", &options, &mut registry)
        })
    });

    for count in [10, 100].iter() {
        let fs = make_batch(*count);
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("generate", count), &fs, |b, fs| {
            b.iter(|| generate(Path::new("in"), Path::new("out"), &options, fs, &NullProgress))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reader, bench_naming, bench_generation);

criterion_main!(benches);
