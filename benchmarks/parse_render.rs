#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Parse and derivation benchmarks: imurl vs the url crate.
///
/// The comparison is indicative only - the two crates do different
/// amounts of work (imurl decodes and re-encodes components, url
/// normalizes per WHATWG), but it keeps regressions visible.
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use imurl::Url;
use url::Url as UrlCrate;

const CORPUS: &[&str] = &[
    "https://example.com/",
    "http://www.google.com/search?q=testing#fragment",
    "https://user:pw@example.com:8080/path;v=2?q=yes&q=no&q",
    "http://google.com:80;some-params-here",
    "file:///var/log/syslog",
    "https://example.com/path%20with%20spaces?RETURNURL=https%3A%2F%2Fwww.foo.com%2F",
    "https://[2001:db8::1]:8080/x",
];

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse/imurl", |b| {
        b.iter(|| {
            for input in CORPUS {
                let _ = black_box(Url::parse(black_box(input)));
            }
        });
    });

    c.bench_function("parse/url", |b| {
        b.iter(|| {
            for input in CORPUS {
                let _ = black_box(UrlCrate::parse(black_box(input)));
            }
        });
    });
}

fn bench_derive(c: &mut Criterion) {
    let url = Url::parse("https://example.com/search?q=testing").unwrap();

    c.bench_function("derive/set_query", |b| {
        b.iter(|| black_box(&url).set_query("page", "2"));
    });

    c.bench_function("derive/to_builder", |b| {
        b.iter(|| black_box(&url).to_builder().port(8080).build().unwrap());
    });

    let components = url.components().clone();
    c.bench_function("render/from_components", |b| {
        b.iter(|| Url::from_components(black_box(components.clone())));
    });
}

criterion_group!(benches, bench_parse, bench_derive);
criterion_main!(benches);
