//! Benchmark tests for aibo-core operations
//!
//! Run with: cargo bench -p aibo-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use aibo_core::platform::{bilibili_embed_url, select_adapter};
use aibo_core::style::WidgetTheme;
use aibo_core::types::WidgetConfig;
use aibo_core::validator::validate;
use aibo_core::WidgetSession;

const URLS: [&str; 5] = [
    "https://www.bilibili.com/video/BV1PoF3eeEtF",
    "https://player.bilibili.com/player.html?bvid=BV1PoF3eeEtF",
    "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    "https://cdn.example.com/live/master.m3u8",
    "not a url",
];

// ============================================================================
// URL Benchmarks
// ============================================================================

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Validator");

    for url in URLS {
        group.bench_with_input(BenchmarkId::new("validate", url), url, |b, url| {
            b.iter(|| black_box(validate(black_box(url))));
        });
    }

    group.finish();
}

fn bench_adapters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Adapters");

    for url in URLS {
        group.bench_with_input(BenchmarkId::new("select_adapter", url), url, |b, url| {
            b.iter(|| black_box(select_adapter(black_box(url))));
        });
    }

    group.bench_function("bilibili_embed_url/watch", |b| {
        b.iter(|| black_box(bilibili_embed_url(black_box(URLS[0])).into_owned()));
    });

    group.bench_function("bilibili_embed_url/player", |b| {
        b.iter(|| black_box(bilibili_embed_url(black_box(URLS[1])).into_owned()));
    });

    group.finish();
}

// ============================================================================
// Session Benchmarks
// ============================================================================

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("Session");

    group.bench_function("submit+view", |b| {
        let mut session = WidgetSession::new(WidgetConfig::default()).unwrap();
        b.iter(|| {
            session.submit(black_box(URLS[2]));
            black_box(session.view())
        });
    });

    group.bench_function("WidgetTheme::to_css", |b| {
        let theme = WidgetTheme::default();
        b.iter(|| black_box(theme.to_css()));
    });

    group.finish();
}

criterion_group!(url_benches, bench_validate, bench_adapters);

criterion_group!(session_benches, bench_session);

criterion_main!(url_benches, session_benches);
