// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for PARTBOOK
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Voice label formatting (hit on every row redraw)
//! - Row snapshot queries at realistic and oversized list sizes
//! - Bulk selection and removal

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use partbook::{format_voices_label, NotationHandle, PartListModel, ScoreContext, Strings};

fn context_with_parts(count: usize) -> ScoreContext {
    let mut ctx = ScoreContext::new(NotationHandle::master("Bench Score"));
    for i in 0..count {
        let excerpt = NotationHandle::excerpt(format!("Part {}", i + 1));
        excerpt.set_voice_visible(i % 4, false);
        ctx.add_excerpt(excerpt);
    }
    ctx
}

fn loaded_model(ctx: &ScoreContext) -> PartListModel {
    let mut model = PartListModel::new();
    model.load(ctx);
    model
}

/// Benchmark voice label formatting (runs once per visible row per frame)
fn bench_voices_label(c: &mut Criterion) {
    let strings = Strings::default();
    let patterns: [[bool; 4]; 3] = [
        [true, true, true, true],
        [false, false, false, false],
        [false, true, false, true],
    ];

    c.bench_function("format_voices_label", |b| {
        b.iter(|| {
            for voices in &patterns {
                black_box(format_voices_label(black_box(voices), &strings));
            }
        })
    });
}

/// Benchmark row snapshot queries across the whole list
fn bench_row_snapshots(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_snapshots");

    for size in [10, 100, 1000].iter() {
        let ctx = context_with_parts(*size);
        let model = loaded_model(&ctx);

        group.bench_with_input(BenchmarkId::new("full_scan", size), size, |b, _| {
            b.iter(|| {
                let mut selected = 0;
                for row in 0..model.row_count() {
                    let snapshot = model.row(row).unwrap();
                    if snapshot.is_selected {
                        selected += 1;
                    }
                    black_box(snapshot);
                }
                black_box(selected)
            })
        });
    }

    group.finish();
}

/// Benchmark selecting every other row and removing the selection
fn bench_bulk_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_removal");

    for size in [10, 100, 1000].iter() {
        let ctx = context_with_parts(*size);

        group.bench_with_input(BenchmarkId::new("select_and_remove", size), size, |b, _| {
            b.iter_batched(
                || loaded_model(&ctx),
                |mut model| {
                    for row in (1..model.row_count()).step_by(2) {
                        model.select_part(row);
                    }
                    model.remove_selected_parts();
                    black_box(model.row_count())
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// Benchmark committing the part list back to the context
fn bench_apply(c: &mut Criterion) {
    let ctx = context_with_parts(100);
    let model = loaded_model(&ctx);

    c.bench_function("apply_100_parts", |b| {
        b.iter_batched(
            || context_with_parts(100),
            |mut ctx| {
                model.apply(&mut ctx);
                black_box(ctx.excerpts().len())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_voices_label,
    bench_row_snapshots,
    bench_bulk_removal,
    bench_apply
);
criterion_main!(benches);
