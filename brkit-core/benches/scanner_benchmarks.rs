//! Performance benchmarks for BoundaryScanner
//!
//! Run with: cargo bench --bench scanner_benchmarks

use brkit_core::{
    BoundaryData, BoundaryScanner, ClassRange, ClassTable, GeneralCategory, Transition as T,
    TransitionTable, CATEGORY_COUNT, END_OF_TEXT,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::sync::Arc;

/// Combining marks attach to the preceding character
fn cluster_data() -> Arc<BoundaryData> {
    let mut base = [1u8; CATEGORY_COUNT];
    for cat in GeneralCategory::ALL.iter().filter(|c| c.is_mark()) {
        base[cat.index()] = 0;
    }
    let classes = ClassTable::derived(base, vec![ClassRange::single(END_OF_TEXT, 2)]).unwrap();

    #[rustfmt::skip]
    let forward = TransitionTable::from_transitions(3, [
        T::STOP,      T::STOP,        T::STOP,
        T::marked(2), T::marked(2),   T::MARKED_STOP,
        T::to(2),     T::MARKED_STOP, T::MARKED_STOP,
    ])
    .unwrap();

    #[rustfmt::skip]
    let backward = TransitionTable::from_transitions(3, [
        T::STOP,  T::STOP,        T::STOP,
        T::to(1), T::MARKED_STOP, T::STOP,
    ])
    .unwrap();

    Arc::new(BoundaryData::new("cluster", classes, forward, backward).unwrap())
}

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base = "Cafe\u{0301} na\u{0308}ive re\u{0301}sume\u{0301} plain ascii words. ";
    let repeat_count = size / base.len() + 1;
    base.repeat(repeat_count).chars().take(size).collect()
}

/// Forward iteration over all boundaries
fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward");
    let data = cluster_data();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("next", size), &text, |b, text| {
            b.iter(|| {
                let mut scanner = BoundaryScanner::with_text(data.clone(), black_box(text));
                scanner.boundaries().count()
            });
        });
    }

    group.finish();
}

/// Backward iteration from the end, exercising safe-position resync
fn bench_backward(c: &mut Criterion) {
    let mut group = c.benchmark_group("backward");
    let data = cluster_data();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("previous", size), &text, |b, text| {
            b.iter(|| {
                let mut scanner = BoundaryScanner::with_text(data.clone(), black_box(text));
                scanner.last();
                let mut count = 0;
                while scanner.previous().is_some() {
                    count += 1;
                }
                count
            });
        });
    }

    group.finish();
}

/// Random access through is_boundary
fn bench_random_access(c: &mut Criterion) {
    let data = cluster_data();
    let text = generate_text(10_240);
    let len = text.chars().count();

    c.bench_function("is_boundary_every_offset", |b| {
        b.iter(|| {
            let mut scanner = BoundaryScanner::with_text(data.clone(), &text);
            (0..len)
                .filter(|&p| scanner.is_boundary(black_box(p)).unwrap_or(false))
                .count()
        });
    });
}

/// Class table construction with wide exception spans
fn bench_class_table_build(c: &mut Criterion) {
    let mut base = [1u8; CATEGORY_COUNT];
    for cat in GeneralCategory::ALL.iter().filter(|c| c.is_mark()) {
        base[cat.index()] = 0;
    }

    c.bench_function("class_table_full_range_exception", |b| {
        b.iter(|| {
            let exceptions = vec![
                ClassRange::span('\0', '\u{FFFE}', 3),
                ClassRange::single(END_OF_TEXT, 2),
                ClassRange::span('\u{10000}', '\u{10FFFF}', 3),
            ];
            ClassTable::derived(black_box(base), exceptions).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_forward,
    bench_backward,
    bench_random_access,
    bench_class_table_build
);
criterion_main!(benches);
