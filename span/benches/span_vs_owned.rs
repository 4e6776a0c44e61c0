//! Benchmarks: owning copies vs non-owning views, and the cost of the
//! view handle itself.
//!
//! Run with: `cargo bench --bench span_vs_owned`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vista_span::{Span, TextView, algo};

fn bench_sub_range_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sub_range_sum");

    for size in [16usize, 256, 4096] {
        let data: Vec<u64> = (0..size as u64 * 2).collect();

        // Owning: materialize the sub-range into a fresh Vec, then sum.
        group.bench_with_input(BenchmarkId::new("owned_copy", size), &size, |b, &size| {
            b.iter(|| {
                let copy: Vec<u64> = data[size / 2..size / 2 + size].to_vec();
                black_box(copy.iter().sum::<u64>());
            });
        });

        // View: slice in place, then sum.
        group.bench_with_input(BenchmarkId::new("span_slice", size), &size, |b, &size| {
            let view = Span::new(&data);
            b.iter(|| {
                let window = view.slice(size / 2, size).unwrap();
                black_box(window.iter().sum::<u64>());
            });
        });
    }

    group.finish();
}

fn bench_substring_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("substring_extract");

    for size in [16usize, 256, 4096] {
        let text: String = core::iter::repeat("abcdefgh").take(size / 4).collect();

        group.bench_with_input(BenchmarkId::new("owned_string", size), &size, |b, &size| {
            b.iter(|| {
                let copy: String = text[..size].to_string();
                black_box(copy.len());
            });
        });

        group.bench_with_input(BenchmarkId::new("text_view", size), &size, |b, &size| {
            let view = TextView::new(&text);
            b.iter(|| {
                let sub = view.first(size).unwrap();
                black_box(sub.len());
            });
        });
    }

    group.finish();
}

fn bench_subsequence_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("subsequence_search");

    for size in [256usize, 4096] {
        let data: Vec<u32> = (0..size as u32).collect();
        let needle = [size as u32 - 2, size as u32 - 1];

        // Owning: search inside a freshly copied container.
        group.bench_with_input(BenchmarkId::new("owned_copy", size), &size, |b, _| {
            b.iter(|| {
                let copy = data.to_vec();
                black_box(algo::find_subsequence(Span::new(&copy), needle));
            });
        });

        group.bench_with_input(BenchmarkId::new("span", size), &size, |b, _| {
            let view = Span::new(&data);
            b.iter(|| black_box(algo::find_subsequence(view, needle)));
        });
    }

    group.finish();
}

// The handle is two words; passing it by reference adds the indirection the
// type exists to remove. Keep both paths out-of-line so the calling
// convention is actually exercised.
#[inline(never)]
fn sum_by_value(view: Span<'_, u64>) -> u64 {
    view.iter().sum()
}

#[inline(never)]
fn sum_by_ref(view: &Span<'_, u64>) -> u64 {
    view.iter().sum()
}

fn bench_handle_passing(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_passing");

    let data: Vec<u64> = (0..1024).collect();
    let view = Span::new(&data);

    group.bench_function("by_value", |b| {
        b.iter(|| black_box(sum_by_value(black_box(view))));
    });

    group.bench_function("by_ref", |b| {
        b.iter(|| black_box(sum_by_ref(black_box(&view))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_sub_range_sum,
    bench_substring_extract,
    bench_subsequence_search,
    bench_handle_passing
);
criterion_main!(benches);
