//! End-to-end scenarios exercising the public API exactly as the crate
//! documentation promises it.

use pretty_assertions::assert_eq;
use vista::{Comparison, FixedSpan, Span, SpanError, SpanMut, TextView, algo, text};

// =============================================================================
// Numeric element views
// =============================================================================

#[test]
fn numeric_view_end_to_end() {
    let data = [10, 20, 30, 40, 50, 60, 70, 80];
    let view = Span::new(&data);

    assert_eq!(view.slice(2, 3).unwrap(), [30, 40, 50]);
    assert_eq!(view.first(4).unwrap(), [10, 20, 30, 40]);
    assert_eq!(view.last(4).unwrap(), [50, 60, 70, 80]);
    assert_eq!(algo::find_subsequence(view, [40, 50]), Some(3));
}

#[test]
fn view_round_trips_container_contents() {
    let data: Vec<i64> = (0..100).map(|i| i * i).collect();
    let view = Span::new(&data);

    let copied: Vec<i64> = view.iter().copied().collect();
    assert_eq!(copied, data);
}

#[test]
fn slices_agree_with_indexed_access() {
    let data: Vec<u8> = (0..32).collect();
    let view = Span::new(&data);

    for offset in 0..data.len() {
        for count in 0..=(data.len() - offset) {
            let sub = view.slice(offset, count).unwrap();
            assert_eq!(sub.len(), count);
            for i in 0..count {
                assert_eq!(sub.at(i), view.at(offset + i));
            }
        }
    }
}

#[test]
fn out_of_range_operations_fail_cleanly() {
    let data = [1, 2, 3];
    let view = Span::new(&data);

    assert_eq!(
        view.at(3),
        Err(SpanError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert!(view.slice(1, 3).is_err());
    assert!(view.first(4).is_err());
    assert!(view.last(4).is_err());

    // A failed operation has no side effect; the view still works.
    assert_eq!(view.at(2), Ok(&3));
}

// =============================================================================
// Mutation through an exclusive view
// =============================================================================

#[test]
fn mutation_through_view_aliases_the_container() {
    let mut data = vec![1, 2, 3, 4, 5];

    let mut view = SpanMut::new(&mut data);
    for x in view.iter_mut() {
        *x *= 10;
    }
    *view.at_mut(2).unwrap() = -1;

    // The container, inspected directly, sees every write.
    assert_eq!(data, vec![10, 20, -1, 40, 50]);
}

// =============================================================================
// Text views
// =============================================================================

#[test]
fn text_view_end_to_end() {
    let view = TextView::new("Hello world");

    assert!(view.starts_with("Hello"));
    assert!(view.ends_with("world"));
    assert!(!view.ends_with("World"));
    assert_eq!(view.find("world"), Some(6));
    assert_eq!(view.slice(6, 5).unwrap(), "world");
}

#[test]
fn identifier_check_at_compile_time_and_runtime() {
    const _: () = assert!(text::is_identifier(b"view_len"));

    assert!(text::is_identifier(b"view_len"));
    assert!(!text::is_identifier(b"view len"));
}

// =============================================================================
// Fixed-length views
// =============================================================================

#[test]
fn fixed_span_length_is_part_of_the_type() {
    let data = [1u32, 2, 3, 4];
    let view: FixedSpan<u32, 4> = FixedSpan::new(&data);
    assert_eq!(view.len(), 4);

    let short = &data[..2];
    assert_eq!(
        FixedSpan::<u32, 4>::try_from_slice(short).err(),
        Some(SpanError::LengthMismatch {
            expected: 4,
            actual: 2
        })
    );
}

// =============================================================================
// Comparison harness
// =============================================================================

#[test]
fn harness_counts_every_call() {
    let report = Comparison::new("fixed increment", 1_000).run(|| 7, || 7);

    assert_eq!(report.accumulator, 1_000 * 7 * 2);
    assert!(report.owning_millis() >= 0.0);
    assert!(report.view_millis() >= 0.0);
}

#[test]
fn harness_times_real_view_workloads() {
    let data: Vec<u64> = (0..256).collect();
    let view = Span::new(&data);

    let report = Comparison::new("sum of middle 64", 100).run(
        || data[96..160].to_vec().iter().sum::<u64>(),
        || view.slice(96, 64).unwrap().iter().sum::<u64>(),
    );

    // Both strategies computed the same sums the same number of times.
    let per_call: u64 = (96..160).sum();
    assert_eq!(report.accumulator, per_call * 100 * 2);
}
