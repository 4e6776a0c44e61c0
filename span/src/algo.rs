//! Pure, single-pass utilities over views.
//!
//! Nothing here allocates; each function is a direct walk of the borrowed
//! storage through a [`Span`].

use crate::span::Span;

/// Byte-for-byte analogue of substring search for arbitrary element types:
/// the offset of the first window of `haystack` equal to `needle`, or
/// `None`. An empty needle matches at offset 0.
///
/// Naive O(n·m) scan; the needles this library demonstrates are short.
///
/// # Examples
///
/// ```
/// use vista_span::{Span, algo};
///
/// let data = [10, 20, 30, 40, 50, 60, 70, 80];
/// let view = Span::new(&data);
/// assert_eq!(algo::find_subsequence(view, [40, 50]), Some(3));
/// assert_eq!(algo::find_subsequence(view, [50, 40]), None);
/// ```
pub fn find_subsequence<T: PartialEq>(haystack: Span<'_, T>, needle: impl AsRef<[T]>) -> Option<usize> {
    let needle = needle.as_ref();
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .as_slice()
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Smallest and largest element of the view in one pass, or `None` when
/// the view is empty. On ties the earliest occurrence wins.
pub fn min_max<'a, T: Ord>(view: Span<'a, T>) -> Option<(&'a T, &'a T)> {
    let mut iter = view.iter();
    let first = iter.next()?;
    let mut min = first;
    let mut max = first;
    for item in iter {
        if item < min {
            min = item;
        } else if item > max {
            max = item;
        }
    }
    Some((min, max))
}

/// Minimum of every window of `width` consecutive elements, in order.
///
/// Yields `len - width + 1` items, or nothing when `width > len`.
/// `width` must be non-zero.
pub fn windowed_min<'a, T: Ord>(view: Span<'a, T>, width: usize) -> impl Iterator<Item = &'a T> {
    assert!(width > 0, "window width must be non-zero");
    view.as_slice()
        .windows(width)
        .filter_map(|window| window.iter().min())
}

/// Maximum of every window of `width` consecutive elements, in order.
/// `width` must be non-zero.
pub fn windowed_max<'a, T: Ord>(view: Span<'a, T>, width: usize) -> impl Iterator<Item = &'a T> {
    assert!(width > 0, "window width must be non-zero");
    view.as_slice()
        .windows(width)
        .filter_map(|window| window.iter().max())
}
