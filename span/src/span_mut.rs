use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;
use core::slice;

use crate::error::SpanError;
use crate::span::Span;

/// A non-owning *exclusive* view of contiguous elements.
///
/// Same two-word representation as [`Span`], but it models a `&mut [T]`
/// borrow: it is not `Copy`, and while it lives no other view may read the
/// same storage. Element access through it can mutate the borrowed storage
/// in place; the view itself never resizes or reallocates that storage.
///
/// # Examples
///
/// ```
/// use vista_span::SpanMut;
///
/// let mut data = [1, 2, 3];
/// let mut view = SpanMut::new(&mut data);
/// *view.at_mut(1).unwrap() = 20;
/// drop(view);
/// assert_eq!(data, [1, 20, 3]);
/// ```
pub struct SpanMut<'a, T> {
    ptr: NonNull<T>,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

static_assertions::assert_eq_size!(SpanMut<u8>, [usize; 2]);

impl<'a, T> SpanMut<'a, T> {
    /// Builds an exclusive view over a mutable slice. No allocation, no copy.
    #[inline(always)]
    pub fn new(source: &'a mut [T]) -> Self {
        Self {
            // SAFETY: a slice pointer is never null.
            ptr: unsafe { NonNull::new_unchecked(source.as_mut_ptr()) },
            len: source.len(),
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: ptr/len came from a valid `&'a mut [T]` in `new`; `&self`
        // pins the exclusive borrow for the returned lifetime.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Consumes the view, giving back the full-lifetime mutable slice.
    #[inline]
    pub fn into_mut_slice(self) -> &'a mut [T] {
        // SAFETY: `self` is consumed, so the original exclusive borrow is
        // transferred rather than duplicated.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Checked shared access to one element.
    pub fn at(&self, index: usize) -> Result<&T, SpanError> {
        self.as_span().at(index)
    }

    /// Checked mutable access to one element of the *borrowed* storage.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SpanError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(SpanError::IndexOutOfBounds { index, len })
    }

    /// O(1) exclusive sub-view, consuming `self` to preserve exclusivity
    /// over the full `'a` lifetime.
    pub fn slice_mut(self, offset: usize, count: usize) -> Result<SpanMut<'a, T>, SpanError> {
        match offset.checked_add(count) {
            Some(end) if end <= self.len => {
                Ok(SpanMut::new(&mut self.into_mut_slice()[offset..end]))
            }
            _ => Err(SpanError::SliceOutOfBounds {
                offset,
                count,
                len: self.len,
            }),
        }
    }

    /// A shared view of the same storage, borrowing from `self`.
    #[inline]
    pub fn as_span(&self) -> Span<'_, T> {
        Span::new(self.as_slice())
    }

    /// A shorter-lived exclusive view of the same storage.
    #[inline]
    pub fn reborrow(&mut self) -> SpanMut<'_, T> {
        SpanMut::new(self.as_mut_slice())
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<'a, T> From<&'a mut [T]> for SpanMut<'a, T> {
    fn from(source: &'a mut [T]) -> Self {
        Self::new(source)
    }
}

impl<T: fmt::Debug> fmt::Debug for SpanMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

// Same semantics as `&mut [T]`.
unsafe impl<T: Send> Send for SpanMut<'_, T> {}
unsafe impl<T: Sync> Sync for SpanMut<'_, T> {}
