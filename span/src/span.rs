use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;
use core::slice;

use crate::error::SpanError;

/// A non-owning view of `len` elements of `T` stored contiguously.
///
/// `Span` is an explicit (start, length) pair: two machine words, `Copy`,
/// no destructor. It borrows the storage it describes and can never outlive
/// it — the `'a` parameter ties the view to the owning container at compile
/// time, so a dangling view is rejected by the borrow checker rather than
/// detected at runtime.
///
/// All range-taking operations are checked up front and return
/// [`SpanError`] before touching memory.
///
/// # Examples
///
/// ```
/// use vista_span::Span;
///
/// let data = [10, 20, 30, 40, 50, 60, 70, 80];
/// let view = Span::new(&data);
///
/// let middle = view.slice(2, 3).unwrap();
/// assert_eq!(middle.as_slice(), &[30, 40, 50]);
/// assert_eq!(view.first(4).unwrap().as_slice(), &[10, 20, 30, 40]);
/// assert_eq!(view.last(4).unwrap().as_slice(), &[50, 60, 70, 80]);
/// ```
pub struct Span<'a, T> {
    ptr: NonNull<T>,
    len: usize,
    _marker: PhantomData<&'a [T]>,
}

// The whole point of the type: a handle small enough to pass by value.
static_assertions::assert_eq_size!(Span<u8>, [usize; 2]);
static_assertions::assert_eq_size!(Span<u128>, [usize; 2]);

impl<T> Clone for Span<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<'_, T> {}

impl<'a, T> Span<'a, T> {
    /// Builds a view over an existing slice. Never allocates or copies;
    /// a zero-length source yields a valid empty view.
    #[inline(always)]
    pub const fn new(source: &'a [T]) -> Self {
        Self {
            // SAFETY: a slice pointer is never null.
            ptr: unsafe { NonNull::new_unchecked(source.as_ptr() as *mut T) },
            len: source.len(),
            _marker: PhantomData,
        }
    }

    /// Number of elements the view describes.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.len
    }

    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Reconstitutes the native slice this view was built from.
    #[inline(always)]
    pub const fn as_slice(self) -> &'a [T] {
        // SAFETY: ptr/len came from a valid `&'a [T]` in `new` and the
        // view cannot outlive that borrow.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Checked element access, `None` past the end.
    #[inline]
    pub fn get(self, index: usize) -> Option<&'a T> {
        self.as_slice().get(index)
    }

    /// Checked element access with error context.
    #[inline]
    pub fn at(self, index: usize) -> Result<&'a T, SpanError> {
        self.get(index).ok_or(SpanError::IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// O(1) sub-view of `count` elements starting at `offset`.
    pub fn slice(self, offset: usize, count: usize) -> Result<Self, SpanError> {
        match offset.checked_add(count) {
            Some(end) if end <= self.len => Ok(Self::new(&self.as_slice()[offset..end])),
            _ => Err(SpanError::SliceOutOfBounds {
                offset,
                count,
                len: self.len,
            }),
        }
    }

    /// The leading `n` elements.
    pub fn first(self, n: usize) -> Result<Self, SpanError> {
        self.slice(0, n)
    }

    /// The trailing `n` elements.
    pub fn last(self, n: usize) -> Result<Self, SpanError> {
        match self.len.checked_sub(n) {
            Some(offset) => self.slice(offset, n),
            None => Err(SpanError::SliceOutOfBounds {
                offset: 0,
                count: n,
                len: self.len,
            }),
        }
    }

    /// Lazy iteration over `[0, len())` in index order. `Span` is `Copy`,
    /// so iteration is restartable by calling `iter` again.
    #[inline]
    pub fn iter(self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<'a, T: PartialEq> Span<'a, T> {
    /// True iff the view begins with `prefix`, element-wise.
    pub fn starts_with(self, prefix: impl AsRef<[T]>) -> bool {
        self.as_slice().starts_with(prefix.as_ref())
    }

    /// True iff the view ends with `suffix`, element-wise.
    pub fn ends_with(self, suffix: impl AsRef<[T]>) -> bool {
        self.as_slice().ends_with(suffix.as_ref())
    }
}

impl<'a, T> From<&'a [T]> for Span<'a, T> {
    #[inline]
    fn from(source: &'a [T]) -> Self {
        Self::new(source)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Span<'a, T> {
    #[inline]
    fn from(source: &'a [T; N]) -> Self {
        Self::new(source)
    }
}

impl<T> Default for Span<'_, T> {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl<'a, T> IntoIterator for Span<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> AsRef<[T]> for Span<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: PartialEq> PartialEq for Span<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Span<'_, T> {}

impl<T: PartialEq> PartialEq<[T]> for Span<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Span<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: fmt::Debug> fmt::Debug for Span<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

// Same semantics as `&[T]`: sharing a view across threads is reading.
unsafe impl<T: Sync> Send for Span<'_, T> {}
unsafe impl<T: Sync> Sync for Span<'_, T> {}
