use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::SpanError;
use crate::span::Span;

/// A non-owning view whose length is the compile-time constant `N`.
///
/// Because the length lives in the type, the runtime representation is a
/// single pointer. Building one from a `&[T; N]` cannot fail; building one
/// from a runtime slice is checked once, at construction, with
/// [`SpanError::LengthMismatch`] — after that, no per-call length checks
/// against `N` are ever wrong.
///
/// # Examples
///
/// ```
/// use vista_span::FixedSpan;
///
/// let data = [1u8, 2, 3, 4];
/// let view = FixedSpan::new(&data);
/// assert_eq!(view.len(), 4);
///
/// let slice: &[u8] = &data[..3];
/// assert!(FixedSpan::<u8, 4>::try_from_slice(slice).is_err());
/// ```
pub struct FixedSpan<'a, T, const N: usize> {
    ptr: NonNull<T>,
    _marker: PhantomData<&'a [T; N]>,
}

// One word: the length is carried by the type.
static_assertions::assert_eq_size!(FixedSpan<u8, 4>, usize);
static_assertions::assert_eq_size!(FixedSpan<u64, 1024>, usize);

impl<T, const N: usize> Clone for FixedSpan<'_, T, N> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for FixedSpan<'_, T, N> {}

impl<'a, T, const N: usize> FixedSpan<'a, T, N> {
    /// The compile-time element count.
    pub const LEN: usize = N;

    /// Builds a view over an array reference. Cannot fail.
    #[inline(always)]
    pub const fn new(source: &'a [T; N]) -> Self {
        Self {
            // SAFETY: an array reference is never null.
            ptr: unsafe { NonNull::new_unchecked(source.as_ptr() as *mut T) },
            _marker: PhantomData,
        }
    }

    /// Builds a view from a runtime slice, rejecting any length other
    /// than `N` at construction time.
    pub fn try_from_slice(source: &'a [T]) -> Result<Self, SpanError> {
        if source.len() != N {
            return Err(SpanError::LengthMismatch {
                expected: N,
                actual: source.len(),
            });
        }
        Ok(Self {
            // SAFETY: a slice pointer is never null.
            ptr: unsafe { NonNull::new_unchecked(source.as_ptr() as *mut T) },
            _marker: PhantomData,
        })
    }

    #[inline(always)]
    pub const fn len(self) -> usize {
        N
    }

    pub const fn is_empty(self) -> bool {
        N == 0
    }

    /// The borrowed array.
    #[inline(always)]
    pub const fn as_array(self) -> &'a [T; N] {
        // SAFETY: ptr came from a borrow of exactly `N` elements.
        unsafe { &*(self.ptr.as_ptr() as *const [T; N]) }
    }

    /// Erases the compile-time length into an ordinary [`Span`].
    #[inline]
    pub const fn as_span(self) -> Span<'a, T> {
        Span::new(self.as_array())
    }

    pub fn get(self, index: usize) -> Option<&'a T> {
        self.as_array().get(index)
    }

    pub fn at(self, index: usize) -> Result<&'a T, SpanError> {
        self.get(index)
            .ok_or(SpanError::IndexOutOfBounds { index, len: N })
    }

    pub fn iter(self) -> core::slice::Iter<'a, T> {
        self.as_array().iter()
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for FixedSpan<'a, T, N> {
    fn from(source: &'a [T; N]) -> Self {
        Self::new(source)
    }
}

impl<'a, T, const N: usize> TryFrom<&'a [T]> for FixedSpan<'a, T, N> {
    type Error = SpanError;

    fn try_from(source: &'a [T]) -> Result<Self, SpanError> {
        Self::try_from_slice(source)
    }
}

impl<T: PartialEq, const N: usize> PartialEq for FixedSpan<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_array() == other.as_array()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for FixedSpan<'_, T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_array() == other
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedSpan<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_array().fmt(f)
    }
}

unsafe impl<T: Sync, const N: usize> Send for FixedSpan<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for FixedSpan<'_, T, N> {}
