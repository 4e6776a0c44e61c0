//! Character views over borrowed `str` data.
//!
//! [`TextView`] is the text specialization of the generic element view:
//! the same (start, length) pair, with lengths and offsets counted in
//! *bytes*. Slicing is checked twice — against the view's extent, and
//! against UTF-8 code point boundaries — so a sub-view is always itself
//! valid text.

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;
use core::slice;
use core::str;

use crate::error::SpanError;
use crate::span::Span;

/// A non-owning view of borrowed text.
///
/// # Examples
///
/// ```
/// use vista_span::TextView;
///
/// let greeting = TextView::new("Hello world");
/// assert!(greeting.starts_with("Hello"));
/// assert!(greeting.ends_with("world"));
/// assert!(!greeting.ends_with("World"));
/// assert_eq!(greeting.find("world"), Some(6));
/// ```
pub struct TextView<'a> {
    ptr: NonNull<u8>,
    len: usize,
    _marker: PhantomData<&'a str>,
}

static_assertions::assert_eq_size!(TextView, [usize; 2]);
static_assertions::assert_eq_size!(TextView, &str);

impl Clone for TextView<'_> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl Copy for TextView<'_> {}

impl<'a> TextView<'a> {
    /// Builds a view over existing text. No allocation, no copy.
    #[inline(always)]
    pub const fn new(source: &'a str) -> Self {
        Self {
            // SAFETY: a str pointer is never null.
            ptr: unsafe { NonNull::new_unchecked(source.as_ptr() as *mut u8) },
            len: source.len(),
            _marker: PhantomData,
        }
    }

    /// Length in bytes, not characters.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.len
    }

    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Reconstitutes the `&str` this view was built from.
    #[inline(always)]
    pub fn as_str(self) -> &'a str {
        // SAFETY: ptr/len came from a valid `&'a str` in `new`, and every
        // sub-view constructor re-checks char boundaries.
        unsafe {
            let bytes = slice::from_raw_parts(self.ptr.as_ptr(), self.len);
            str::from_utf8_unchecked(bytes)
        }
    }

    /// The same storage as a byte view.
    #[inline]
    pub fn bytes(self) -> Span<'a, u8> {
        Span::new(self.as_str().as_bytes())
    }

    /// Checked access to one byte.
    pub fn byte_at(self, index: usize) -> Result<u8, SpanError> {
        self.as_str()
            .as_bytes()
            .get(index)
            .copied()
            .ok_or(SpanError::IndexOutOfBounds {
                index,
                len: self.len,
            })
    }

    /// O(1) sub-view of `count` bytes starting at byte `offset`.
    ///
    /// Fails with [`SpanError::SliceOutOfBounds`] when the range does not
    /// fit, and with [`SpanError::NotCharBoundary`] when either end of the
    /// range would split a multi-byte code point.
    pub fn slice(self, offset: usize, count: usize) -> Result<Self, SpanError> {
        let text = self.as_str();
        let end = match offset.checked_add(count) {
            Some(end) if end <= self.len => end,
            _ => {
                return Err(SpanError::SliceOutOfBounds {
                    offset,
                    count,
                    len: self.len,
                });
            }
        };
        if !text.is_char_boundary(offset) {
            return Err(SpanError::NotCharBoundary { index: offset });
        }
        if !text.is_char_boundary(end) {
            return Err(SpanError::NotCharBoundary { index: end });
        }
        Ok(Self::new(&text[offset..end]))
    }

    /// The leading `n` bytes.
    pub fn first(self, n: usize) -> Result<Self, SpanError> {
        self.slice(0, n)
    }

    /// The trailing `n` bytes.
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

    /// Byte offset of the first occurrence of `needle`, or `None`.
    pub fn find(self, needle: &str) -> Option<usize> {
        self.as_str().find(needle)
    }

    pub fn starts_with(self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    pub fn ends_with(self, suffix: &str) -> bool {
        self.as_str().ends_with(suffix)
    }

    /// Lazy iteration over the characters of the view.
    pub fn chars(self) -> str::Chars<'a> {
        self.as_str().chars()
    }
}

/// Whether `bytes` spells an ASCII identifier: a letter or underscore
/// followed by letters, digits, or underscores.
///
/// Total, pure, and `const`: usable both at runtime and in `const`
/// assertions, where a rejected name becomes a compile error.
///
/// ```
/// use vista_span::text::is_identifier;
///
/// const _: () = assert!(is_identifier(b"frame_count"));
/// assert!(!is_identifier(b"2fast"));
/// assert!(!is_identifier(b""));
/// ```
pub const fn is_identifier(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return false;
    }
    if !(bytes[0].is_ascii_alphabetic() || bytes[0] == b'_') {
        return false;
    }
    let mut i = 1;
    while i < bytes.len() {
        if !(bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
            return false;
        }
        i += 1;
    }
    true
}

impl<'a> From<&'a str> for TextView<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl PartialEq for TextView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TextView<'_> {}

impl PartialEq<str> for TextView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

unsafe impl Send for TextView<'_> {}
unsafe impl Sync for TextView<'_> {}
