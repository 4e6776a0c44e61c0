use thiserror::Error;

/// Error type for every checked view operation.
///
/// Each variant carries enough context to render a useful message without
/// holding onto the view itself. All variants are detected *before* any
/// memory access happens, so a failed operation has no side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpanError {
    /// An indexed access past the end of the view.
    #[error("index {index} out of bounds for view of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A sub-view request whose range does not fit inside the view.
    #[error("slice at offset {offset} with count {count} exceeds view of length {len}")]
    SliceOutOfBounds {
        offset: usize,
        count: usize,
        len: usize,
    },

    /// A text slice that would split a multi-byte UTF-8 code point.
    #[error("byte offset {index} is not a character boundary")]
    NotCharBoundary { index: usize },

    /// A fixed-length view constructed from a source of the wrong length.
    #[error("expected a source of length {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
