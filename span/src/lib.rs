//! Non-owning views over contiguous data.
//!
//! A view is an explicit (start, length) pair describing elements somebody
//! else owns. It never allocates, never copies element data, and is small
//! enough to pass by value everywhere — two machine words for [`Span`] and
//! [`TextView`], one for [`FixedSpan`]:
//!
//! ```text
//! owning container:  [a, b, c, d, e, f, g, h]
//!                        ▲
//! Span:  (ptr ──────────┘, len = 4)   describes b..=e, owns nothing
//! ```
//!
//! The "never outlives its storage" rule is carried by a lifetime
//! parameter, so misuse is a compile error rather than a runtime check —
//! the view costs exactly what a native slice costs. Range-taking
//! operations are validated up front and report [`SpanError`] before any
//! memory is touched.
//!
//! # Example
//!
//! ```
//! use vista_span::{Span, SpanMut, algo};
//!
//! let mut data = [10, 20, 30, 40, 50, 60, 70, 80];
//!
//! // Any number of shared views may alias the storage...
//! let view = Span::new(&data);
//! assert_eq!(view.slice(2, 3).unwrap(), [30, 40, 50]);
//! assert_eq!(algo::find_subsequence(view, [40, 50]), Some(3));
//!
//! // ...and an exclusive view mutates it in place.
//! let mut view = SpanMut::new(&mut data);
//! *view.at_mut(0).unwrap() = 11;
//! assert_eq!(data[0], 11);
//! ```
//!
//! # Gotchas
//!
//! - Views are cheap to copy and meant to be passed by value; taking
//!   `&Span` reintroduces the indirection the type exists to remove.
//! - [`TextView`] counts bytes, not characters, and refuses to slice
//!   through a multi-byte code point.

#![no_std]
#![allow(unsafe_code)]

pub mod algo;
mod error;
mod fixed;
mod span;
mod span_mut;
pub mod text;

pub use error::SpanError;
pub use fixed::FixedSpan;
pub use span::Span;
pub use span_mut::SpanMut;
pub use text::TextView;
