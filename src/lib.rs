//! Vista - non-owning views over contiguous data, and proof they're cheap
//!
//! # Overview
//!
//! Vista demonstrates the two halves of the zero-copy story:
//!
//! - [`Span`], [`SpanMut`], [`FixedSpan`] and [`TextView`]: allocation-free
//!   view types over storage somebody else owns, with checked slicing and
//!   compile-time lifetime enforcement (from `vista-span`).
//! - [`Comparison`]: a harness that times an owning strategy against a view
//!   strategy over the same logical input (from `vista-harness`).
//!
//! # Quick Start
//!
//! ```
//! use vista::{Comparison, Span, algo};
//!
//! let data: Vec<u64> = (0..1_000).collect();
//! let view = Span::new(&data);
//!
//! // Views slice in O(1) without copying.
//! let window = view.slice(100, 16).unwrap();
//! assert_eq!(window.len(), 16);
//! assert_eq!(window.at(0), Ok(&100));
//!
//! // Utilities are single passes over borrowed storage.
//! assert_eq!(algo::find_subsequence(view, [40, 41]), Some(40));
//!
//! // And the harness shows what the copy costs.
//! let report = Comparison::new("sum 16 elements", 1_000).run(
//!     || data[100..116].to_vec().iter().sum::<u64>(),
//!     || view.slice(100, 16).unwrap().iter().sum::<u64>(),
//! );
//! assert!(report.owning_millis() >= 0.0);
//! assert!(report.view_millis() >= 0.0);
//! ```
//!
//! # Error Handling
//!
//! Every checked operation reports [`SpanError`] *before* touching memory;
//! operations either fully succeed or fail with no side effect. A view that
//! outlives its storage is not an error value anywhere in this API — the
//! borrow checker rejects it at compile time:
//!
//! ```compile_fail
//! use vista::Span;
//!
//! let view;
//! {
//!     let data = vec![1, 2, 3];
//!     view = Span::new(&data);
//! } // data dropped here
//! let _ = view.len(); // error: `data` does not live long enough
//! ```

pub use vista_harness::{Comparison, Report};
pub use vista_span::{FixedSpan, Span, SpanError, SpanMut, TextView, algo, text};
