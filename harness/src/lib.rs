//! A small harness for timing an owning code path against a view code path.
//!
//! The two strategies run back-to-back, never interleaved, each exactly
//! `iterations` times over the same logical input. Every iteration's result
//! is folded into an accumulator that passes through
//! [`core::hint::black_box`], so an optimizing compiler cannot elide either
//! loop; the accumulator is part of the returned [`Report`] rather than a
//! process-global cell, so tests can assert no call was dropped.
//!
//! Results are indicative, not rigorous: there is no warm-up phase, and the
//! strategies usually compare whole workloads (allocate-and-copy vs. slice)
//! rather than isolating a single variable. Use the criterion benches for
//! numbers worth quoting.
//!
//! # Example
//!
//! ```
//! use vista_harness::Comparison;
//!
//! let data: Vec<u64> = (0..64).collect();
//!
//! let report = Comparison::new("sum of a sub-range", 1_000).run(
//!     || data[8..24].to_vec().iter().sum::<u64>(),
//!     || data[8..24].iter().sum::<u64>(),
//! );
//!
//! assert!(report.owning_millis() >= 0.0);
//! assert!(report.view_millis() >= 0.0);
//! ```

use core::hint::black_box;
use std::time::{Duration, Instant};

use tracing::debug;

/// One owning-vs-view timing comparison, ready to run.
///
/// Ephemeral: construct, [`run`](Self::run) once, read the [`Report`].
#[derive(Debug, Clone, Copy)]
pub struct Comparison<'a> {
    label: &'a str,
    iterations: u32,
}

impl<'a> Comparison<'a> {
    /// `iterations` must be positive; both strategies will run exactly
    /// that many times.
    pub fn new(label: &'a str, iterations: u32) -> Self {
        assert!(iterations > 0, "iteration count must be positive");
        Self { label, iterations }
    }

    /// Times `owning`, then `view`, each `iterations` times back-to-back.
    ///
    /// Each call's return value is added (wrapping) into the shared
    /// accumulator. Panics from a strategy propagate uncaught; the harness
    /// neither wraps nor retries.
    pub fn run<O, V>(self, mut owning: O, mut view: V) -> Report
    where
        O: FnMut() -> u64,
        V: FnMut() -> u64,
    {
        let mut accumulator: u64 = 0;

        let start = Instant::now();
        for _ in 0..self.iterations {
            accumulator = black_box(accumulator.wrapping_add(owning()));
        }
        let owning_time = start.elapsed();

        let start = Instant::now();
        for _ in 0..self.iterations {
            accumulator = black_box(accumulator.wrapping_add(view()));
        }
        let view_time = start.elapsed();

        let report = Report {
            owning: owning_time,
            view: view_time,
            accumulator,
        };

        debug!(
            label = self.label,
            iterations = self.iterations,
            owning_ms = report.owning_millis(),
            view_ms = report.view_millis(),
            accumulator,
            "comparison finished"
        );

        report
    }
}

/// The outcome of one comparison: two durations in a common unit and the
/// final accumulator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Total wall-clock time the owning strategy took.
    pub owning: Duration,
    /// Total wall-clock time the view strategy took.
    pub view: Duration,
    /// Wrapping sum of every value either strategy returned.
    pub accumulator: u64,
}

impl Report {
    /// Owning-strategy time in fractional milliseconds.
    pub fn owning_millis(&self) -> f64 {
        self.owning.as_secs_f64() * 1e3
    }

    /// View-strategy time in fractional milliseconds.
    pub fn view_millis(&self) -> f64 {
        self.view.as_secs_f64() * 1e3
    }

    /// How many times faster the view strategy was. Infinite when the view
    /// loop was too fast for the clock to register.
    pub fn speedup(&self) -> f64 {
        self.owning.as_secs_f64() / self.view.as_secs_f64()
    }
}
