//! Maximum-weight selection of mutually non-overlapping intervals.
//!
//! Intervals are stably sorted by end time, then for every prefix `0..=k` the
//! solver keeps the best weight reachable, `best(k)`, with `best(-1) = 0`:
//!
//! ```text
//! best(k) = max( best(j) + weight(k),   // include interval k
//!                best(k - 1) )          // exclude interval k
//! ```
//!
//! where `j` is the last interval ending strictly before interval `k` begins
//! (see [`locate_boundary`](crate::locate::locate_boundary)). Every `best(k)`
//! is stored in a table owned by a single call, so each sub-problem is
//! evaluated once and nothing is shared between calls.
//!
//! # Tie-break
//!
//! When both branches reach the same weight the [`TieBreak`] decides.
//! The default, [`TieBreak::PreferInclude`], keeps the later-ending interval,
//! which means zero-weight intervals are selected whenever they fit.
//! Intervals with negative weight are never selected.
//!
//! # Module Structure
//!
//! - [`TabulatedSolver`] - iterative bottom-up table
//! - [`MemoizedSolver`] - top-down recurrence with a per-call memo

mod memoized;
mod solution;
mod table;
mod tabulated;


use qtty::Unit;

use crate::interval::WeightedInterval;

pub use memoized::MemoizedSolver;
pub use solution::Solution;
pub use tabulated::TabulatedSolver;

/// Policy for choosing between equally weighted include/exclude branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Select the later-ending interval on ties (`>=`).
    #[default]
    PreferInclude,
    /// Skip the later-ending interval on ties (`>`).
    PreferExclude,
}

impl TieBreak {
    /// Returns true if the include branch wins.
    pub fn prefers_include(self, include: f64, exclude: f64) -> bool {
        match self {
            TieBreak::PreferInclude => include >= exclude,
            TieBreak::PreferExclude => include > exclude,
        }
    }
}

/// Work counters collected during one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Number of `best(k)` values computed, excluding the empty-prefix base case.
    pub subproblems_evaluated: usize,
    /// Number of boundary searches performed.
    pub boundary_queries: usize,
}

/// Algorithm selecting a maximum-weight set of non-overlapping intervals.
///
/// # Type Parameters
///
/// * `U` - Unit of time measurement (e.g., [`qtty::Second`])
pub trait SelectionAlgorithm<U: Unit> {
    /// Solves for `intervals` and reports the work performed.
    ///
    /// `intervals` may be empty, unsorted and contain duplicates.
    fn select_with_stats(&self, intervals: &[WeightedInterval<U>]) -> (Solution<U>, SolveStats);

    /// Solves for `intervals`.
    fn select(&self, intervals: &[WeightedInterval<U>]) -> Solution<U> {
        let (solution, stats) = self.select_with_stats(intervals);
        log::debug!(
            "Selected {} of {} intervals, total weight {} ({} sub-problems, {} boundary queries)",
            solution.len(),
            intervals.len(),
            solution.total_weight(),
            stats.subproblems_evaluated,
            stats.boundary_queries
        );
        solution
    }
}

/// Computes the optimal schedule with the default [`TabulatedSolver`].
///
/// # Examples
///
/// ```
/// use qtty::Second;
/// use wisched::{best_schedule, WeightedInterval};
///
/// let intervals = [
///     WeightedInterval::<Second>::from_f64(1.0, 4.0, 6.0),
///     WeightedInterval::from_f64(5.0, 6.0, 1.0),
///     WeightedInterval::from_f64(3.0, 4.0, 1.0),
/// ];
///
/// let solution = best_schedule(&intervals);
/// assert_eq!(solution.total_weight(), 7.0);
/// assert_eq!(
///     solution.intervals(),
///     &[intervals[0], intervals[1]]
/// );
/// ```
pub fn best_schedule<U: Unit>(intervals: &[WeightedInterval<U>]) -> Solution<U> {
    TabulatedSolver::default().select(intervals)
}

/// Returns only the optimal total weight for `intervals`.
pub fn max_weight<U: Unit>(intervals: &[WeightedInterval<U>]) -> f64 {
    best_schedule(intervals).total_weight()
}
