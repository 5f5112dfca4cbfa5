//! wisched - Weighted Interval Scheduling
//!
//! Selects the maximum-weight subset of mutually non-overlapping weighted
//! intervals on a unit-typed time axis.
//!
//! ```
//! use qtty::Second;
//! use wisched::{best_schedule, WeightedInterval};
//!
//! let intervals = [
//!     WeightedInterval::<Second>::from_f64(1.0, 2.0, 1.0),
//!     WeightedInterval::from_f64(5.0, 6.0, 1.0),
//!     WeightedInterval::from_f64(3.0, 4.0, 1.0),
//! ];
//!
//! let (total, chosen) = best_schedule(&intervals).into_parts();
//! assert_eq!(total, 3.0);
//! assert_eq!(chosen, vec![intervals[0], intervals[2], intervals[1]]);
//! ```

pub mod interval;
pub mod locate;
pub mod solver;

pub use interval::{IntervalError, WeightedInterval};
pub use locate::{intervals_before, is_sorted_by_end, locate_boundary};
pub use solver::{
    best_schedule, max_weight, MemoizedSolver, SelectionAlgorithm, Solution, SolveStats,
    TabulatedSolver, TieBreak,
};
