//! Bottom-up dynamic programming over end-time-sorted intervals.

use qtty::Unit;

use super::table::{decide, predecessor_slot, reconstruct, sort_by_end, Cell};
use super::{SelectionAlgorithm, Solution, SolveStats, TieBreak};
use crate::interval::WeightedInterval;

/// Fills the memo table iteratively from the empty prefix up to the full input.
///
/// Each sub-problem is evaluated exactly once, and each evaluation performs one
/// binary-search boundary query, for O(n log n) total work.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedSolver {
    tie_break: TieBreak,
}

impl TabulatedSolver {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

impl<U: Unit> SelectionAlgorithm<U> for TabulatedSolver {
    fn select_with_stats(&self, intervals: &[WeightedInterval<U>]) -> (Solution<U>, SolveStats) {
        let sorted = sort_by_end(intervals);
        let mut stats = SolveStats::default();

        let mut table: Vec<Cell> = Vec::with_capacity(sorted.len() + 1);
        table.push(Cell::BASE);

        for k in 0..sorted.len() {
            let prev_slot = predecessor_slot(&sorted, k);
            stats.boundary_queries += 1;

            let cell = decide(
                &sorted,
                k + 1,
                &table[prev_slot],
                prev_slot,
                &table[k],
                self.tie_break,
            );
            table.push(cell);
            stats.subproblems_evaluated += 1;
        }

        (reconstruct(&sorted, &table), stats)
    }
}
