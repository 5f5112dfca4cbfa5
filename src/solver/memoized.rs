//! Top-down evaluation of the include/exclude recurrence.
//!
//! The recurrence is walked from the last interval towards the empty prefix
//! with an explicit work stack, so the call stack stays flat no matter how many
//! intervals are given. Results are cached per slot for the duration of one
//! call only.

use qtty::Unit;

use super::table::{decide, predecessor_slot, reconstruct, sort_by_end, Cell};
use super::{SelectionAlgorithm, Solution, SolveStats, TieBreak};
use crate::interval::WeightedInterval;

/// Memoized recursion over sub-problems keyed by sorted index.
///
/// Produces the same solutions as [`TabulatedSolver`](super::TabulatedSolver)
/// for the same [`TieBreak`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoizedSolver {
    tie_break: TieBreak,
}

impl MemoizedSolver {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

impl<U: Unit> SelectionAlgorithm<U> for MemoizedSolver {
    fn select_with_stats(&self, intervals: &[WeightedInterval<U>]) -> (Solution<U>, SolveStats) {
        let sorted = sort_by_end(intervals);
        let n = sorted.len();
        let mut stats = SolveStats::default();

        let mut memo: Vec<Option<Cell>> = vec![None; n + 1];
        memo[0] = Some(Cell::BASE);
        let mut prev_slots: Vec<Option<usize>> = vec![None; n + 1];

        let mut pending = vec![n];
        while let Some(&slot) = pending.last() {
            if memo[slot].is_some() {
                pending.pop();
                continue;
            }

            let prev_slot = match prev_slots[slot] {
                Some(prev_slot) => prev_slot,
                None => {
                    let prev_slot = predecessor_slot(&sorted, slot - 1);
                    stats.boundary_queries += 1;
                    prev_slots[slot] = Some(prev_slot);
                    prev_slot
                }
            };

            match (memo[prev_slot], memo[slot - 1]) {
                (Some(with), Some(without)) => {
                    memo[slot] = Some(decide(
                        &sorted,
                        slot,
                        &with,
                        prev_slot,
                        &without,
                        self.tie_break,
                    ));
                    stats.subproblems_evaluated += 1;
                    pending.pop();
                }
                (with, without) => {
                    if without.is_none() {
                        pending.push(slot - 1);
                    }
                    if with.is_none() && prev_slot != slot - 1 {
                        pending.push(prev_slot);
                    }
                }
            }
        }

        let table: Vec<Cell> = memo.into_iter().flatten().collect();
        debug_assert_eq!(table.len(), n + 1);

        (reconstruct(&sorted, &table), stats)
    }
}
