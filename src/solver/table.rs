//! Memo table shared by the solver strategies.
//!
//! Slot `s` holds `best(s - 1)`: slot 0 is the empty prefix, slot `k + 1`
//! covers sorted intervals `0..=k`.

use qtty::Unit;

use super::{Solution, TieBreak};
use crate::interval::WeightedInterval;
use crate::locate::boundary_unchecked;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Decision {
    /// Empty prefix.
    Base,
    /// Interval `slot - 1` is selected; continue from `prev`.
    Include { prev: usize },
    /// Interval `slot - 1` is skipped; continue from `slot - 1`.
    Exclude,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Cell {
    pub(crate) weight: f64,
    pub(crate) decision: Decision,
}

impl Cell {
    pub(crate) const BASE: Cell = Cell {
        weight: 0.0,
        decision: Decision::Base,
    };
}

/// Returns a copy of `intervals` stably sorted ascending by end time.
pub(crate) fn sort_by_end<U: Unit>(intervals: &[WeightedInterval<U>]) -> Vec<WeightedInterval<U>> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by(|a, b| a.end().value().total_cmp(&b.end().value()));
    sorted
}

/// Slot of the best compatible prefix for interval `k`.
///
/// Only intervals before `k` are searched; any later one ends no earlier than
/// `sorted[k]` and therefore cannot end before it begins.
pub(crate) fn predecessor_slot<U: Unit>(sorted: &[WeightedInterval<U>], k: usize) -> usize {
    boundary_unchecked(&sorted[..k], &sorted[k])
}

/// Chooses between including and excluding interval `slot - 1`.
pub(crate) fn decide<U: Unit>(
    sorted: &[WeightedInterval<U>],
    slot: usize,
    prev: &Cell,
    prev_slot: usize,
    without: &Cell,
    tie_break: TieBreak,
) -> Cell {
    let include = prev.weight + sorted[slot - 1].weight();
    let cell = if tie_break.prefers_include(include, without.weight) {
        Cell {
            weight: include,
            decision: Decision::Include { prev: prev_slot },
        }
    } else {
        Cell {
            weight: without.weight,
            decision: Decision::Exclude,
        }
    };
    log::trace!(
        "best({}) = {} via {:?}",
        slot as isize - 1,
        cell.weight,
        cell.decision
    );
    cell
}

/// Walks the decisions back from the last slot and collects selected intervals.
pub(crate) fn reconstruct<U: Unit>(sorted: &[WeightedInterval<U>], table: &[Cell]) -> Solution<U> {
    let Some(last) = table.last() else {
        return Solution::default();
    };

    let mut chosen = Vec::new();
    let mut slot = table.len() - 1;
    while slot > 0 {
        match table[slot].decision {
            Decision::Include { prev } => {
                chosen.push(sorted[slot - 1]);
                slot = prev;
            }
            Decision::Exclude => slot -= 1,
            Decision::Base => break,
        }
    }
    chosen.reverse();

    Solution::new(last.weight, chosen)
}
