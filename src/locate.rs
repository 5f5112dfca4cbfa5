//! Boundary search over intervals sorted by end time.
//!
//! All functions here expect their input sorted ascending by `end`. The
//! precondition is checked with `debug_assert!` only.

use qtty::Unit;

use crate::interval::WeightedInterval;

/// Returns true if `intervals` is sorted ascending by end time.
pub fn is_sorted_by_end<U: Unit>(intervals: &[WeightedInterval<U>]) -> bool {
    intervals
        .windows(2)
        .all(|pair| pair[0].end().value() <= pair[1].end().value())
}

/// Finds the first index whose interval overlaps or touches `reference`'s begin.
///
/// Returns the smallest `i` with `sorted[i].end >= reference.begin`, or
/// `sorted.len()` if every interval ends strictly before `reference` begins.
/// An interval ending exactly at the reference's begin counts as overlapping.
///
/// Complexity: O(log n).
///
/// ```rust
/// use qtty::Second;
/// use wisched::{locate_boundary, WeightedInterval};
///
/// let sorted = [
///     WeightedInterval::<Second>::from_f64(1.0, 3.0, 1.0),
///     WeightedInterval::from_f64(2.0, 6.0, 1.0),
///     WeightedInterval::from_f64(5.0, 10.0, 1.0),
/// ];
/// assert_eq!(locate_boundary(&sorted, &sorted[2]), 1);
/// ```
pub fn locate_boundary<U: Unit>(
    sorted: &[WeightedInterval<U>],
    reference: &WeightedInterval<U>,
) -> usize {
    debug_assert!(
        is_sorted_by_end(sorted),
        "locate_boundary called with intervals not sorted by end"
    );
    boundary_unchecked(sorted, reference)
}

/// [`locate_boundary`] without the sortedness check, for callers that sorted
/// the input themselves.
pub(crate) fn boundary_unchecked<U: Unit>(
    sorted: &[WeightedInterval<U>],
    reference: &WeightedInterval<U>,
) -> usize {
    let cutoff = reference.begin();
    sorted.partition_point(|interval| interval.ends_before(cutoff))
}

/// Returns the prefix of `sorted` that ends strictly before `reference` begins.
pub fn intervals_before<'a, U: Unit>(
    sorted: &'a [WeightedInterval<U>],
    reference: &WeightedInterval<U>,
) -> &'a [WeightedInterval<U>] {
    &sorted[..locate_boundary(sorted, reference)]
}
