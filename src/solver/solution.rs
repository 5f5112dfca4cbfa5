use std::fmt::Display;

use qtty::Unit;

use crate::interval::WeightedInterval;

/// Optimal selection of mutually non-overlapping intervals.
///
/// Intervals are kept in ascending end-time order, which is also ascending
/// begin-time order since no two of them overlap. `total_weight` is the sum of
/// their weights, accumulated in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<U: Unit> {
    total_weight: f64,
    intervals: Vec<WeightedInterval<U>>,
}

impl<U: Unit> Default for Solution<U> {
    fn default() -> Self {
        Self {
            total_weight: 0.0,
            intervals: Vec::new(),
        }
    }
}

impl<U: Unit> Solution<U> {
    pub(crate) fn new(total_weight: f64, intervals: Vec<WeightedInterval<U>>) -> Self {
        Self {
            total_weight,
            intervals,
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Selected intervals in ascending end-time order.
    pub fn intervals(&self) -> &[WeightedInterval<U>] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeightedInterval<U>> + '_ {
        self.intervals.iter()
    }

    pub fn into_intervals(self) -> Vec<WeightedInterval<U>> {
        self.intervals
    }

    /// Splits the solution into `(total_weight, intervals)`.
    pub fn into_parts(self) -> (f64, Vec<WeightedInterval<U>>) {
        (self.total_weight, self.intervals)
    }
}

impl<U: Unit> Display for Solution<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, [", self.total_weight)?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{interval}")?;
        }
        f.write_str("])")
    }
}

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Solution<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Solution", 2)?;
        s.serialize_field("total_weight", &self.total_weight)?;
        s.serialize_field("intervals", &self.intervals)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Second;

    fn iv(begin: f64, end: f64, weight: f64) -> WeightedInterval<Second> {
        WeightedInterval::from_f64(begin, end, weight)
    }

    #[test]
    fn test_default_is_empty() {
        let solution = Solution::<Second>::default();
        assert!(solution.is_empty());
        assert_eq!(solution.len(), 0);
        assert_eq!(solution.total_weight(), 0.0);
    }

    #[test]
    fn test_into_parts() {
        let solution = Solution::new(7.0, vec![iv(1.0, 4.0, 6.0), iv(5.0, 6.0, 1.0)]);
        let (weight, intervals) = solution.into_parts();
        assert_eq!(weight, 7.0);
        assert_eq!(intervals, vec![iv(1.0, 4.0, 6.0), iv(5.0, 6.0, 1.0)]);
    }

    #[test]
    fn test_display() {
        let solution = Solution::new(7.0, vec![iv(1.0, 4.0, 6.0), iv(5.0, 6.0, 1.0)]);
        assert_eq!(
            solution.to_string(),
            "(7.000000, [(1, 4, 6.000000), (5, 6, 1.000000)])"
        );
        assert_eq!(Solution::<Second>::default().to_string(), "(0.000000, [])");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_solution_json_format() {
        let solution = Solution::new(1.5, vec![iv(0.0, 2.0, 1.5)]);
        let json = serde_json::to_string(&solution).unwrap();
        assert_eq!(
            json,
            r#"{"total_weight":1.5,"intervals":[{"begin":0.0,"end":2.0,"weight":1.5}]}"#
        );
    }
}
