//! Weighted interval representation.
//!
//! A [`WeightedInterval`] is an immutable `(begin, end, weight)` triple on a
//! unit-typed time axis. Two intervals with the same three fields are
//! interchangeable; there is no identity beyond them.

mod error;

pub use error::IntervalError;

use std::fmt::Display;

use qtty::{Quantity, Unit};

/// Time span `[begin, end]` carrying a score.
///
/// Intervals are validated on construction: no field may be NaN and `begin`
/// must be strictly less than `end`. Use [`WeightedInterval::try_new`] for
/// untrusted values and [`WeightedInterval::new`] for literals.
///
/// Touching endpoints count as overlap: `(1, 4)` and `(4, 6)` cannot both be
/// selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedInterval<U: Unit> {
    begin: Quantity<U>,
    end: Quantity<U>,
    weight: f64,
}

impl<U: Unit> WeightedInterval<U> {
    /// Creates a validated interval.
    ///
    /// # Errors
    ///
    /// - [`IntervalError::NaNValue`] if any of `begin`, `end` or `weight` is NaN.
    /// - [`IntervalError::InvalidInterval`] if `begin >= end`.
    pub fn try_new(
        begin: Quantity<U>,
        end: Quantity<U>,
        weight: f64,
    ) -> Result<Self, IntervalError> {
        if begin.value().is_nan() || end.value().is_nan() || weight.is_nan() {
            return Err(IntervalError::NaNValue);
        }
        if begin.value() >= end.value() {
            return Err(IntervalError::InvalidInterval {
                begin: begin.value(),
                end: end.value(),
            });
        }
        Ok(Self { begin, end, weight })
    }

    pub fn try_from_f64(begin: f64, end: f64, weight: f64) -> Result<Self, IntervalError> {
        Self::try_new(Quantity::new(begin), Quantity::new(end), weight)
    }

    /// Creates interval `[begin, end]` with `weight`.
    ///
    /// # Panics
    ///
    /// Panics if any value is NaN or `begin >= end`.
    pub fn new(begin: Quantity<U>, end: Quantity<U>, weight: f64) -> Self {
        match Self::try_new(begin, end, weight) {
            Ok(interval) => interval,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn from_f64(begin: f64, end: f64, weight: f64) -> Self {
        Self::new(Quantity::new(begin), Quantity::new(end), weight)
    }

    pub const fn begin(&self) -> Quantity<U> {
        self.begin
    }

    pub const fn end(&self) -> Quantity<U> {
        self.end
    }

    pub const fn weight(&self) -> f64 {
        self.weight
    }

    pub fn duration(&self) -> Quantity<U> {
        self.end - self.begin
    }

    /// Returns true if this interval ends strictly before `cutoff`.
    pub fn ends_before(&self, cutoff: Quantity<U>) -> bool {
        self.end.value() < cutoff.value()
    }

    /// Checks if this interval overlaps with another interval.
    ///
    /// Shared endpoints count as overlap.
    pub fn overlaps(&self, other: &WeightedInterval<U>) -> bool {
        !(self.ends_before(other.begin) || other.ends_before(self.begin))
    }

    /// Converts this interval to another unit of the same dimension.
    ///
    /// The weight is carried over unchanged.
    ///
    /// ```rust
    /// use qtty::{Day, Second};
    /// use wisched::WeightedInterval;
    ///
    /// let in_seconds = WeightedInterval::<Second>::from_f64(0.0, 86400.0, 2.5);
    /// let in_days: WeightedInterval<Day> = in_seconds.to();
    /// assert!((in_days.end().value() - 1.0).abs() < 1e-12);
    /// assert_eq!(in_days.weight(), 2.5);
    /// ```
    pub fn to<T: Unit<Dim = U::Dim>>(self) -> WeightedInterval<T> {
        WeightedInterval {
            begin: self.begin.to(),
            end: self.end.to(),
            weight: self.weight,
        }
    }
}

impl<U: Unit> Display for WeightedInterval<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {:.6})",
            self.begin.value(),
            self.end.value(),
            self.weight
        )
    }
}

// =============================================================================
// WeightedInterval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for WeightedInterval<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("WeightedInterval", 3)?;
        s.serialize_field("begin", &self.begin.value())?;
        s.serialize_field("end", &self.end.value())?;
        s.serialize_field("weight", &self.weight)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for WeightedInterval<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            begin: f64,
            end: f64,
            weight: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::try_from_f64(raw.begin, raw.end, raw.weight).map_err(serde::de::Error::custom)
    }
}
