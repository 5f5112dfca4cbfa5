use thiserror::Error;

/// Errors raised when constructing a [`WeightedInterval`](super::WeightedInterval).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntervalError {
    #[error("Invalid interval: begin {begin} must be strictly before end {end}")]
    InvalidInterval { begin: f64, end: f64 },

    #[error("Interval values cannot be NaN")]
    NaNValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_interval_display() {
        let e = IntervalError::InvalidInterval {
            begin: 4.0,
            end: 2.0,
        };
        assert_eq!(
            e.to_string(),
            "Invalid interval: begin 4 must be strictly before end 2"
        );
    }

    #[test]
    fn nan_value_display() {
        assert_eq!(
            IntervalError::NaNValue.to_string(),
            "Interval values cannot be NaN"
        );
    }
}
