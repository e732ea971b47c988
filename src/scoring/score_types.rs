//! Type-safe normalized score.
//!
//! Pain scores and industry fit both live on a 0-1 scale. Wrapping them in
//! [`Score0To1`] makes the bounds part of the type: construction clamps, so a
//! value held by the type is always inside [0.0, 1.0].
//!
//! ```rust
//! use airoi::scoring::Score0To1;
//!
//! let score = Score0To1::new(0.42);
//! assert_eq!(score.value(), 0.42);
//!
//! // Out-of-bounds values are clamped
//! assert_eq!(Score0To1::new(1.7).value(), 1.0);
//! assert_eq!(Score0To1::new(-0.2).value(), 0.0);
//! ```

use serde::Serialize;

/// Score on 0-1 scale (normalized).
///
/// Values are automatically clamped to the [0.0, 1.0] range. NaN maps to 0.0.
/// Serialize-only: every score is computed, none is read back.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score0To1(f64);

impl Score0To1 {
    pub const ZERO: Score0To1 = Score0To1(0.0);

    /// Create a new normalized score, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Arithmetic mean of two scores. Stays in bounds by construction.
    pub fn mean(self, other: Score0To1) -> Score0To1 {
        Score0To1((self.0 + other.0) / 2.0)
    }
}

impl std::fmt::Display for Score0To1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_upper_bound() {
        assert_eq!(Score0To1::new(1.5).value(), 1.0);
    }

    #[test]
    fn clamps_lower_bound() {
        assert_eq!(Score0To1::new(-0.5).value(), 0.0);
    }

    #[test]
    fn nan_becomes_zero() {
        assert_eq!(Score0To1::new(f64::NAN), Score0To1::ZERO);
    }

    #[test]
    fn mean_of_two_scores() {
        let mean = Score0To1::new(0.2).mean(Score0To1::new(0.6));
        assert!((mean.value() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Score0To1::new(0.216).to_string(), "0.22");
    }

    #[test]
    fn serializes_as_clamped_number() {
        assert_eq!(serde_json::to_string(&Score0To1::new(0.5)).unwrap(), "0.5");
        assert_eq!(serde_json::to_string(&Score0To1::new(7.0)).unwrap(), "1.0");
    }
}
