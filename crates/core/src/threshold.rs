//! Traffic-light status tiers and the ROAS thresholds that separate them.

use serde::{Deserialize, Serialize};

use crate::error::{RoasError, RoasResult};

/// Default lower bound (inclusive) of the `Good` tier, in ROAS percent.
pub const DEFAULT_GREEN_THRESHOLD: f64 = 300.0;
/// Default lower bound (inclusive) of the `Warning` tier, in ROAS percent.
pub const DEFAULT_YELLOW_THRESHOLD: f64 = 150.0;

/// Three-tier health signal derived from a ROAS value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStatus {
    Good,
    Warning,
    Critical,
}

impl SignalStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            SignalStatus::Good => "Good",
            SignalStatus::Warning => "Warning",
            SignalStatus::Critical => "Critical",
        }
    }

    /// Traffic-light colour used by the dashboard badge.
    pub fn color(&self) -> &'static str {
        match self {
            SignalStatus::Good => "green",
            SignalStatus::Warning => "yellow",
            SignalStatus::Critical => "red",
        }
    }
}

/// A `(green, yellow)` threshold pair in ROAS percent.
///
/// The classifier assumes `green > yellow >= 0` but never checks it. Surfaces
/// that accept thresholds from users go through [`SignalThreshold::new`] or
/// [`SignalThreshold::validate`], which reject a violated pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalThreshold {
    pub green: f64,
    pub yellow: f64,
}

impl SignalThreshold {
    /// Build a validated threshold pair.
    pub fn new(green: f64, yellow: f64) -> RoasResult<Self> {
        let threshold = Self { green, yellow };
        threshold.validate()?;
        Ok(threshold)
    }

    pub fn validate(&self) -> RoasResult<()> {
        // NaN fails every comparison, so it is rejected here too.
        if self.yellow >= 0.0 && self.green > self.yellow {
            Ok(())
        } else {
            Err(RoasError::InvalidThreshold {
                green: self.green,
                yellow: self.yellow,
            })
        }
    }

    /// Fill in missing override components from `fallback`.
    ///
    /// The result is not validated: a link may carry a half-specified override
    /// that only makes sense against the global pair.
    pub fn with_overrides(fallback: &Self, green: Option<f64>, yellow: Option<f64>) -> Self {
        Self {
            green: green.unwrap_or(fallback.green),
            yellow: yellow.unwrap_or(fallback.yellow),
        }
    }
}

impl Default for SignalThreshold {
    fn default() -> Self {
        Self {
            green: DEFAULT_GREEN_THRESHOLD,
            yellow: DEFAULT_YELLOW_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let t = SignalThreshold::default();
        assert!((t.green - 300.0).abs() < f64::EPSILON);
        assert!((t.yellow - 150.0).abs() < f64::EPSILON);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_new_rejects_inverted_pair() {
        let err = SignalThreshold::new(100.0, 200.0).unwrap_err();
        assert!(matches!(err, RoasError::InvalidThreshold { .. }));
    }

    #[test]
    fn test_new_rejects_equal_pair() {
        assert!(SignalThreshold::new(150.0, 150.0).is_err());
    }

    #[test]
    fn test_new_rejects_negative_yellow() {
        assert!(SignalThreshold::new(100.0, -1.0).is_err());
    }

    #[test]
    fn test_new_rejects_nan() {
        assert!(SignalThreshold::new(f64::NAN, 100.0).is_err());
        assert!(SignalThreshold::new(300.0, f64::NAN).is_err());
    }

    #[test]
    fn test_zero_yellow_is_allowed() {
        let t = SignalThreshold::new(100.0, 0.0).unwrap();
        assert!((t.yellow).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_overrides_partial() {
        let global = SignalThreshold::default();
        let t = SignalThreshold::with_overrides(&global, Some(500.0), None);
        assert!((t.green - 500.0).abs() < f64::EPSILON);
        assert!((t.yellow - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&SignalStatus::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        assert_eq!(SignalStatus::Good.color(), "green");
    }
}
