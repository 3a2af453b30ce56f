//! ROAS traffic-light classification.

use roas_core::{SignalStatus, SignalThreshold};

/// Classify a ROAS value against a `(green, yellow)` pair.
///
/// Each tier includes its lower edge: a ROAS equal to `green` is `Good`, equal
/// to `yellow` is `Warning`. The pair is taken as given; an inverted or negative
/// pair still yields a deterministic (if meaningless) tier. A NaN ROAS is
/// `Critical`.
pub fn classify(roas: f64, green: f64, yellow: f64) -> SignalStatus {
    if roas >= green {
        SignalStatus::Good
    } else if roas >= yellow {
        SignalStatus::Warning
    } else {
        SignalStatus::Critical
    }
}

pub fn classify_with(roas: f64, threshold: &SignalThreshold) -> SignalStatus {
    classify(roas, threshold.green, threshold.yellow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive_on_lower_edge() {
        assert_eq!(classify(300.0, 300.0, 150.0), SignalStatus::Good);
        assert_eq!(classify(299.0, 300.0, 150.0), SignalStatus::Warning);
        assert_eq!(classify(150.0, 300.0, 150.0), SignalStatus::Warning);
        assert_eq!(classify(149.0, 300.0, 150.0), SignalStatus::Critical);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(0.0, 300.0, 150.0), SignalStatus::Critical);
        assert_eq!(classify(10_000.0, 300.0, 150.0), SignalStatus::Good);
        assert_eq!(classify(f64::NAN, 300.0, 150.0), SignalStatus::Critical);
    }

    #[test]
    fn test_classify_with_default_threshold() {
        let t = SignalThreshold::default();
        assert_eq!(classify_with(133.0, &t), SignalStatus::Critical);
        assert_eq!(classify_with(150.0, &t), SignalStatus::Warning);
    }

    #[test]
    fn test_inverted_pair_is_deterministic() {
        // green below yellow: anything at or above green is Good
        assert_eq!(classify(120.0, 100.0, 200.0), SignalStatus::Good);
        assert_eq!(classify(50.0, 100.0, 200.0), SignalStatus::Critical);
    }

    #[test]
    fn test_zero_yellow_never_critical_for_non_negative_roas() {
        assert_eq!(classify(0.0, 100.0, 0.0), SignalStatus::Warning);
    }
}
