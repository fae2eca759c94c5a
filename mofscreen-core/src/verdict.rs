//! DOE target classification
//!
//! Compares a predicted working uptake against the fixed Department of
//! Energy storage targets. Comparison is inclusive: a prediction exactly
//! on the target passes. Classification always sees the raw signed
//! prediction - the chart's non-negative display clamp never feeds back
//! into pass/fail.

use crate::constants::screening::{WUG_TARGET_WT_PCT, WUV_TARGET_G_PER_L};
use crate::regression::WorkingUptake;

/// Pass/fail targets for the two uptake metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Targets {
    /// Gravimetric target [wt%]
    pub gravimetric: f64,
    /// Volumetric target [g/L]
    pub volumetric: f64,
}

/// The DOE screening bar: 5.5 wt% and 40 g/L.
pub const DOE_TARGETS: Targets = Targets {
    gravimetric: WUG_TARGET_WT_PCT,
    volumetric: WUV_TARGET_G_PER_L,
};

impl Default for Targets {
    fn default() -> Self {
        DOE_TARGETS
    }
}

/// Pass/fail result of one screening evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Verdict {
    /// Gravimetric uptake meets its target
    pub gravimetric: bool,
    /// Volumetric uptake meets its target
    pub volumetric: bool,
}

impl Verdict {
    /// Classify a prediction against `targets`.
    pub fn classify(uptake: &WorkingUptake, targets: &Targets) -> Self {
        Self {
            gravimetric: uptake.gravimetric >= targets.gravimetric,
            volumetric: uptake.volumetric >= targets.volumetric,
        }
    }

    /// Both metrics meet their targets.
    pub const fn overall(&self) -> bool {
        self.gravimetric && self.volumetric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_pass_inclusively() {
        let uptake = WorkingUptake {
            gravimetric: 5.5,
            volumetric: 40.0,
        };
        let verdict = Verdict::classify(&uptake, &DOE_TARGETS);
        assert!(verdict.gravimetric);
        assert!(verdict.volumetric);
        assert!(verdict.overall());
    }

    #[test]
    fn one_failing_metric_fails_overall() {
        let uptake = WorkingUptake {
            gravimetric: 9.0,
            volumetric: 39.9,
        };
        let verdict = Verdict::classify(&uptake, &DOE_TARGETS);
        assert!(verdict.gravimetric);
        assert!(!verdict.volumetric);
        assert!(!verdict.overall());
    }

    #[test]
    fn negative_predictions_fail_both() {
        let uptake = WorkingUptake {
            gravimetric: -4.47194,
            volumetric: -49.6238,
        };
        let verdict = Verdict::classify(&uptake, &DOE_TARGETS);
        assert!(!verdict.gravimetric);
        assert!(!verdict.volumetric);
        assert!(!verdict.overall());
    }

    #[test]
    fn custom_targets_are_honored() {
        let uptake = WorkingUptake {
            gravimetric: 3.0,
            volumetric: 20.0,
        };
        let relaxed = Targets {
            gravimetric: 2.5,
            volumetric: 15.0,
        };
        assert!(Verdict::classify(&uptake, &relaxed).overall());
        assert!(!Verdict::classify(&uptake, &DOE_TARGETS).overall());
    }
}
