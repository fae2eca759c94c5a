//! Bar-chart projection of screening results
//!
//! Emits a fixed two-entry dataset a renderer can draw directly: one bar
//! per metric, gravimetric first. Values are clamped to zero for display
//! so a negative prediction never renders as a downward bar - the
//! classifier still judged the raw signed value, and the pass flag here
//! reflects that judgement.

use crate::regression::WorkingUptake;
use crate::verdict::{Targets, Verdict};

/// The two charted metrics, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Metric {
    /// Working uptake per unit mass
    Gravimetric,
    /// Working uptake per unit volume
    Volumetric,
}

impl Metric {
    /// Display label used on the chart axis
    pub const fn label(&self) -> &'static str {
        match self {
            Metric::Gravimetric => "Gravimetric (wt%)",
            Metric::Volumetric => "Volumetric (g/L)",
        }
    }

    /// Unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            Metric::Gravimetric => "wt%",
            Metric::Volumetric => "g/L",
        }
    }
}

/// One bar of the screening chart.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartDatum {
    /// Display label for the metric
    pub name: &'static str,
    /// Prediction clamped to zero for display
    pub value: f64,
    /// Target bar height
    pub target: f64,
    /// Whether the raw prediction met the target
    pub passing: bool,
}

/// Chart dataset: the two bars plus the renderer's target-bar toggle.
///
/// Recreated fresh from every snapshot; never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartData {
    /// Bars in fixed order: gravimetric, then volumetric
    pub series: [ChartDatum; 2],
    /// Whether the renderer should draw the target bars. Passed through
    /// untouched - the dataset itself always carries the target values,
    /// and the flag never changes its shape.
    pub show_targets: bool,
}

/// Project a classified prediction into the chart dataset.
pub fn project(
    uptake: &WorkingUptake,
    targets: &Targets,
    verdict: &Verdict,
    show_targets: bool,
) -> ChartData {
    ChartData {
        series: [
            ChartDatum {
                name: Metric::Gravimetric.label(),
                value: uptake.gravimetric.max(0.0),
                target: targets.gravimetric,
                passing: verdict.gravimetric,
            },
            ChartDatum {
                name: Metric::Volumetric.label(),
                value: uptake.volumetric.max(0.0),
                target: targets.volumetric,
                passing: verdict.volumetric,
            },
        ],
        show_targets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::DOE_TARGETS;

    fn sample_uptake() -> WorkingUptake {
        WorkingUptake {
            gravimetric: 6.2,
            volumetric: 45.0,
        }
    }

    #[test]
    fn series_order_is_fixed() {
        let uptake = sample_uptake();
        let verdict = Verdict::classify(&uptake, &DOE_TARGETS);
        let chart = project(&uptake, &DOE_TARGETS, &verdict, true);

        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "Gravimetric (wt%)");
        assert_eq!(chart.series[1].name, "Volumetric (g/L)");
    }

    #[test]
    fn negative_predictions_clamp_to_zero_but_still_fail() {
        let uptake = WorkingUptake {
            gravimetric: -1.5,
            volumetric: -10.0,
        };
        let verdict = Verdict::classify(&uptake, &DOE_TARGETS);
        let chart = project(&uptake, &DOE_TARGETS, &verdict, true);

        assert_eq!(chart.series[0].value, 0.0);
        assert_eq!(chart.series[1].value, 0.0);
        assert!(!chart.series[0].passing);
        assert!(!chart.series[1].passing);
    }

    #[test]
    fn targets_are_emitted_regardless_of_toggle() {
        let uptake = sample_uptake();
        let verdict = Verdict::classify(&uptake, &DOE_TARGETS);

        let shown = project(&uptake, &DOE_TARGETS, &verdict, true);
        let hidden = project(&uptake, &DOE_TARGETS, &verdict, false);

        assert_eq!(shown.series, hidden.series);
        assert_eq!(hidden.series[0].target, DOE_TARGETS.gravimetric);
        assert_eq!(hidden.series[1].target, DOE_TARGETS.volumetric);
        assert!(shown.show_targets);
        assert!(!hidden.show_targets);
    }

    #[test]
    fn pass_flags_mirror_the_verdict() {
        let uptake = WorkingUptake {
            gravimetric: 5.5,
            volumetric: 39.0,
        };
        let verdict = Verdict::classify(&uptake, &DOE_TARGETS);
        let chart = project(&uptake, &DOE_TARGETS, &verdict, false);

        assert_eq!(chart.series[0].passing, verdict.gravimetric);
        assert_eq!(chart.series[1].passing, verdict.volumetric);
    }
}
