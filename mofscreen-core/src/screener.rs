//! Reactive screening engine
//!
//! Owns the single current input vector and re-derives the full screening
//! snapshot synchronously on every committed field update - exactly one
//! recomputation per update, no debouncing, no caching between input
//! versions. Front-ends either read the snapshot after each update or
//! register an observer callback to be notified of it.

use crate::{
    chart::{self, ChartData},
    constants::capacity::MAX_OBSERVERS,
    errors::{ScreenError, ScreenResult},
    inputs::{InputField, MaterialInputs},
    regression,
    verdict::{Targets, Verdict},
};

#[cfg(feature = "log")]
macro_rules! screen_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! screen_debug {
    ($($arg:tt)*) => {};
}

/// Fully derived state for one input version.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    /// Inputs the snapshot was derived from
    pub inputs: MaterialInputs,
    /// Predicted working uptake
    pub uptake: regression::WorkingUptake,
    /// Pass/fail classification of the prediction
    pub verdict: Verdict,
}

/// Observer callback invoked after every recomputation.
pub type Observer = fn(&Snapshot);

/// Reactive screening engine.
///
/// Updates are single-field, immediately applied, and fully serialized by
/// construction: one update completes and triggers one recomputation
/// before the next can be observed.
#[derive(Debug, Clone)]
pub struct Screener {
    inputs: MaterialInputs,
    targets: Targets,
    snapshot: Snapshot,
    observers: heapless::Vec<Observer, MAX_OBSERVERS>,
}

impl Default for Screener {
    fn default() -> Self {
        Self::new(MaterialInputs::default(), Targets::default())
    }
}

impl Screener {
    /// Create an engine with explicit starting inputs and targets.
    pub fn new(inputs: MaterialInputs, targets: Targets) -> Self {
        let snapshot = derive(inputs, &targets);
        Self {
            inputs,
            targets,
            snapshot,
            observers: heapless::Vec::new(),
        }
    }

    /// Current input vector.
    pub fn inputs(&self) -> &MaterialInputs {
        &self.inputs
    }

    /// Targets in force for classification.
    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    /// Latest derived snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Update one field from user-entered text and recompute.
    ///
    /// Unparseable text stores `0.0`; the update itself never fails.
    pub fn set_field(&mut self, field: InputField, raw: &str) {
        self.commit(self.inputs.with_text(field, raw));
    }

    /// Update one field with an already-numeric value and recompute.
    pub fn set_value(&mut self, field: InputField, value: f64) {
        self.commit(self.inputs.with_field(field, value));
    }

    /// Project the current snapshot into the chart dataset.
    ///
    /// `show_targets` belongs to the presentation layer and is passed
    /// through untouched.
    pub fn chart(&self, show_targets: bool) -> ChartData {
        chart::project(
            &self.snapshot.uptake,
            &self.targets,
            &self.snapshot.verdict,
            show_targets,
        )
    }

    /// Register an observer called once per committed update.
    pub fn subscribe(&mut self, observer: Observer) -> ScreenResult<()> {
        self.observers.push(observer).map_err(|_| ScreenError::ObserverCapacity {
            capacity: MAX_OBSERVERS,
        })
    }

    fn commit(&mut self, next: MaterialInputs) {
        self.inputs = next;
        self.snapshot = derive(next, &self.targets);
        screen_debug!(
            "recomputed: wug={:.4} wuv={:.4} pass={}",
            self.snapshot.uptake.gravimetric,
            self.snapshot.uptake.volumetric,
            self.snapshot.verdict.overall()
        );
        for observer in &self.observers {
            observer(&self.snapshot);
        }
    }
}

fn derive(inputs: MaterialInputs, targets: &Targets) -> Snapshot {
    let uptake = regression::evaluate(&inputs);
    let verdict = Verdict::classify(&uptake, targets);
    Snapshot {
        inputs,
        uptake,
        verdict,
    }
}
