//! Screening core for MofScreen
//!
//! Predicts hydrogen working uptake for porous frameworks (MOFs) from seven
//! geometric and material descriptors, then classifies the prediction
//! against the fixed DOE storage targets.
//!
//! Key properties:
//! - Pure arithmetic core, no_std-capable
//! - Field updates never fail: unparseable text coerces to 0.0
//! - Exactly one synchronous recomputation per committed update
//!
//! ```
//! use mofscreen_core::{InputField, Screener};
//!
//! let mut screener = Screener::default();
//! screener.set_field(InputField::Pv, "1.4");
//!
//! let snapshot = screener.snapshot();
//! if snapshot.verdict.overall() {
//!     // promising candidate
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod chart;
pub mod constants;
pub mod errors;
pub mod inputs;
pub mod regression;
pub mod screener;
pub mod verdict;

// Public API
pub use chart::{project, ChartData, ChartDatum, Metric};
pub use errors::{ScreenError, ScreenResult};
pub use inputs::{InputField, MaterialInputs};
pub use regression::{evaluate, WorkingUptake};
pub use screener::{Screener, Snapshot};
pub use verdict::{Targets, Verdict, DOE_TARGETS};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
