//! Error types for the screening engine
//!
//! The evaluation path itself is total: every field update coerces to a
//! finite number, and the regression, classifier, and chart projection are
//! closed-form arithmetic with no failure modes. Errors only arise on the
//! API edges - resolving a field name from text and registering observers.
//!
//! Errors are kept small and `Copy` with no heap allocation, so they can be
//! returned from a no_std build without an allocator.

use thiserror_no_std::Error;

/// Result type for screening operations
pub type ScreenResult<T> = Result<T, ScreenError>;

/// Screening errors - kept small for no_std use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenError {
    /// Field name does not match any of the seven material properties
    #[error("unknown input field")]
    UnknownField,

    /// Observer list is full; no further callbacks can be registered
    #[error("observer capacity {capacity} exhausted")]
    ObserverCapacity {
        /// Fixed capacity of the observer list
        capacity: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScreenError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnknownField => defmt::write!(fmt, "unknown input field"),
            Self::ObserverCapacity { capacity } => {
                defmt::write!(fmt, "observer capacity {} exhausted", capacity)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_copy_and_comparable() {
        let e = ScreenError::UnknownField;
        let copy = e;
        assert_eq!(e, copy);
        assert_ne!(e, ScreenError::ObserverCapacity { capacity: 4 });
    }
}
