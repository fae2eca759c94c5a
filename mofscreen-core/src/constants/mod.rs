//! Shared constants for the screening engine
//!
//! Grouped by concern so call sites import only what they need. The
//! regression coefficient tables live next to the evaluator in
//! [`crate::regression`]; everything here is configuration the rest of the
//! crate and its front-ends read.

pub mod capacity;
pub mod screening;
