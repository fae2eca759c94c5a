//! Bounded-collection capacities
//!
//! All collections in the core are fixed-capacity so the crate never
//! allocates, in std and no_std builds alike.

/// Maximum number of observers one screener notifies per update.
///
/// A front-end typically registers one or two callbacks (render, log);
/// the bound exists so registration stays allocation-free.
pub const MAX_OBSERVERS: usize = 4;
