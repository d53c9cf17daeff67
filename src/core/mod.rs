//! Low-level, allocation-light primitives.
//!
//! - [`coord`]: signed offsets and the king step set.
//! - [`square`]: bounds-checked squares and board dimensions.
//! - [`bitset`]: a packed set of squares (the reachability overlay).

pub mod bitset;
pub mod coord;
pub mod square;
