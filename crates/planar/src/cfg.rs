//! Numeric constants (internal).
//!
//! Policy
//! - Fixed constants, no runtime tolerance configuration. Every predicate in the
//!   crate is exact or filter-certified, so there is nothing for callers to tune.

/// Relative error bound for the orientation filter. Exceeds the worst-case
/// relative rounding error of the two-product determinant in `f64`.
pub(crate) const FILTER_EPS: f64 = 1e-15;

/// Number of ordinates the core reads from every coordinate tuple.
pub(crate) const XY: usize = 2;
