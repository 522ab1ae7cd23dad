//! Error type shared by the planar primitives.
//!
//! Only structurally invalid input is surfaced to callers. Degenerate geometry
//! (zero length, zero area) is handled by explicit fallback branches and never
//! produces an error.

use std::fmt;

/// Errors surfaced by the planar primitives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// Caller supplied a shape the operation cannot interpret
    /// (ring with fewer than 3 points, empty line, bad stride).
    InvalidInput { reason: String },
    /// Ring has at least 3 points but its extreme vertex has no distinct
    /// neighbours (A-B-A configuration or coincident segments).
    DegenerateRing,
    /// An intermediate floating-point solve produced a non-finite value.
    /// Recovered inside the line intersector; only visible when calling the
    /// homogeneous solver directly.
    NumericFailure { reason: String },
}

impl GeomError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn numeric(reason: impl Into<String>) -> Self {
        Self::NumericFailure {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::DegenerateRing => {
                write!(f, "ring is degenerate (extreme vertex has no distinct neighbours)")
            }
            Self::NumericFailure { reason } => write!(f, "numeric failure: {reason}"),
        }
    }
}

impl std::error::Error for GeomError {}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GeomError>;
