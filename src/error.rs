//! Error types for polynomial construction and reduction.

use std::fmt;

/// Errors that can occur while building or reducing a [`crate::Polynomial`].
#[derive(Debug, Clone, PartialEq)]
pub enum PolyError {
    /// Attempted to add a polynomial whose variable capacity exceeds this
    /// polynomial's own, or to construct one with a degenerate capacity.
    CapacityError {
        /// Capacity (`var_size`) of the polynomial being added to.
        have: usize,
        /// Capacity required by the operand.
        need: usize,
    },
    /// A variable index was used that is not below `var_size`.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The polynomial's variable capacity.
        var_size: usize,
    },
    /// An operation was attempted that would violate a structural invariant,
    /// e.g. a substitution tail that reintroduces the variable being
    /// replaced, or phase optimization while proof generation is active.
    InvariantViolation {
        /// Human-readable description of the violated invariant.
        reason: String,
    },
    /// The proof writer could not open one of its output files.
    FileError {
        /// Path that could not be opened.
        path: String,
        /// Underlying I/O error, stringified (kept `Clone`/`PartialEq`).
        source: String,
    },
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyError::CapacityError { have, need } => write!(
                f,
                "capacity error: polynomial has capacity {have} but operand needs {need}"
            ),
            PolyError::OutOfRange { index, var_size } => write!(
                f,
                "variable index {index} out of range for capacity {var_size}"
            ),
            PolyError::InvariantViolation { reason } => {
                write!(f, "invariant violation: {reason}")
            }
            PolyError::FileError { path, source } => {
                write!(f, "failed to open '{path}': {source}")
            }
        }
    }
}

impl std::error::Error for PolyError {}

/// Convenience alias used throughout this crate.
pub type PolyResult<T> = Result<T, PolyError>;
