/*!
# Errors

Every operation of this crate either succeeds completely or returns a [`MultigraphError`]
before any output is produced. There are exactly two kinds of failures:

- [`MultigraphError::Shape`]: an array cannot be reshaped without loss or ambiguity
  (lengths not divisible by the number of edge types, layers that are not a perfect square,
  inputs of the wrong dimensionality, graphs of differing shapes, ...).
- [`MultigraphError::DimensionMismatch`]: a weight vector does not provide exactly one
  weight per edge type.
*/

use thiserror::Error;

/// Error type for all fallible operations on multigraphs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultigraphError {
    /// A reshape cannot be performed without loss or ambiguity
    #[error("shape error: {0}")]
    Shape(String),
    /// The number of weights differs from the number of edge types
    #[error("dimension mismatch: expected {expected} weights (one per edge type), found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

impl MultigraphError {
    /// Returns *true* if this is a [`MultigraphError::Shape`]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::Shape(_))
    }

    /// Returns *true* if this is a [`MultigraphError::DimensionMismatch`]
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }
}

impl From<ndarray::ShapeError> for MultigraphError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::Shape(err.to_string())
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, MultigraphError>;

/// Reports a rejected input as a `debug` event and hands the error back
pub(crate) fn rejected(err: MultigraphError) -> MultigraphError {
    tracing::debug!(error = %err, "rejected multigraph input");
    err
}

/// Shorthand for creating a new [`MultigraphError::Shape`] from a format string
macro_rules! shape_error {
    ($($arg : tt)*) => {
        $crate::error::MultigraphError::Shape(format!($($arg)*))
    };
}

/// Shorthand for returning `Err(MultigraphError)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $err : expr) => {
        if !($cond) {
            return Err($crate::error::rejected($err));
        }
    };
}

pub(crate) use raise_error_unless;
pub(crate) use shape_error;
