//! Error types for scalar and point-vector algebra

use thiserror::Error;

/// Main error type for algebra operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Binary vector operation on operands of different lengths
    #[error("Vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Integer outside `[0, l-1]` passed as a scalar value.
    ///
    /// Scalar construction always reduces, so this is never produced by the
    /// constructors in this crate.
    #[error("Scalar value out of range")]
    InvalidScalarRange,

    /// Malformed compressed point
    #[error("Invalid point encoding: {0}")]
    InvalidPointEncoding(String),

    /// Malformed hex string
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    /// Integer does not fit the 32-byte encoding
    #[error("Integer of {bits} bits does not fit in 256 bits")]
    IntegerOverflow { bits: u64 },

    /// Division by a scalar congruent to zero
    #[error("Scalar is not invertible")]
    NonInvertible,

    /// Hash chain ran out of attempts before finding a valid element
    #[error("Hash to curve exhausted after {attempts} attempts")]
    HashToCurveExhausted { attempts: usize },

    /// Invalid parameters provided
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Insufficient generators
    #[error("Insufficient generators: need {needed}, have {available}")]
    InsufficientGenerators { needed: usize, available: usize },
}

/// Result type for algebra operations
pub type AlgebraResult<T> = Result<T, AlgebraError>;

/// Fails with [`AlgebraError::LengthMismatch`] unless both lengths agree.
pub(crate) fn ensure_same_length(expected: usize, actual: usize) -> AlgebraResult<()> {
    if expected != actual {
        return Err(AlgebraError::LengthMismatch { expected, actual });
    }
    Ok(())
}
