//! Error types for tourbench

use thiserror::Error;

use crate::tour::Method;

/// A distance table that breaks one of the matrix invariants.
///
/// Row and column indices are 0-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// City count outside the supported range (an empty table has `n == 0`).
    #[error("matrix has {n} cities, expected between {min} and {max}")]
    SizeOutOfRange { n: usize, min: usize, max: usize },

    /// A row whose length differs from the number of rows.
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// NaN or infinite distance.
    #[error("distance at ({row}, {col}) is not a finite number")]
    NonFinite { row: usize, col: usize },

    #[error("distance at ({row}, {col}) is negative: {value}")]
    Negative { row: usize, col: usize, value: f64 },

    #[error("diagonal entry at ({index}, {index}) must be 0, found {value}")]
    NonZeroDiagonal { index: usize, value: f64 },

    /// `d[row][col] != d[col][row]`.
    #[error("matrix is not symmetric at ({row}, {col}): {forward} != {backward}")]
    Asymmetric {
        row: usize,
        col: usize,
        forward: f64,
        backward: f64,
    },

    /// Distances so large that a cycle length would overflow to infinity.
    #[error("distances up to {largest} over {n} cities overflow the cycle length")]
    CycleOverflow { n: usize, largest: f64 },
}

/// A solver was asked to run on more cities than it is allowed to handle.
///
/// Raised before any computation starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{method} is limited to {limit} cities, got {n}")]
pub struct ResourceLimitError {
    pub method: Method,
    pub n: usize,
    pub limit: usize,
}

/// Main error type for tourbench operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourBenchError {
    /// Malformed or out-of-range distance matrix
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Problem size beyond a solver's tractable bound
    #[error("Resource limit exceeded: {0}")]
    ResourceLimit(#[from] ResourceLimitError),

    /// Solve was cancelled before completion
    #[error("Solve was cancelled")]
    Cancelled,

    /// Invalid caller-supplied settings
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for tourbench operations
pub type Result<T> = std::result::Result<T, TourBenchError>;
