//! tourbench core - shared types for the exact TSP solvers
//!
//! This crate provides the data model consumed by every other crate:
//! - [`DistanceMatrix`], a validated symmetric table of distances
//! - [`TourResult`] and [`Method`], one solver's outcome on one matrix
//! - The error taxonomy ([`ValidationError`], [`ResourceLimitError`],
//!   [`TourBenchError`])

pub mod error;
pub mod matrix;
pub mod tour;

#[cfg(test)]
mod matrix_tests;

pub use error::{ResourceLimitError, Result, TourBenchError, ValidationError};
pub use matrix::{validate_and_load, DistanceMatrix, MAX_CITIES, MIN_CITIES};
pub use tour::{Method, TourResult};
