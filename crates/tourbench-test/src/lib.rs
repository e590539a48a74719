//! Shared test fixtures for tourbench crates.
//!
//! This crate provides hand-checked matrices with known optima and seeded
//! random matrices for cross-checking the solvers against each other.
//!
//! - [`fixtures`] - small matrices whose optimal cycles were computed by hand
//! - [`random`] - reproducible random symmetric matrices
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! tourbench-test = { workspace = true }
//! ```

pub mod fixtures;
pub mod random;

pub use fixtures::{example_six, square_unique_optimum, triangle, Fixture};
pub use random::seeded_matrix;
