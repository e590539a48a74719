//! tourbench solver engine
//!
//! This crate provides the two exact solvers and the plumbing around them:
//! - [`BruteForceSolver`]: enumerates all `(n-1)!` cycles anchored at city 0
//! - [`HeldKarpSolver`]: subset dynamic programming over bitmasks
//! - [`Comparator`]: runs both on the same matrix, brute force first
//! - [`termination`]: cooperative cancellation checked during a solve
//!
//! Both solvers are pure: they only read the matrix and allocate their own
//! working storage, so independent solves may run on any thread.
//!
//! Logging levels:
//! - **INFO**: solve start/end with cost and work count
//! - **DEBUG**: cancellation
//! - **TRACE**: Held-Karp layer progress

pub mod brute_force;
pub mod compare;
pub mod held_karp;
pub mod termination;

use tourbench_core::{DistanceMatrix, Method, ResourceLimitError, Result, TourResult};

pub use brute_force::BruteForceSolver;
pub use compare::Comparator;
pub use held_karp::HeldKarpSolver;
pub use termination::{
    ExternalTermination, NoTermination, OrTermination, Termination, TimeTermination,
};

/// Work units between two termination checks.
///
/// Checks never change the enumeration or recurrence order, so completed
/// solves are identical with or without a termination condition.
pub const CHECK_INTERVAL: u64 = 4096;

/// An exact solver for the symmetric TSP.
pub trait TourSolver: Send + Sync {
    /// The algorithm this solver implements.
    fn method(&self) -> Method;

    /// Largest city count this solver accepts.
    fn max_cities(&self) -> usize;

    /// Solves `matrix`, polling `termination` while working.
    ///
    /// Returns [`tourbench_core::TourBenchError::Cancelled`] if the
    /// termination fires before the solve completes.
    fn solve_with<T: Termination + ?Sized>(
        &self,
        matrix: &DistanceMatrix,
        termination: &T,
    ) -> Result<TourResult>;

    /// Solves `matrix` to completion.
    fn solve(&self, matrix: &DistanceMatrix) -> Result<TourResult> {
        self.solve_with(matrix, &NoTermination)
    }

    /// Fails if `n` cities exceed [`max_cities`](TourSolver::max_cities).
    fn check_limit(&self, n: usize) -> Result<()> {
        let limit = self.max_cities();
        if n > limit {
            return Err(ResourceLimitError {
                method: self.method(),
                n,
                limit,
            }
            .into());
        }
        Ok(())
    }
}

/// Finds the optimal cycle by exhaustive enumeration.
pub fn solve_brute_force(matrix: &DistanceMatrix) -> Result<TourResult> {
    BruteForceSolver::new().solve(matrix)
}

/// Finds the optimal cycle with Held-Karp dynamic programming.
pub fn solve_held_karp(matrix: &DistanceMatrix) -> Result<TourResult> {
    HeldKarpSolver::new().solve(matrix)
}

/// Runs both solvers on `matrix`: `[brute force, Held-Karp]`.
pub fn compare(matrix: &DistanceMatrix) -> Result<[TourResult; 2]> {
    Comparator::new().compare(matrix)
}
