//! Side-by-side runs of both solvers on one matrix.

use tourbench_core::{DistanceMatrix, Result, TourResult};

use crate::termination::{NoTermination, Termination};
use crate::{BruteForceSolver, HeldKarpSolver, TourSolver};

/// Runs brute force and Held-Karp on the same matrix.
///
/// Results always come back as `[brute force, Held-Karp]`. Both limits are
/// checked before either solver starts, so a comparison either completes or
/// returns no results at all.
///
/// # Example
///
/// ```
/// use tourbench_core::{DistanceMatrix, Method};
/// use tourbench_solver::Comparator;
///
/// let matrix = DistanceMatrix::from_rows(&[
///     [0.0, 1.0, 2.0],
///     [1.0, 0.0, 3.0],
///     [2.0, 3.0, 0.0],
/// ]).unwrap();
///
/// let [brute_force, held_karp] = Comparator::new().compare(&matrix).unwrap();
/// assert_eq!(brute_force.method, Method::BruteForce);
/// assert_eq!(held_karp.method, Method::HeldKarp);
/// assert_eq!(brute_force.cost, held_karp.cost);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    brute_force: BruteForceSolver,
    held_karp: HeldKarpSolver,
}

impl Comparator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the brute-force solver (for example to lower its limit).
    pub fn with_brute_force(mut self, solver: BruteForceSolver) -> Self {
        self.brute_force = solver;
        self
    }

    /// Replaces the Held-Karp solver.
    pub fn with_held_karp(mut self, solver: HeldKarpSolver) -> Self {
        self.held_karp = solver;
        self
    }

    pub fn brute_force(&self) -> &BruteForceSolver {
        &self.brute_force
    }

    pub fn held_karp(&self) -> &HeldKarpSolver {
        &self.held_karp
    }

    /// Largest city count both solvers accept.
    pub fn max_cities(&self) -> usize {
        self.brute_force.max_cities().min(self.held_karp.max_cities())
    }

    /// Fails if either solver would reject `n` cities.
    pub fn check_limit(&self, n: usize) -> Result<()> {
        self.brute_force.check_limit(n)?;
        self.held_karp.check_limit(n)
    }

    /// Solves `matrix` with both methods, brute force first.
    pub fn compare(&self, matrix: &DistanceMatrix) -> Result<[TourResult; 2]> {
        self.compare_with(matrix, &NoTermination)
    }

    /// Like [`compare`](Self::compare), polling `termination` in both solves.
    pub fn compare_with<T: Termination + ?Sized>(
        &self,
        matrix: &DistanceMatrix,
        termination: &T,
    ) -> Result<[TourResult; 2]> {
        self.check_limit(matrix.size())?;
        let brute_force = self.brute_force.solve_with(matrix, termination)?;
        let held_karp = self.held_karp.solve_with(matrix, termination)?;
        Ok([brute_force, held_karp])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourbench_core::{Method, TourBenchError};
    use tourbench_test::example_six;

    #[test]
    fn test_compare_order_and_agreement() {
        let fixture = example_six();
        let [bf, hk] = Comparator::new().compare(&fixture.matrix).unwrap();
        assert_eq!(bf.method, Method::BruteForce);
        assert_eq!(hk.method, Method::HeldKarp);
        assert_eq!(bf.cost, fixture.optimal_cost);
        assert_eq!(hk.cost, fixture.optimal_cost);
    }

    #[test]
    fn test_limit_checked_for_both_before_solving() {
        let fixture = example_six();
        let comparator =
            Comparator::new().with_held_karp(HeldKarpSolver::new().with_max_cities(5));
        assert_eq!(comparator.max_cities(), 5);

        let err = comparator.compare(&fixture.matrix).unwrap_err();
        match err {
            TourBenchError::ResourceLimit(limit) => assert_eq!(limit.method, Method::HeldKarp),
            other => panic!("unexpected error: {other}"),
        }
    }
}
