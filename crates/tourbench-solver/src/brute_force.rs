//! Exhaustive enumeration of Hamiltonian cycles.
//!
//! City 0 is fixed as the anchor, which removes the `n` rotations of every
//! cycle. The remaining `n-1` cities are permuted in lexicographic order and
//! every resulting cycle is costed in full. There is no pruning: this solver
//! is the baseline the dynamic program is compared against.

use std::time::Instant;

use tourbench_core::{DistanceMatrix, Method, Result, TourBenchError, TourResult, MAX_CITIES};
use tracing::{debug, info};

use crate::termination::Termination;
use crate::{TourSolver, CHECK_INTERVAL};

/// Brute-force solver.
///
/// Evaluates exactly `(n-1)!` cycles. Ties keep the first optimum found in
/// lexicographic order, so the returned path is reproducible.
///
/// # Example
///
/// ```
/// use tourbench_core::DistanceMatrix;
/// use tourbench_solver::{BruteForceSolver, TourSolver};
///
/// let matrix = DistanceMatrix::from_rows(&[
///     [0.0, 1.0, 2.0],
///     [1.0, 0.0, 3.0],
///     [2.0, 3.0, 0.0],
/// ]).unwrap();
///
/// let result = BruteForceSolver::new().solve(&matrix).unwrap();
/// assert_eq!(result.cost, 6.0);
/// assert_eq!(result.path, vec![0, 1, 2]);
/// assert_eq!(result.work_count, 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BruteForceSolver {
    max_cities: usize,
}

impl BruteForceSolver {
    /// Creates a solver that accepts any valid matrix.
    pub fn new() -> Self {
        Self {
            max_cities: MAX_CITIES,
        }
    }

    /// Lowers the largest accepted city count.
    ///
    /// Larger inputs fail with a resource-limit error before any work starts.
    pub fn with_max_cities(mut self, max_cities: usize) -> Self {
        self.max_cities = max_cities.min(MAX_CITIES);
        self
    }
}

impl Default for BruteForceSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TourSolver for BruteForceSolver {
    fn method(&self) -> Method {
        Method::BruteForce
    }

    fn max_cities(&self) -> usize {
        self.max_cities
    }

    fn solve_with<T: Termination + ?Sized>(
        &self,
        matrix: &DistanceMatrix,
        termination: &T,
    ) -> Result<TourResult> {
        let n = matrix.size();
        self.check_limit(n)?;

        info!(event = "solve_start", method = %Method::BruteForce, n = n as u64);
        let start = Instant::now();

        let mut order: Vec<usize> = (1..n).collect();
        let mut best_order = order.clone();
        let mut best_cost = f64::INFINITY;
        let mut evaluated: u64 = 0;

        loop {
            if evaluated % CHECK_INTERVAL == 0 && termination.is_terminated() {
                debug!(
                    event = "solve_cancelled",
                    method = %Method::BruteForce,
                    evaluated,
                );
                return Err(TourBenchError::Cancelled);
            }

            evaluated += 1;
            let cost = anchored_cost(matrix, &order);
            if evaluated == 1 || cost < best_cost {
                best_cost = cost;
                best_order.copy_from_slice(&order);
            }

            if !next_permutation(&mut order) {
                break;
            }
        }

        let elapsed = start.elapsed();
        let mut path = Vec::with_capacity(n);
        path.push(0);
        path.extend_from_slice(&best_order);

        info!(
            event = "solve_end",
            method = %Method::BruteForce,
            n = n as u64,
            cost = best_cost,
            work_count = evaluated,
            duration_ms = elapsed.as_millis() as u64,
        );

        Ok(TourResult {
            method: Method::BruteForce,
            cost: best_cost,
            path,
            elapsed,
            work_count: evaluated,
        })
    }
}

// Cost of the cycle 0 -> order[0] -> ... -> order[last] -> 0.
fn anchored_cost(matrix: &DistanceMatrix, order: &[usize]) -> f64 {
    let mut cost = 0.0;
    let mut prev = 0;
    for &city in order {
        cost += matrix.get(prev, city);
        prev = city;
    }
    cost + matrix.get(prev, 0)
}

/// Advances `items` to the next permutation in lexicographic order.
///
/// Returns false (leaving `items` untouched) when `items` is already the last
/// permutation, i.e. sorted in descending order.
fn next_permutation(items: &mut [usize]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };

    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot] {
        successor -= 1;
    }
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}
