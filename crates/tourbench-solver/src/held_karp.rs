//! Held-Karp dynamic programming over city subsets.
//!
//! `dp[S][j]` is the cheapest path that leaves the anchor city 0, visits
//! exactly the cities in `S`, and ends at `j` (with `j` in `S`). Subsets are
//! bitmasks over the `n-1` non-anchor cities: bit `b` stands for city `b + 1`.
//!
//! ```text
//! dp[{j}][j] = d[0][j]
//! dp[S][j]   = min over k in S \ {j} of dp[S \ {j}][k] + d[k][j]
//! cost       = min over j of dp[Full][j] + d[j][0]
//! ```
//!
//! Subsets are processed layer by layer in increasing size, so `S \ {j}` is
//! always complete before `S` is touched. Within a layer, masks ascend
//! numerically; endpoints and predecessors are scanned in ascending city
//! order and only a strictly smaller cost replaces the incumbent, which makes
//! the reconstructed path deterministic under ties.

use std::time::Instant;

use tourbench_core::{DistanceMatrix, Method, Result, TourBenchError, TourResult, MAX_CITIES};
use tracing::{debug, info, trace};

use crate::termination::Termination;
use crate::{TourSolver, CHECK_INTERVAL};

/// Held-Karp solver.
///
/// Computes exactly `(n-1) * 2^(n-2)` states in `O(n^2 * 2^n)` time and
/// `O(n * 2^n)` space.
///
/// # Example
///
/// ```
/// use tourbench_core::DistanceMatrix;
/// use tourbench_solver::{HeldKarpSolver, TourSolver};
///
/// let matrix = DistanceMatrix::from_rows(&[
///     [0.0, 1.0, 10.0, 1.0],
///     [1.0, 0.0, 1.0, 10.0],
///     [10.0, 1.0, 0.0, 1.0],
///     [1.0, 10.0, 1.0, 0.0],
/// ]).unwrap();
///
/// let result = HeldKarpSolver::new().solve(&matrix).unwrap();
/// assert_eq!(result.cost, 4.0);
/// assert_eq!(result.work_count, 12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HeldKarpSolver {
    max_cities: usize,
}

impl HeldKarpSolver {
    /// Creates a solver that accepts any valid matrix.
    pub fn new() -> Self {
        Self {
            max_cities: MAX_CITIES,
        }
    }

    /// Lowers the largest accepted city count.
    pub fn with_max_cities(mut self, max_cities: usize) -> Self {
        self.max_cities = max_cities.min(MAX_CITIES);
        self
    }
}

impl Default for HeldKarpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TourSolver for HeldKarpSolver {
    fn method(&self) -> Method {
        Method::HeldKarp
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

        info!(event = "solve_start", method = %Method::HeldKarp, n = n as u64);
        let start = Instant::now();

        if termination.is_terminated() {
            return Err(cancelled(0));
        }

        let mut table = StateTable::new(n - 1);
        let mut states: u64 = 0;
        let mut next_check = CHECK_INTERVAL;

        for b in 0..table.width {
            table.set(1 << b, b, matrix.get(0, b + 1), ANCHOR);
            states += 1;
        }

        for size in 2..=table.width {
            trace!(event = "dp_layer", size = size as u64, states);

            let mut mask = (1usize << size) - 1;
            while mask <= table.full() {
                for j in members(mask) {
                    let prev = mask & !(1 << j);
                    // The first predecessor is always recorded, so every
                    // state keeps a parent even if no cost improves on it.
                    let mut best: Option<(f64, usize)> = None;
                    for k in members(prev) {
                        let cost = table.cost(prev, k) + matrix.get(k + 1, j + 1);
                        if best.map_or(true, |(best_cost, _)| cost < best_cost) {
                            best = Some((cost, k));
                        }
                    }
                    if let Some((cost, k)) = best {
                        table.set(mask, j, cost, k as u8);
                    }
                    states += 1;
                }

                if states >= next_check {
                    if termination.is_terminated() {
                        return Err(cancelled(states));
                    }
                    next_check = states + CHECK_INTERVAL;
                }

                mask = next_same_size(mask);
            }
        }

        let full = table.full();
        let mut best_cost = table.cost(full, 0) + matrix.get(1, 0);
        let mut last = 0;
        for j in 1..table.width {
            let cost = table.cost(full, j) + matrix.get(j + 1, 0);
            if cost < best_cost {
                best_cost = cost;
                last = j;
            }
        }

        let path = table.reconstruct(last);
        let elapsed = start.elapsed();

        info!(
            event = "solve_end",
            method = %Method::HeldKarp,
            n = n as u64,
            cost = best_cost,
            work_count = states,
            duration_ms = elapsed.as_millis() as u64,
        );

        Ok(TourResult {
            method: Method::HeldKarp,
            cost: best_cost,
            path,
            elapsed,
            work_count: states,
        })
    }
}

fn cancelled(states: u64) -> TourBenchError {
    debug!(event = "solve_cancelled", method = %Method::HeldKarp, states);
    TourBenchError::Cancelled
}

// Parent marker for single-city subsets, whose predecessor is the anchor.
const ANCHOR: u8 = u8::MAX;

/// Flat `dp` and parent tables indexed by `(mask, endpoint bit)`.
struct StateTable {
    width: usize,
    cost: Vec<f64>,
    parent: Vec<u8>,
}

impl StateTable {
    fn new(width: usize) -> Self {
        let len = (1usize << width) * width;
        Self {
            width,
            cost: vec![f64::INFINITY; len],
            parent: vec![ANCHOR; len],
        }
    }

    #[inline]
    fn full(&self) -> usize {
        (1 << self.width) - 1
    }

    #[inline]
    fn index(&self, mask: usize, bit: usize) -> usize {
        mask * self.width + bit
    }

    #[inline]
    fn cost(&self, mask: usize, bit: usize) -> f64 {
        self.cost[self.index(mask, bit)]
    }

    #[inline]
    fn set(&mut self, mask: usize, bit: usize, cost: f64, parent: u8) {
        let idx = self.index(mask, bit);
        self.cost[idx] = cost;
        self.parent[idx] = parent;
    }

    /// Walks parent pointers back from `(Full, last)` and returns the cycle
    /// as city indices starting at the anchor.
    fn reconstruct(&self, last: usize) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.width + 1);
        let mut mask = self.full();
        let mut bit = last;
        loop {
            path.push(bit + 1);
            let parent = self.parent[self.index(mask, bit)];
            if parent == ANCHOR {
                break;
            }
            mask &= !(1 << bit);
            bit = usize::from(parent);
        }
        path.push(0);
        path.reverse();
        path
    }
}

/// Set bits of `mask`, lowest first.
fn members(mut mask: usize) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let bit = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(bit)
    })
}

/// Next larger integer with the same number of set bits (Gosper's hack).
fn next_same_size(mask: usize) -> usize {
    let lowest = mask & mask.wrapping_neg();
    let ripple = mask + lowest;
    ripple | (((mask ^ ripple) >> 2) / lowest)
}
