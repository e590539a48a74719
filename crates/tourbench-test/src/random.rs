//! Reproducible random matrices.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tourbench_core::DistanceMatrix;

/// Builds a symmetric matrix of integer distances in `[1, 100)` from `seed`.
///
/// The same `(n, seed)` pair always yields the same matrix.
pub fn seeded_matrix(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = f64::from(rng.random_range(1u32..100));
            rows[i][j] = d;
            rows[j][i] = d;
        }
    }
    DistanceMatrix::from_rows(&rows).expect("seeded matrix must be valid")
}
