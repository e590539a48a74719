//! Matrices with known optimal cycles.

use tourbench_core::DistanceMatrix;

/// A matrix together with its optimal cycle cost.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub matrix: DistanceMatrix,
    pub optimal_cost: f64,
}

fn load(rows: &[&[f64]]) -> DistanceMatrix {
    DistanceMatrix::from_rows(rows).expect("fixture matrix must be valid")
}

/// Three cities; every cycle costs 6.
pub fn triangle() -> Fixture {
    Fixture {
        matrix: load(&[&[0.0, 1.0, 2.0], &[1.0, 0.0, 3.0], &[2.0, 3.0, 0.0]]),
        optimal_cost: 6.0,
    }
}

/// Four cities on a ring of unit edges with expensive diagonals.
///
/// The ring `0-1-2-3` (cost 4) is the only optimal cycle; the two crossing
/// cycles cost 22 each.
pub fn square_unique_optimum() -> Fixture {
    Fixture {
        matrix: load(&[
            &[0.0, 1.0, 10.0, 1.0],
            &[1.0, 0.0, 1.0, 10.0],
            &[10.0, 1.0, 0.0, 1.0],
            &[1.0, 10.0, 1.0, 0.0],
        ]),
        optimal_cost: 4.0,
    }
}

/// The six-city example graph; optimal cycle `0-1-3-4-5-2` costs 87.
pub fn example_six() -> Fixture {
    Fixture {
        matrix: load(&[
            &[0.0, 10.0, 15.0, 20.0, 25.0, 30.0],
            &[10.0, 0.0, 35.0, 25.0, 20.0, 15.0],
            &[15.0, 35.0, 0.0, 30.0, 18.0, 12.0],
            &[20.0, 25.0, 30.0, 0.0, 15.0, 28.0],
            &[25.0, 20.0, 18.0, 15.0, 0.0, 10.0],
            &[30.0, 15.0, 12.0, 28.0, 10.0, 0.0],
        ]),
        optimal_cost: 87.0,
    }
}
