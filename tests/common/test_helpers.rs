//! Helper functions for integration tests

use labsim::physics::{Material, RodProblem};
use labsim::solver::DirichletBoundaries;

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Largest absolute element-wise difference
pub fn max_abs_diff<'a>(
    actual: impl IntoIterator<Item = &'a f64>,
    expected: impl IntoIterator<Item = &'a f64>,
) -> f64 {
    actual
        .into_iter()
        .zip(expected)
        .map(|(a, e)| (a - e).abs())
        .fold(0.0, f64::max)
}

/// Heights rise (weakly) to one maximum and then fall (weakly)
pub fn is_single_apex(points: &[(f64, f64)]) -> bool {
    let mut descending = false;
    for pair in points.windows(2) {
        let (before, after) = (pair[0].1, pair[1].1);
        if after < before {
            descending = true;
        } else if after > before && descending {
            return false;
        }
    }
    true
}

/// Steel rod on [0, 1], ends at 0, interior at 100
pub fn steel_rod(total_time: f64) -> RodProblem {
    RodProblem::new(
        DirichletBoundaries::uniform(0.0),
        100.0,
        0.0,
        1.0,
        Material::steel(),
        total_time,
    )
}
