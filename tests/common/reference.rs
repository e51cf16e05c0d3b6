//! Independent reference solvers for the implicit heat step
//!
//! These build the full n×n system, Dirichlet rows included, in the
//! normalised form
//!
//! ```text
//! −r·T'[i−1] + (1 + 2r)·T'[i] − r·T'[i+1] = T[i],   r = λτ / (ρc·h²)
//! ```
//!
//! so they share no code or coefficient layout with the crate's solver.

use labsim::physics::RodProblem;
use nalgebra::{DMatrix, DVector};

/// Solve a general tridiagonal system in place
///
/// `sub[i]`, `dia[i]`, `sup[i]` are the sub/main/super diagonal entries of
/// row `i`. `rhs` is overwritten with the solution and `dia` is modified.
pub fn thomas_solve(sub: &[f64], dia: &mut [f64], sup: &[f64], rhs: &mut [f64]) {
    let n = dia.len();
    if n == 0 {
        return;
    }
    for i in 1..n {
        let w = sub[i] / dia[i - 1];
        dia[i] -= w * sup[i - 1];
        rhs[i] -= w * rhs[i - 1];
    }
    rhs[n - 1] /= dia[n - 1];
    for i in (0..n - 1).rev() {
        rhs[i] = (rhs[i] - sup[i] * rhs[i + 1]) / dia[i];
    }
}

fn diffusion_number(rod: &RodProblem, h: f64, tau: f64) -> f64 {
    rod.material.conductivity * tau / (rod.material.volumetric_heat_capacity() * h * h)
}

fn initial(rod: &RodProblem, n: usize) -> Vec<f64> {
    let mut field = vec![rod.initial_temperature; n];
    field[n - 1] = rod.boundaries.right;
    field[0] = rod.boundaries.left;
    field
}

/// Final field after `rod.step_count(tau)` steps, general Thomas per step
pub fn thomas_heat_reference(rod: &RodProblem, h: f64, tau: f64) -> Vec<f64> {
    let n = rod.node_count(h);
    let r = diffusion_number(rod, h, tau);
    let mut field = initial(rod, n);

    for _ in 0..rod.step_count(tau) {
        let mut sub = vec![-r; n];
        let mut dia = vec![1.0 + 2.0 * r; n];
        let mut sup = vec![-r; n];
        let mut rhs = field.clone();

        // Dirichlet rows
        sub[0] = 0.0;
        sup[0] = 0.0;
        dia[0] = 1.0;
        rhs[0] = rod.boundaries.left;
        sub[n - 1] = 0.0;
        sup[n - 1] = 0.0;
        dia[n - 1] = 1.0;
        rhs[n - 1] = rod.boundaries.right;

        thomas_solve(&sub, &mut dia, &sup, &mut rhs);
        field = rhs;
    }
    field
}

/// Final field after `rod.step_count(tau)` steps, dense LU per step
///
/// Only meant for small grids.
pub fn dense_heat_reference(rod: &RodProblem, h: f64, tau: f64) -> Vec<f64> {
    let n = rod.node_count(h);
    let r = diffusion_number(rod, h, tau);

    let mut matrix = DMatrix::<f64>::zeros(n, n);
    matrix[(0, 0)] = 1.0;
    matrix[(n - 1, n - 1)] = 1.0;
    for i in 1..n - 1 {
        matrix[(i, i - 1)] = -r;
        matrix[(i, i)] = 1.0 + 2.0 * r;
        matrix[(i, i + 1)] = -r;
    }
    let lu = matrix.lu();

    let mut field = DVector::from_vec(initial(rod, n));
    for _ in 0..rod.step_count(tau) {
        field[0] = rod.boundaries.left;
        field[n - 1] = rod.boundaries.right;
        field = lu.solve(&field).expect("implicit heat matrix is non-singular");
    }
    field.iter().copied().collect()
}
