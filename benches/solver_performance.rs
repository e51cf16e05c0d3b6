//! Performance benchmarks for the two solvers
//!
//! # What We're Measuring
//!
//! 1. **Drag integrator** (semi-implicit Euler):
//!    - One velocity and one position update per step
//!    - Steps ∝ flight time / dt
//!
//! 2. **Heat solver** (backward Euler + Thomas):
//!    - One forward sweep and one back substitution per step
//!    - Work ∝ nodes × steps
//!
//! 3. **Thomas sweep alone**, to separate the elimination from the
//!    allocation of the per-step field
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench solver_performance
//!
//! # Only the heat solver
//! cargo bench --bench solver_performance "Heat Conduction"
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use labsim::physics::{LaunchParameters, Material, RodProblem};
use labsim::solver::tridiagonal::{self, Stencil};
use labsim::solver::{
    DirichletBoundaries, DragTrajectoryIntegrator, HeatConductionSolver, Solver,
    SolverConfiguration, compare_time_steps,
};
use nalgebra::DVector;
use std::hint::black_box;
use std::time::Duration;

// =================================================================================================
// Drag Trajectory Integrator
// =================================================================================================

/// Lab launch at decreasing dt
///
/// Time should scale as 1/dt: halving dt doubles the number of steps.
fn benchmark_drag_integrator(c: &mut Criterion) {
    let mut group = c.benchmark_group("Drag Trajectory");

    let launch = LaunchParameters::default();
    let solver = DragTrajectoryIntegrator::new();

    for dt in [0.05, 0.01, 0.001] {
        let config = SolverConfiguration::explicit(dt);
        group.bench_with_input(BenchmarkId::from_parameter(dt), &config, |b, config| {
            b.iter(|| solver.solve(black_box(&launch), black_box(config)).unwrap());
        });
    }

    group.finish();
}

/// Side-by-side dt comparison, sequential or rayon depending on features
fn benchmark_time_step_comparison(c: &mut Criterion) {
    let launch = LaunchParameters::default();
    let steps = [0.1, 0.05, 0.01, 0.005, 0.001, 0.0005];

    c.bench_function("Time step comparison (6 runs)", |b| {
        b.iter(|| compare_time_steps(black_box(&launch), black_box(&steps)));
    });
}

// =================================================================================================
// Heat Conduction Solver
// =================================================================================================

/// Steel rod for growing grids, fixed number of steps
///
/// Throughput is reported as node-steps so grids of different size compare
/// directly. The curve should be flat: the Thomas solve is O(n).
fn benchmark_heat_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("Heat Conduction");
    group.measurement_time(Duration::from_secs(10));

    let solver = HeatConductionSolver::new();
    let tau = 0.01;
    let rod = RodProblem::default()
        .with_material(Material::steel())
        .with_total_time(10.0);
    let steps = rod.step_count(tau);

    for nodes in [21_usize, 101, 1001] {
        let h = rod.length() / (nodes - 1) as f64;
        let config = SolverConfiguration::implicit(tau, h);

        group.throughput(Throughput::Elements((nodes * steps) as u64));
        group.bench_with_input(BenchmarkId::new("nodes", nodes), &config, |b, config| {
            b.iter(|| solver.solve(black_box(&rod), black_box(config)).unwrap());
        });
    }

    group.finish();
}

/// One sweep and back substitution, no solver bookkeeping
fn benchmark_thomas_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("Thomas Sweep");

    let boundaries = DirichletBoundaries::new(100.0, 20.0);
    let stencil = Stencil::new(1.0, 4.0, 1.0);

    for nodes in [100_usize, 10_000, 1_000_000] {
        let rhs = DVector::from_element(nodes, -1.0);

        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &rhs, |b, rhs| {
            b.iter(|| {
                let coefficients = tridiagonal::forward_sweep(
                    black_box(&stencil),
                    black_box(rhs),
                    boundaries.left,
                    1,
                    1,
                )
                .unwrap();
                tridiagonal::back_substitute(&coefficients, boundaries.left, boundaries.right)
            });
        });
    }

    group.finish();
}

// =================================================================================================
// Criterion Configuration
// =================================================================================================

criterion_group!(
    benches,
    benchmark_drag_integrator,
    benchmark_time_step_comparison,
    benchmark_heat_solver,
    benchmark_thomas_sweep,
);
criterion_main!(benches);
