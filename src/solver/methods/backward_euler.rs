//! Backward Euler solver for 1D heat conduction with fixed end temperatures
//!
//! # Mathematical Background
//!
//! ```text
//! ρ·c·∂T/∂t = λ·∂²T/∂x²
//! ```
//!
//! Discretised implicitly on a uniform grid of spacing `h` with time step `τ`,
//! each interior node satisfies
//!
//! ```text
//! λ/h²·T'[i+1] − (ρc/τ + 2λ/h²)·T'[i] + λ/h²·T'[i−1] = −(ρc/τ)·T[i]
//! ```
//!
//! which is a tridiagonal system in the new field `T'`, solved once per step
//! by Thomas elimination ([`crate::solver::tridiagonal`]).
//!
//! # Characteristics
//!
//! - **Order**: First-order in time, second-order in space
//! - **Stability**: Unconditionally stable for positive ρ, c and λ
//! - **Cost**: O(n) per step

use log::{debug, warn};
use nalgebra::DVector;

use crate::physics::{Material, PhysicalModel, RodProblem};
use crate::solver::tridiagonal::{self, Stencil};
use crate::solver::{
    self, DirichletBoundaries, HeatProfile, Snapshot, Solver, SolverConfiguration, SolverError,
    SolverType, SweepStart,
};

// =================================================================================================
// Heat Conduction Solver
// =================================================================================================

/// Implicit time stepper for the temperature field of a rod
///
/// # Algorithm
///
/// 1. Build `n = floor(L/h) + 1` nodes: ends at the boundary temperatures,
///    interior at the initial temperature
/// 2. Repeat `floor(total_time/τ)` times:
///    - forward sweep from the left boundary
///    - back substitution from the right boundary
/// 3. Return the final field
///
/// Fewer than three nodes leave no interior equation; the field is then the
/// boundary values alone.
///
/// # Example
///
/// ```rust
/// use labsim::physics::RodProblem;
/// use labsim::solver::{HeatConductionSolver, Solver, SolverConfiguration};
///
/// let config = SolverConfiguration::implicit(0.01, 0.05);
/// let profile = HeatConductionSolver::new().solve(&RodProblem::default(), &config).unwrap();
///
/// assert_eq!(profile.len(), 21);
/// assert_eq!(profile.temperatures[0], 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeatConductionSolver;

impl HeatConductionSolver {
    /// Create a new heat conduction solver
    pub fn new() -> Self {
        Self
    }

    /// Interior stencil for the given material and step sizes
    pub fn stencil(material: &Material, h: f64, tau: f64) -> Stencil {
        let coupling = material.conductivity / (h * h);
        let capacity_rate = material.volumetric_heat_capacity() / tau;
        Stencil::new(coupling, capacity_rate + 2.0 * coupling, coupling)
    }

    /// Advance `field` by one implicit step
    ///
    /// `capacity_rate` is `ρc/τ`. The returned field holds the boundary values
    /// at both ends.
    pub fn advance(
        field: &DVector<f64>,
        stencil: &Stencil,
        capacity_rate: f64,
        boundaries: DirichletBoundaries,
        sweep_start: SweepStart,
        step: usize,
    ) -> Result<DVector<f64>, SolverError> {
        let rhs = field * (-capacity_rate);
        let coefficients = tridiagonal::forward_sweep(
            stencil,
            &rhs,
            boundaries.left,
            sweep_start.first_index(),
            step,
        )?;
        let next = tridiagonal::back_substitute(&coefficients, boundaries.left, boundaries.right);

        solver::check_finite("temperature", next.iter(), step)?;
        Ok(next)
    }
}

impl Solver for HeatConductionSolver {
    type Model = RodProblem;
    type Output = HeatProfile;

    fn solve(
        &self,
        rod: &RodProblem,
        config: &SolverConfiguration,
    ) -> Result<HeatProfile, SolverError> {
        // ====== Step 1: Validation ======

        config.validate()?;
        rod.validate()?;

        let (tau, h) = match config.solver_type {
            SolverType::ImplicitTimeStepping {
                time_step,
                grid_spacing,
            } => (time_step, grid_spacing),
            other => {
                return Err(SolverError::UnsupportedConfiguration {
                    solver: self.name(),
                    requested: other.name(),
                });
            }
        };

        if config.sweep_start == SweepStart::SecondInterior {
            warn!(
                "{}: sweep starts at node 2, node 1 is held at 0 every step",
                self.name()
            );
        }

        // ====== Step 2: Setup ======

        let n = rod.grid_size(h)?;
        let steps = rod.step_count(tau);
        let boundaries = rod.boundaries;

        let stencil = Self::stencil(&rod.material, h, tau);
        let capacity_rate = rod.material.volumetric_heat_capacity() / tau;

        let mut field = boundaries.initial_field(n, rod.initial_temperature);

        let mut snapshots = Vec::new();
        if config.snapshot_interval.is_some() {
            snapshots.push(Snapshot {
                time: 0.0,
                temperatures: field.clone(),
            });
        }

        // ====== Step 3: Time Stepping ======

        for step in 1..=steps {
            field = Self::advance(
                &field,
                &stencil,
                capacity_rate,
                boundaries,
                config.sweep_start,
                step,
            )?;

            if let Some(every) = config.snapshot_interval
                && (step % every == 0 || step == steps)
            {
                snapshots.push(Snapshot {
                    time: step as f64 * tau,
                    temperatures: field.clone(),
                });
            }
        }

        // ====== Step 4: Build Result ======

        let elapsed = steps as f64 * tau;
        debug!(
            "{}: {n} nodes, {steps} steps of tau = {tau}, elapsed = {elapsed} s",
            self.name()
        );

        let mut result = HeatProfile::new(rod.node_positions(h), field, elapsed, steps);
        result.snapshots = snapshots;
        result.add_metadata("solver", self.name());
        result.add_metadata("model", rod.name());
        if let Some(description) = rod.description() {
            result.add_metadata("description", description);
        }
        result.add_metadata("tau", &tau.to_string());
        result.add_metadata("h", &h.to_string());
        result.add_metadata("nodes", &n.to_string());
        result.add_metadata("steps", &steps.to_string());
        result.add_metadata(
            "sweep start",
            &config.sweep_start.first_index().to_string(),
        );

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Backward Euler"
    }
}

/// Temperature profile of a rod after `total_time`
///
/// Equivalent to building a [`RodProblem`] and running
/// [`HeatConductionSolver`] with `tau` and `h`.
///
/// # Errors
///
/// [`SolverError::InvalidParameter`] for non-positive `h`, `tau`, `rho`, `c`
/// or `lambda`, for `x_right ≤ x_left` and for negative `total_time`.
#[allow(clippy::too_many_arguments)]
pub fn solve(
    t_left: f64,
    t_right: f64,
    t0: f64,
    x_left: f64,
    x_right: f64,
    total_time: f64,
    rho: f64,
    c: f64,
    lambda: f64,
    h: f64,
    tau: f64,
) -> Result<HeatProfile, SolverError> {
    let rod = RodProblem::new(
        DirichletBoundaries::new(t_left, t_right),
        t0,
        x_left,
        x_right,
        Material::new(rho, c, lambda),
        total_time,
    );
    HeatConductionSolver::new().solve(&rod, &SolverConfiguration::implicit(tau, h))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_rod() -> RodProblem {
        RodProblem::default()
            .with_material(Material::new(1.0, 1.0, 1.0))
            .with_boundaries(DirichletBoundaries::new(100.0, 20.0))
            .with_initial_temperature(500.0)
    }

    // ====== Solver Creation Tests ======

    #[test]
    fn test_solver_creation() {
        assert_eq!(HeatConductionSolver::new().name(), "Backward Euler");
    }

    #[test]
    fn test_stencil_coefficients() {
        let stencil = HeatConductionSolver::stencil(&Material::new(2.0, 3.0, 4.0), 0.5, 0.1);
        // λ/h² = 16, ρc/τ = 60
        assert_relative_eq!(stencil.upper, 16.0);
        assert_relative_eq!(stencil.lower, 16.0);
        assert_relative_eq!(stencil.diagonal, 92.0);
    }

    // ====== Configuration Tests ======

    #[test]
    fn test_rejects_explicit_configuration() {
        let result = HeatConductionSolver::new()
            .solve(&RodProblem::default(), &SolverConfiguration::explicit(0.01));

        assert_eq!(
            result.unwrap_err(),
            SolverError::UnsupportedConfiguration {
                solver: "Backward Euler",
                requested: "ExplicitTimeStepping"
            }
        );
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let cases = [
            solve(0.0, 0.0, 100.0, 0.0, 1.0, 1.0, 7800.0, 500.0, 50.0, 0.0, 0.01),
            solve(0.0, 0.0, 100.0, 0.0, 1.0, 1.0, 7800.0, 500.0, 50.0, 0.05, 0.0),
            solve(0.0, 0.0, 100.0, 1.0, 1.0, 1.0, 7800.0, 500.0, 50.0, 0.05, 0.01),
            solve(0.0, 0.0, 100.0, 0.0, 1.0, 1.0, 0.0, 500.0, 50.0, 0.05, 0.01),
            solve(0.0, 0.0, 100.0, 0.0, 1.0, 1.0, 7800.0, -1.0, 50.0, 0.05, 0.01),
            solve(0.0, 0.0, 100.0, 0.0, 1.0, 1.0, 7800.0, 500.0, 0.0, 0.05, 0.01),
            solve(0.0, 0.0, 100.0, 0.0, 1.0, -1.0, 7800.0, 500.0, 50.0, 0.05, 0.01),
        ];
        for result in cases {
            assert!(matches!(result, Err(SolverError::InvalidParameter { .. })));
        }
    }

    // ====== Stepping Tests ======

    #[test]
    fn test_single_step_satisfies_interior_equations() {
        let rod = unit_rod();
        let (h, tau) = (0.1, 0.05);
        let stencil = HeatConductionSolver::stencil(&rod.material, h, tau);
        let capacity_rate = 1.0 / tau;

        let before = rod.boundaries.initial_field(rod.node_count(h), rod.initial_temperature);
        let after = HeatConductionSolver::advance(
            &before,
            &stencil,
            capacity_rate,
            rod.boundaries,
            SweepStart::FirstInterior,
            1,
        )
        .unwrap();

        for i in 1..after.len() - 1 {
            let lhs = stencil.upper * after[i + 1] - stencil.diagonal * after[i]
                + stencil.lower * after[i - 1];
            assert_relative_eq!(lhs, -capacity_rate * before[i], epsilon = 1e-8);
        }
    }

    #[test]
    fn test_uniform_field_at_boundary_value_is_stationary() {
        let rod = RodProblem::default()
            .with_boundaries(DirichletBoundaries::uniform(40.0))
            .with_initial_temperature(40.0);
        let profile = HeatConductionSolver::new()
            .solve(&rod, &SolverConfiguration::implicit(0.1, 0.1))
            .unwrap();

        for t in profile.temperatures.iter() {
            assert_relative_eq!(*t, 40.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_symmetric_problem_stays_symmetric() {
        let profile = HeatConductionSolver::new()
            .solve(&RodProblem::default(), &SolverConfiguration::implicit(0.01, 0.05))
            .unwrap();

        let n = profile.len();
        for i in 0..n / 2 {
            assert_relative_eq!(
                profile.temperatures[i],
                profile.temperatures[n - 1 - i],
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_zero_total_time_returns_initial_field() {
        let rod = RodProblem::default().with_total_time(0.0);
        let profile = HeatConductionSolver::new()
            .solve(&rod, &SolverConfiguration::implicit(0.01, 0.25))
            .unwrap();

        assert_eq!(profile.steps, 0);
        assert_eq!(profile.elapsed, 0.0);
        assert_eq!(profile.temperatures.as_slice(), &[0.0, 100.0, 100.0, 100.0, 0.0]);
    }

    #[test]
    fn test_elapsed_is_whole_steps() {
        // 0.25 / 0.1 → 2 steps, the remainder is dropped
        let rod = RodProblem::default().with_total_time(0.25);
        let profile = HeatConductionSolver::new()
            .solve(&rod, &SolverConfiguration::implicit(0.1, 0.1))
            .unwrap();

        assert_eq!(profile.steps, 2);
        assert_relative_eq!(profile.elapsed, 0.2);
    }

    // ====== Degenerate grids ======

    #[test]
    fn test_short_grids() {
        let rod = RodProblem::default().with_boundaries(DirichletBoundaries::new(5.0, 9.0));

        let one = HeatConductionSolver::new()
            .solve(&rod, &SolverConfiguration::implicit(0.1, 2.0))
            .unwrap();
        assert_eq!(one.temperatures.as_slice(), &[5.0]);

        let two = HeatConductionSolver::new()
            .solve(&rod, &SolverConfiguration::implicit(0.1, 0.75))
            .unwrap();
        assert_eq!(two.temperatures.as_slice(), &[5.0, 9.0]);
    }

    // ====== Sweep start ======

    #[test]
    fn test_second_interior_start_pins_node_one() {
        let config = SolverConfiguration::implicit(0.01, 0.05)
            .with_sweep_start(SweepStart::SecondInterior);
        let profile = HeatConductionSolver::new()
            .solve(&unit_rod(), &config)
            .unwrap();

        assert_eq!(profile.temperatures[1], 0.0);
        assert_eq!(profile.temperatures[0], 100.0);
        assert_eq!(profile.metadata.get("sweep start"), Some(&"2".to_string()));
    }

    // ====== Snapshots ======

    #[test]
    fn test_snapshots_include_start_and_final_field() {
        // 10 steps, every 4th kept: 0, 4, 8, 10
        let rod = RodProblem::default().with_total_time(1.0);
        let config = SolverConfiguration::implicit(0.1, 0.1).with_snapshots(4);
        let profile = HeatConductionSolver::new().solve(&rod, &config).unwrap();

        let times: Vec<f64> = profile.snapshots.iter().map(|s| s.time).collect();
        assert_eq!(times.len(), 4);
        assert_relative_eq!(times[0], 0.0);
        assert_relative_eq!(times[1], 0.4);
        assert_relative_eq!(times[2], 0.8);
        assert_relative_eq!(times[3], 1.0);

        let last = profile.snapshots.last().unwrap();
        assert_eq!(last.temperatures, profile.temperatures);
    }

    #[test]
    fn test_no_snapshots_by_default() {
        let profile = HeatConductionSolver::new()
            .solve(&RodProblem::default(), &SolverConfiguration::implicit(0.1, 0.1))
            .unwrap();
        assert!(profile.snapshots.is_empty());
    }

    // ====== Metadata Tests ======

    #[test]
    fn test_metadata() {
        let profile = HeatConductionSolver::new()
            .solve(&RodProblem::default(), &SolverConfiguration::implicit(0.01, 0.05))
            .unwrap();

        assert_eq!(profile.metadata.get("solver"), Some(&"Backward Euler".to_string()));
        assert_eq!(profile.metadata.get("nodes"), Some(&"21".to_string()));
        assert_eq!(profile.metadata.get("steps"), Some(&"200".to_string()));
        assert_eq!(profile.metadata.get("sweep start"), Some(&"1".to_string()));
        assert!(profile.metadata.contains_key("description"));
    }

    // ====== Free function ======

    #[test]
    fn test_solve_matches_solver() {
        let via_function =
            solve(0.0, 0.0, 100.0, 0.0, 1.0, 2.0, 7800.0, 500.0, 50.0, 0.05, 0.01).unwrap();
        let via_solver = HeatConductionSolver::new()
            .solve(&RodProblem::default(), &SolverConfiguration::implicit(0.01, 0.05))
            .unwrap();

        assert_eq!(via_function.temperatures, via_solver.temperatures);
        assert_eq!(via_function.positions, via_solver.positions);
    }
}
