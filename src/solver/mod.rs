//! Numerical solvers
//!
//! This module provides the solver trait, its configuration, and the two
//! concrete time-stepping methods of the crate.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Physical model** ([`PhysicalModel`](crate::physics::PhysicalModel)) - WHAT to solve
//!    - [`LaunchParameters`](crate::physics::LaunchParameters): projectile and air
//!    - [`RodProblem`](crate::physics::RodProblem): rod, material, end temperatures
//!
//! 2. **Configuration** ([`SolverConfiguration`]) - HOW to solve
//!    - Solver type (explicit or implicit stepping) and step sizes
//!    - Options (sweep start, snapshots)
//!
//! 3. **Solver** ([`Solver`] trait) - The numerical method
//!    - [`DragTrajectoryIntegrator`]: semi-implicit Euler until ground return
//!    - [`HeatConductionSolver`]: backward Euler + Thomas elimination
//!
//! # Quick Start Example
//!
//! ```rust
//! use labsim::physics::{LaunchParameters, RodProblem};
//! use labsim::solver::{
//!     DragTrajectoryIntegrator, HeatConductionSolver, Solver, SolverConfiguration,
//! };
//!
//! # fn main() -> Result<(), labsim::solver::SolverError> {
//! let flight = DragTrajectoryIntegrator::new()
//!     .solve(&LaunchParameters::default(), &SolverConfiguration::explicit(0.05))?;
//! println!("{}", flight.summary);
//!
//! let profile = HeatConductionSolver::new()
//!     .solve(&RodProblem::default(), &SolverConfiguration::implicit(0.01, 0.05))?;
//! println!("center: {:?}", profile.center_temperature());
//! # Ok(())
//! # }
//! ```
//!
//! # Stability
//!
//! - **Explicit** drag stepping is conditionally stable. An oversized `dt`
//!   gives a non-physical path; this is not corrected (no adaptive stepping).
//! - **Implicit** heat stepping is unconditionally stable for positive
//!   material properties; a coarse `tau` or `h` costs accuracy, never
//!   divergence.
//!
//! # Error Handling
//!
//! All solver methods return `Result<T, SolverError>`:
//!
//! - Invalid parameters are rejected before any computation
//! - Non-finite intermediate values abort the run at the step they appear
//! - The explicit integrator gives up after its step budget

// =================================================================================================
// Module Declarations
// =================================================================================================
mod boundary;
mod error;
mod methods;
mod result;
mod sweep;
mod traits;

pub mod tridiagonal;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use boundary::DirichletBoundaries;
pub use error::SolverError;
pub use methods::{DragTrajectoryIntegrator, HeatConductionSolver, integrate, solve};
pub use result::{FlightSummary, HeatProfile, Snapshot, Trajectory};
pub use sweep::compare_time_steps;
pub use traits::{
    DEFAULT_MAX_STEPS, MAX_GRID_NODES, Solver, SolverConfiguration, SolverType, SweepStart,
};

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Relative guard applied before flooring grid and step counts.
const COUNT_GUARD: f64 = 1e-9;

/// `value` must be finite
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<(), SolverError> {
    if !value.is_finite() {
        return Err(SolverError::invalid(name, format!("must be finite, got {value}")));
    }
    Ok(())
}

/// `value` must be finite and strictly positive
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), SolverError> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(SolverError::invalid(name, format!("must be positive, got {value}")));
    }
    Ok(())
}

/// `value` must be finite and not negative
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<(), SolverError> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(SolverError::invalid(name, format!("must not be negative, got {value}")));
    }
    Ok(())
}

/// `floor(extent / step)` tolerant to representation error
///
/// `0.3 / 0.1` evaluates to `2.9999999999999996`; a plain floor would lose a
/// whole cell.
pub(crate) fn floor_count(extent: f64, step: f64) -> usize {
    let ratio = extent / step;
    if !ratio.is_finite() || ratio <= 0.0 {
        return 0;
    }
    (ratio + COUNT_GUARD * ratio.max(1.0)).floor() as usize
}

/// Fail when any value is NaN or infinite
///
/// # Arguments
///
/// * `quantity` - What the values are (for error reporting)
/// * `values` - Values to check
/// * `step` - Current time step (for error reporting)
pub(crate) fn check_finite<'a>(
    quantity: &'static str,
    mut values: impl Iterator<Item = &'a f64>,
    step: usize,
) -> Result<(), SolverError> {
    if values.any(|v| !v.is_finite()) {
        return Err(SolverError::NumericOverflow { quantity, step });
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
