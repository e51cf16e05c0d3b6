//! labsim: numerical cores of two physics lab simulations
//!
//! - a projectile flown under gravity and quadratic air drag with a
//!   semi-implicit Euler integrator
//! - a rod whose temperature field evolves under 1D heat conduction, stepped
//!   implicitly and solved with the Thomas algorithm
//!
//! # Architecture
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical models hold the problem (what to solve)
//!    - Numerical solvers provide methods (how to solve)
//!
//! 2. **Plain data in, plain data out**
//!    - Results are vectors and scalars a front end can plot or print
//!    - No I/O, no global state; every run is independent
//!
//! # Quick Start
//!
//! ```rust
//! use labsim::prelude::*;
//!
//! # fn main() -> Result<(), SolverError> {
//! // 1. Projectile: lab defaults, 30° launch
//! let launch = LaunchParameters::default().with_angle_degrees(30.0);
//! let flight = DragTrajectoryIntegrator::new()
//!     .solve(&launch, &SolverConfiguration::explicit(0.01))?;
//! println!("{}", flight.summary);
//!
//! // 2. Rod: steel, ends at 0, interior at 100, after 2 s
//! let profile = HeatConductionSolver::new()
//!     .solve(&RodProblem::default(), &SolverConfiguration::implicit(0.01, 0.05))?;
//! println!("center temperature: {:?}", profile.center_temperature());
//! # Ok(())
//! # }
//! ```
//!
//! The same runs are available as plain functions:
//!
//! ```rust
//! let flight = labsim::integrate(50.0, 45f64.to_radians(), 1.0, 0.05, 1.29, 0.15, 0.05, 9.81)?;
//! let profile = labsim::solve(0.0, 0.0, 100.0, 0.0, 1.0, 2.0, 7800.0, 500.0, 50.0, 0.05, 0.01)?;
//! assert_eq!(profile.len(), 21);
//! # let _ = flight;
//! # Ok::<(), labsim::solver::SolverError>(())
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Physical models and closed-form references
//! - [`solver`]: Numerical solvers, configuration and results
//!
//! # Logging
//!
//! The crate logs through the `log` facade (`debug` for run summaries,
//! `warn` for suspicious configurations). Install any logger, for example
//! `env_logger`, to see the messages.

// Core modules
pub mod physics;
pub mod solver;

pub use solver::{integrate, solve};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use labsim::prelude::*;
    //! ```
    pub use crate::physics::{LaunchParameters, Material, PhysicalModel, RodProblem};
    pub use crate::solver::{
        DirichletBoundaries, DragTrajectoryIntegrator, HeatConductionSolver, HeatProfile, Solver,
        SolverConfiguration, SolverError, SolverType, SweepStart, Trajectory,
    };
}
