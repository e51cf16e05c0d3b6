//! Concrete time-stepping methods
//!
//! Both methods implement the [`Solver`](crate::solver::Solver) trait and
//! accept exactly one [`SolverType`](crate::solver::SolverType) variant.
//!
//! # Available Methods
//!
//! - **[`DragTrajectoryIntegrator`]**: semi-implicit Euler for a point mass
//!   under gravity and quadratic air drag
//!   - Order: First-order O(dt)
//!   - Accepts: `ExplicitTimeStepping`
//!   - Stops: at the first step that ends below launch height
//!
//! - **[`HeatConductionSolver`]**: backward Euler in time, central
//!   differences in space, one Thomas solve per step
//!   - Order: O(τ + h²)
//!   - Accepts: `ImplicitTimeStepping`
//!   - Stops: after `floor(total_time / τ)` steps
//!
//! Each module also exposes a plain function over raw numbers
//! ([`integrate`], [`solve`]) for callers that do not need the builder types.

mod backward_euler;
mod euler;

pub use backward_euler::{HeatConductionSolver, solve};
pub use euler::{DragTrajectoryIntegrator, integrate};
