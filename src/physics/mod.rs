//! Physical models
//!
//! This module describes the two lab problems: the parameters of each, their
//! validation rules, and the closed-form results that serve as references.
//!
//! # Architecture
//!
//! Physical models are **separate from numerical solvers**:
//! - The model holds the **problem** (physics and parameters)
//! - The solver provides the **method** to advance it (numerics)
//!
//! # Available Models
//!
//! - **[`LaunchParameters`]**: point-mass projectile with quadratic air drag
//! - **[`RodProblem`]**: 1D heat conduction in a rod with fixed end temperatures
//!
//! # Example
//!
//! ```rust
//! use labsim::physics::{LaunchParameters, Material, PhysicalModel, RodProblem};
//!
//! let launch = LaunchParameters::default().with_angle_degrees(30.0);
//! assert!(launch.validate().is_ok());
//!
//! let rod = RodProblem::default().with_material(Material::aluminium());
//! assert_eq!(rod.name(), "1D heat conduction");
//! ```
//!
//! # Implementing a New Physical Model
//!
//! ```rust
//! use labsim::physics::PhysicalModel;
//! use labsim::solver::SolverError;
//!
//! struct Pendulum {
//!     length: f64,
//! }
//!
//! impl PhysicalModel for Pendulum {
//!     fn name(&self) -> &str {
//!         "Pendulum"
//!     }
//!
//!     fn validate(&self) -> Result<(), SolverError> {
//!         if self.length <= 0.0 {
//!             return Err(SolverError::invalid("length", "must be positive"));
//!         }
//!         Ok(())
//!     }
//! }
//! ```

// module declaration
pub mod conduction;
pub mod projectile;
pub mod traits;

// re-export commonly used types for convenience
pub use conduction::{Material, RodProblem};
pub use projectile::{
    KinematicState, LaunchParameters, SEA_LEVEL_AIR_DENSITY, STANDARD_GRAVITY, ideal_flight_time,
    ideal_max_height, ideal_position, ideal_range,
};
pub use traits::PhysicalModel;
