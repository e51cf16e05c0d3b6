//! Physical model trait
//!
//! A physical model is the WHAT of a simulation: the parameters of the
//! system being studied. It never advances itself in time; that is the job of
//! a [`Solver`](crate::solver::Solver).

use crate::solver::SolverError;

// =================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for physical problem definitions
///
/// # Responsibility
///
/// Holds the physical parameters of a system and checks that they are
/// physically meaningful. Does NOT solve anything.
///
/// The model provides the "physics", the solver provides the "numerics".
pub trait PhysicalModel: Send + Sync {
    /// Name of the model (used for display and logging)
    fn name(&self) -> &str;

    /// Check every parameter against its physical domain
    ///
    /// Solvers call this before allocating anything, so a model that fails
    /// validation never produces a partial result.
    fn validate(&self) -> Result<(), SolverError>;

    /// Description of the model (optional)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================
