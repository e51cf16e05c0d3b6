//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - Central enum `SolverType` defines the kind of time stepping and carries
//!   its step sizes
//! - `SolverConfiguration` wraps a `SolverType` plus the options that do not
//!   depend on it
//! - Each `Solver` implementation accepts exactly one `SolverType` variant and
//!   rejects the others before doing any work

use std::fmt;

use crate::physics::PhysicalModel;
use crate::solver::SolverError;

/// Smallest step budget of the explicit integrator when none is given.
///
/// The derived budget grows with the expected number of steps of the launch;
/// this floor covers launches whose flight time cannot be estimated.
pub const DEFAULT_MAX_STEPS: usize = 10_000_000;

/// Largest node count accepted for an implicit grid.
pub const MAX_GRID_NODES: usize = 10_000_000;

// =================================================================================================
// Central Solver Type Enumeration
// =================================================================================================

/// Type of time stepping
///
/// # Examples
///
/// ```rust
/// use labsim::solver::SolverType;
///
/// // Explicit stepping until a stop condition, with a hard step budget
/// let explicit = SolverType::ExplicitTimeStepping {
///     time_step: 0.05,
///     max_steps: Some(100_000),
/// };
///
/// // Implicit stepping on a uniform grid
/// let implicit = SolverType::ImplicitTimeStepping {
///     time_step: 0.01,
///     grid_spacing: 0.05,
/// };
///
/// assert_eq!(explicit.name(), "ExplicitTimeStepping");
/// assert_eq!(implicit.name(), "ImplicitTimeStepping");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolverType {
    /// Fixed-step explicit integration until the model's stop condition
    ///
    /// # Parameters
    /// - `time_step`: step size dt (s)
    /// - `max_steps`: safety limit against non-terminating runs; `None`
    ///   lets the solver derive one from the problem
    ExplicitTimeStepping {
        time_step: f64,
        max_steps: Option<usize>,
    },

    /// Fixed-step implicit integration of a 1D grid field
    ///
    /// # Parameters
    /// - `time_step`: step size τ (s)
    /// - `grid_spacing`: node spacing h (m)
    ImplicitTimeStepping { time_step: f64, grid_spacing: f64 },
}

impl SolverType {
    /// Get name identifier
    pub fn name(&self) -> &'static str {
        match self {
            SolverType::ExplicitTimeStepping { .. } => "ExplicitTimeStepping",
            SolverType::ImplicitTimeStepping { .. } => "ImplicitTimeStepping",
        }
    }

    /// Step size of either variant
    pub fn time_step(&self) -> f64 {
        match self {
            SolverType::ExplicitTimeStepping { time_step, .. }
            | SolverType::ImplicitTimeStepping { time_step, .. } => *time_step,
        }
    }

    /// Validate that parameters are numerically meaningful
    pub fn validate(&self) -> Result<(), SolverError> {
        match self {
            SolverType::ExplicitTimeStepping {
                time_step,
                max_steps,
            } => {
                crate::solver::require_positive("dt", *time_step)?;
                if *max_steps == Some(0) {
                    return Err(SolverError::invalid("max_steps", "must be greater than 0"));
                }
                Ok(())
            }
            SolverType::ImplicitTimeStepping {
                time_step,
                grid_spacing,
            } => {
                crate::solver::require_positive("tau", *time_step)?;
                crate::solver::require_positive("h", *grid_spacing)
            }
        }
    }
}

impl fmt::Display for SolverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverType::ExplicitTimeStepping {
                time_step,
                max_steps,
            } => match max_steps {
                Some(max) => write!(f, "explicit (dt = {time_step}, at most {max} steps)"),
                None => write!(f, "explicit (dt = {time_step})"),
            },
            SolverType::ImplicitTimeStepping {
                time_step,
                grid_spacing,
            } => write!(f, "implicit (tau = {time_step}, h = {grid_spacing})"),
        }
    }
}

// =================================================================================================
// Forward Sweep Start
// =================================================================================================

/// First node eliminated by the forward sweep of the tridiagonal solve
///
/// `FirstInterior` eliminates every interior equation and is the consistent
/// Thomas algorithm. `SecondInterior` keeps the legacy indexing:
/// the sweep begins at node 2, node 1 keeps `alpha = beta = 0`, and the back
/// substitution therefore pins node 1 to zero at every step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SweepStart {
    #[default]
    FirstInterior,
    SecondInterior,
}

impl SweepStart {
    /// Index of the first node the forward sweep visits
    pub fn first_index(&self) -> usize {
        match self {
            SweepStart::FirstInterior => 1,
            SweepStart::SecondInterior => 2,
        }
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for numerical solver
///
/// # Examples
///
/// ```rust
/// use labsim::solver::{SolverConfiguration, SweepStart};
///
/// let explicit = SolverConfiguration::explicit(0.01);
///
/// let implicit = SolverConfiguration::implicit(0.01, 0.05)
///     .with_snapshots(10)
///     .with_sweep_start(SweepStart::FirstInterior);
///
/// assert!(explicit.validate().is_ok());
/// assert!(implicit.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Type of solver and its parameters
    pub solver_type: SolverType,

    /// Forward sweep start (implicit solver only)
    pub sweep_start: SweepStart,

    /// Keep the field every `n` steps (implicit solver only)
    pub snapshot_interval: Option<usize>,
}

impl SolverConfiguration {
    /// Create a new configuration with a given solver type
    pub fn new(solver_type: SolverType) -> Self {
        Self {
            solver_type,
            sweep_start: SweepStart::default(),
            snapshot_interval: None,
        }
    }

    /// Explicit stepping with a step budget derived from the problem
    pub fn explicit(time_step: f64) -> Self {
        Self::new(SolverType::ExplicitTimeStepping {
            time_step,
            max_steps: None,
        })
    }

    /// Explicit stepping with an explicit step budget
    pub fn explicit_bounded(time_step: f64, max_steps: usize) -> Self {
        Self::new(SolverType::ExplicitTimeStepping {
            time_step,
            max_steps: Some(max_steps),
        })
    }

    /// Implicit stepping with time step `tau` on a grid of spacing `h`
    pub fn implicit(time_step: f64, grid_spacing: f64) -> Self {
        Self::new(SolverType::ImplicitTimeStepping {
            time_step,
            grid_spacing,
        })
    }

    /// Builder pattern: set forward sweep start
    pub fn with_sweep_start(mut self, sweep_start: SweepStart) -> Self {
        self.sweep_start = sweep_start;
        self
    }

    /// Builder pattern: keep a snapshot every `interval` steps
    pub fn with_snapshots(mut self, interval: usize) -> Self {
        self.snapshot_interval = Some(interval);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SolverError> {
        self.solver_type.validate()?;
        if self.snapshot_interval == Some(0) {
            return Err(SolverError::invalid(
                "snapshot_interval",
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Solver Trait
// =================================================================================================

/// Numerical solver interface
///
/// A solver is a stateless method: it holds no data between calls, so the
/// same instance can be reused for any number of problems and from several
/// threads at once.
pub trait Solver {
    /// Physical problem this solver advances
    type Model: PhysicalModel;

    /// Result produced by one run
    type Output;

    /// Validate inputs, run the method to completion and return the result
    fn solve(
        &self,
        model: &Self::Model,
        config: &SolverConfiguration,
    ) -> Result<Self::Output, SolverError>;

    /// Human-readable method name
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Tests
// =================================================================================================
