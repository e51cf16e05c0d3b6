//! Transient heat conduction in a rod with fixed end temperatures
//!
//! # Mathematical Background
//!
//! ```text
//! ρ·c · ∂T/∂t = λ · ∂²T/∂x²,     x ∈ [x_left, x_right]
//!
//! T(x_left, t)  = T_left
//! T(x_right, t) = T_right
//! T(x, 0)       = T_0          (interior)
//! ```
//!
//! As `t → ∞` the profile relaxes to the straight line between the two end
//! temperatures, whatever `T_0` was. The relaxation time scale is
//! `L² / α` with the thermal diffusivity `α = λ / (ρ·c)`.

use nalgebra::DVector;

use crate::physics::PhysicalModel;
use crate::solver::{self, DirichletBoundaries, MAX_GRID_NODES, SolverError};

// =================================================================================================
// Material
// =================================================================================================

/// Thermal properties of the rod material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Density ρ (kg/m³)
    pub density: f64,
    /// Specific heat capacity c (J/(kg·K))
    pub specific_heat: f64,
    /// Thermal conductivity λ (W/(m·K))
    pub conductivity: f64,
}

impl Material {
    pub fn new(density: f64, specific_heat: f64, conductivity: f64) -> Self {
        Self {
            density,
            specific_heat,
            conductivity,
        }
    }

    /// Carbon steel
    pub fn steel() -> Self {
        Self::new(7800.0, 500.0, 50.0)
    }

    /// Pure copper
    pub fn copper() -> Self {
        Self::new(8960.0, 385.0, 401.0)
    }

    /// Pure aluminium
    pub fn aluminium() -> Self {
        Self::new(2700.0, 897.0, 237.0)
    }

    /// Volumetric heat capacity ρ·c (J/(m³·K))
    pub fn volumetric_heat_capacity(&self) -> f64 {
        self.density * self.specific_heat
    }

    /// Thermal diffusivity α = λ/(ρ·c) (m²/s)
    pub fn diffusivity(&self) -> f64 {
        self.conductivity / self.volumetric_heat_capacity()
    }

    /// Every property must be strictly positive
    pub fn validate(&self) -> Result<(), SolverError> {
        solver::require_positive("density", self.density)?;
        solver::require_positive("specific_heat", self.specific_heat)?;
        solver::require_positive("conductivity", self.conductivity)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::steel()
    }
}

// =================================================================================================
// Rod Problem
// =================================================================================================

/// Physical definition of the rod heating/cooling problem
///
/// # Example
///
/// ```rust
/// use labsim::physics::{Material, RodProblem};
/// use labsim::solver::DirichletBoundaries;
///
/// let rod = RodProblem::default()
///     .with_boundaries(DirichletBoundaries::new(100.0, 20.0))
///     .with_material(Material::copper())
///     .with_total_time(60.0);
///
/// assert_eq!(rod.length(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RodProblem {
    /// End temperatures (°C or K, any consistent unit)
    pub boundaries: DirichletBoundaries,
    /// Uniform initial temperature of the interior nodes
    pub initial_temperature: f64,
    /// Left end coordinate (m)
    pub x_left: f64,
    /// Right end coordinate (m)
    pub x_right: f64,
    /// Rod material
    pub material: Material,
    /// Elapsed time at which the profile is wanted (s)
    pub total_time: f64,
}

impl Default for RodProblem {
    fn default() -> Self {
        Self {
            boundaries: DirichletBoundaries::uniform(0.0),
            initial_temperature: 100.0,
            x_left: 0.0,
            x_right: 1.0,
            material: Material::steel(),
            total_time: 2.0,
        }
    }
}

impl RodProblem {
    pub fn new(
        boundaries: DirichletBoundaries,
        initial_temperature: f64,
        x_left: f64,
        x_right: f64,
        material: Material,
        total_time: f64,
    ) -> Self {
        Self {
            boundaries,
            initial_temperature,
            x_left,
            x_right,
            material,
            total_time,
        }
    }

    /// Builder pattern: set end temperatures
    pub fn with_boundaries(mut self, boundaries: DirichletBoundaries) -> Self {
        self.boundaries = boundaries;
        self
    }

    /// Builder pattern: set initial interior temperature
    pub fn with_initial_temperature(mut self, initial_temperature: f64) -> Self {
        self.initial_temperature = initial_temperature;
        self
    }

    /// Builder pattern: set the rod extent
    pub fn with_extent(mut self, x_left: f64, x_right: f64) -> Self {
        self.x_left = x_left;
        self.x_right = x_right;
        self
    }

    /// Builder pattern: set material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Builder pattern: set elapsed time
    pub fn with_total_time(mut self, total_time: f64) -> Self {
        self.total_time = total_time;
        self
    }

    /// Rod length (m)
    pub fn length(&self) -> f64 {
        self.x_right - self.x_left
    }

    /// Number of grid nodes for spacing `h`: `floor(L/h) + 1`
    ///
    /// Saturates instead of overflowing; [`RodProblem::grid_size`] is the
    /// checked variant the solver uses.
    pub fn node_count(&self, h: f64) -> usize {
        solver::floor_count(self.length(), h).saturating_add(1)
    }

    /// Node count for spacing `h`, rejecting grids that cannot be built
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidParameter`] on `h` when `L/h` is not finite or
    /// the grid would exceed [`MAX_GRID_NODES`].
    pub fn grid_size(&self, h: f64) -> Result<usize, SolverError> {
        let cells = self.length() / h;
        if !cells.is_finite() || cells > (MAX_GRID_NODES - 1) as f64 {
            return Err(SolverError::invalid(
                "h",
                format!(
                    "gives {cells:e} cells on a rod of length {}, at most {MAX_GRID_NODES} nodes",
                    self.length()
                ),
            ));
        }
        solver::floor_count(self.length(), h)
            .checked_add(1)
            .ok_or_else(|| SolverError::invalid("h", "node count overflows"))
    }

    /// Number of time steps for step `tau`: `floor(total_time/tau)`
    pub fn step_count(&self, tau: f64) -> usize {
        solver::floor_count(self.total_time, tau)
    }

    /// Node coordinates `x_left + i·h`
    pub fn node_positions(&self, h: f64) -> DVector<f64> {
        DVector::from_fn(self.node_count(h), |i, _| self.x_left + i as f64 * h)
    }

    /// Temperature of the linear steady state at coordinate `x`
    pub fn steady_state_at(&self, x: f64) -> f64 {
        self.boundaries.interpolate((x - self.x_left) / self.length())
    }

    /// Linear steady-state profile sampled on the grid of spacing `h`
    pub fn steady_state_profile(&self, h: f64) -> DVector<f64> {
        self.node_positions(h).map(|x| self.steady_state_at(x))
    }
}

impl PhysicalModel for RodProblem {
    fn name(&self) -> &str {
        "1D heat conduction"
    }

    fn description(&self) -> Option<&str> {
        Some("Rod with fixed end temperatures and a uniform initial interior temperature")
    }

    fn validate(&self) -> Result<(), SolverError> {
        self.boundaries.validate()?;
        solver::require_finite("initial_temperature", self.initial_temperature)?;
        solver::require_finite("x_left", self.x_left)?;
        solver::require_finite("x_right", self.x_right)?;
        if self.x_right <= self.x_left {
            return Err(SolverError::invalid(
                "x_right",
                format!(
                    "must be greater than x_left ({}), got {}",
                    self.x_left, self.x_right
                ),
            ));
        }
        if !self.length().is_finite() {
            return Err(SolverError::invalid(
                "x_right",
                format!("rod length from x_left ({}) overflows", self.x_left),
            ));
        }
        self.material.validate()?;
        solver::require_non_negative("total_time", self.total_time)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
