//! Point-mass projectile under gravity and quadratic air drag
//!
//! # Mathematical Background
//!
//! A sphere of mass `m` and radius `r` moving with velocity **v** through air
//! of density `ρ` feels a drag force `½·Cd·ρ·A·|v|·v`, with `A = π·r²`.
//! Dividing by the mass folds every constant into a single drag factor:
//!
//! ```text
//! k = Cd · π · r² · ρ / (2 · m)
//!
//! dvx/dt = -k · vx · |v|
//! dvy/dt = -g - k · vy · |v|
//! ```
//!
//! With `k = 0` the motion is the ideal parabola, whose range, apex height
//! and flight time have closed forms (see [`ideal_range`]).

use nalgebra::Vector2;

use crate::physics::PhysicalModel;
use crate::solver::{self, SolverError};

/// Standard gravity (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Air density at sea level, roughly 0 °C (kg/m³)
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.29;

// =================================================================================================
// Launch Parameters
// =================================================================================================

/// Physical parameters of a single launch
///
/// The angle is stored in radians. Use [`LaunchParameters::with_angle_degrees`]
/// when the value comes from a human-facing form.
///
/// # Example
///
/// ```rust
/// use labsim::physics::LaunchParameters;
///
/// let launch = LaunchParameters::default()
///     .with_speed(30.0)
///     .with_angle_degrees(60.0);
///
/// assert!(launch.drag_factor() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParameters {
    /// Initial speed (m/s)
    pub speed: f64,
    /// Launch angle above the horizontal (rad)
    pub angle: f64,
    /// Mass (kg)
    pub mass: f64,
    /// Sphere radius (m)
    pub radius: f64,
    /// Air density (kg/m³)
    pub air_density: f64,
    /// Shape drag coefficient Cd (dimensionless)
    pub drag_coefficient: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self {
            speed: 50.0,
            angle: 45.0_f64.to_radians(),
            mass: 1.0,
            radius: 0.05,
            air_density: SEA_LEVEL_AIR_DENSITY,
            drag_coefficient: 0.15,
            gravity: STANDARD_GRAVITY,
        }
    }
}

impl LaunchParameters {
    /// Create parameters from the full set of physical values (angle in radians)
    pub fn new(
        speed: f64,
        angle: f64,
        mass: f64,
        radius: f64,
        air_density: f64,
        drag_coefficient: f64,
        gravity: f64,
    ) -> Self {
        Self {
            speed,
            angle,
            mass,
            radius,
            air_density,
            drag_coefficient,
            gravity,
        }
    }

    /// Drag-free launch with the given speed and angle (rad)
    pub fn vacuum(speed: f64, angle: f64) -> Self {
        Self {
            speed,
            angle,
            air_density: 0.0,
            ..Self::default()
        }
    }

    /// Builder pattern: set initial speed
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Builder pattern: set launch angle in radians
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Builder pattern: set launch angle in degrees
    pub fn with_angle_degrees(mut self, degrees: f64) -> Self {
        self.angle = degrees.to_radians();
        self
    }

    /// Builder pattern: set mass
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Builder pattern: set radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Builder pattern: set air density
    pub fn with_air_density(mut self, air_density: f64) -> Self {
        self.air_density = air_density;
        self
    }

    /// Builder pattern: set drag coefficient
    pub fn with_drag_coefficient(mut self, drag_coefficient: f64) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    /// Builder pattern: set gravity
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Launch angle in degrees
    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    /// Cross-sectional area π·r² (m²)
    pub fn cross_section(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// Composite drag factor `k = Cd·π·r²·ρ / (2·m)` (1/m)
    pub fn drag_factor(&self) -> f64 {
        self.drag_coefficient * self.cross_section() * self.air_density / (2.0 * self.mass)
    }

    /// State at the launch point
    pub fn initial_state(&self) -> KinematicState {
        KinematicState::launch(self.speed, self.angle)
    }
}

impl PhysicalModel for LaunchParameters {
    fn name(&self) -> &str {
        "Projectile with quadratic drag"
    }

    fn description(&self) -> Option<&str> {
        Some("Point mass under gravity and quadratic drag, flown back to launch height")
    }

    fn validate(&self) -> Result<(), SolverError> {
        solver::require_non_negative("speed", self.speed)?;
        solver::require_finite("angle", self.angle)?;
        solver::require_positive("mass", self.mass)?;
        solver::require_non_negative("radius", self.radius)?;
        solver::require_non_negative("air_density", self.air_density)?;
        solver::require_non_negative("drag_coefficient", self.drag_coefficient)?;
        solver::require_finite("gravity", self.gravity)?;
        Ok(())
    }
}

// =================================================================================================
// Kinematic State
// =================================================================================================

/// Position and velocity of the point mass
///
/// `position.y` is measured from the launch height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    /// Position (m)
    pub position: Vector2<f64>,
    /// Velocity (m/s)
    pub velocity: Vector2<f64>,
}

impl KinematicState {
    /// State at the origin moving with `speed` at `angle` (rad)
    pub fn launch(speed: f64, angle: f64) -> Self {
        Self {
            position: Vector2::zeros(),
            velocity: Vector2::new(speed * angle.cos(), speed * angle.sin()),
        }
    }

    /// Horizontal distance from the launch point (m)
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Height above the launch point (m)
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Magnitude of the velocity (m/s)
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Still at or above the launch height
    pub fn is_airborne(&self) -> bool {
        self.position.y >= 0.0
    }

    /// Every component is finite
    pub fn is_finite(&self) -> bool {
        self.position.iter().chain(self.velocity.iter()).all(|v| v.is_finite())
    }
}

// =================================================================================================
// Drag-Free Closed Forms
// =================================================================================================

/// Range of the drag-free parabola: `v0²·sin(2θ)/g`
pub fn ideal_range(speed: f64, angle: f64, gravity: f64) -> f64 {
    speed * speed * (2.0 * angle).sin() / gravity
}

/// Apex height of the drag-free parabola: `v0²·sin²θ/(2g)`
pub fn ideal_max_height(speed: f64, angle: f64, gravity: f64) -> f64 {
    let vy = speed * angle.sin();
    vy * vy / (2.0 * gravity)
}

/// Time to return to launch height without drag: `2·v0·sinθ/g`
pub fn ideal_flight_time(speed: f64, angle: f64, gravity: f64) -> f64 {
    2.0 * speed * angle.sin() / gravity
}

/// Position on the drag-free parabola at time `t`
pub fn ideal_position(speed: f64, angle: f64, gravity: f64, t: f64) -> Vector2<f64> {
    Vector2::new(
        speed * angle.cos() * t,
        speed * angle.sin() * t - 0.5 * gravity * t * t,
    )
}

// =================================================================================================
// Tests
// =================================================================================================
