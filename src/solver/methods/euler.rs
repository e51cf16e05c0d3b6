//! Semi-implicit Euler integrator for projectile flight with quadratic drag
//!
//! # Mathematical Background
//!
//! ```text
//! dv/dt = -g·ŷ - k·|v|·v
//! dr/dt = v
//! ```
//!
//! Each step first updates the velocity with the drag evaluated at the old
//! speed, then moves the position with the *new* velocity:
//!
//! ```text
//! v      = |v_n|
//! vx_n+1 = vx_n - k·vx_n·v·dt
//! vy_n+1 = vy_n - (g + k·vy_n·v)·dt
//! x_n+1  = x_n + vx_n+1·dt
//! y_n+1  = y_n + vy_n+1·dt
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (error ~ O(dt))
//! - **Stability**: Conditionally stable. Once `k·|v|·dt` exceeds 1 the drag
//!   update overshoots and flips the velocity; such runs are returned as they
//!   are, non-physical but finite.
//! - **Termination**: the first step whose new height is negative ends the
//!   run. That state is not recorded and the ground crossing is not
//!   interpolated, so range and final speed overshoot by up to one step.

use log::debug;
use nalgebra::Vector2;

use crate::physics::projectile::ideal_flight_time;
use crate::physics::{KinematicState, LaunchParameters, PhysicalModel};
use crate::solver::{
    DEFAULT_MAX_STEPS, FlightSummary, Solver, SolverConfiguration, SolverError, SolverType,
    Trajectory,
};

/// Upper bound on the up-front sample reservation.
const MAX_RESERVED_SAMPLES: usize = 1 << 20;

/// Margin of the derived step budget over the drag-free step count.
const BUDGET_FACTOR: f64 = 4.0;

// =================================================================================================
// Drag Trajectory Integrator
// =================================================================================================

/// Fixed-step integrator that flies a projectile until it returns to launch height
///
/// # Algorithm
///
/// 1. Compute the drag factor `k` once
/// 2. Start at the origin with `(v0·cosθ, v0·sinθ)`
/// 3. While `y ≥ 0`: record `(x, y)`, track the highest `y`, take one step
/// 4. Report range, apex height, final speed and flight time
///
/// The loop is bounded by the configuration's `max_steps`, or by
/// [`DragTrajectoryIntegrator::step_budget`] when none is set. A launch that
/// never comes down (for example `g ≤ 0`) ends with
/// [`SolverError::StepLimitExceeded`] instead of spinning forever.
///
/// # Example
///
/// ```rust
/// use labsim::physics::LaunchParameters;
/// use labsim::solver::{DragTrajectoryIntegrator, Solver, SolverConfiguration};
///
/// let launch = LaunchParameters::default().with_angle_degrees(30.0);
/// let config = SolverConfiguration::explicit(0.01);
///
/// let flight = DragTrajectoryIntegrator::new().solve(&launch, &config).unwrap();
/// assert!(flight.summary.range > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTrajectoryIntegrator;

impl DragTrajectoryIntegrator {
    /// Create a new drag trajectory integrator
    pub fn new() -> Self {
        Self
    }

    /// Step budget used when the configuration sets none
    ///
    /// Four times the drag-free flight time over `dt`, and never less than
    /// [`DEFAULT_MAX_STEPS`]. Launches without a finite positive drag-free
    /// flight time (zero speed, `g ≤ 0`) get the floor.
    pub fn step_budget(launch: &LaunchParameters, dt: f64) -> usize {
        let expected = ideal_flight_time(launch.speed, launch.angle, launch.gravity) / dt;
        if expected.is_finite() && expected > 0.0 {
            ((BUDGET_FACTOR * expected) as usize).max(DEFAULT_MAX_STEPS)
        } else {
            DEFAULT_MAX_STEPS
        }
    }

    /// Advance `state` by one step of size `dt`
    ///
    /// `k` is the drag factor and `gravity` the downward acceleration.
    pub fn step(state: &KinematicState, k: f64, gravity: f64, dt: f64) -> KinematicState {
        let v = state.speed();
        let vx = state.velocity.x - k * state.velocity.x * v * dt;
        let vy = state.velocity.y - (gravity + k * state.velocity.y * v) * dt;

        KinematicState {
            position: Vector2::new(state.position.x + vx * dt, state.position.y + vy * dt),
            velocity: Vector2::new(vx, vy),
        }
    }
}

impl Solver for DragTrajectoryIntegrator {
    type Model = LaunchParameters;
    type Output = Trajectory;

    fn solve(
        &self,
        launch: &LaunchParameters,
        config: &SolverConfiguration,
    ) -> Result<Trajectory, SolverError> {
        // ====== Step 1: Validation ======

        config.validate()?;
        launch.validate()?;

        let (dt, max_steps) = match config.solver_type {
            SolverType::ExplicitTimeStepping {
                time_step,
                max_steps,
            } => (
                time_step,
                max_steps.unwrap_or_else(|| Self::step_budget(launch, time_step)),
            ),
            other => {
                return Err(SolverError::UnsupportedConfiguration {
                    solver: self.name(),
                    requested: other.name(),
                });
            }
        };

        // ====== Step 2: Setup ======

        let k = launch.drag_factor();
        let gravity = launch.gravity;
        let mut state = launch.initial_state();

        let expected = ideal_flight_time(launch.speed, launch.angle, gravity) / dt;
        let reserve = if expected.is_finite() && expected > 0.0 {
            (expected as usize).min(max_steps).min(MAX_RESERVED_SAMPLES) + 1
        } else {
            1
        };
        let mut points = Vec::with_capacity(reserve);
        let mut time_points = Vec::with_capacity(reserve);

        let mut max_height = 0.0_f64;
        let mut steps = 0_usize;

        // ====== Step 3: Time Integration ======

        while state.is_airborne() {
            if steps == max_steps {
                return Err(SolverError::StepLimitExceeded { max_steps });
            }

            points.push((state.x(), state.y()));
            // Time from the step index, not an accumulated sum
            time_points.push(steps as f64 * dt);
            max_height = max_height.max(state.y());

            state = Self::step(&state, k, gravity, dt);
            steps += 1;

            if !state.is_finite() {
                return Err(SolverError::NumericOverflow {
                    quantity: "kinematic state",
                    step: steps,
                });
            }
        }

        // ====== Step 4: Build Result ======

        let summary = FlightSummary {
            range: state.x(),
            max_height,
            final_speed: state.speed(),
            flight_time: steps as f64 * dt,
            steps,
        };

        debug!(
            "{}: {} steps of dt = {dt}, k = {k:.6e}, range = {:.3} m, apex = {:.3} m",
            self.name(),
            steps,
            summary.range,
            summary.max_height
        );

        let mut result = Trajectory::new(points, time_points, summary);
        result.add_metadata("solver", self.name());
        result.add_metadata("model", launch.name());
        if let Some(description) = launch.description() {
            result.add_metadata("description", description);
        }
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("steps", &steps.to_string());
        result.add_metadata("drag factor", &k.to_string());

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Semi-implicit Euler"
    }
}

/// Fly a projectile with the given physical values until it lands
///
/// `angle` is in radians. Equivalent to building [`LaunchParameters`] and
/// running [`DragTrajectoryIntegrator`] with the default step budget.
///
/// # Errors
///
/// [`SolverError::InvalidParameter`] for `v0 < 0`, `mass ≤ 0`, `radius < 0`
/// or `dt ≤ 0`; [`SolverError::NumericOverflow`] when the state stops being
/// finite; [`SolverError::StepLimitExceeded`] when it has not landed within
/// [`DragTrajectoryIntegrator::step_budget`] steps.
#[allow(clippy::too_many_arguments)]
pub fn integrate(
    v0: f64,
    angle: f64,
    mass: f64,
    radius: f64,
    air_density: f64,
    drag_coefficient: f64,
    dt: f64,
    gravity: f64,
) -> Result<Trajectory, SolverError> {
    let launch = LaunchParameters::new(
        v0,
        angle,
        mass,
        radius,
        air_density,
        drag_coefficient,
        gravity,
    );
    DragTrajectoryIntegrator::new().solve(&launch, &SolverConfiguration::explicit(dt))
}

// =================================================================================================
// Tests
// =================================================================================================
