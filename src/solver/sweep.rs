//! Time-step comparison runs
//!
//! Flies the same launch once per time step so the effect of `dt` on the
//! path can be compared side by side. Runs are independent; with the
//! `parallel` feature they are spread over the rayon thread pool.

use crate::physics::LaunchParameters;
use crate::solver::{DragTrajectoryIntegrator, Solver, SolverConfiguration, SolverError, Trajectory};

/// Fly `launch` once for every entry of `time_steps`
///
/// Results come back in the order of `time_steps`. A bad step size fails
/// only its own run.
///
/// # Example
///
/// ```rust
/// use labsim::physics::LaunchParameters;
/// use labsim::solver::compare_time_steps;
///
/// let runs = compare_time_steps(&LaunchParameters::default(), &[0.1, 0.05, 0.01]);
/// assert_eq!(runs.len(), 3);
/// assert!(runs.iter().all(|run| run.is_ok()));
/// ```
pub fn compare_time_steps(
    launch: &LaunchParameters,
    time_steps: &[f64],
) -> Vec<Result<Trajectory, SolverError>> {
    let fly = |dt: f64| {
        DragTrajectoryIntegrator::new().solve(launch, &SolverConfiguration::explicit(dt))
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        time_steps.par_iter().map(|&dt| fly(dt)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        time_steps.iter().map(|&dt| fly(dt)).collect()
    }
}
