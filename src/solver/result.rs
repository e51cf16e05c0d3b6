//! Simulation results
//!
//! Results carry the sampled data a front end plots, the derived scalars it
//! displays, and a small string metadata map for diagnostics and
//! reproducibility.

use std::collections::HashMap;
use std::fmt;

use nalgebra::DVector;

// =================================================================================================
// Trajectory
// =================================================================================================

/// Scalars reported for one flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSummary {
    /// Horizontal distance at termination (m)
    pub range: f64,
    /// Highest recorded height (m)
    pub max_height: f64,
    /// Speed at termination (m/s)
    pub final_speed: f64,
    /// Number of steps times dt (s)
    pub flight_time: f64,
    /// Number of integration steps taken
    pub steps: usize,
}

impl fmt::Display for FlightSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Range: {:.2} m", self.range)?;
        writeln!(f, "Max height: {:.2} m", self.max_height)?;
        writeln!(f, "Final speed: {:.2} m/s", self.final_speed)?;
        write!(f, "Flight time: {:.2} s", self.flight_time)
    }
}

/// Sampled flight path plus summary
///
/// `points[i]` was recorded at `time_points[i]`. The below-ground state that
/// ended the run is not among the samples; `summary.range` and
/// `summary.final_speed` describe that state.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Recorded (x, y) samples (m)
    pub points: Vec<(f64, f64)>,
    /// Time of each sample (s)
    pub time_points: Vec<f64>,
    /// Derived scalars
    pub summary: FlightSummary,
    /// Additional information (solver name, dt, ...)
    pub metadata: HashMap<String, String>,
}

impl Trajectory {
    pub fn new(points: Vec<(f64, f64)>, time_points: Vec<f64>, summary: FlightSummary) -> Self {
        Self {
            points,
            time_points,
            summary,
            metadata: HashMap::new(),
        }
    }

    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Highest recorded sample
    pub fn apex(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Iterate over `(t, x, y)` samples
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.time_points
            .iter()
            .zip(self.points.iter())
            .map(|(&t, &(x, y))| (t, x, y))
    }

    /// Horizontal coordinates, ready for plotting
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.0).collect()
    }

    /// Vertical coordinates, ready for plotting
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.1).collect()
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

// =================================================================================================
// Heat Profile
// =================================================================================================

/// Temperature field at one time level
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Elapsed time (s)
    pub time: f64,
    /// Node temperatures
    pub temperatures: DVector<f64>,
}

/// Temperature profile at the requested elapsed time
#[derive(Debug, Clone, PartialEq)]
pub struct HeatProfile {
    /// Node coordinates (m)
    pub positions: DVector<f64>,
    /// Node temperatures
    pub temperatures: DVector<f64>,
    /// Simulated time, `steps · tau` (s)
    pub elapsed: f64,
    /// Number of implicit steps taken
    pub steps: usize,
    /// Intermediate fields, when requested
    pub snapshots: Vec<Snapshot>,
    /// Additional information (solver name, tau, h, ...)
    pub metadata: HashMap<String, String>,
}

impl HeatProfile {
    pub fn new(positions: DVector<f64>, temperatures: DVector<f64>, elapsed: f64, steps: usize) -> Self {
        Self {
            positions,
            temperatures,
            elapsed,
            steps,
            snapshots: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Number of grid nodes
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// Temperature at the middle of the rod
    ///
    /// Middle node for an odd node count, mean of the two middle nodes
    /// otherwise. `None` for an empty profile.
    pub fn center_temperature(&self) -> Option<f64> {
        let n = self.temperatures.len();
        match n {
            0 => None,
            n if n % 2 == 1 => Some(self.temperatures[n / 2]),
            n => Some(0.5 * (self.temperatures[n / 2 - 1] + self.temperatures[n / 2])),
        }
    }

    /// Largest absolute difference to another field of the same length
    pub fn max_deviation(&self, other: &DVector<f64>) -> Option<f64> {
        if other.len() != self.temperatures.len() {
            return None;
        }
        Some((&self.temperatures - other).amax())
    }

    /// Iterate over `(x, T)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions.iter().copied().zip(self.temperatures.iter().copied())
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

// =================================================================================================
// Tests
// =================================================================================================
