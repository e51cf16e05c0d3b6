//! Fixed-value boundaries for 1D fields
//!
//! # Design
//!
//! A Dirichlet boundary prescribes the value at the two ends of a 1D grid.
//! The end nodes never take part in interior updates: solvers write them
//! back after every step with [`DirichletBoundaries::apply`], so the
//! invariant `field[0] == left && field[n-1] == right` holds at every time
//! level.

use std::fmt;

use nalgebra::DVector;

use crate::solver::{self, SolverError};

/// Prescribed values at the left and right ends of a 1D domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirichletBoundaries {
    /// Value at the first node
    pub left: f64,
    /// Value at the last node
    pub right: f64,
}

impl DirichletBoundaries {
    /// Create boundaries from the two end values
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Same value at both ends
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Both end values must be finite
    pub fn validate(&self) -> Result<(), SolverError> {
        solver::require_finite("left boundary", self.left)?;
        solver::require_finite("right boundary", self.right)
    }

    /// Write the boundary values into the end nodes of `field`
    ///
    /// A single-node field takes the left value.
    pub fn apply(&self, field: &mut DVector<f64>) {
        let n = field.len();
        if n == 0 {
            return;
        }
        field[n - 1] = self.right;
        field[0] = self.left;
    }

    /// Field of `n` nodes holding `interior` everywhere except the two ends
    pub fn initial_field(&self, n: usize, interior: f64) -> DVector<f64> {
        let mut field = DVector::from_element(n, interior);
        self.apply(&mut field);
        field
    }

    /// True when the end nodes of `field` hold exactly the boundary values
    pub fn holds_on(&self, field: &DVector<f64>) -> bool {
        match field.len() {
            0 => true,
            1 => field[0] == self.left,
            n => field[0] == self.left && field[n - 1] == self.right,
        }
    }

    /// Linear interpolation between the two ends, `s` in `[0, 1]`
    pub fn interpolate(&self, s: f64) -> f64 {
        self.left + (self.right - self.left) * s
    }
}

impl fmt::Display for DirichletBoundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T(left) = {}, T(right) = {}", self.left, self.right)
    }
}

// ================================================================================================
// Tests
// ================================================================================================
