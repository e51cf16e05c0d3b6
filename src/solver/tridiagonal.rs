//! Tridiagonal elimination (Thomas algorithm) for constant-stencil 1D systems
//!
//! Interior node `i` of the grid obeys
//!
//! ```text
//! A·T[i+1] − B·T[i] + C·T[i−1] = F[i]
//! ```
//!
//! and the two end nodes are fixed. The forward sweep expresses every node in
//! terms of its right neighbour, `T[i] = alpha[i]·T[i+1] + beta[i]`; the back
//! substitution then walks from the right boundary to the left one.
//!
//! The coefficient buffers are allocated per call and dropped after the back
//! substitution, so nothing survives from one time step to the next.

use nalgebra::DVector;

use crate::solver::SolverError;

/// Constant three-point stencil of the interior equations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stencil {
    /// Coefficient of the right neighbour T[i+1]
    pub upper: f64,
    /// Diagonal coefficient (enters with a minus sign)
    pub diagonal: f64,
    /// Coefficient of the left neighbour T[i−1]
    pub lower: f64,
}

impl Stencil {
    pub fn new(upper: f64, diagonal: f64, lower: f64) -> Self {
        Self {
            upper,
            diagonal,
            lower,
        }
    }
}

/// Elimination coefficients produced by the forward sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepCoefficients {
    pub alpha: DVector<f64>,
    pub beta: DVector<f64>,
}

impl SweepCoefficients {
    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }
}

/// Forward elimination sweep
///
/// `rhs` holds `F` for every node (the end entries are ignored). The sweep
/// visits nodes `first..=n-2`; entries before `first` other than node 0 keep
/// their zero initialisation. `step` is only used for error reporting.
///
/// # Errors
///
/// [`SolverError::NumericOverflow`] when a denominator `B − C·alpha[i−1]` is
/// zero, subnormal or non-finite.
pub fn forward_sweep(
    stencil: &Stencil,
    rhs: &DVector<f64>,
    left: f64,
    first: usize,
    step: usize,
) -> Result<SweepCoefficients, SolverError> {
    let n = rhs.len();
    let mut alpha = DVector::zeros(n);
    let mut beta = DVector::zeros(n);

    if n == 0 {
        return Ok(SweepCoefficients { alpha, beta });
    }
    beta[0] = left;

    for i in first.max(1)..n.saturating_sub(1) {
        let denom = stencil.diagonal - stencil.lower * alpha[i - 1];
        if !denom.is_normal() {
            return Err(SolverError::NumericOverflow {
                quantity: "elimination denominator",
                step,
            });
        }
        alpha[i] = stencil.upper / denom;
        beta[i] = (stencil.lower * beta[i - 1] - rhs[i]) / denom;
    }

    Ok(SweepCoefficients { alpha, beta })
}

/// Back substitution from the right boundary to node 1
///
/// Returns a new field with `left` and `right` written to the end nodes.
pub fn back_substitute(coefficients: &SweepCoefficients, left: f64, right: f64) -> DVector<f64> {
    let n = coefficients.len();
    let mut field = DVector::zeros(n);

    if n == 0 {
        return field;
    }
    field[n - 1] = right;
    for i in (1..n.saturating_sub(1)).rev() {
        field[i] = coefficients.alpha[i] * field[i + 1] + coefficients.beta[i];
    }
    field[0] = left;

    field
}

// =================================================================================================
// Tests
// =================================================================================================
