//! Solver error type
//!
//! Every fallible operation in the crate reports a [`SolverError`]. Parameter
//! problems are detected before any computation starts, numerical problems
//! are detected after the step that produced them.

use thiserror::Error;

/// Error type for the numerical cores.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// A physical or numerical parameter violates its domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// An intermediate value became NaN or infinite.
    #[error("non-finite {quantity} at step {step}")]
    NumericOverflow {
        quantity: &'static str,
        step: usize,
    },

    /// The ground-return loop did not terminate within its step budget.
    #[error("projectile still airborne after {max_steps} steps")]
    StepLimitExceeded { max_steps: usize },

    /// A solver received a configuration for a different method.
    #[error("{solver} does not support {requested} configuration")]
    UnsupportedConfiguration {
        solver: &'static str,
        requested: &'static str,
    },
}

impl SolverError {
    /// Shorthand for [`SolverError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// True for errors raised before any computation began.
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::UnsupportedConfiguration { .. }
        )
    }
}
