//! Error types for configuration and topology edits.

use core::fmt;

/// Errors reported by checked engine operations.
///
/// Numerical trouble inside a step (coincident points and the like) is never
/// surfaced here; the stepper handles it locally.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Point index is out of bounds.
    PointOutOfBounds { index: usize, count: usize },
    /// Spring index is out of bounds.
    SpringOutOfBounds { index: usize, count: usize },
    /// Bounds must leave room for at least one point diameter on each axis.
    InvalidBounds,
    /// Point radius must be non-negative; push radius must be positive.
    InvalidRadius,
    /// Stiffness must be non-negative.
    InvalidStiffness,
    /// Damping must be non-negative.
    InvalidDamping,
    /// A configuration value is NaN or infinite.
    NonFiniteParameter(&'static str),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
            SimError::SpringOutOfBounds { index, count } => {
                write!(f, "spring index {} out of bounds (count: {})", index, count)
            }
            SimError::InvalidBounds => {
                write!(f, "bounds must be at least one point diameter wide and tall")
            }
            SimError::InvalidRadius => {
                write!(f, "point radius must be non-negative and push radius positive")
            }
            SimError::InvalidStiffness => write!(f, "stiffness must be non-negative"),
            SimError::InvalidDamping => write!(f, "damping must be non-negative"),
            SimError::NonFiniteParameter(name) => write!(f, "`{}` must be finite", name),
        }
    }
}

impl core::error::Error for SimError {}
