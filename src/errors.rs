//! Error types for the checked angle operations
//!
//! The core `Angle` API never fails: NaN and infinities propagate through it
//! the way IEEE-754 arithmetic does. The checked constructors and
//! `Angle::checked_div` are for callers that want those cases rejected.

use std::fmt;

use thiserror::Error;

use crate::angle::Angle;

/// Unit an input value was expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Value given in degrees
    Degrees,
    /// Value given in radians
    Radians,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Degrees => f.write_str("degrees"),
            Unit::Radians => f.write_str("radians"),
        }
    }
}

/// Main error type for checked angle operations
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AngleError {
    /// A checked constructor was handed NaN or an infinity
    #[error("Non-finite angle: {value} {unit}")]
    NonFinite {
        /// The rejected input
        value: f64,
        /// Unit the input was given in
        unit: Unit,
    },

    /// `checked_div` was asked to divide by zero
    #[error("Division of {angle} by zero")]
    DivisionByZero {
        /// The dividend
        angle: Angle,
    },
}

/// Result type for checked angle operations
pub type Result<T> = std::result::Result<T, AngleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_message() {
        let err = AngleError::NonFinite {
            value: f64::INFINITY,
            unit: Unit::Degrees,
        };
        assert_eq!(err.to_string(), "Non-finite angle: inf degrees");
    }

    #[test]
    fn test_division_by_zero_message() {
        let err = AngleError::DivisionByZero {
            angle: Angle::ZERO,
        };
        assert_eq!(err.to_string(), "Division of 0° by zero");
    }
}
