//! Constants module for angle conversions and comparison

use std::f64::consts::PI;

// Conversion factors
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Turns
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Comparison
/// Tolerance in radians below which two angles compare equal
pub const EPSILON_RADIANS: f64 = 1e-4;
