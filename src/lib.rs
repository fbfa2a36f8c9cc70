//! planar_angle: an immutable planar angle value type
//!
//! This crate provides [`Angle`], which stores an angle in radians and offers
//! degree conversion, normalization to `[0, 2π)`, trigonometry (including the
//! haversine used by great-circle formulas), arithmetic operators and a
//! tolerant equality with a fixed epsilon of 1e-4 radians.
//!
//! The core API never fails; NaN and infinities flow through it untouched.
//! Checked constructors returning [`Result`] are available for callers that
//! want non-finite inputs rejected.
//!
//! ## Crate Features
//!
//! - `approx` (off by default): implements `approx::AbsDiffEq`, `RelativeEq`
//!   and `UlpsEq` for [`Angle`]. Its tests only build with the feature on:
//!   `cargo test --features approx`.

pub mod angle;
pub mod constants;
pub mod errors;

// Re-export commonly used types
pub use angle::Angle;
pub use errors::{AngleError, Result, Unit};
