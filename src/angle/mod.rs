//! # Angle Representation Module
//!
//! This module provides an immutable planar angle that hides the
//! degrees/radians duality behind a single value type.
//!
//! ## Internal Storage
//!
//! Every `Angle` stores its value in radians. Degrees are derived on demand
//! with `radians × 180/π` and never cached. Nothing mutates an angle after
//! construction: arithmetic and normalization always hand back a new value.
//!
//! ## Equality
//!
//! Two angles are equal when their radians differ by strictly less than
//! [`Angle::EPSILON`]. That relation is not transitive, so `Angle` implements
//! `PartialEq` but deliberately not `Eq`.
//!
//! Ordering (`compare`, `<`, `>`) looks at the raw radians instead, while
//! `<=` and `>=` also accept epsilon-equal angles. For two angles within
//! epsilon of each other, `a < b` and `a >= b` can therefore both hold.
//!
//! Hashing uses the exact bits of the stored radians, so angles that are
//! `==` may still hash differently. Keying a `HashMap` by `Angle` only finds
//! entries whose radians match bit for bit.
//!
//! ## Examples
//!
//! ```rust
//! use planar_angle::Angle;
//!
//! let right = Angle::from_degrees(30.0) + Angle::from_degrees(60.0);
//! assert!(right == Angle::from_degrees(90.0));
//! assert!((right.sin() - 1.0).abs() < 1e-12);
//!
//! let wrapped = Angle::from_degrees(-90.0).normalize();
//! assert!((wrapped.degrees() - 270.0).abs() < 1e-9);
//! ```

mod angle_approx;
mod ops;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use log::{debug, trace};

use crate::constants::{DEG2RAD, EPSILON_RADIANS, RAD2DEG, TAU};
use crate::errors::{AngleError, Result, Unit};

/// An immutable planar angle stored in radians
///
/// Construct with [`Angle::from_degrees`] or [`Angle::from_radians`]. The
/// type is `Copy`; pass it by value.
///
/// No input validation happens on the plain constructors or operators: NaN
/// and infinities propagate the way IEEE-754 arithmetic propagates them.
/// Use [`Angle::try_from_degrees`], [`Angle::try_from_radians`] or
/// [`Angle::checked_div`] to reject them instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// The zero angle
    pub const ZERO: Self = Self { radians: 0.0 };

    /// Equality tolerance, 1e-4 radians
    pub const EPSILON: Self = Self {
        radians: EPSILON_RADIANS,
    };

    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planar_angle::Angle;
    ///
    /// let half_turn = Angle::from_degrees(180.0);
    /// assert!((half_turn.radians() - std::f64::consts::PI).abs() < 1e-15);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees * DEG2RAD,
        }
    }

    /// Creates an angle from a value in radians
    ///
    /// The value is stored exactly as provided.
    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Creates the angle of the vector `(x, y)` measured from the positive x axis
    ///
    /// The result lies in `[-π, π]`.
    pub fn from_atan2(y: f64, x: f64) -> Self {
        Self::from_radians(y.atan2(x))
    }

    /// Like [`Angle::from_degrees`], but rejects NaN and infinities
    pub fn try_from_degrees(degrees: f64) -> Result<Self> {
        if !degrees.is_finite() {
            debug!("Rejecting non-finite angle of {} degrees", degrees);
            return Err(AngleError::NonFinite {
                value: degrees,
                unit: Unit::Degrees,
            });
        }
        Ok(Self::from_degrees(degrees))
    }

    /// Like [`Angle::from_radians`], but rejects NaN and infinities
    pub fn try_from_radians(radians: f64) -> Result<Self> {
        if !radians.is_finite() {
            debug!("Rejecting non-finite angle of {} radians", radians);
            return Err(AngleError::NonFinite {
                value: radians,
                unit: Unit::Radians,
            });
        }
        Ok(Self::from_radians(radians))
    }

    /// Returns the stored value in radians, exactly
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Returns the angle in degrees
    ///
    /// Computed from the stored radians on every call.
    pub fn degrees(&self) -> f64 {
        self.radians * RAD2DEG
    }

    /// Returns the equivalent angle in `[0, 2π)`
    ///
    /// Exact multiples of 2π map to zero. Non-finite angles normalize to NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planar_angle::Angle;
    /// use std::f64::consts::PI;
    ///
    /// assert_eq!(Angle::from_radians(4.0 * PI).normalize().radians(), 0.0);
    /// assert!((Angle::from_radians(-PI / 2.0).normalize().radians() - 1.5 * PI).abs() < 1e-12);
    /// ```
    pub fn normalize(&self) -> Self {
        if !self.radians.is_finite() {
            trace!("Normalizing non-finite angle {:?}", self);
        }

        // `%` keeps the sign of the dividend
        let mut radians = self.radians % TAU;
        if radians < 0.0 {
            radians += TAU;
        }
        // tiny negative remainders round up to exactly TAU
        if radians >= TAU {
            radians = 0.0;
        }
        // folds -0.0 into 0.0
        Self {
            radians: radians + 0.0,
        }
    }

    /// Sine of the stored radians
    pub fn sin(&self) -> f64 {
        self.radians.sin()
    }

    /// Cosine of the stored radians
    pub fn cos(&self) -> f64 {
        self.radians.cos()
    }

    /// Tangent of the stored radians
    pub fn tan(&self) -> f64 {
        self.radians.tan()
    }

    /// Sine and cosine of the stored radians
    pub fn sin_cos(&self) -> (f64, f64) {
        self.radians.sin_cos()
    }

    /// Haversine of the angle, `sin²(θ/2)`
    ///
    /// Building block of great-circle distance formulas. The argument is
    /// usually a difference of latitudes or longitudes; no range check is made.
    pub fn haversine(&self) -> f64 {
        let half = (self.radians / 2.0).sin();
        half * half
    }

    /// Absolute value of the angle
    pub fn abs(&self) -> Self {
        Self::from_radians(self.radians.abs())
    }

    /// Divides the angle by `scalar`, failing on a zero divisor
    pub fn checked_div(&self, scalar: f64) -> Result<Self> {
        if scalar == 0.0 {
            debug!("Refusing to divide {} by zero", self);
            return Err(AngleError::DivisionByZero { angle: *self });
        }
        Ok(*self / scalar)
    }

    /// Tolerant equality: radians differ by strictly less than [`Angle::EPSILON`]
    pub fn equals(&self, other: &Self) -> bool {
        (self.radians - other.radians).abs() < Self::EPSILON.radians
    }

    /// Orders two angles by their raw radians, ignoring the equality tolerance
    ///
    /// Suitable for `sort_by`. Ties are exact float equality, so `0.0` and
    /// `-0.0` tie. NaN orders below every other angle and ties with NaN.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.radians.is_nan(), other.radians.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self
                .radians
                .partial_cmp(&other.radians)
                .unwrap_or(Ordering::Equal),
        }
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }

    fn lt(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    fn gt(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    fn le(&self, other: &Self) -> bool {
        self.lt(other) || self.equals(other)
    }

    fn ge(&self, other: &Self) -> bool {
        self.gt(other) || self.equals(other)
    }
}

// Hashes the exact bits, not the tolerant equality above.
impl Hash for Angle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.radians.to_bits().hash(state);
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}°", precision, self.degrees()),
            None => write!(f, "{}°", self.degrees()),
        }
    }
}
