//! Arithmetic operators for `Angle`
//!
//! All operators work on the stored radians and return a new angle. Results
//! are never normalized; `a - b` may be negative and sums may exceed 2π.

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Zero;

use super::Angle;

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_radians(-self.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        Angle::from_radians(self.radians * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;

    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

/// Division by zero follows IEEE-754: the result holds ±∞ or NaN.
impl Div<f64> for Angle {
    type Output = Angle;

    fn div(self, rhs: f64) -> Angle {
        Angle::from_radians(self.radians / rhs)
    }
}

/// `scalar / angle` is the commuted `angle / scalar`, not `scalar / radians`.
impl Div<Angle> for f64 {
    type Output = Angle;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Angle) -> Angle {
        rhs / self
    }
}

impl Sum for Angle {
    fn sum<I: Iterator<Item = Angle>>(iter: I) -> Angle {
        iter.fold(Angle::ZERO, |acc, angle| acc + angle)
    }
}

impl<'a> Sum<&'a Angle> for Angle {
    fn sum<I: Iterator<Item = &'a Angle>>(iter: I) -> Angle {
        iter.copied().sum()
    }
}

impl Zero for Angle {
    fn zero() -> Angle {
        Angle::ZERO
    }

    /// Tolerant, like `==`
    fn is_zero(&self) -> bool {
        *self == Angle::ZERO
    }
}
