//! `approx` integration for `Angle`
//!
//! **Requires crate feature `"approx"`**
//!
//! The default epsilon is [`Angle::EPSILON`] in radians. Note that
//! `approx` compares with `<=`, whereas `Angle`'s `==` is strict.

#[cfg(feature = "approx")]
mod approx_traits {
    use ::approx::{AbsDiffEq, RelativeEq, UlpsEq};

    use crate::angle::Angle;

    impl AbsDiffEq for Angle {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            Angle::EPSILON.radians
        }

        fn abs_diff_eq(&self, other: &Angle, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.radians, &other.radians, epsilon)
        }
    }

    impl RelativeEq for Angle {
        fn default_max_relative() -> f64 {
            f64::default_max_relative()
        }

        fn relative_eq(&self, other: &Angle, epsilon: f64, max_relative: f64) -> bool {
            f64::relative_eq(&self.radians, &other.radians, epsilon, max_relative)
        }
    }

    impl UlpsEq for Angle {
        fn default_max_ulps() -> u32 {
            f64::default_max_ulps()
        }

        fn ulps_eq(&self, other: &Angle, epsilon: f64, max_ulps: u32) -> bool {
            f64::ulps_eq(&self.radians, &other.radians, epsilon, max_ulps)
        }
    }

    #[cfg(test)]
    mod tests {
        use crate::angle::Angle;
        use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq};

        #[test]
        fn test_default_epsilon_matches_angle_epsilon() {
            let a = Angle::from_radians(1.0);
            assert_abs_diff_eq!(a, Angle::from_radians(1.0 + 0.5e-4));
            assert_abs_diff_ne!(a, Angle::from_radians(1.0 + 2e-4));
        }

        #[test]
        fn test_relative_eq() {
            let sum = Angle::from_degrees(30.0) + Angle::from_degrees(60.0);
            assert_relative_eq!(sum, Angle::from_degrees(90.0), epsilon = 1e-12);
        }
    }
}
