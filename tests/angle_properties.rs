//! Property-style checks of the public `Angle` API

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::f64::consts::PI;
use std::hash::{Hash, Hasher};

use approx::assert_abs_diff_eq;
use planar_angle::constants::TAU;
use planar_angle::Angle;
use rstest::rstest;

fn hash_of(angle: &Angle) -> u64 {
    let mut hasher = DefaultHasher::new();
    angle.hash(&mut hasher);
    hasher.finish()
}

#[rstest]
#[case(0.0)]
#[case(45.0)]
#[case(-123.456)]
#[case(359.999)]
#[case(1080.0)]
#[case(1e-6)]
fn degrees_round_trip(#[case] degrees: f64) {
    let angle = Angle::from_degrees(degrees);
    assert_abs_diff_eq!(angle.degrees(), degrees, epsilon = 1e-9);
    assert!(angle == Angle::from_degrees(degrees));
}

#[rstest]
#[case(0.0)]
#[case(PI)]
#[case(-2.5)]
#[case(100.0)]
fn radians_round_trip(#[case] radians: f64) {
    assert_eq!(Angle::from_radians(radians).radians(), radians);
}

#[rstest]
#[case(0.3)]
#[case(-0.3)]
#[case(2.0)]
#[case(-5.9)]
fn normalize_ignores_whole_turns(#[case] radians: f64) {
    let base = Angle::from_radians(radians).normalize();
    assert!(base.radians() >= 0.0 && base.radians() < TAU);

    for k in -4..=4 {
        let shifted = Angle::from_radians(radians + TAU * k as f64).normalize();
        assert!(shifted.radians() >= 0.0 && shifted.radians() < TAU);
        assert_abs_diff_eq!(shifted.degrees(), base.degrees(), epsilon = 1e-9);
    }
}

#[rstest]
#[case(30.0, 0.5)]
#[case(90.0, 1.0)]
#[case(-30.0, -0.5)]
fn sine_of_known_angles(#[case] degrees: f64, #[case] expected: f64) {
    assert_abs_diff_eq!(Angle::from_degrees(degrees).sin(), expected, epsilon = 1e-10);
}

#[test]
fn cosine_tangent_haversine() {
    assert_abs_diff_eq!(Angle::from_degrees(60.0).cos(), 0.5, epsilon = 1e-10);
    assert_abs_diff_eq!(Angle::from_degrees(45.0).tan(), 1.0, epsilon = 1e-10);
    assert_abs_diff_eq!(Angle::from_degrees(30.0).haversine(), 0.06699, epsilon = 1e-5);
}

#[test]
fn arithmetic_matches_degree_expectations() {
    assert!(Angle::from_degrees(30.0) + Angle::from_degrees(60.0) == Angle::from_degrees(90.0));
    assert!(Angle::from_degrees(60.0) - Angle::from_degrees(30.0) == Angle::from_degrees(30.0));
    assert!(Angle::from_degrees(45.0) * 2.0 == Angle::from_degrees(90.0));
    assert!(Angle::from_degrees(90.0) / 2.0 == Angle::from_degrees(45.0));
}

#[test]
fn relational_operators() {
    let a30 = Angle::from_degrees(30.0);
    let a45 = Angle::from_degrees(45.0);
    let a90 = Angle::from_degrees(90.0);

    assert!(a90 > a45);
    assert!(a30 < a45);
    assert!(a45 >= a30);
    assert!(a45 >= Angle::from_degrees(45.0));
    assert!(a30 <= a45);
    assert!(a45 <= Angle::from_degrees(45.0));
    assert!(!(a45 < Angle::from_degrees(45.0)));
}

#[test]
fn equality_respects_epsilon() {
    let a90 = Angle::from_degrees(90.0);
    assert!(a90 == Angle::from_degrees(90.0));
    assert!(a90 != Angle::from_degrees(90.0) + Angle::EPSILON * 2.0);
}

#[test]
fn hash_follows_raw_radians() {
    assert_eq!(
        hash_of(&Angle::from_degrees(0.0)),
        hash_of(&Angle::from_degrees(0.0))
    );
    assert_ne!(
        hash_of(&Angle::from_degrees(360.0)),
        hash_of(&Angle::from_degrees(720.0))
    );
}

#[test]
fn hash_set_distinguishes_full_turns() {
    let mut seen = HashSet::new();
    seen.insert(hash_of(&Angle::from_degrees(360.0)));
    seen.insert(hash_of(&Angle::from_degrees(720.0)));
    seen.insert(hash_of(&Angle::from_degrees(360.0)));
    assert_eq!(seen.len(), 2);
}

#[test]
fn display_appends_degree_symbol() {
    assert_eq!(Angle::ZERO.to_string(), "0°");
    assert!(Angle::from_degrees(45.0).to_string().ends_with('°'));
    assert_eq!(format!("{:.2}", Angle::from_degrees(45.0)), "45.00°");
}

#[test]
fn angles_are_shareable_across_threads() {
    let angle = Angle::from_degrees(30.0);
    let handle = std::thread::spawn(move || angle.sin());
    let sin = handle.join().unwrap();
    assert_abs_diff_eq!(sin, 0.5, epsilon = 1e-10);
}
