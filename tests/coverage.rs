//! Properties of the per-fragment curve coverage test

use nalgebra::Vector2;

use curverender::pixel::RGBAf32Pixel;
use curverender::render::{fill_coverage, parabola_implicit, sign};

fn rgba(r: f32, g: f32, b: f32, a: f32) -> RGBAf32Pixel {
    RGBAf32Pixel { r, g, b, a }
}

/// A spread of curve-space points on both sides of the parabola, including
/// points far outside the nominal [0, 1] setup range.
fn sample_points() -> Vec<Vector2<f32>> {
    let mut points = Vec::new();

    for i in -8..=8 {
        for j in -8..=8 {
            points.push(Vector2::new(i as f32 * 0.5, j as f32 * 0.5));
        }
    }

    points.push(Vector2::new(100.0, -3.0));
    points.push(Vector2::new(-40.0, 1e6));
    points.push(Vector2::new(0.001, 0.5));

    points
}

#[test]
fn test_sign_match_truth_table() {
    let color = rgba(0.25, 0.5, 0.75, 1.0);

    for point in sample_points() {
        let implicit = parabola_implicit(point);

        if implicit == 0.0 {
            continue;
        }

        let covered = fill_coverage(color, point, 1.0);
        let inverted = fill_coverage(color, point, -1.0);

        if implicit > 0.0 {
            assert_eq!(covered.a, 1.0, "control-point side must be covered for +1 at {:?}", point);
            assert_eq!(inverted.a, 0.0, "control-point side must be uncovered for -1 at {:?}", point);
        } else {
            assert_eq!(covered.a, 0.0, "chord side must be uncovered for +1 at {:?}", point);
            assert_eq!(inverted.a, 1.0, "chord side must be covered for -1 at {:?}", point);
        }
    }
}

#[test]
fn test_orientation_symmetry() {
    let color = rgba(0.1, 0.2, 0.3, 0.8);

    for point in sample_points() {
        if parabola_implicit(point) == 0.0 {
            continue;
        }

        let plus = fill_coverage(color, point, 1.0);
        let minus = fill_coverage(color, point, -1.0);

        // exactly one orientation covers every non-boundary point
        assert_eq!(plus.a + minus.a, color.a, "coverage must invert with orientation at {:?}", point);
    }
}

#[test]
fn test_rgb_passthrough() {
    let color = rgba(0.9, 0.01, 0.33, 0.5);

    for point in sample_points() {
        for &orientation in &[1.0, -1.0] {
            let out = fill_coverage(color, point, orientation);

            assert_eq!((out.r, out.g, out.b), (color.r, color.g, color.b));
        }
    }
}

#[test]
fn test_alpha_is_zero_or_input() {
    let color = rgba(0.0, 0.0, 0.0, 0.7);

    for point in sample_points() {
        for &orientation in &[1.0, -1.0] {
            let out = fill_coverage(color, point, orientation);

            assert!(out.a == 0.0 || out.a == color.a,
                    "alpha {} is neither 0 nor the input alpha at {:?}", out.a, point);
        }
    }
}

#[test]
fn test_orientation_magnitude_is_irrelevant() {
    let color = rgba(1.0, 1.0, 1.0, 1.0);

    for point in sample_points() {
        assert_eq!(fill_coverage(color, point, 2.5).a, fill_coverage(color, point, 1.0).a);
        assert_eq!(fill_coverage(color, point, -0.125).a, fill_coverage(color, point, -1.0).a);
    }
}

#[test]
fn test_on_curve_boundary_is_uncovered() {
    let color = rgba(1.0, 1.0, 1.0, 1.0);

    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let point = Vector2::new(t, t * t);

        assert_eq!(sign(parabola_implicit(point)), 0.0);
        assert_eq!(fill_coverage(color, point, 1.0).a, 0.0);
        assert_eq!(fill_coverage(color, point, -1.0).a, 0.0);
    }
}

#[test]
fn test_concrete_scenarios() {
    // above the parabola at the apex, fill toward the control point
    let out = fill_coverage(rgba(1.0, 0.0, 0.0, 1.0), Vector2::new(0.0, 1.0), 1.0);
    assert_eq!((out.r, out.g, out.b, out.a), (1.0, 0.0, 0.0, 0.0));

    // below the parabola at the apex, fill toward the control point
    let out = fill_coverage(rgba(1.0, 0.0, 0.0, 1.0), Vector2::new(0.0, -1.0), 1.0);
    assert_eq!((out.r, out.g, out.b, out.a), (1.0, 0.0, 0.0, 1.0));

    // below the parabola outside the setup range, fill toward the chord
    let out = fill_coverage(rgba(0.0, 1.0, 0.0, 0.5), Vector2::new(2.0, 1.0), -1.0);
    assert_eq!((out.r, out.g, out.b, out.a), (0.0, 1.0, 0.0, 0.0));

    // above the parabola outside the setup range, fill toward the chord
    let out = fill_coverage(rgba(0.0, 1.0, 0.0, 0.5), Vector2::new(2.0, 5.0), -1.0);
    assert_eq!((out.r, out.g, out.b, out.a), (0.0, 1.0, 0.0, 0.5));
}

#[test]
fn test_u8_pixels_pass_through_too() {
    use curverender::pixel::RGBAu8Pixel;

    let color = RGBAu8Pixel { r: 10, g: 20, b: 30, a: 200 };

    let covered = fill_coverage(color, Vector2::new(0.0, -1.0), 1.0);
    let uncovered = fill_coverage(color, Vector2::new(0.0, 1.0), 1.0);

    assert_eq!(covered, color);
    assert_eq!(uncovered, RGBAu8Pixel { r: 10, g: 20, b: 30, a: 0 });
}
