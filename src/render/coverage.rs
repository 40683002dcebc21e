//! Per-fragment curve coverage test
//!
//! A quadratic Bézier segment maps onto the canonical parabola `y = x²` in a
//! local "curve space": assigning the curve-space coordinates `(0, 0)`,
//! `(½, 0)`, `(1, 1)` to the segment's `from`/`ctrl`/`to` triangle makes the
//! barycentric interpolation of those coordinates land exactly on the
//! parabola for every point of the curve (see
//! [`QuadraticCurve::coverage_triangle`](../../curve/struct.QuadraticCurve.html#method.coverage_triangle)).
//!
//! The fragment stage then needs only one evaluation of the implicit form
//! `x² − y` per covered pixel to decide which side of the curve the pixel is
//! on, instead of any amount of geometric subdivision. A per-segment
//! orientation sign selects which side counts as filled, so a single shader
//! serves both curve windings.
//!
//! This is the quadratic case of Loop & Blinn, *Resolution Independent Curve
//! Rendering using Programmable Graphics Hardware* (2005).

use nalgebra::Vector2;
use num_traits::Float;

use crate::pixel::{Pixel, RGBAf32Pixel};

use super::geometry::ScreenVertex;
use super::pipeline::Fragment;

/// Sign of a value with the same convention as GLSL's `sign()`: positive
/// values map to `1`, negative values to `-1` and zero to `0`.
///
/// Note that this differs from `f32::signum`, which maps `0.0` to `1.0`.
#[inline(always)]
pub fn sign<N: Float>(value: N) -> N {
    if value > N::zero() {
        N::one()
    } else if value < N::zero() {
        -N::one()
    } else {
        N::zero()
    }
}

/// Evaluates the implicit form `x² − y` of the canonical parabola at a
/// curve-space point: zero exactly on the curve, positive on the
/// control-point side, negative on the chord side.
#[inline(always)]
pub fn parabola_implicit(curve: Vector2<f32>) -> f32 {
    curve.x * curve.x - curve.y
}

/// Decides whether a fragment lies on the filled side of its curve segment
/// and folds the result into the color's alpha channel.
///
/// `curve` is the interpolated curve-space coordinate of the fragment. It is
/// free to fall outside the `[0, 1]` range the triangle corners were set up
/// with; the sign test is total. `orientation` is `+1.0` to fill the
/// control-point side or `-1.0` to fill the chord side.
///
/// The output carries the input RGB untouched and the input alpha multiplied
/// by the binary coverage. A fragment landing exactly on the curve has an
/// implicit value of zero, which matches neither orientation and resolves to
/// uncovered.
#[inline]
pub fn fill_coverage<P: Pixel>(color: P, curve: Vector2<f32>, orientation: f32) -> P {
    let coverage = if sign(parabola_implicit(curve)) == sign(orientation) {
        1.0
    } else {
        0.0
    };

    color.mul_alpha(coverage)
}

crate::declare_uniforms! {
    /// Varyings consumed by [`curve_fill_shader`](fn.curve_fill_shader.html).
    ///
    /// `color` and `curve` are meant to vary across the triangle;
    /// `orientation` is flat per segment, which barycentric interpolation of
    /// an equal corner value preserves.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct CurveFill {
        pub color: RGBAf32Pixel,
        pub curve: Vector2<f32>,
        pub orientation: f32,
    }
}

/// The stock curve-fill fragment shader, ready to hand to
/// [`FragmentShader::triangles`](struct.FragmentShader.html#method.triangles).
pub fn curve_fill_shader<U>(vertex: &ScreenVertex<CurveFill>, _uniforms: &U) -> Fragment<RGBAf32Pixel> {
    let CurveFill { color, curve, orientation } = vertex.uniforms;

    Fragment::Color(fill_coverage(color, curve, orientation))
}

#[cfg(test)]
mod test {
    use nalgebra::Vector2;

    use super::sign;

    #[test]
    fn test_sign_convention() {
        assert_eq!(sign(3.5f32), 1.0);
        assert_eq!(sign(-0.25f32), -1.0);
        assert_eq!(sign(0.0f32), 0.0);
        assert_eq!(sign(-0.0f32), 0.0);
        assert_eq!(sign(2.0f64), 1.0);
    }

    #[test]
    fn test_implicit_zero_on_curve() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_eq!(super::parabola_implicit(Vector2::new(t, t * t)), 0.0);
        }
    }
}
