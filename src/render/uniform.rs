//! Types, traits and macros for interpolated varyings
//!
//! Currently, the `Interpolate` trait is implemented for `f32`, `f64`,
//! nalgebra vectors up to dimension four, and 2D points.
//!
//! It can be implemented automatically for your varyings structures by using the
//! [`declare_uniforms!`](../../macro.declare_uniforms.html) macro.

use std::ops::{Add, Mul};

use nalgebra::{Point2, Vector2, Vector3, Vector4};

/// Describes a type that can be interpolated with barycentric coordinates.
///
/// This is required for any rasterization to occur: whatever a vertex carries
/// (colors, curve-space coordinates, orientation signs) must be recombined at
/// every covered pixel from the three corner values.
///
/// See [this document](https://classes.soe.ucsc.edu/cmps160/Fall10/resources/barycentricInterpolation.pdf) for more information.
///
/// This trait can be implemented automatically for most varyings structures by using the
/// [`declare_uniforms!`](../../macro.declare_uniforms.html) macro,
/// which delegates both methods to each member.
pub trait Interpolate {
    /// Interpolate the three values with their corresponding barycentric coordinate weight
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self;
    /// Simple linear interpolation
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self;
}

/// Convenience method for interpolating three values with barycentric coordinates.
#[inline(always)]
pub fn barycentric_interpolate<T>(u: f32, ux: T, v: f32, vx: T, w: f32, wx: T) -> T where T: Add<Output = T> + Mul<f32, Output = T> {
    ux * u + vx * v + wx * w
}

#[inline(always)]
pub fn linear_interpolate<T>(t: f32, x1: T, x2: T) -> T where T: Add<Output = T> + Mul<f32, Output = T> {
    x1 * (1.0 - t) + x2 * t
}

impl Interpolate for f32 {
    #[inline(always)]
    fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
        ux * u + vx * v + wx * w
    }

    #[inline(always)]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        (1.0 - t) * x1 + t * x2
    }
}

impl Interpolate for f64 {
    #[inline(always)]
    fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
        ux * u as f64 + vx * v as f64 + wx * w as f64
    }

    #[inline(always)]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        (1.0 - t as f64) * x1 + t as f64 * x2
    }
}

macro_rules! impl_vector_interpolate {
    ($($v:ident),+) => {$(
        impl Interpolate for $v<f32> {
            #[inline]
            fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
                ux * u + vx * v + wx * w
            }

            #[inline]
            fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
                x1 * (1.0 - t) + x2 * t
            }
        }
    )+}
}

impl_vector_interpolate!(Vector2, Vector3, Vector4);

impl Interpolate for Point2<f32> {
    #[inline]
    fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
        Point2::from(Interpolate::barycentric_interpolate(u, &ux.coords,
                                                          v, &vx.coords,
                                                          w, &wx.coords))
    }

    #[inline]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        Point2::from(Interpolate::linear_interpolate(t, &x1.coords, &x2.coords))
    }
}

/// Declares a structure and implements the [`Interpolate`](render/uniform/trait.Interpolate.html)
/// trait for it by delegating the trait to each member.
///
/// So, for example, this:
///
/// ```ignore
/// declare_uniforms!(
///     #[derive(Debug, Clone, Copy)]
///     pub struct MyVaryings {
///         pub color: RGBAf32Pixel,
///         pub curve: Vector2<f32>,
///         pub orientation: f32,
///     }
/// );
/// ```
///
/// becomes the same struct definition plus an `Interpolate` impl in which
/// every field is interpolated independently.
///
/// For now, the struct itself must be `pub` and all the members must be `pub`.
#[macro_export]
macro_rules! declare_uniforms {
    ($(#[$($struct_attrs:tt)*])* pub struct $name:ident {
        $($(#[$($field_attrs:tt)*])* pub $field:ident: $t:ty,)*
    }) => {
        $(#[$($struct_attrs)*])*
        pub struct $name {
            $(
                $(#[$($field_attrs)*])*
                pub $field: $t
            ),*
        }

        impl $crate::render::uniform::Interpolate for $name {
            fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
                $name {
                    $(
                        $field: $crate::render::uniform::Interpolate::barycentric_interpolate(u, &ux.$field,
                                                                                              v, &vx.$field,
                                                                                              w, &wx.$field)
                    ),*
                }
            }

            fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
                $name {
                    $(
                        $field: $crate::render::uniform::Interpolate::linear_interpolate(t, &x1.$field, &x2.$field)
                    ),*
                }
            }
        }
    };
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    use super::Interpolate;

    #[test]
    fn test_barycentric_f32() {
        let x = f32::barycentric_interpolate(0.5, &1.0, 0.25, &2.0, 0.25, &4.0);

        assert_relative_eq!(x, 2.0);
    }

    #[test]
    fn test_barycentric_vector() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 0.0);
        let c = Vector2::new(0.0, 1.0);

        let mid = Vector2::barycentric_interpolate(1.0 / 3.0, &a, 1.0 / 3.0, &b, 1.0 / 3.0, &c);

        assert_relative_eq!(mid.x, 1.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(mid.y, 1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_declare_uniforms_delegates() {
        crate::declare_uniforms! {
            #[derive(Debug, Clone, Copy)]
            pub struct Pair {
                pub scalar: f32,
                pub vector: Vector2<f32>,
            }
        }

        let a = Pair { scalar: 0.0, vector: Vector2::new(0.0, 2.0) };
        let b = Pair { scalar: 1.0, vector: Vector2::new(2.0, 0.0) };

        let mid = Pair::linear_interpolate(0.5, &a, &b);

        assert_relative_eq!(mid.scalar, 0.5);
        assert_relative_eq!(mid.vector.x, 1.0);
        assert_relative_eq!(mid.vector.y, 1.0);
    }
}
