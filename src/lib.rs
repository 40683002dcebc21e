//! Software rasterizer for resolution-independent quadratic Bézier fills.
//!
//! [Documentation](https://docs.rs/curverender/)
//!
//! Instead of flattening curves into many small line segments, curved regions
//! are tessellated into a handful of triangles whose vertices carry
//! curve-space coordinates, and a per-fragment inside test against the
//! implicit parabola `y = x²` reconstructs the exact curve boundary at any
//! resolution. See the [`render::coverage`](render/coverage/index.html)
//! module for the test itself.
//!
//! ### Current Features:
//!
//! * Rendering pipeline with user-defined vertex and fragment shaders.
//! * Full barycentric interpolation of per-vertex varyings for triangle
//! rasterization, so curve-space coordinates arrive at each fragment
//! already interpolated.
//! * Stock curve-fill fragment shader performing the implicit inside test,
//! serving both curve windings through a per-segment orientation sign.
//! * Quadratic Bézier utilities: sampling, subdivision, monotone splitting
//! and the curve-space vertex assignment for coverage triangles.
//! * Framebuffer with `f32` and `u8` RGBA color formats.
//! * Pluggable blending, with source-over provided.
//! * Parallel rendering with Rayon. Vertex processing runs per-vertex and
//! rasterization runs per-row, so no two threads ever share a pixel.
//! * Simple indexed mesh representation with user-defined vertex data.
//! * Built-in conversion to the `image` crate, using the `image_compat`
//! cargo feature.

pub mod error;
pub mod utils;
pub mod pixel;
pub mod mesh;
pub mod curve;
pub mod render;

#[cfg(feature = "image_compat")]
pub mod image_compat;

pub use crate::error::{RenderError, RenderResult};
pub use crate::pixel::{Pixel, RGBAf32Pixel, RGBAu8Pixel};
pub use crate::mesh::{Mesh, Vertex};
pub use crate::curve::QuadraticCurve;
pub use crate::render::{Interpolate, FaceWinding, ClipVertex, ScreenVertex,
                        FrameBuffer, Blend, AlphaOver,
                        Pipeline, VertexShader, FragmentShader, Fragment,
                        CurveFill, fill_coverage, curve_fill_shader};
