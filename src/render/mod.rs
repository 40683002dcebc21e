//! Rendering pipeline implementation

pub mod uniform;
pub mod geometry;
pub mod coverage;
pub mod framebuffer;
pub mod blend;
pub mod pipeline;

pub use self::uniform::{Interpolate, barycentric_interpolate, linear_interpolate};
pub use self::geometry::{FaceWinding, ClipVertex, ScreenVertex};
pub use self::coverage::{CurveFill, fill_coverage, curve_fill_shader, sign, parabola_implicit};
pub use self::framebuffer::FrameBuffer;
pub use self::blend::{Blend, AlphaOver, GenericBlend};
pub use self::pipeline::{Pipeline, VertexShader, FragmentShader, Fragment};
