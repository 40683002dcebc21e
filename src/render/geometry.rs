//! Vertex types shared between shader stages

use nalgebra::Vector2;

use super::uniform::Interpolate;

/// Defines face winding variations. These apply to screen-space vertices,
/// so imagine the vertices as they are viewed on the final image.
///
/// If all triangles of a mesh have the same face winding, triangles flipped
/// during mesh construction can be skipped by culling the opposite order.
/// Note that the y-flip applied when normalizing device coordinates to screen
/// coordinates also flips the winding: a counter-clockwise triangle in device
/// space rasterizes clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceWinding {
    /// Clockwise face winding, as viewed on the final image
    Clockwise,
    /// Counter-Clockwise face winding, as viewed on the final image
    CounterClockwise,
}

/// Defines a vertex and varyings in normalized device coordinates, which is
/// produced by the vertex shader stage.
#[derive(Debug, Clone)]
pub struct ClipVertex<K> where K: Send + Sync + Interpolate {
    /// Position in normalized device coordinates, `[-1, 1]²` with y pointing up.
    pub position: Vector2<f32>,
    /// Any custom data to be sent between shader stages, such as colors,
    /// curve-space coordinates, orientation signs and whatever else
    /// you would usually put in varyings to share between shader stages.
    pub uniforms: K,
}

/// Defines a vertex and varyings in screen-space, which is used in the fragment shader.
///
/// Normalized device coordinates are transformed to screen-space after the
/// vertex shader stage but before the fragment shader stage.
#[derive(Debug, Clone)]
pub struct ScreenVertex<K> where K: Send + Sync + Interpolate {
    /// Screen-space vertex position. This is the position on screen of this vertex.
    ///
    /// Similar to `gl_FragCoord`
    pub position: Vector2<f32>,
    /// Any custom data to be sent between shader stages, such as colors,
    /// curve-space coordinates, orientation signs and whatever else
    /// you would usually put in varyings to share between shader stages.
    pub uniforms: K,
}

impl<K> ClipVertex<K> where K: Send + Sync + Interpolate {
    #[inline(always)]
    pub fn new(position: Vector2<f32>, uniforms: K) -> ClipVertex<K> {
        ClipVertex { position, uniforms }
    }

    /// Normalizes the device coordinates to screen-space using the given viewport.
    ///
    /// This assumes a viewport in the shape of:
    ///
    /// ```text
    /// 0,0-----------------x
    ///  |                  |
    ///  |                  |
    ///  |                  |
    ///  |                  |
    ///  |                  |
    ///  y-----------------x,y
    /// ```
    ///
    /// where the y-axis is flipped.
    pub fn normalize(self, viewport: (f32, f32)) -> ScreenVertex<K> {
        ScreenVertex {
            position: Vector2::new(
                (self.position.x + 1.0) * (viewport.0 / 2.0),
                // Vertical is flipped
                (1.0 - self.position.y) * (viewport.1 / 2.0),
            ),
            uniforms: self.uniforms,
        }
    }
}

impl<K> ScreenVertex<K> where K: Send + Sync + Interpolate {
    #[inline(always)]
    pub fn new(position: Vector2<f32>, uniforms: K) -> ScreenVertex<K> {
        ScreenVertex { position, uniforms }
    }
}

/// Signed area of a screen-space triangle.
///
/// Screen space has y pointing down, so the area comes out positive for
/// triangles wound clockwise as viewed on the final image.
#[inline]
pub fn triangle_signed_area(x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) -> f32 {
    0.5 * ((x2 - x1) * (y3 - y1) - (x3 - x1) * (y2 - y1))
}

#[inline(always)]
pub fn winding_order_from_signed_area(area: f32) -> FaceWinding {
    if area.is_sign_negative() { FaceWinding::CounterClockwise } else { FaceWinding::Clockwise }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    use super::{ClipVertex, FaceWinding, triangle_signed_area, winding_order_from_signed_area};

    #[test]
    fn test_normalize_corners() {
        let viewport = (200.0, 100.0);

        let top_left = ClipVertex::new(Vector2::new(-1.0, 1.0), 0.0f32).normalize(viewport);
        let bottom_right = ClipVertex::new(Vector2::new(1.0, -1.0), 0.0f32).normalize(viewport);
        let center = ClipVertex::new(Vector2::new(0.0, 0.0), 0.0f32).normalize(viewport);

        assert_relative_eq!(top_left.position.x, 0.0);
        assert_relative_eq!(top_left.position.y, 0.0);
        assert_relative_eq!(bottom_right.position.x, 200.0);
        assert_relative_eq!(bottom_right.position.y, 100.0);
        assert_relative_eq!(center.position.x, 100.0);
        assert_relative_eq!(center.position.y, 50.0);
    }

    #[test]
    fn test_winding() {
        // y grows downward in screen space
        let cw = triangle_signed_area(0.0, 0.0, 4.0, 0.0, 0.0, 4.0);
        let ccw = triangle_signed_area(0.0, 0.0, 0.0, 4.0, 4.0, 0.0);

        assert_relative_eq!(cw, 8.0);
        assert_relative_eq!(ccw, -8.0);

        assert_eq!(winding_order_from_signed_area(cw), FaceWinding::Clockwise);
        assert_eq!(winding_order_from_signed_area(ccw), FaceWinding::CounterClockwise);
    }
}
