//! Renders a disc built from four quadratic arcs and writes it to a PNG.
//!
//! Run with `cargo run --example curve_fill --features image_compat`.

use std::sync::Arc;

use nalgebra::{Point2, Vector2};

use curverender::curve::QuadraticCurve;
use curverender::image_compat::ImageFrameBuffer;
use curverender::mesh::{Mesh, Vertex};
use curverender::pixel::RGBAf32Pixel;
use curverender::render::{AlphaOver, ClipVertex, CurveFill, FrameBuffer, Pipeline, curve_fill_shader};

struct Attributes {
    curve: Vector2<f32>,
}

struct Params {
    color: RGBAf32Pixel,
    orientation: f32,
}

/// A disc approximated by one quadratic arc per quadrant: a triangle fan over
/// the chords, plus one coverage triangle per arc that rounds the chord out
/// to the curve.
fn disc_mesh(radius: f32) -> Arc<Mesh<Attributes>> {
    let center = Point2::new(0.0f32, 0.0);

    // constant curve coordinates on the chord side, so fan triangles are
    // covered everywhere under a -1 orientation
    let inside = Vector2::new(0.0f32, 1.0);

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let quadrants = [
        ((radius, 0.0), (radius, radius), (0.0, radius)),
        ((0.0, radius), (-radius, radius), (-radius, 0.0)),
        ((-radius, 0.0), (-radius, -radius), (0.0, -radius)),
        ((0.0, -radius), (radius, -radius), (radius, 0.0)),
    ];

    for &(from, ctrl, to) in &quadrants {
        let arc = QuadraticCurve::new(Point2::new(from.0, from.1),
                                      Point2::new(ctrl.0, ctrl.1),
                                      Point2::new(to.0, to.1));

        // fan triangle up to the chord
        for position in &[center, arc.from, arc.to] {
            indices.push(vertices.len());
            vertices.push(Vertex::new(*position, Attributes { curve: inside }));
        }

        // coverage triangle from the chord out to the curve
        for &(position, uv) in &arc.coverage_triangle() {
            indices.push(vertices.len());
            vertices.push(Vertex::new(position, Attributes { curve: uv }));
        }
    }

    Arc::new(Mesh::with_indices(vertices, indices).expect("disc mesh is well-formed"))
}

fn main() {
    env_logger::init();

    let white = RGBAf32Pixel { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    let crimson = RGBAf32Pixel { r: 0.86, g: 0.08, b: 0.24, a: 1.0 };

    let framebuffer = FrameBuffer::new_with(512, 512, white);

    // the filled side of every arc is the chord side
    let mut pipeline = Pipeline::new(framebuffer, Params { color: crimson, orientation: -1.0 });

    {
        let vertex_shader = pipeline.render_mesh(disc_mesh(0.8));

        let fragment_shader = vertex_shader.run(|vertex, params: &Params| {
            ClipVertex::new(vertex.position.coords, CurveFill {
                color: params.color,
                curve: vertex.data.curve,
                orientation: params.orientation,
            })
        });

        fragment_shader.with_blend(AlphaOver).triangles(curve_fill_shader);
    }

    let image = pipeline.framebuffer().copy_to_image().expect("framebuffer fits in an image");

    image.save("curve_fill.png").expect("writing curve_fill.png");
}
