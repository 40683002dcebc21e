//! Shader execution pipeline

use std::sync::Arc;

use log::{debug, trace};
use rayon::prelude::*;

use crate::mesh::{Mesh, Vertex};
use crate::pixel::Pixel;
use crate::utils::clamp;

use super::blend::Blend;
use super::framebuffer::FrameBuffer;
use super::geometry::{FaceWinding, ClipVertex, ScreenVertex, winding_order_from_signed_area};
use super::uniform::Interpolate;

/// Starting point for the rendering pipeline.
///
/// By itself, it only holds the framebuffer and global uniforms,
/// but it spawns the first shader stage using those.
pub struct Pipeline<U, P> where P: Pixel, U: Send + Sync {
    framebuffer: FrameBuffer<P>,
    uniforms: U,
}

/// Vertex shader stage, which transforms mesh vertices into device coordinates.
pub struct VertexShader<'a, V, U: 'a, P: 'static> where V: Send + Sync,
                                                        U: Send + Sync,
                                                        P: Pixel {
    mesh: Arc<Mesh<V>>,
    uniforms: &'a U,
    framebuffer: &'a mut FrameBuffer<P>,
}

/// Fragment shader stage, which rasterizes triangles and shades every
/// covered pixel with interpolated varyings.
pub struct FragmentShader<'a, V, U: 'a, K, P: 'static, B = ()> where V: Send + Sync,
                                                                     U: Send + Sync,
                                                                     K: Send + Sync + Interpolate,
                                                                     P: Pixel {
    mesh: Arc<Mesh<V>>,
    uniforms: &'a U,
    framebuffer: &'a mut FrameBuffer<P>,
    screen_vertices: Vec<ScreenVertex<K>>,
    cull_faces: Option<FaceWinding>,
    blend: B,
}

/// Fragment returned by the fragment shader, which can either be a color
/// value for the pixel or a discard flag to skip that fragment altogether.
#[derive(Debug, Clone, Copy)]
pub enum Fragment<P> where P: Pixel {
    /// Discard the fragment altogether, as if it was never there.
    Discard,
    /// Desired color for the pixel
    Color(P),
}

impl<U, P> Pipeline<U, P> where U: Send + Sync,
                                P: Pixel {
    /// Create a new rendering pipeline instance
    pub fn new(framebuffer: FrameBuffer<P>, uniforms: U) -> Pipeline<U, P> {
        assert!(framebuffer.width() > 0, "Framebuffer must have a non-zero width");
        assert!(framebuffer.height() > 0, "Framebuffer must have a non-zero height");

        debug!("pipeline over a {}x{} framebuffer", framebuffer.width(), framebuffer.height());

        Pipeline { framebuffer, uniforms }
    }

    /// Start the shading pipeline for a given mesh
    pub fn render_mesh<V>(&mut self, mesh: Arc<Mesh<V>>) -> VertexShader<V, U, P> where V: Send + Sync {
        VertexShader {
            mesh,
            uniforms: &self.uniforms,
            framebuffer: &mut self.framebuffer,
        }
    }

    /// Returns a reference to the uniforms value
    pub fn uniforms(&self) -> &U { &self.uniforms }
    /// Returns a mutable reference to the uniforms value
    pub fn uniforms_mut(&mut self) -> &mut U { &mut self.uniforms }

    /// Returns a reference to the framebuffer
    pub fn framebuffer(&self) -> &FrameBuffer<P> { &self.framebuffer }
    /// Returns a mutable reference to the framebuffer
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer<P> { &mut self.framebuffer }
}

impl<'a, V, U: 'a, P: 'static> VertexShader<'a, V, U, P> where V: Send + Sync,
                                                               U: Send + Sync,
                                                               P: Pixel {
    /// Run the vertex shader over every mesh vertex in parallel, and
    /// normalize the results to screen coordinates for the fragment stage.
    pub fn run<S, K>(self, vertex_shader: S) -> FragmentShader<'a, V, U, K, P> where S: Fn(&Vertex<V>, &U) -> ClipVertex<K> + Sync,
                                                                                     K: Send + Sync + Interpolate {
        let viewport = self.framebuffer.viewport();

        let screen_vertices = self.mesh.vertices.par_iter().map(|vertex| {
            vertex_shader(vertex, self.uniforms).normalize(viewport)
        }).collect();

        FragmentShader {
            mesh: self.mesh,
            uniforms: self.uniforms,
            framebuffer: self.framebuffer,
            screen_vertices,
            cull_faces: None,
            blend: (),
        }
    }
}

impl<'a, V, U: 'a, K, P: 'static, B> FragmentShader<'a, V, U, K, P, B> where V: Send + Sync,
                                                                             U: Send + Sync,
                                                                             K: Send + Sync + Interpolate,
                                                                             P: Pixel {
    /// Skip triangles with the given screen-space winding order. For more
    /// information on how and why this works, check out the documentation for
    /// the [`FaceWinding`](../geometry/enum.FaceWinding.html) enum.
    #[inline(always)]
    pub fn cull_faces(&mut self, cull: Option<FaceWinding>) {
        self.cull_faces = cull;
    }

    /// Replace the blend behavior, consuming this stage and returning it with
    /// the new blend in place.
    #[must_use]
    pub fn with_blend<B2>(self, blend: B2) -> FragmentShader<'a, V, U, K, P, B2> where B2: Blend<P> {
        FragmentShader {
            blend,
            mesh: self.mesh,
            uniforms: self.uniforms,
            framebuffer: self.framebuffer,
            screen_vertices: self.screen_vertices,
            cull_faces: self.cull_faces,
        }
    }
}

impl<'a, V, U: 'a, K, P: 'static, B> FragmentShader<'a, V, U, K, P, B> where V: Send + Sync,
                                                                             U: Send + Sync,
                                                                             K: Send + Sync + Interpolate,
                                                                             P: Pixel,
                                                                             B: Blend<P> {
    /// Rasterize every triangle of the mesh, running the fragment shader for
    /// each covered pixel center with barycentrically interpolated varyings
    /// and blending the result into the framebuffer.
    ///
    /// Parallelism is per framebuffer row: rows are disjoint `&mut` slices,
    /// and within a row triangles are visited in submission order, so
    /// blending stays deterministic.
    pub fn triangles<S>(self, fragment_shader: S) where S: Fn(&ScreenVertex<K>, &U) -> Fragment<P> + Send + Sync {
        let FragmentShader { mesh, uniforms, framebuffer, screen_vertices, cull_faces, blend } = self;

        let bb = (framebuffer.width() - 1, framebuffer.height() - 1);

        // Set up every triangle once, before fanning out over rows.
        struct Setup {
            a: usize,
            b: usize,
            c: usize,
            min_x: u32,
            max_x: u32,
            min_y: u32,
            max_y: u32,
            det: f32,
        }

        let triangles: Vec<Setup> = mesh.indices.chunks(3).filter(|triangle| triangle.len() == 3).filter_map(|triangle| {
            let a = &screen_vertices[triangle[0]];
            let b = &screen_vertices[triangle[1]];
            let c = &screen_vertices[triangle[2]];

            let (x1, y1) = (a.position.x, a.position.y);
            let (x2, y2) = (b.position.x, b.position.y);
            let (x3, y3) = (c.position.x, c.position.y);

            // barycentric denominator, twice the signed area
            let det = (y2 - y3) * (x1 - x3) + (x3 - x2) * (y1 - y3);

            if det == 0.0 {
                return None;
            }

            if let Some(winding) = cull_faces {
                if winding == winding_order_from_signed_area(det) {
                    return None;
                }
            }

            Some(Setup {
                a: triangle[0],
                b: triangle[1],
                c: triangle[2],
                min_x: clamp(x1.min(x2).min(x3).floor() as u32, 0, bb.0),
                max_x: clamp(x1.max(x2).max(x3).ceil() as u32, 0, bb.0),
                min_y: clamp(y1.min(y2).min(y3).floor() as u32, 0, bb.1),
                max_y: clamp(y1.max(y2).max(y3).ceil() as u32, 0, bb.1),
                det,
            })
        }).collect();

        if triangles.is_empty() {
            return;
        }

        trace!("rasterizing {} triangles", triangles.len());

        let width = framebuffer.width();

        framebuffer.color_buffer_mut().par_chunks_mut(width as usize).enumerate().for_each(|(row_index, row)| {
            let py = row_index as u32;

            for setup in &triangles {
                if py < setup.min_y || py > setup.max_y {
                    continue;
                }

                let a = &screen_vertices[setup.a];
                let b = &screen_vertices[setup.b];
                let c = &screen_vertices[setup.c];

                let (x1, y1) = (a.position.x, a.position.y);
                let (x2, y2) = (b.position.x, b.position.y);
                let (x3, y3) = (c.position.x, c.position.y);

                // Real screen position should be in the center of the pixel.
                let y = py as f32 + 0.5;

                for px in setup.min_x..=setup.max_x {
                    let x = px as f32 + 0.5;

                    // calculate barycentric coordinates of the current point
                    let u = ((y2 - y3) * (x - x3) + (x3 - x2) * (y - y3)) / setup.det;
                    let v = ((y3 - y1) * (x - x3) + (x1 - x3) * (y - y3)) / setup.det;
                    let w = 1.0 - u - v;

                    // check if the point is inside the triangle at all
                    if u >= 0.0 && v >= 0.0 && w >= 0.0 {
                        // run fragment shader
                        let fragment = fragment_shader(&ScreenVertex {
                            position: a.position * u + b.position * v + c.position * w,
                            // interpolate the varyings
                            uniforms: Interpolate::barycentric_interpolate(u, &a.uniforms,
                                                                           v, &b.uniforms,
                                                                           w, &c.uniforms),
                        }, uniforms);

                        match fragment {
                            Fragment::Color(color) => {
                                let destination = &mut row[px as usize];
                                *destination = blend.blend(color, *destination);
                            }
                            Fragment::Discard => (),
                        }
                    }
                }
            }
        });
    }
}
