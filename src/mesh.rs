//! Generic mesh structure

use std::fmt::{Debug, Formatter, Result as FmtResult};

use log::trace;
use nalgebra::Point2;

use crate::error::{RenderError, RenderResult};

/// A single vertex with a required position and any other vertex data
#[derive(Debug, Clone)]
pub struct Vertex<D> {
    /// Position of the vertex in object-space
    pub position: Point2<f32>,
    /// Any data that goes alongside the required position, such as colors,
    /// curve-space coordinates, or whatever.
    ///
    /// This is separate because the position is required, but anything else is optional,
    /// so setting type `D` to `()` for no extra vertex data means no extra overhead.
    pub data: D,
}

impl<D> Vertex<D> {
    #[inline(always)]
    pub fn new(position: Point2<f32>, data: D) -> Vertex<D> {
        Vertex { position, data }
    }
}

/// Mesh structure with indexed vertices.
///
/// If you are unfamiliar with vertex indices, it's a way of re-using vertices for multiple primitives.
/// Every chunk of three indices into `vertices` forms one triangle.
///
/// Note that coverage triangles produced by
/// [`QuadraticCurve::coverage_triangle`](../curve/struct.QuadraticCurve.html#method.coverage_triangle)
/// usually cannot share vertices with neighboring triangles, because the same
/// position carries different curve-space coordinates in each triangle.
#[derive(Clone)]
pub struct Mesh<D> {
    /// Vertices with their vertex data
    pub vertices: Vec<Vertex<D>>,
    /// Vertex indices, three per triangle
    pub indices: Vec<usize>,
}

impl<D> Mesh<D> {
    /// Creates a mesh after validating that the index list is made of whole
    /// triangles and only refers to existing vertices.
    pub fn with_indices(vertices: Vec<Vertex<D>>, indices: Vec<usize>) -> RenderResult<Mesh<D>> {
        if indices.len() % 3 != 0 {
            return Err(RenderError::BrokenIndexList(indices.len()));
        }

        for &index in &indices {
            if index >= vertices.len() {
                return Err(RenderError::IndexOutOfBounds { index, vertices: vertices.len() });
            }
        }

        trace!("mesh with {} vertices, {} triangles", vertices.len(), indices.len() / 3);

        Ok(Mesh { vertices, indices })
    }
}

impl<D> Debug for Mesh<D> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "Mesh {{ vertices: {}, triangles: {} }}", self.vertices.len(), self.indices.len() / 3)
    }
}
