//! Quadratic Bézier curve geometry

use nalgebra::{Point2, Vector2};
use smallvec::SmallVec;

#[inline]
fn lerp(a: &Point2<f32>, b: &Point2<f32>, t: f32) -> Point2<f32> {
    Point2::from(a.coords.lerp(&b.coords, t))
}

/// A quadratic Bézier curve segment, defined by two endpoints and one control point.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct QuadraticCurve {
    pub from: Point2<f32>,
    pub ctrl: Point2<f32>,
    pub to: Point2<f32>,
}

impl QuadraticCurve {
    #[inline]
    pub fn new(from: Point2<f32>, ctrl: Point2<f32>, to: Point2<f32>) -> QuadraticCurve {
        QuadraticCurve { from, ctrl, to }
    }

    /// Evaluate the curve at parameter `t` by repeated linear interpolation.
    #[inline]
    pub fn sample(&self, t: f32) -> Point2<f32> {
        let ab = lerp(&self.from, &self.ctrl, t);
        let bc = lerp(&self.ctrl, &self.to, t);
        lerp(&ab, &bc, t)
    }

    /// Split the curve at parameter `t` into two curves that together trace
    /// the same points as the original.
    #[inline]
    pub fn subdivide(&self, t: f32) -> (QuadraticCurve, QuadraticCurve) {
        let ab = lerp(&self.from, &self.ctrl, t);
        let bc = lerp(&self.ctrl, &self.to, t);
        let mid = lerp(&ab, &bc, t);

        (QuadraticCurve::new(self.from, ab, mid), QuadraticCurve::new(mid, bc, self.to))
    }

    /// Split the curve at the given x coordinate, returning the piece left of
    /// `x` first regardless of the curve's direction.
    pub fn subdivide_at_x(&self, x: f32) -> (QuadraticCurve, QuadraticCurve) {
        let (prev_part, next_part) = self.subdivide(self.solve_t_for_x(x));
        if self.from.x <= self.to.x {
            (prev_part, next_part)
        } else {
            (next_part, prev_part)
        }
    }

    /// Solve for the parameter at which the curve reaches the given x
    /// coordinate, clamped to [0, 1].
    ///
    /// Uses the Citardauq Formula to avoid precision problems.
    ///
    /// https://math.stackexchange.com/a/311397
    pub fn solve_t_for_x(&self, x: f32) -> f32 {
        let p0x = self.from.x as f64;
        let p1x = self.ctrl.x as f64;
        let p2x = self.to.x as f64;
        let x = x as f64;

        let a = p0x - 2.0 * p1x + p2x;
        let b = -2.0 * p0x + 2.0 * p1x;
        let c = p0x - x;

        let t = 2.0 * c / (-b - (b * b - 4.0 * a * c).sqrt());
        t.max(0.0).min(1.0) as f32
    }

    #[inline]
    pub fn solve_y_for_x(&self, x: f32) -> f32 {
        self.sample(self.solve_t_for_x(x)).y
    }

    /// Split the curve at its x and y extrema, yielding up to three pieces
    /// that are each monotone along both axes.
    ///
    /// Coverage triangles of axis-monotone pieces never overlap each other,
    /// which keeps the binary coverage of adjacent pieces from interfering.
    pub fn monotonic_pieces(&self) -> SmallVec<[QuadraticCurve; 3]> {
        let mut splits: SmallVec<[f32; 2]> = SmallVec::new();

        if let Some(t) = axis_extremum(self.from.x, self.ctrl.x, self.to.x) {
            splits.push(t);
        }

        if let Some(t) = axis_extremum(self.from.y, self.ctrl.y, self.to.y) {
            splits.push(t);
        }

        if splits.len() == 2 {
            if splits[0] > splits[1] {
                splits.swap(0, 1);
            }
            if splits[1] - splits[0] < f32::EPSILON {
                splits.pop();
            }
        }

        let mut pieces = SmallVec::new();
        let mut rest = *self;
        let mut start = 0.0;

        for t in splits {
            let (head, tail) = rest.subdivide((t - start) / (1.0 - start));
            pieces.push(head);
            rest = tail;
            start = t;
        }

        pieces.push(rest);
        pieces
    }

    /// The curve-space coordinates to assign to this segment's triangle
    /// vertices, paired with their positions.
    ///
    /// Interpolating `(0, 0)`, `(½, 0)`, `(1, 1)` across the
    /// `from`/`ctrl`/`to` triangle makes `x² − y` vanish exactly along the
    /// curve: the point at parameter `t` lands on curve-space `(t, t²)`.
    /// The control-point side of the curve comes out positive, so an
    /// orientation sign of `+1.0` fills toward the control point and `-1.0`
    /// fills toward the chord.
    #[inline]
    pub fn coverage_triangle(&self) -> [(Point2<f32>, Vector2<f32>); 3] {
        [
            (self.from, Vector2::new(0.0, 0.0)),
            (self.ctrl, Vector2::new(0.5, 0.0)),
            (self.to, Vector2::new(1.0, 1.0)),
        ]
    }
}

/// The parameter at which a quadratic with the given component values reaches
/// its extremum, if it lies strictly inside the curve.
#[inline]
fn axis_extremum(from: f32, ctrl: f32, to: f32) -> Option<f32> {
    let num = from - ctrl;
    let denom = from - 2.0 * ctrl + to;
    let t = num / denom;
    if t > f32::EPSILON && t < 1.0 - f32::EPSILON {
        Some(t)
    } else {
        None
    }
}
