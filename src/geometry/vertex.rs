//! Homogeneous points

use num_traits::Float;

use nalgebra::Vector4;

use crate::interpolate::Interpolate;

/// A homogeneous point `(x, y, z, w)`.
///
/// Vertices are created with `w = 1`. Only the transform stages of the pipeline ever produce
/// vertices with a different `w`, so from the outside a `Vertex` is effectively immutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub(crate) position: Vector4<f64>,
}

impl Vertex {
    /// Creates a new point at the given coordinates with `w = 1`
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Vertex {
        Vertex { position: Vector4::new(x, y, z, 1.0) }
    }

    #[inline]
    pub(crate) fn from_homogeneous(position: Vector4<f64>) -> Vertex {
        Vertex { position }
    }

    #[inline(always)]
    pub fn x(&self) -> f64 { self.position.x }

    #[inline(always)]
    pub fn y(&self) -> f64 { self.position.y }

    #[inline(always)]
    pub fn z(&self) -> f64 { self.position.z }

    #[inline(always)]
    pub fn w(&self) -> f64 { self.position.w }

    /// Returns the underlying homogeneous coordinates
    #[inline]
    pub fn homogeneous(&self) -> &Vector4<f64> { &self.position }
}

impl Default for Vertex {
    fn default() -> Vertex { Vertex::new(0.0, 0.0, 0.0) }
}

impl Interpolate for Vertex {
    #[inline]
    fn barycentric_interpolate<R: Float>(u: R, x1: &Self, v: R, x2: &Self, w: R, x3: &Self) -> Self {
        Vertex {
            position: Interpolate::barycentric_interpolate(u, &x1.position, v, &x2.position, w, &x3.position),
        }
    }

    #[inline]
    fn linear_interpolate<R: Float>(t: R, x1: &Self, x2: &Self) -> Self {
        Vertex {
            position: Interpolate::linear_interpolate(t, &x1.position, &x2.position),
        }
    }
}
