//! Homogeneous directions

use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::{Vector3, Vector4};

use super::Vertex;

/// Length below which a vector is considered degenerate and left unnormalized
pub const NORMALIZE_EPSILON: f64 = 1e-12;

/// A homogeneous direction `(x, y, z, w)` with `w = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub(crate) direction: Vector4<f64>,
}

impl Vector {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Vector {
        Vector { direction: Vector4::new(x, y, z, 0.0) }
    }

    /// The direction from `from` towards `to`
    #[inline]
    pub fn between(from: &Vertex, to: &Vertex) -> Vector {
        Vector::new(to.x() - from.x(), to.y() - from.y(), to.z() - from.z())
    }

    #[inline(always)]
    pub fn x(&self) -> f64 { self.direction.x }

    #[inline(always)]
    pub fn y(&self) -> f64 { self.direction.y }

    #[inline(always)]
    pub fn z(&self) -> f64 { self.direction.z }

    #[inline(always)]
    pub fn w(&self) -> f64 { self.direction.w }

    #[inline]
    pub(crate) fn xyz(&self) -> Vector3<f64> {
        self.direction.xyz()
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.xyz().dot(&other.xyz())
    }

    #[inline]
    pub fn cross(&self, other: &Vector) -> Vector {
        let c = self.xyz().cross(&other.xyz());

        Vector::new(c.x, c.y, c.z)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.xyz().norm()
    }

    /// Returns the unit vector in the same direction.
    ///
    /// Zero-length vectors have no direction and are returned unchanged.
    pub fn normalize(&self) -> Vector {
        let length = self.length();

        if length < NORMALIZE_EPSILON {
            *self
        } else {
            *self * (1.0 / length)
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector { direction: self.direction + rhs.direction }
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector { direction: self.direction - rhs.direction }
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector { direction: -self.direction }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, scale: f64) -> Vector {
        Vector { direction: self.direction * scale }
    }
}
