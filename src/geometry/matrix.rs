//! 4x4 homogeneous transforms

use std::ops::Mul;

use nalgebra::{Matrix4, Rotation3, Unit, Vector3};

use super::{Vector, Vertex};
use super::vector::NORMALIZE_EPSILON;

/// An immutable 4x4 homogeneous transform.
///
/// Matrices compose by multiplication, where `a * b` applies `b` first and `a` second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub(crate) inner: Matrix4<f64>,
}

impl Matrix {
    #[inline]
    pub fn identity() -> Matrix {
        Matrix { inner: Matrix4::identity() }
    }

    #[inline]
    pub fn translate(x: f64, y: f64, z: f64) -> Matrix {
        Matrix { inner: Matrix4::new_translation(&Vector3::new(x, y, z)) }
    }

    #[inline]
    pub fn scale(x: f64, y: f64, z: f64) -> Matrix {
        Matrix { inner: Matrix4::new_nonuniform_scaling(&Vector3::new(x, y, z)) }
    }

    #[inline]
    pub fn scale_uniform(s: f64) -> Matrix {
        Matrix::scale(s, s, s)
    }

    /// Counter-clockwise rotation by `degrees` around the axis `(x, y, z)`.
    ///
    /// A zero-length axis has no direction, so the identity is returned.
    pub fn rotate(degrees: f64, x: f64, y: f64, z: f64) -> Matrix {
        let axis = Vector3::new(x, y, z);

        if axis.norm() < NORMALIZE_EPSILON {
            log::warn!("rotation around a zero-length axis ignored");

            return Matrix::identity();
        }

        let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(axis), degrees.to_radians());

        Matrix { inner: rotation.to_homogeneous() }
    }

    #[inline]
    pub fn rotate_x(degrees: f64) -> Matrix { Matrix::rotate(degrees, 1.0, 0.0, 0.0) }

    #[inline]
    pub fn rotate_y(degrees: f64) -> Matrix { Matrix::rotate(degrees, 0.0, 1.0, 0.0) }

    #[inline]
    pub fn rotate_z(degrees: f64) -> Matrix { Matrix::rotate(degrees, 0.0, 0.0, 1.0) }

    /// Builds the placement of a camera sitting at `eye` and looking towards `center`.
    ///
    /// The camera looks down its local negative z-axis with `up` roughly along its local y-axis.
    /// This is the camera-to-world transform; the view transform applied to the scene is its inverse.
    /// If `eye` and `center` coincide, or `up` is parallel to the view direction, the basis
    /// is degenerate and a plain translation to `eye` is returned.
    pub fn look_at(eye: &Vertex, center: &Vertex, up: &Vector) -> Matrix {
        let back = Vector::between(center, eye);

        let right = up.cross(&back);

        if back.length() < NORMALIZE_EPSILON || right.length() < NORMALIZE_EPSILON {
            return Matrix::translate(eye.x(), eye.y(), eye.z());
        }

        let w = back.normalize();
        let u = right.normalize();
        let v = w.cross(&u);

        Matrix::from_columns(&u, &v, &w, eye)
    }

    /// Creates a matrix from three basis directions and a translation
    pub fn from_columns(u: &Vector, v: &Vector, w: &Vector, translation: &Vertex) -> Matrix {
        Matrix {
            inner: Matrix4::new(
                u.x(), v.x(), w.x(), translation.x(),
                u.y(), v.y(), w.y(), translation.y(),
                u.z(), v.z(), w.z(), translation.z(),
                0.0, 0.0, 0.0, 1.0,
            )
        }
    }

    /// Creates a matrix from its rows
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Matrix {
        let [r0, r1, r2, r3] = rows;

        Matrix {
            inner: Matrix4::new(
                r0[0], r0[1], r0[2], r0[3],
                r1[0], r1[1], r1[2], r1[3],
                r2[0], r2[1], r2[2], r2[3],
                r3[0], r3[1], r3[2], r3[3],
            )
        }
    }

    /// Entry at the given row and column
    #[inline]
    pub fn entry(&self, row: usize, column: usize) -> f64 {
        self.inner[(row, column)]
    }

    /// Returns the inverse transform, or `None` if the matrix is singular
    pub fn inverse(&self) -> Option<Matrix> {
        self.inner.try_inverse().map(|inner| Matrix { inner })
    }

    #[inline]
    pub fn transpose(&self) -> Matrix {
        Matrix { inner: self.inner.transpose() }
    }

    /// Approximate equality, entry by entry
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.inner.iter().zip(other.inner.iter()).all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Matrix {
    fn default() -> Matrix { Matrix::identity() }
}

impl Mul for Matrix {
    type Output = Matrix;

    #[inline]
    fn mul(self, rhs: Matrix) -> Matrix {
        Matrix { inner: self.inner * rhs.inner }
    }
}

impl<'a> Mul<&'a Matrix> for &'a Matrix {
    type Output = Matrix;

    #[inline]
    fn mul(self, rhs: &'a Matrix) -> Matrix {
        Matrix { inner: self.inner * rhs.inner }
    }
}

impl Mul<Vertex> for Matrix {
    type Output = Vertex;

    #[inline]
    fn mul(self, v: Vertex) -> Vertex {
        Vertex::from_homogeneous(self.inner * v.position)
    }
}

impl<'a> Mul<&'a Vertex> for &'a Matrix {
    type Output = Vertex;

    #[inline]
    fn mul(self, v: &'a Vertex) -> Vertex {
        Vertex::from_homogeneous(self.inner * v.position)
    }
}

impl Mul<Vector> for Matrix {
    type Output = Vector;

    #[inline]
    fn mul(self, v: Vector) -> Vector {
        Vector { direction: self.inner * v.direction }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_vertex_eq(a: Vertex, b: Vertex) {
        assert!((a.homogeneous() - b.homogeneous()).norm() < EPSILON, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_translate_moves_points_not_vectors() {
        let t = Matrix::translate(1.0, 2.0, 3.0);

        assert_vertex_eq(t * Vertex::new(1.0, 1.0, 1.0), Vertex::new(2.0, 3.0, 4.0));
        assert_eq!(t * Vector::new(1.0, 1.0, 1.0), Vector::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_composition_order() {
        // scale first, then translate
        let m = Matrix::translate(1.0, 0.0, 0.0) * Matrix::scale(2.0, 2.0, 2.0);

        assert_vertex_eq(m * Vertex::new(1.0, 1.0, 0.0), Vertex::new(3.0, 2.0, 0.0));
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        let r = Matrix::rotate_z(90.0);

        assert_vertex_eq(r * Vertex::new(1.0, 0.0, 0.0), Vertex::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotate_zero_axis_is_identity() {
        assert_eq!(Matrix::rotate(45.0, 0.0, 0.0, 0.0), Matrix::identity());
    }

    #[test]
    fn test_inverse() {
        let m = Matrix::translate(1.0, -2.0, 5.0) * Matrix::rotate_y(30.0);
        let inv = m.inverse().unwrap();

        assert!((m * inv).approx_eq(&Matrix::identity(), EPSILON));
        assert!(Matrix::scale(0.0, 1.0, 1.0).inverse().is_none());
    }

    #[test]
    fn test_look_at_places_camera() {
        let eye = Vertex::new(0.0, 0.0, 5.0);
        let placement = Matrix::look_at(&eye, &Vertex::new(0.0, 0.0, 0.0), &Vector::new(0.0, 1.0, 0.0));

        assert!(placement.approx_eq(&Matrix::translate(0.0, 0.0, 5.0), EPSILON));

        // The look-at target ends up straight ahead of the camera
        let view = placement.inverse().unwrap();

        assert_vertex_eq(view * Vertex::new(0.0, 0.0, 0.0), Vertex::new(0.0, 0.0, -5.0));
    }
}
