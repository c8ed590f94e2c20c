//! Camera placement and view volume

use crate::error::{RenderError, RenderResult};
use crate::geometry::{Matrix, Vector, Vertex};

/// Projection family of a camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    Perspective,
    Orthographic,
}

/// A camera looking down its local negative z-axis.
///
/// The view volume is described by the window `[left, right] × [bottom, top]` on the image plane `z = -near`.
/// For a perspective camera the volume is the frustum through that window from the origin,
/// for an orthographic camera it is the box extruded from that window along the z-axis.
/// Geometry nearer than `near` is clipped away in both cases.
///
/// The view matrix is the camera's placement in world space, the scene is transformed by its inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    kind: ProjectionKind,
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    view: Matrix,
}

impl Default for Camera {
    /// A perspective camera at the origin with a 90° field of view and the image plane at `z = -1`
    fn default() -> Camera {
        Camera::frustum(-1.0, 1.0, -1.0, 1.0, 1.0)
    }
}

impl Camera {
    /// Perspective camera with a vertical field of view in degrees and an aspect ratio of width over height
    pub fn perspective(fovy: f64, aspect: f64, near: f64) -> Camera {
        assert!(fovy > 0.0 && fovy < 180.0, "Field of view must be between 0 and 180 degrees");
        assert!(aspect > 0.0, "Aspect ratio must be positive");

        let top = near * (fovy.to_radians() / 2.0).tan();
        let right = top * aspect;

        Camera::frustum(-right, right, -top, top, near)
    }

    /// Perspective camera with an explicit window on the image plane `z = -near`
    pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64) -> Camera {
        Camera::with_kind(ProjectionKind::Perspective, left, right, bottom, top, near)
    }

    /// Orthographic camera viewing the box `[left, right] × [bottom, top]`
    pub fn orthographic(left: f64, right: f64, bottom: f64, top: f64, near: f64) -> Camera {
        Camera::with_kind(ProjectionKind::Orthographic, left, right, bottom, top, near)
    }

    fn with_kind(kind: ProjectionKind, left: f64, right: f64, bottom: f64, top: f64, near: f64) -> Camera {
        assert!(right > left, "Camera window must have a positive width");
        assert!(top > bottom, "Camera window must have a positive height");
        assert!(near > 0.0, "Near plane distance must be positive");

        Camera { kind, left, right, bottom, top, near, view: Matrix::identity() }
    }

    #[inline]
    pub fn kind(&self) -> ProjectionKind { self.kind }

    #[inline]
    pub fn is_perspective(&self) -> bool { self.kind == ProjectionKind::Perspective }

    /// Distance to the near clipping plane `z = -near`
    #[inline]
    pub fn near(&self) -> f64 { self.near }

    /// Window bounds as `(left, right, bottom, top)`
    #[inline]
    pub fn window(&self) -> (f64, f64, f64, f64) {
        (self.left, self.right, self.bottom, self.top)
    }

    #[inline]
    pub fn view_matrix(&self) -> &Matrix { &self.view }

    /// The inverse of the view matrix, which takes world space into view space
    pub fn inverse_view_matrix(&self) -> RenderResult<Matrix> {
        self.view.inverse().ok_or(RenderError::SingularViewMatrix)
    }

    /// Replace the camera placement
    #[inline]
    pub fn set_view(&mut self, view: Matrix) {
        self.view = view;
    }

    /// Move the camera by the given world-space offset
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.view = Matrix::translate(dx, dy, dz) * self.view;
    }

    /// Rotate the camera around one of its own axes, in degrees
    pub fn rotate(&mut self, degrees: f64, x: f64, y: f64, z: f64) {
        self.view = self.view * Matrix::rotate(degrees, x, y, z);
    }

    /// Place the camera at `eye`, looking at `center`
    pub fn look_at(&mut self, eye: &Vertex, center: &Vertex, up: &Vector) {
        self.view = Matrix::look_at(eye, center, up);
    }

    /// The matrix normalizing this camera's view volume into the canonical one.
    ///
    /// Perspective cameras are sheared and scaled so the window maps onto the frustum `|x| <= -z`, `|y| <= -z`.
    /// Orthographic cameras are translated and scaled so the window maps onto `|x| <= 1`, `|y| <= 1`.
    /// The z coordinate is left alone in both cases, so the near plane stays at `z = -near`.
    pub fn normalization_matrix(&self) -> Matrix {
        let (l, r, b, t, n) = (self.left, self.right, self.bottom, self.top, self.near);

        match self.kind {
            ProjectionKind::Perspective => Matrix::from_rows([
                [2.0 * n / (r - l), 0.0, (r + l) / (r - l), 0.0],
                [0.0, 2.0 * n / (t - b), (t + b) / (t - b), 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
            ProjectionKind::Orthographic => Matrix::from_rows([
                [2.0 / (r - l), 0.0, 0.0, -(r + l) / (r - l)],
                [0.0, 2.0 / (t - b), 0.0, -(t + b) / (t - b)],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_perspective_window_maps_to_frustum() {
        let camera = Camera::frustum(-1.0, 3.0, 0.0, 2.0, 2.0);
        let m = camera.normalization_matrix();

        // window corners at z = -near land on the frustum edges
        let tr = m * Vertex::new(3.0, 2.0, -2.0);
        assert!((tr.x() / -tr.z() - 1.0).abs() < EPSILON);
        assert!((tr.y() / -tr.z() - 1.0).abs() < EPSILON);

        let bl = m * Vertex::new(-1.0, 0.0, -2.0);
        assert!((bl.x() / -bl.z() + 1.0).abs() < EPSILON);
        assert!((bl.y() / -bl.z() + 1.0).abs() < EPSILON);
        assert_eq!(bl.z(), -2.0);
    }

    #[test]
    fn test_fov_scale() {
        let camera = Camera::perspective(90.0, 2.0, 0.5);
        let m = camera.normalization_matrix();

        assert!((m.entry(0, 0) - 0.5).abs() < EPSILON);
        assert!((m.entry(1, 1) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_orthographic_box() {
        let camera = Camera::orthographic(-4.0, 4.0, -2.0, 2.0, 1.0);
        let v = camera.normalization_matrix() * Vertex::new(4.0, -2.0, -7.0);

        assert!((v.x() - 1.0).abs() < EPSILON);
        assert!((v.y() + 1.0).abs() < EPSILON);
        assert_eq!(v.z(), -7.0);
    }

    #[test]
    fn test_view_operations() {
        let mut camera = Camera::default();

        camera.translate(0.0, 0.0, 5.0);
        assert!(camera.view_matrix().approx_eq(&Matrix::translate(0.0, 0.0, 5.0), EPSILON));

        camera.rotate(90.0, 0.0, 1.0, 0.0);
        let forward = *camera.view_matrix() * Vector::new(0.0, 0.0, -1.0);

        assert!((forward.x() + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_singular_view() {
        let mut camera = Camera::default();

        camera.set_view(Matrix::scale(1.0, 0.0, 1.0));

        assert_eq!(camera.inverse_view_matrix(), Err(RenderError::SingularViewMatrix));
    }
}
