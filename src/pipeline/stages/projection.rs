//! Projection onto the image plane

use nalgebra::Vector4;

use crate::geometry::Vertex;
use crate::scene::{Camera, Model, ProjectionKind};

/// Projects a normalized camera space vertex of a perspective camera.
///
/// `x` and `y` are divided by the distance `-z`, mapping the frustum `|x| <= -z`, `|y| <= -z` onto
/// the square `|x| <= 1`, `|y| <= 1`. The depth becomes `-1 - 2 * near / z`, which is `1` on the near plane,
/// approaches `-1` at infinity and grows as points get nearer.
#[inline]
pub fn perspective_divide(vertex: &Vertex, near: f64) -> Vertex {
    let (x, y, z) = (vertex.x(), vertex.y(), vertex.z());

    Vertex::from_homogeneous(Vector4::new(x / -z, y / -z, -1.0 - 2.0 * near / z, 1.0))
}

/// Projects every vertex of the model.
///
/// Orthographic cameras need no projection once their view volume is normalized, so the model is returned as is.
/// Vertices a perspective projection receives are all in front of the near plane once near clipping has run,
/// except for the ones no primitive references anymore, whose projection is never read.
pub fn project(model: &Model, camera: &Camera) -> Model {
    match camera.kind() {
        ProjectionKind::Orthographic => model.derive(),
        ProjectionKind::Perspective => {
            let near = camera.near();
            let vertices = model.vertices().iter().map(|v| perspective_divide(v, near)).collect();

            model.derive().with_vertices(vertices)
        }
    }
}
