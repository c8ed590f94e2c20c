//! Coordinate transform stages: model to world, world to view and view to normalized camera space

use crate::geometry::{Matrix, Vertex};
use crate::scene::Model;

/// Applies `matrix` to every vertex of the model. Everything but the vertex list is shared with the input.
pub fn transform(model: &Model, matrix: &Matrix) -> Model {
    let vertices: Vec<Vertex> = model.vertices().iter().map(|v| matrix * v).collect();

    model.derive().with_vertices(vertices)
}

/// Places the model in the world with its accumulated transform,
/// which is the product of every enclosing position and model matrix and its own.
#[inline]
pub fn model_to_world(model: &Model, accumulated: &Matrix) -> Model {
    transform(model, accumulated)
}

/// Moves world-space geometry in front of the camera, given the inverse of the camera's view matrix.
///
/// See [`Camera::inverse_view_matrix`](../../scene/struct.Camera.html#method.inverse_view_matrix).
#[inline]
pub fn world_to_view(model: &Model, inverse_view: &Matrix) -> Model {
    transform(model, inverse_view)
}

/// Normalizes view-space geometry into the canonical view volume,
/// given the camera's [`normalization_matrix`](../../scene/struct.Camera.html#method.normalization_matrix).
#[inline]
pub fn view_to_camera(model: &Model, normalization: &Matrix) -> Model {
    transform(model, normalization)
}
