//! Pipeline stages.
//!
//! Every stage takes a model and returns a new one, sharing whatever lists it did not touch.
//! The clipping stages append the vertices, colors and texture coordinates they synthesize
//! to the lists of their output model, so indices of the input stay valid.

use smallvec::SmallVec;

use crate::geometry::Vertex;
use crate::interpolate::Interpolate;
use crate::scene::{Model, Primitive, PrimitiveKind};

use std::sync::Arc;

pub mod transform;
pub mod culling;
pub mod assembly;
pub mod near_clip;
pub mod projection;
pub mod clip;
pub mod rasterization;

pub use self::transform::{model_to_world, world_to_view, view_to_camera};
pub use self::culling::{cull_unassembled, cull_assembled, facing};
pub use self::assembly::assemble;
pub use self::near_clip::near_clip;
pub use self::projection::project;
pub use self::clip::clip;
pub use self::rasterization::rasterize;

/// One corner of an atomic primitive: a position, a color and an optional texture coordinate,
/// each as an index into the owning model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Corner {
    pub vertex: usize,
    pub color: usize,
    pub texcoord: Option<usize>,
    /// The edge from this corner to the next one lies inside the surface the primitive was split from,
    /// rather than on its outline.
    pub inner: bool,
}

impl Corner {
    #[inline]
    pub fn with_inner(self, inner: bool) -> Corner {
        Corner { inner, ..self }
    }
}

/// Corners of a polygon while it is being clipped. Clipping a triangle against one line yields at most four.
pub(crate) type Polygon = SmallVec<[Corner; 4]>;

/// A coordinate that should land exactly on a clip boundary,
/// so that later tests against the same boundary see the new vertex as inside.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Snap {
    X(f64),
    Y(f64),
    Z(f64),
}

impl Snap {
    #[inline]
    fn apply(self, vertex: &mut Vertex) {
        match self {
            Snap::X(x) => vertex.position.x = x,
            Snap::Y(y) => vertex.position.y = y,
            Snap::Z(z) => vertex.position.z = z,
        }
    }
}

/// The corners of an atomic primitive, in order
pub(crate) fn corners(primitive: &Primitive) -> Polygon {
    let texcoords = primitive.texcoord_indices();

    primitive.vertex_indices().iter()
        .zip(primitive.color_indices())
        .enumerate()
        .map(|(i, (&vertex, &color))| Corner {
            vertex,
            color,
            texcoord: texcoords.map(|tc| tc[i]),
            inner: primitive.is_inner_edge(i),
        })
        .collect()
}

/// Builds a primitive over the given corners, keeping the texture of `template`.
///
/// Back colors are not carried along. Clipping runs after culling, which has already chosen the visible colors.
pub(crate) fn from_corners(template: &Primitive, kind: PrimitiveKind, corners: &[Corner]) -> Primitive {
    let texcoord_indices = template.texture()
        .and_then(|_| corners.iter().map(|c| c.texcoord).collect::<Option<Vec<_>>>());

    let texture = texcoord_indices.as_ref().and(template.texture());

    let inner_edges = corners.iter().enumerate()
        .filter(|(_, c)| c.inner)
        .fold(0, |mask, (i, _)| mask | 1 << i);

    Primitive::from_parts(kind,
                          corners.iter().map(|c| c.vertex).collect(),
                          corners.iter().map(|c| c.color).collect(),
                          None,
                          texcoord_indices,
                          texture)
        .with_inner_edges(inner_edges)
}

impl Model {
    /// Appends a new corner at `(1 - t) * from + t * to`, interpolating position, color and texture coordinate,
    /// then snaps the new position onto the boundary it was clipped against.
    ///
    /// The new corner's outgoing edge is marked as an outline edge.
    pub(crate) fn push_interpolated(&mut self, t: f64, from: Corner, to: Corner, snap: Snap) -> Corner {
        let mut vertex = Interpolate::linear_interpolate(t, &self.vertices[from.vertex], &self.vertices[to.vertex]);
        snap.apply(&mut vertex);

        let color = Interpolate::linear_interpolate(t, &self.colors[from.color], &self.colors[to.color]);

        let texcoord = match (from.texcoord, to.texcoord) {
            (Some(a), Some(b)) => Some(Interpolate::linear_interpolate(t, &self.texcoords[a], &self.texcoords[b])),
            _ => None,
        };

        let vertices = Arc::make_mut(&mut self.vertices);
        vertices.push(vertex);

        let colors = Arc::make_mut(&mut self.colors);
        colors.push(color);

        Corner {
            vertex: vertices.len() - 1,
            color: colors.len() - 1,
            texcoord: texcoord.map(|tc| {
                let texcoords = Arc::make_mut(&mut self.texcoords);
                texcoords.push(tc);
                texcoords.len() - 1
            }),
            inner: false,
        }
    }
}

/// Splits a convex polygon into triangles sharing its first corner.
///
/// The diagonals between the triangles are marked as inner edges, the polygon's own edges keep their marks.
pub(crate) fn fan_triangulate(polygon: &[Corner]) -> impl Iterator<Item=[Corner; 3]> + '_ {
    let last = polygon.len().saturating_sub(1);

    (1..last).map(move |i| [
        polygon[0].with_inner(i > 1 || polygon[0].inner),
        polygon[i],
        polygon[i + 1].with_inner(i + 1 < last || polygon[last].inner),
    ])
}
