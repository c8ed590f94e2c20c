//! Recursive clipping against the viewport square `|x| <= 1`, `|y| <= 1`

use crate::error::{RenderError, RenderResult};
use crate::geometry::Vertex;
use crate::scene::{Model, Primitive, PrimitiveKind};

use super::{corners, fan_triangulate, from_corners, Corner, Polygon, Snap};

/// The four lines bounding the viewport square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipEdge {
    /// `x = 1`
    Right,
    /// `x = -1`
    Left,
    /// `y = 1`
    Top,
    /// `y = -1`
    Bottom,
}

/// All clip edges in a constant array, in the order they are tested against.
pub const CLIP_EDGES: [ClipEdge; 4] = [
    ClipEdge::Right,
    ClipEdge::Left,
    ClipEdge::Top,
    ClipEdge::Bottom,
];

impl ClipEdge {
    /// Check if the vertex lies strictly on the far side of the line
    #[inline]
    pub fn is_beyond(self, v: &Vertex) -> bool {
        match self {
            ClipEdge::Right => v.x() > 1.0,
            ClipEdge::Left => v.x() < -1.0,
            ClipEdge::Top => v.y() > 1.0,
            ClipEdge::Bottom => v.y() < -1.0,
        }
    }

    /// Parameter `t` where `(1 - t) * from + t * to` reaches the line
    #[inline]
    fn crossing(self, from: &Vertex, to: &Vertex) -> f64 {
        let (a, b, c) = match self {
            ClipEdge::Right => (from.x(), to.x(), 1.0),
            ClipEdge::Left => (from.x(), to.x(), -1.0),
            ClipEdge::Top => (from.y(), to.y(), 1.0),
            ClipEdge::Bottom => (from.y(), to.y(), -1.0),
        };

        (c - a) / (b - a)
    }

    #[inline]
    fn snap(self) -> Snap {
        match self {
            ClipEdge::Right => Snap::X(1.0),
            ClipEdge::Left => Snap::X(-1.0),
            ClipEdge::Top => Snap::Y(1.0),
            ClipEdge::Bottom => Snap::Y(-1.0),
        }
    }
}

/// Check if the vertex lies in the closed viewport square
#[inline]
pub fn is_inside(v: &Vertex) -> bool {
    v.x().abs() <= 1.0 && v.y().abs() <= 1.0
}

/// Clips every atomic primitive of the model to the viewport square.
///
/// Primitives entirely inside are kept and primitives entirely beyond one of the edges are dropped.
/// Anything else is cut at the first edge it crosses, in the order of [`CLIP_EDGES`], and the pieces are clipped again.
/// New vertices lie exactly on the edge they were cut at, with colors and texture coordinates interpolated along the cut.
///
/// Returns `RenderError::UnassembledPrimitive` for composite primitives.
pub fn clip(model: &Model) -> RenderResult<Model> {
    let mut out = model.derive();
    let mut primitives = Vec::with_capacity(model.primitives().len());
    let mut changed = false;

    for primitive in model.primitives() {
        let corners = corners(primitive);

        let kept = match primitive.kind() {
            PrimitiveKind::Point => {
                let inside = is_inside(&model.vertices()[corners[0].vertex]);

                if inside {
                    primitives.push(primitive.clone());
                }

                inside
            }
            PrimitiveKind::LineSegment => {
                let mut pieces = Vec::new();

                clip_line(&mut out, [corners[0], corners[1]], &mut pieces);

                push_pieces(primitive, PrimitiveKind::LineSegment, &corners, pieces, &mut primitives)
            }
            PrimitiveKind::Triangle => {
                let mut pieces = Vec::new();

                clip_triangle(&mut out, [corners[0], corners[1], corners[2]], &mut pieces);

                push_pieces(primitive, PrimitiveKind::Triangle, &corners, pieces, &mut primitives)
            }
            kind => return Err(RenderError::UnassembledPrimitive(kind)),
        };

        changed |= !kept;
    }

    Ok(if changed { out.with_primitives(primitives) } else { out })
}

/// Returns true if the primitive was kept whole
fn push_pieces<const N: usize>(primitive: &Primitive,
                               kind: PrimitiveKind,
                               corners: &[Corner],
                               pieces: Vec<[Corner; N]>,
                               out: &mut Vec<Primitive>) -> bool {
    if pieces.len() == 1 && pieces[0][..] == *corners {
        out.push(primitive.clone());
        return true;
    }

    out.extend(pieces.iter().map(|piece| from_corners(primitive, kind, piece)));

    false
}

/// Clips a line segment, pushing the visible pieces onto `out`
pub(crate) fn clip_line(model: &mut Model, [a, b]: [Corner; 2], out: &mut Vec<[Corner; 2]>) {
    let (va, vb) = (model.vertices[a.vertex], model.vertices[b.vertex]);

    if is_inside(&va) && is_inside(&vb) {
        out.push([a, b]);
        return;
    }

    if CLIP_EDGES.iter().any(|edge| edge.is_beyond(&va) && edge.is_beyond(&vb)) {
        return;
    }

    for &edge in &CLIP_EDGES {
        match (edge.is_beyond(&va), edge.is_beyond(&vb)) {
            (true, false) => {
                let c = model.push_interpolated(edge.crossing(&va, &vb), a, b, edge.snap());
                return clip_line(model, [c, b], out);
            }
            (false, true) => {
                let c = model.push_interpolated(edge.crossing(&vb, &va), b, a, edge.snap());
                return clip_line(model, [a, c], out);
            }
            _ => {}
        }
    }
}

/// Clips a triangle, pushing the visible pieces onto `out`
pub(crate) fn clip_triangle(model: &mut Model, corners: [Corner; 3], out: &mut Vec<[Corner; 3]>) {
    let v = [model.vertices[corners[0].vertex], model.vertices[corners[1].vertex], model.vertices[corners[2].vertex]];

    if v.iter().all(is_inside) {
        out.push(corners);
        return;
    }

    if CLIP_EDGES.iter().any(|edge| v.iter().all(|v| edge.is_beyond(v))) {
        return;
    }

    for &edge in &CLIP_EDGES {
        let beyond = [edge.is_beyond(&v[0]), edge.is_beyond(&v[1]), edge.is_beyond(&v[2])];

        if !beyond.iter().any(|&b| b) {
            continue;
        }

        let mut polygon = Polygon::new();

        for i in 0..3 {
            let prev = (i + 2) % 3;

            let (s, p) = (corners[prev], corners[i]);

            if !beyond[i] {
                if beyond[prev] {
                    // what is left of the edge from s to p
                    polygon.push(model.push_interpolated(edge.crossing(&v[prev], &v[i]), s, p, edge.snap()).with_inner(s.inner));
                }

                polygon.push(p);
            } else if !beyond[prev] {
                polygon.push(model.push_interpolated(edge.crossing(&v[i], &v[prev]), p, s, edge.snap()));
            }
        }

        for triangle in fan_triangulate(&polygon) {
            clip_triangle(model, triangle, out);
        }

        return;
    }
}
