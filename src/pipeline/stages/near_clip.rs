//! Clipping against the near plane `z = -near`
//!
//! Near clipping runs in normalized camera space, before projection, so that no vertex with `z >= 0`
//! ever reaches the perspective divide.

use crate::error::{RenderError, RenderResult};
use crate::geometry::Vertex;
use crate::scene::{Model, Primitive, PrimitiveKind};

use super::{corners, fan_triangulate, from_corners, Corner, Polygon, Snap};

/// A vertex is in front of the near plane when `z <= -near`. Vertices exactly on the plane are kept.
#[inline]
pub fn is_inside(vertex: &Vertex, near: f64) -> bool {
    vertex.z() <= -near
}

/// Clips every atomic primitive of the model against the near plane.
///
/// Points behind the plane are dropped. Line segments and triangles crossing it are cut at the plane,
/// with new vertices placed exactly at `z = -near` and colors and texture coordinates interpolated along the cut edge.
/// Triangles cut into quadrilaterals are split in two.
///
/// Returns `RenderError::UnassembledPrimitive` for composite primitives.
pub fn near_clip(model: &Model, near: f64) -> RenderResult<Model> {
    let mut out = model.derive();
    let mut primitives = Vec::with_capacity(model.primitives().len());
    let mut changed = false;

    for primitive in model.primitives() {
        let count = primitives.len();

        let corners = corners(primitive);

        let kept = match primitive.kind() {
            PrimitiveKind::Point => {
                if is_inside(&model.vertices()[corners[0].vertex], near) {
                    primitives.push(primitive.clone());
                }

                primitives.len() > count
            }
            PrimitiveKind::LineSegment => clip_line(&mut out, primitive, [corners[0], corners[1]], near, &mut primitives),
            PrimitiveKind::Triangle => clip_triangle(&mut out, primitive, &corners, near, &mut primitives),
            kind => return Err(RenderError::UnassembledPrimitive(kind)),
        };

        changed |= !kept;
    }

    Ok(if changed { out.with_primitives(primitives) } else { out })
}

/// Returns true if the primitive was kept whole
fn clip_line(model: &mut Model, primitive: &Primitive, [a, b]: [Corner; 2], near: f64, out: &mut Vec<Primitive>) -> bool {
    let (va, vb) = (model.vertices[a.vertex], model.vertices[b.vertex]);

    match (is_inside(&va, near), is_inside(&vb, near)) {
        (true, true) => {
            out.push(primitive.clone());
            return true;
        }
        (false, false) => {}
        (true, false) => {
            let c = model.push_interpolated(crossing(&vb, &va, near), b, a, Snap::Z(-near));
            out.push(from_corners(primitive, PrimitiveKind::LineSegment, &[a, c]));
        }
        (false, true) => {
            let c = model.push_interpolated(crossing(&va, &vb, near), a, b, Snap::Z(-near));
            out.push(from_corners(primitive, PrimitiveKind::LineSegment, &[c, b]));
        }
    }

    false
}

/// Returns true if the primitive was kept whole
fn clip_triangle(model: &mut Model, primitive: &Primitive, corners: &[Corner], near: f64, out: &mut Vec<Primitive>) -> bool {
    let inside: Vec<bool> = corners.iter().map(|c| is_inside(&model.vertices[c.vertex], near)).collect();

    if inside.iter().all(|&i| i) {
        out.push(primitive.clone());
        return true;
    }

    if inside.iter().all(|&i| !i) {
        return false;
    }

    let mut polygon = Polygon::new();

    for i in 0..corners.len() {
        let (s, p) = (corners[(i + corners.len() - 1) % corners.len()], corners[i]);
        let (s_in, p_in) = (inside[(i + corners.len() - 1) % corners.len()], inside[i]);

        if p_in {
            if !s_in {
                polygon.push(intersect(model, s, p, near).with_inner(s.inner));
            }

            polygon.push(p);
        } else if s_in {
            polygon.push(intersect(model, p, s, near));
        }
    }

    out.extend(fan_triangulate(&polygon).map(|triangle| from_corners(primitive, PrimitiveKind::Triangle, &triangle)));

    false
}

/// New corner on the near plane along the edge from the outside corner to the inside one
fn intersect(model: &mut Model, outside: Corner, inside: Corner, near: f64) -> Corner {
    let t = crossing(&model.vertices[outside.vertex], &model.vertices[inside.vertex], near);

    model.push_interpolated(t, outside, inside, Snap::Z(-near))
}

/// Parameter `t` where `(1 - t) * outside + t * inside` reaches `z = -near`
#[inline]
fn crossing(outside: &Vertex, inside: &Vertex, near: f64) -> f64 {
    (-near - outside.z()) / (inside.z() - outside.z())
}
