//! Primitive assembly, which rewrites every composite primitive into atomic ones

use crate::scene::{Model, Primitive, PrimitiveKind};

/// Replaces every primitive of the model with the points, line segments and triangles it is made of.
///
/// Each atomic primitive keeps the corresponding entries of every parallel index list of its source.
pub fn assemble(model: &Model) -> Model {
    if model.primitives().iter().all(|p| p.kind().is_atomic()) {
        return model.derive();
    }

    let mut primitives = Vec::with_capacity(model.primitives().len());

    for primitive in model.primitives() {
        assemble_primitive(primitive, &mut primitives);
    }

    model.derive().with_primitives(primitives)
}

/// Pushes the atomic primitives making up `primitive` onto `out`.
///
/// Triangles split from faces, fans and strips remember which of their edges are shared within the surface.
pub fn assemble_primitive(primitive: &Primitive, out: &mut Vec<Primitive>) {
    use self::PrimitiveKind::*;

    let n = primitive.len();

    match primitive.kind() {
        Point | LineSegment | Triangle => out.push(primitive.clone()),
        Points => {
            out.extend((0..n).map(|i| primitive.select(Point, &[i])));
        }
        Lines => {
            out.extend((0..n / 2).map(|i| primitive.select(LineSegment, &[2 * i, 2 * i + 1])));
        }
        LineStrip => {
            out.extend((0..n - 1).map(|i| primitive.select(LineSegment, &[i, i + 1])));
        }
        LineLoop => {
            out.extend((0..n - 1).map(|i| primitive.select(LineSegment, &[i, i + 1])));
            out.push(primitive.select(LineSegment, &[n - 1, 0]));
        }
        LineFan => {
            out.extend((1..n).map(|i| primitive.select(LineSegment, &[0, i])));
        }
        Triangles => {
            out.extend((0..n / 3).map(|i| primitive.select(Triangle, &[3 * i, 3 * i + 1, 3 * i + 2])));
        }
        Face | TriangleFan => {
            out.extend((1..n - 1).map(|i| {
                primitive.select(Triangle, &[0, i, i + 1])
                    .with_inner_edges(edge_mask([i > 1, false, i + 2 < n]))
            }));
        }
        TriangleStrip => {
            // every other triangle is flipped so the whole strip keeps the winding of the first
            out.extend((0..n - 2).map(|i| if i % 2 == 0 {
                primitive.select(Triangle, &[i, i + 1, i + 2])
                    .with_inner_edges(edge_mask([i > 0, i + 3 < n, false]))
            } else {
                primitive.select(Triangle, &[i + 1, i, i + 2])
                    .with_inner_edges(edge_mask([true, false, i + 3 < n]))
            }));
        }
    }
}

#[inline]
fn edge_mask(inner: [bool; 3]) -> u8 {
    inner.iter().enumerate().fold(0, |mask, (i, &inner)| if inner { mask | 1 << i } else { mask })
}
