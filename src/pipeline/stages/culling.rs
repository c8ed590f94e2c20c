//! Back face culling
//!
//! Runs twice: once before primitive assembly on the orientable kinds that can be judged as a whole,
//! and once after assembly on every triangle, which also catches the triangles of strips and fans.

use crate::geometry::{Facing, Vector, Vertex};
use crate::geometry::winding::{facing_from_signed_area, signed_area_2d};
use crate::scene::{Camera, Model, Primitive, PrimitiveKind};

/// Signed area of a polygon as seen by the camera, positive when it appears counter-clockwise.
///
/// Orthographic cameras look straight down the z-axis, so the projected area is the shoelace area of `(x, y)`.
/// Perspective cameras see each fan triangle `(v0, vi, vi+1)` counter-clockwise when the volume it spans
/// with the eye at the origin is negative, since the camera looks down negative z.
pub fn signed_area(vertices: &[Vertex], indices: &[usize], camera: &Camera) -> f64 {
    if camera.is_perspective() {
        let corner = |i: usize| {
            let v = &vertices[indices[i]];
            Vector::new(v.x(), v.y(), v.z())
        };

        let v0 = corner(0);

        -(1..indices.len().saturating_sub(1))
            .map(|i| v0.dot(&corner(i).cross(&corner(i + 1))))
            .sum::<f64>()
    } else {
        let points: Vec<(f64, f64)> = indices.iter().map(|&i| (vertices[i].x(), vertices[i].y())).collect();

        signed_area_2d(&points)
    }
}

/// Which side of the primitive faces the camera. Degenerate primitives face front.
pub fn facing(model: &Model, primitive: &Primitive, camera: &Camera) -> Facing {
    let area = signed_area(model.vertices(), primitive.vertex_indices(), camera);

    facing_from_signed_area(area, model.front_facing_is_ccw())
}

/// Culls `Face`, `Triangle` and `Triangles` primitives before assembly
pub fn cull_unassembled(model: &Model, camera: &Camera) -> Model {
    cull(model, camera, |kind| matches!(kind, PrimitiveKind::Face | PrimitiveKind::Triangle | PrimitiveKind::Triangles))
}

/// Culls every triangle after assembly
pub fn cull_assembled(model: &Model, camera: &Camera) -> Model {
    cull(model, camera, |kind| kind == PrimitiveKind::Triangle)
}

/// Back-facing primitives selected by `filter` are dropped, unless the model has two-sided faces,
/// in which case they are kept with their back colors. Everything else passes through unchanged.
fn cull<F>(model: &Model, camera: &Camera, filter: F) -> Model where F: Fn(PrimitiveKind) -> bool {
    if !model.do_back_face_culling() {
        return model.derive();
    }

    let two_sides = model.faces_have_two_sides();

    let mut primitives = Vec::with_capacity(model.primitives().len());

    for primitive in model.primitives() {
        let kind = primitive.kind();

        if !(kind.is_orientable() && filter(kind)) {
            primitives.push(primitive.clone());
            continue;
        }

        match facing(model, primitive, camera) {
            Facing::Front => primitives.push(primitive.clone()),
            Facing::Back if two_sides => {
                let mut primitive = primitive.clone();
                primitive.show_back_face();
                primitives.push(primitive);
            }
            Facing::Back => {}
        }
    }

    model.derive().with_primitives(primitives)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::predefined::{RED, BLUE};

    /// Two triangles at `z = -1`, the first counter-clockwise as seen from the origin, the second clockwise
    fn facing_model() -> Model {
        let mut model = Model::new("faces");

        model.add_vertices(vec![
            Vertex::new(0.0, 0.0, -1.0),
            Vertex::new(1.0, 0.0, -1.0),
            Vertex::new(0.0, 1.0, -1.0),
        ]);

        model.add_color(RED);
        model.add_color(BLUE);

        model.add_primitive(Primitive::triangle(0, 1, 2).with_color(0).with_back_color(1));
        model.add_primitive(Primitive::triangle(0, 2, 1).with_color(0).with_back_color(1));

        model
    }

    #[test]
    fn test_perspective_area_sign() {
        let model = facing_model();
        let camera = Camera::default();

        assert_eq!(facing(&model, &model.primitives()[0], &camera), Facing::Front);
        assert_eq!(facing(&model, &model.primitives()[1], &camera), Facing::Back);
    }

    #[test]
    fn test_orthographic_area_sign() {
        let model = facing_model();
        let camera = Camera::orthographic(-1.0, 1.0, -1.0, 1.0, 0.5);

        assert!(signed_area(model.vertices(), &[0, 1, 2], &camera) > 0.0);
        assert_eq!(facing(&model, &model.primitives()[1], &camera), Facing::Back);
    }

    #[test]
    fn test_back_faces_dropped() {
        let model = facing_model();
        let culled = cull_unassembled(&model, &Camera::default());

        assert_eq!(culled.primitives().len(), 1);
        assert_eq!(culled.primitives()[0].vertex_indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_two_sided_faces_show_back_colors() {
        let mut model = facing_model();
        model.set_faces_have_two_sides(true);

        let culled = cull_unassembled(&model, &Camera::default());

        assert_eq!(culled.primitives().len(), 2);
        assert_eq!(culled.primitives()[0].color_indices(), &[0, 0, 0]);
        assert_eq!(culled.primitives()[1].color_indices(), &[1, 1, 1]);

        // running the second pass on the same triangles changes nothing
        let again = cull_assembled(&culled, &Camera::default());

        assert_eq!(again.primitives(), culled.primitives());
    }

    #[test]
    fn test_clockwise_front_faces() {
        let mut model = facing_model();
        model.set_front_facing_is_ccw(false);

        let culled = cull_assembled(&model, &Camera::default());

        assert_eq!(culled.primitives().len(), 1);
        assert_eq!(culled.primitives()[0].vertex_indices(), &[0, 2, 1]);
    }

    #[test]
    fn test_culling_disabled() {
        let mut model = facing_model();
        model.set_back_face_culling(false);

        let culled = cull_unassembled(&model, &Camera::default());

        assert_eq!(culled.primitives().len(), 2);
    }

    #[test]
    fn test_unassembled_pass_skips_strips() {
        let mut model = facing_model();
        model.add_primitive(Primitive::triangle_strip(&[0, 2, 1]).unwrap());

        let culled = cull_unassembled(&model, &Camera::default());

        assert_eq!(culled.primitives().len(), 2);
        assert_eq!(culled.primitives()[1].kind(), PrimitiveKind::TriangleStrip);
    }
}
