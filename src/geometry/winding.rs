//! Polygon face winding and orientation tests

/// Areas smaller than this are considered degenerate
pub const DEGENERATE_AREA: f64 = 1e-12;

/// Defines face winding variations. These apply to projected vertices,
/// so imagine the vertices as they are viewed from the final image, with the y-axis pointing up.
///
/// If all faces of a model have the same face winding,
/// then faces that are facing away from the camera can be skipped since they
/// will have the opposite winding order, since they are viewed from the back. This is known
/// as backface culling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceWinding {
    /// Clockwise face winding, where the vertices are like so:
    ///
    /// ```text
    ///                   1
    ///                  /|
    ///           A    /  |
    ///         /    /    |
    ///       /    /      | |
    ///     /    /        | |
    ///        /          | |
    ///      /            | V
    ///    /              |
    /// 3 *---------------* 2
    ///       <-------
    /// ```
    Clockwise,
    /// Counter-Clockwise face winding, where the vertices are like so:
    ///
    /// ```text
    ///                   1
    ///                  /|
    ///           /    /  |
    ///         /    /    |
    ///       /    /      | A
    ///     V    /        | |
    ///        /          | |
    ///      /            | |
    ///    /              |
    /// 3 *---------------* 2
    ///       ------->
    /// ```
    CounterClockwise
}

/// Which side of an orientable primitive faces the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Front,
    Back,
}

/// Twice the signed area of the polygon, by the shoelace formula.
///
/// Positive for counter-clockwise polygons.
pub fn signed_area_2d(points: &[(f64, f64)]) -> f64 {
    let n = points.len();

    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;

    for i in 0..n {
        let (x1, y1) = points[i];
        let (x2, y2) = points[(i + 1) % n];

        sum += x1 * y2 - x2 * y1;
    }

    sum
}

/// The winding order of a polygon with the given signed area, or `None` if it is degenerate
#[inline]
pub fn winding_from_signed_area(area: f64) -> Option<FaceWinding> {
    if area.abs() < DEGENERATE_AREA || area.is_nan() {
        None
    } else if area.is_sign_negative() {
        Some(FaceWinding::Clockwise)
    } else {
        Some(FaceWinding::CounterClockwise)
    }
}

/// Classifies a polygon with the given signed area.
///
/// Degenerate polygons are always front-facing.
pub fn facing_from_signed_area(area: f64, front_facing_is_ccw: bool) -> Facing {
    let front = if front_facing_is_ccw { FaceWinding::CounterClockwise } else { FaceWinding::Clockwise };

    match winding_from_signed_area(area) {
        Some(winding) if winding != front => Facing::Back,
        _ => Facing::Front,
    }
}
