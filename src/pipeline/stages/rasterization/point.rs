use super::{write_fragment, Fragment, RasterArguments};

use crate::framebuffer::Framebuffer;
use crate::geometry::Coordinate;
use crate::pipeline::stages::Corner;
use crate::scene::Model;

/// Draws a point as a filled square of `2 * point_radius + 1` pixels on a side, centered on the pixel containing it
pub(crate) fn rasterize_point<F>(args: &RasterArguments, framebuffer: &mut F, model: &Model, point: Corner) where F: Framebuffer {
    let vertex = &model.vertices()[point.vertex];
    let color = model.colors()[point.color];

    let (x, y) = args.to_screen(vertex);
    let center = args.pixel_at(x, y);

    let r = args.point_radius;
    let Coordinate { x: max_x, y: max_y } = args.pixel_at(f64::INFINITY, f64::INFINITY);

    let fragment = Fragment { color, depth: vertex.z() as f32, coverage: 1.0 };

    for py in center.y.saturating_sub(r)..=center.y.saturating_add(r).min(max_y) {
        for px in center.x.saturating_sub(r)..=center.x.saturating_add(r).min(max_x) {
            write_fragment(framebuffer, args, Coordinate::new(px, py), fragment);
        }
    }
}
