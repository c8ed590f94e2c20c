use super::{write_fragment, Fragment, RasterArguments};

use crate::framebuffer::Framebuffer;
use crate::geometry::winding::DEGENERATE_AREA;
use crate::interpolate::Interpolate;
use crate::pipeline::stages::Corner;
use crate::scene::{Model, TexCoord, Texture};

/// Pixel centers this close outside an edge still count as covered,
/// so that edges shared by two triangles never leave gaps.
const EDGE_EPSILON: f64 = 1e-9;

/// Sub-samples per pixel side when anti-aliasing
const SUBSAMPLES: u32 = 4;

/// Fills a triangle, interpolating color and depth with barycentric coordinates.
///
/// A pixel is covered when its center lies inside the triangle. With anti-aliasing enabled,
/// the coverage is instead the fraction of a grid of sub-samples inside the outline edges of the triangle.
/// Inner edges, shared with another piece of the same surface, are still decided at the pixel center,
/// so the pieces meet without a blended seam.
/// Textured triangles take the nearest texel at the interpolated texture coordinate instead of a vertex color.
pub(crate) fn rasterize_triangle<F>(args: &RasterArguments,
                                    framebuffer: &mut F,
                                    model: &Model,
                                    texture: Option<&Texture>,
                                    [a, b, c]: [Corner; 3]) where F: Framebuffer {
    let vertices = model.vertices();

    let (x1, y1) = args.to_screen(&vertices[a.vertex]);
    let (x2, y2) = args.to_screen(&vertices[b.vertex]);
    let (x3, y3) = args.to_screen(&vertices[c.vertex]);

    // calculate determinant
    let det = (y2 - y3) * (x1 - x3) + (x3 - x2) * (y1 - y3);

    if !(det.abs() >= DEGENERATE_AREA) {
        return;
    }

    // calculate barycentric coordinates of a screen position
    let barycentric = |x: f64, y: f64| {
        let u = ((y2 - y3) * (x - x3) + (x3 - x2) * (y - y3)) / det;
        let v = ((y3 - y1) * (x - x3) + (x1 - x3) * (y - y3)) / det;

        (u, v, 1.0 - u - v)
    };

    let colors = [model.colors()[a.color], model.colors()[b.color], model.colors()[c.color]];
    let depths = [vertices[a.vertex].z(), vertices[b.vertex].z(), vertices[c.vertex].z()];

    let textured: Option<(&Texture, [TexCoord; 3])> = match (texture, a.texcoord, b.texcoord, c.texcoord) {
        (Some(texture), Some(ta), Some(tb), Some(tc)) => {
            let texcoords = model.texcoords();
            Some((texture, [texcoords[ta], texcoords[tb], texcoords[tc]]))
        }
        _ => None,
    };

    // edges opposite to the corners the weights u, v and w belong to
    let inner = [b.inner, c.inner, a.inner];
    let outline = inner.map(|inner| !inner);

    let min = args.pixel_at(x1.min(x2).min(x3), y1.min(y2).min(y3));
    let max = args.pixel_at(x1.max(x2).max(x3), y1.max(y2).max(y3));

    let mut pixel = min;

    while pixel.y <= max.y {
        pixel.x = min.x;

        while pixel.x <= max.x {
            // Real screen position should be in the center of the pixel.
            let (x, y) = (pixel.x as f64 + 0.5, pixel.y as f64 + 0.5);

            let (u, v, w) = barycentric(x, y);

            let coverage = if args.antialiasing {
                if is_covered((u, v, w), inner) {
                    subsample_coverage(pixel.x as f64, pixel.y as f64, &barycentric, outline)
                } else {
                    0.0
                }
            } else if is_covered((u, v, w), [true; 3]) {
                1.0
            } else {
                0.0
            };

            if coverage > 0.0 {
                // pixels covered only partially take their attributes from the nearest point of the triangle
                let (u, v, w) = clamp_weights(u, v, w);

                let color = match textured {
                    Some((texture, [ta, tb, tc])) => texture.sample_nearest(Interpolate::barycentric_interpolate(u, &ta, v, &tb, w, &tc)),
                    None => Interpolate::barycentric_interpolate(u, &colors[0], v, &colors[1], w, &colors[2]),
                };

                let depth: f64 = Interpolate::barycentric_interpolate(u, &depths[0], v, &depths[1], w, &depths[2]);

                write_fragment(framebuffer, args, pixel, Fragment { color, depth: depth as f32, coverage });
            }

            pixel.x += 1;
        }

        pixel.y += 1;
    }
}

/// Determine if a point with the given barycentric coordinates is on the inner side of every tested edge
#[inline]
fn is_covered((u, v, w): (f64, f64, f64), [tu, tv, tw]: [bool; 3]) -> bool {
    (!tu || u >= -EDGE_EPSILON) && (!tv || v >= -EDGE_EPSILON) && (!tw || w >= -EDGE_EPSILON)
}

/// Fraction of a regular grid of sub-samples within the pixel whose top-left corner is `(x, y)`
/// that lies on the inner side of the tested edges
fn subsample_coverage<B>(x: f64, y: f64, barycentric: &B, edges: [bool; 3]) -> f32 where B: Fn(f64, f64) -> (f64, f64, f64) {
    let step = 1.0 / SUBSAMPLES as f64;

    let mut covered = 0;

    for sy in 0..SUBSAMPLES {
        for sx in 0..SUBSAMPLES {
            if is_covered(barycentric(x + (sx as f64 + 0.5) * step, y + (sy as f64 + 0.5) * step), edges) {
                covered += 1;
            }
        }
    }

    covered as f32 / (SUBSAMPLES * SUBSAMPLES) as f32
}

/// Moves barycentric coordinates onto the triangle by dropping negative weights and renormalizing
#[inline]
fn clamp_weights(u: f64, v: f64, w: f64) -> (f64, f64, f64) {
    let (u, v, w) = (u.max(0.0), v.max(0.0), w.max(0.0));
    let sum = u + v + w;

    (u / sum, v / sum, w / sum)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::Color;
    use crate::color::predefined::{BLACK, BLUE, GREEN, RED, WHITE};
    use crate::framebuffer::RenderBuffer;
    use crate::geometry::{Coordinate, HasDimensions, Vertex};
    use crate::pipeline::RenderConfig;
    use crate::pixels::PixelRead;

    fn corner(i: usize) -> Corner {
        Corner { vertex: i, color: i, texcoord: None, inner: false }
    }

    /// The lower-left half of the viewport
    fn half_model() -> Model {
        let mut model = Model::new("half");

        model.add_vertices(vec![
            Vertex::new(-1.0, -1.0, 0.0),
            Vertex::new(1.0, -1.0, 0.0),
            Vertex::new(-1.0, 1.0, 0.0),
        ]);

        model.add_colors(vec![RED, GREEN, BLUE]);

        model
    }

    #[test]
    fn test_coverage() {
        let mut framebuffer = RenderBuffer::new(8, 8);
        let args = RasterArguments::new(framebuffer.dimensions(), &RenderConfig::default());

        rasterize_triangle(&args, &mut framebuffer, &half_model(), None, [corner(0), corner(1), corner(2)]);

        assert_ne!(framebuffer.pixel(Coordinate::new(0, 0)), Ok(BLACK));
        assert_ne!(framebuffer.pixel(Coordinate::new(0, 7)), Ok(BLACK));
        assert_ne!(framebuffer.pixel(Coordinate::new(7, 7)), Ok(BLACK));
        assert_eq!(framebuffer.pixel(Coordinate::new(7, 0)), Ok(BLACK));
        assert_eq!(framebuffer.pixel(Coordinate::new(4, 2)), Ok(BLACK));
    }

    #[test]
    fn test_colors_interpolated() {
        let mut framebuffer = RenderBuffer::new(100, 100);
        let args = RasterArguments::new(framebuffer.dimensions(), &RenderConfig::default());

        rasterize_triangle(&args, &mut framebuffer, &half_model(), None, [corner(0), corner(1), corner(2)]);

        // near the bottom-left corner, red dominates
        let pixel = framebuffer.pixel(Coordinate::new(0, 99)).unwrap();

        assert!(pixel.r > 0.95 && pixel.g < 0.05 && pixel.b < 0.05);

        let sum = |c: Color| c.r + c.g + c.b;
        assert!((sum(framebuffer.pixel(Coordinate::new(30, 60)).unwrap()) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_draws_nothing() {
        let mut framebuffer = RenderBuffer::new(8, 8);
        let args = RasterArguments::new(framebuffer.dimensions(), &RenderConfig::default());

        let mut model = half_model();
        model.add_vertex(Vertex::new(0.0, 0.0, 0.0));
        model.add_color(WHITE);

        rasterize_triangle(&args, &mut framebuffer, &model, None, [corner(0), corner(3), Corner { vertex: 3, color: 3, texcoord: None, inner: false }]);

        assert!(framebuffer.iter().all(|p| *p.color() == BLACK));
    }

    #[test]
    fn test_antialiased_edges() {
        let mut framebuffer = RenderBuffer::new(8, 8);
        let args = RasterArguments::new(framebuffer.dimensions(), &RenderConfig::default().with_antialiasing(true));

        let mut model = half_model();
        let white = model.add_color(WHITE);

        let c = |i| Corner { vertex: i, color: white, texcoord: None, inner: false };

        rasterize_triangle(&args, &mut framebuffer, &model, None, [c(0), c(1), c(2)]);

        // pixels on the diagonal are partially covered
        let diagonal = framebuffer.pixel(Coordinate::new(3, 3)).unwrap();
        assert!(diagonal.r > 0.2 && diagonal.r < 0.8, "{:?}", diagonal);

        assert!(framebuffer.pixel(Coordinate::new(0, 7)).unwrap().approx_eq(&WHITE, 1e-5));
    }

    #[test]
    fn test_antialiased_inner_edges_leave_no_seam() {
        let mut framebuffer = RenderBuffer::new(8, 8);
        let args = RasterArguments::new(framebuffer.dimensions(), &RenderConfig::default().with_antialiasing(true));

        // the whole viewport as two triangles sharing the diagonal from (1, -1) to (-1, 1)
        let mut model = half_model();
        model.add_vertex(Vertex::new(1.0, 1.0, 0.0));
        let white = model.add_color(WHITE);

        let c = |i, inner| Corner { vertex: i, color: white, texcoord: None, inner };

        rasterize_triangle(&args, &mut framebuffer, &model, None, [c(0, false), c(1, true), c(2, false)]);
        rasterize_triangle(&args, &mut framebuffer, &model, None, [c(1, false), c(3, false), c(2, true)]);

        assert!(framebuffer.iter().all(|p| *p.color() == WHITE));
    }

    #[test]
    fn test_textured() {
        let mut framebuffer = RenderBuffer::new(8, 8);
        let args = RasterArguments::new(framebuffer.dimensions(), &RenderConfig::default());

        let mut model = half_model();
        model.add_texcoord(TexCoord::new(0.0, 0.0));
        model.add_texcoord(TexCoord::new(1.0, 0.0));
        model.add_texcoord(TexCoord::new(0.0, 1.0));

        let texture = Texture::new(1, 1, vec![WHITE]).unwrap();

        let c = |i| Corner { vertex: i, color: i, texcoord: Some(i), inner: false };

        rasterize_triangle(&args, &mut framebuffer, &model, Some(&texture), [c(0), c(1), c(2)]);

        assert_eq!(framebuffer.pixel(Coordinate::new(0, 7)), Ok(WHITE));
    }
}
