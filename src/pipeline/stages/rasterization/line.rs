use super::{write_fragment, Fragment, RasterArguments};

use crate::framebuffer::Framebuffer;
use crate::geometry::{Coordinate, Vertex};
use crate::interpolate::Interpolate;
use crate::pipeline::stages::Corner;
use crate::scene::Model;

/// Draws a line segment, interpolating color and depth from the start to the end.
///
/// Bresenham's algorithm is used by default, and Xiaolin Wu's when anti-aliasing is enabled.
pub(crate) fn rasterize_line<F>(args: &RasterArguments, framebuffer: &mut F, model: &Model, start: Corner, end: Corner) where F: Framebuffer {
    let (v1, v2) = (&model.vertices()[start.vertex], &model.vertices()[end.vertex]);
    let (c1, c2) = (model.colors()[start.color], model.colors()[end.color]);

    let (w, h) = (args.dimensions.width, args.dimensions.height);

    // Endpoints in pixel index space, where integer coordinates are pixel centers.
    let to_pixel_space = |v: &Vertex| {
        let (x, y) = args.to_screen(v);
        (clamp_center(x, w), clamp_center(y, h))
    };

    let (x1, y1) = to_pixel_space(v1);
    let (x2, y2) = to_pixel_space(v2);

    let d = (x1 - x2).hypot(y1 - y2);

    let (z1, z2) = (v1.z(), v2.z());

    let rasterize_fragment = |x: i64, y: i64, alpha: f64| {
        if x >= 0 && y >= 0 {
            let coord = Coordinate::new(x as u32, y as u32);

            let t = if d > 0.0 { ((x1 - x as f64).hypot(y1 - y as f64) / d).min(1.0) } else { 0.0 };

            let fragment = Fragment {
                color: Interpolate::linear_interpolate(t, &c1, &c2),
                depth: Interpolate::linear_interpolate(t, &z1, &z2) as f32,
                coverage: alpha as f32,
            };

            write_fragment(framebuffer, args, coord, fragment);
        }
    };

    if args.antialiasing {
        draw_line_xiaolin_wu(x1, y1, x2, y2, rasterize_fragment);
    } else {
        draw_line_bresenham(x1.round() as i64, y1.round() as i64,
                            x2.round() as i64, y2.round() as i64, rasterize_fragment);
    }
}

/// Moves a continuous screen coordinate to pixel index space, clamped to the first and last pixel centers
#[inline]
fn clamp_center(value: f64, size: u32) -> f64 {
    (value - 0.5).max(0.0).min(size.saturating_sub(1) as f64)
}

/// Uses Bresenham's algorithm to draw a line.
///
/// [https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
pub fn draw_line_bresenham<F>(mut x0: i64, mut y0: i64, x1: i64, y1: i64, mut plot: F) where F: FnMut(i64, i64, f64) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();

    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx + dy;

    loop {
        plot(x0, y0, 1.0);

        if x0 == x1 && y0 == y1 { break; }

        let e2 = 2 * err;

        if e2 >= dy {
            err += dy;
            x0 += sx;
        }

        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Uses Xiaolin Wu's algorithm to draw an anti-aliased line.
///
/// [https://en.wikipedia.org/wiki/Xiaolin_Wu%27s_line_algorithm](https://en.wikipedia.org/wiki/Xiaolin_Wu%27s_line_algorithm)
///
/// Despite the ropey appearance up close, at a 1 to 1 resolution Xiaolin Wu's technique
/// looks much better than non-antialiased techniques.
///
/// The second endpoint is skipped when it rounds into the column of the first,
/// so that a degenerate line never plots a pixel twice and double-blends it.
pub fn draw_line_xiaolin_wu<F>(mut x0: f64, mut y0: f64, mut x1: f64, mut y1: f64, mut plot: F) where F: FnMut(i64, i64, f64) {
    use std::mem::swap;

    let mut plot_float = |x: f64, y: f64, opacity: f64| {
        plot(x as i64, y as i64, opacity)
    };

    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    if steep {
        swap(&mut x0, &mut y0);
        swap(&mut x1, &mut y1);
    }

    if x0 > x1 {
        swap(&mut x0, &mut x1);
        swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;

    let gradient = if dx < 0.0001 { 1.0 } else { dy / dx };

    // first endpoint
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = 1.0 - (x0 + 0.5).fract();

    let xpxl1 = xend;
    let ypxl1 = yend.trunc();

    if steep {
        plot_float(ypxl1, xpxl1, (1.0 - yend.fract()) * xgap);
        plot_float(ypxl1 + 1.0, xpxl1, yend.fract() * xgap);
    } else {
        plot_float(xpxl1, ypxl1, (1.0 - yend.fract()) * xgap);
        plot_float(xpxl1, ypxl1 + 1.0, yend.fract() * xgap);
    }

    let mut intery = yend + gradient;

    // second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = (x1 + 0.5).fract();

    let xpxl2 = xend;
    let ypxl2 = yend.trunc();

    // a line shorter than a pixel has both endpoints in the same column, which was already plotted
    if xpxl2 > xpxl1 {
        if steep {
            plot_float(ypxl2, xpxl2, (1.0 - yend.fract()) * xgap);
            plot_float(ypxl2 + 1.0, xpxl2, yend.fract() * xgap);
        } else {
            plot_float(xpxl2, ypxl2, (1.0 - yend.fract()) * xgap);
            plot_float(xpxl2, ypxl2 + 1.0, yend.fract() * xgap);
        }
    }

    let mut x = xpxl1 + 1.0;

    if steep {
        while x <= (xpxl2 - 1.0) {
            let y = intery.trunc();

            plot_float(y, x, 1.0 - intery.fract());
            plot_float(y + 1.0, x, intery.fract());

            intery += gradient;
            x += 1.0;
        }
    } else {
        while x <= (xpxl2 - 1.0) {
            let y = intery.trunc();

            plot_float(x, y, 1.0 - intery.fract());
            plot_float(x, y + 1.0, intery.fract());

            intery += gradient;
            x += 1.0;
        }
    }
}
