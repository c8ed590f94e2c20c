//! Rasterization of clipped and projected primitives into a framebuffer

pub mod point;
pub mod line;
pub mod triangle;

pub(crate) use self::triangle::rasterize_triangle;
pub(crate) use self::line::rasterize_line;
pub(crate) use self::point::rasterize_point;

use crate::color::{Blend, Color, CoverageBlend};
use crate::error::{RenderError, RenderResult};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Coordinate, Dimensions, Vertex};
use crate::pipeline::RenderConfig;
use crate::scene::{Model, PrimitiveKind};

use super::corners;

/// Per-render settings shared by the point, line and triangle rasterizers
#[derive(Debug, Clone, Copy)]
pub struct RasterArguments {
    pub dimensions: Dimensions,
    pub depth_test: bool,
    pub antialiasing: bool,
    pub gamma: Option<f32>,
    pub point_radius: u32,
}

impl RasterArguments {
    pub fn new(dimensions: Dimensions, config: &RenderConfig) -> RasterArguments {
        RasterArguments {
            dimensions,
            depth_test: config.depth_test,
            antialiasing: config.antialiasing,
            gamma: config.gamma,
            point_radius: config.point_radius,
        }
    }

    /// Maps a projected vertex onto continuous pixel space, where pixel `(x, y)` covers `[x, x + 1) × [y, y + 1)`.
    ///
    /// `x = -1` is the left edge of the framebuffer and `y = 1` the top edge.
    #[inline]
    pub fn to_screen(&self, v: &Vertex) -> (f64, f64) {
        let Dimensions { width, height } = self.dimensions;

        ((v.x() + 1.0) / 2.0 * width as f64, (1.0 - v.y()) / 2.0 * height as f64)
    }

    /// The pixel containing the given screen position, clamped into the framebuffer
    #[inline]
    pub fn pixel_at(&self, x: f64, y: f64) -> Coordinate {
        Coordinate::new(clamp_to_pixel(x, self.dimensions.width), clamp_to_pixel(y, self.dimensions.height))
    }
}

#[inline]
fn clamp_to_pixel(value: f64, size: u32) -> u32 {
    let max = size.saturating_sub(1);

    if value <= 0.0 || value.is_nan() {
        0
    } else if value >= max as f64 {
        max
    } else {
        value as u32
    }
}

/// Depth, color and coverage of one pixel of a primitive
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub color: Color,
    pub depth: f32,
    pub coverage: f32,
}

/// Writes a fragment into the framebuffer, applying the depth test, coverage blending and gamma encoding.
///
/// Partially covered fragments are blended over the existing pixel in linear space,
/// so the existing pixel is gamma-decoded first.
pub fn write_fragment<F>(framebuffer: &mut F, args: &RasterArguments, coord: Coordinate, fragment: Fragment) where F: Framebuffer {
    if !framebuffer.in_bounds(coord) || fragment.coverage <= 0.0 {
        return;
    }

    if args.depth_test {
        let stored = unsafe { framebuffer.get_depth_unchecked(coord) };

        // Check if fragment is in front of other geometry
        if fragment.depth < stored {
            return;
        }
    }

    let color = if fragment.coverage < 1.0 {
        let existing = unsafe { framebuffer.get_pixel_unchecked(coord) };

        let existing = match args.gamma {
            Some(gamma) => existing.decode_gamma(gamma),
            None => existing,
        };

        CoverageBlend.blend(fragment.color.mul_alpha(fragment.coverage), existing)
    } else {
        fragment.color
    };

    let color = match args.gamma {
        Some(gamma) => color.encode_gamma(gamma),
        None => color,
    };

    unsafe {
        framebuffer.set_pixel_unchecked(coord, color);
        framebuffer.set_depth_unchecked(coord, fragment.depth);
    }
}

/// Draws every primitive of a clipped and projected model, in order.
///
/// Returns `RenderError::UnassembledPrimitive` for composite primitives.
pub fn rasterize<F>(model: &Model, framebuffer: &mut F, args: &RasterArguments) -> RenderResult<()> where F: Framebuffer {
    for primitive in model.primitives() {
        let corners = corners(primitive);

        match primitive.kind() {
            PrimitiveKind::Point => rasterize_point(args, framebuffer, model, corners[0]),
            PrimitiveKind::LineSegment => rasterize_line(args, framebuffer, model, corners[0], corners[1]),
            PrimitiveKind::Triangle => {
                let texture = primitive.texture().map(|i| &model.textures()[i]);

                rasterize_triangle(args, framebuffer, model, texture, [corners[0], corners[1], corners[2]])
            }
            kind => return Err(RenderError::UnassembledPrimitive(kind)),
        }
    }

    Ok(())
}
