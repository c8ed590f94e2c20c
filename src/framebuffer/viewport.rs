//! Rectangular sub-regions of a framebuffer

use crate::color::Color;
use crate::geometry::{Coordinate, Dimensions, HasDimensions};
use crate::pixels::{PixelRead, PixelWrite};

use super::Framebuffer;

/// A mutable borrow of a rectangle of a framebuffer.
///
/// Coordinates are relative to the top-left corner of the rectangle, and every operation,
/// including `clear`, only touches pixels inside it. Rendering into a viewport draws the canonical
/// view rectangle stretched over the whole viewport.
pub struct ViewportMut<'a, F: 'a> where F: Framebuffer {
    framebuffer: &'a mut F,
    origin: Coordinate,
    dimensions: Dimensions,
}

impl<'a, F: 'a> ViewportMut<'a, F> where F: Framebuffer {
    /// The caller guarantees the rectangle fits inside the framebuffer
    pub(crate) fn new(framebuffer: &'a mut F, origin: Coordinate, dimensions: Dimensions) -> ViewportMut<'a, F> {
        debug_assert!(origin.x + dimensions.width <= framebuffer.dimensions().width);
        debug_assert!(origin.y + dimensions.height <= framebuffer.dimensions().height);

        ViewportMut { framebuffer, origin, dimensions }
    }

    /// Top-left corner of the viewport in framebuffer coordinates
    #[inline]
    pub fn origin(&self) -> Coordinate { self.origin }

    /// Returns the underlying framebuffer
    #[inline]
    pub fn framebuffer(&self) -> &F { self.framebuffer }
}

impl<'a, F: 'a> HasDimensions for ViewportMut<'a, F> where F: Framebuffer {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.dimensions }
}

impl<'a, F: 'a> PixelRead for ViewportMut<'a, F> where F: Framebuffer {
    #[inline]
    unsafe fn get_pixel_unchecked(&self, coord: Coordinate) -> Color {
        self.framebuffer.get_pixel_unchecked(coord.offset(self.origin))
    }
}

impl<'a, F: 'a> PixelWrite for ViewportMut<'a, F> where F: Framebuffer {
    #[inline]
    unsafe fn set_pixel_unchecked(&mut self, coord: Coordinate, color: Color) {
        self.framebuffer.set_pixel_unchecked(coord.offset(self.origin), color)
    }
}

impl<'a, F: 'a> Framebuffer for ViewportMut<'a, F> where F: Framebuffer {
    #[inline]
    unsafe fn get_depth_unchecked(&self, coord: Coordinate) -> f32 {
        self.framebuffer.get_depth_unchecked(coord.offset(self.origin))
    }

    #[inline]
    unsafe fn set_depth_unchecked(&mut self, coord: Coordinate, depth: f32) {
        self.framebuffer.set_depth_unchecked(coord.offset(self.origin), depth)
    }

    fn clear(&mut self, color: Color) {
        for y in 0..self.dimensions.height {
            for x in 0..self.dimensions.width {
                let coord = Coordinate::new(x, y);

                unsafe {
                    self.set_pixel_unchecked(coord, color);
                    self.set_depth_unchecked(coord, super::FAR_DEPTH);
                }
            }
        }
    }

    #[inline]
    fn background(&self) -> Color { self.framebuffer.background() }
}
