//! An efficient framebuffer implementation

use crate::color::Color;
use crate::error::{RenderError, RenderResult};
use crate::geometry::{Coordinate, Dimensions, HasDimensions};
use crate::pixels::{PixelRead, PixelWrite};

use super::{Framebuffer, ViewportMut, FAR_DEPTH};

pub mod iterator;

pub use self::iterator::{RenderBufferIter, RenderBufferPixelRef};

/// An efficient framebuffer implementation with interleaved color and depth, for more cache locality.
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    dimensions: Dimensions,
    background: Color,
    /// Interlaced framebuffer for more cache-friendly access
    pub(crate) buffer: Vec<(Color, f32)>,
}

impl RenderBuffer {
    /// Create a new `RenderBuffer` with the given dimensions, cleared to an opaque black background.
    pub fn with_dimensions(dimensions: Dimensions) -> RenderBuffer {
        RenderBuffer::with_background(dimensions, Color::rgb(0.0, 0.0, 0.0))
    }

    /// Create a new `RenderBuffer` with the given dimensions and background color, cleared to that color.
    pub fn with_background(dimensions: Dimensions, background: Color) -> RenderBuffer {
        RenderBuffer {
            dimensions,
            background,
            buffer: vec![(background, FAR_DEPTH); dimensions.area()],
        }
    }

    pub fn new(width: u32, height: u32) -> RenderBuffer {
        RenderBuffer::with_dimensions(Dimensions::new(width, height))
    }

    #[inline]
    pub fn set_background(&mut self, background: Color) {
        self.background = background;
    }

    /// Borrow a rectangle of the framebuffer as a render target.
    ///
    /// Throws `RenderError::InvalidViewport` if the rectangle is empty or does not fit inside the framebuffer.
    pub fn viewport_mut(&mut self, origin: Coordinate, dimensions: Dimensions) -> RenderResult<ViewportMut<RenderBuffer>> {
        let fits_x = origin.x as u64 + dimensions.width as u64 <= self.dimensions.width as u64;
        let fits_y = origin.y as u64 + dimensions.height as u64 <= self.dimensions.height as u64;

        if dimensions.area() == 0 || !fits_x || !fits_y {
            return Err(RenderError::InvalidViewport);
        }

        Ok(ViewportMut::new(self, origin, dimensions))
    }

    /// Borrow the whole framebuffer as a render target
    pub fn full_viewport_mut(&mut self) -> ViewportMut<RenderBuffer> {
        let dimensions = self.dimensions;

        ViewportMut::new(self, Coordinate::new(0, 0), dimensions)
    }

    /// Return an efficient iterator for `RenderBuffer` pixels
    pub fn iter(&self) -> RenderBufferIter {
        RenderBufferIter { iter: self.buffer.iter() }
    }

    /// Copy the colors out in row-major order
    pub fn colors(&self) -> Vec<Color> {
        self.buffer.iter().map(|&(color, _)| color).collect()
    }
}

impl HasDimensions for RenderBuffer {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.dimensions }
}

impl PixelRead for RenderBuffer {
    #[inline]
    unsafe fn get_pixel_unchecked(&self, coord: Coordinate) -> Color {
        debug_assert!(self.in_bounds(coord));
        self.buffer.get_unchecked(coord.into_index(self.dimensions)).0
    }
}

impl PixelWrite for RenderBuffer {
    #[inline]
    unsafe fn set_pixel_unchecked(&mut self, coord: Coordinate, color: Color) {
        debug_assert!(self.in_bounds(coord));
        let index = coord.into_index(self.dimensions);
        self.buffer.get_unchecked_mut(index).0 = color;
    }
}

impl Framebuffer for RenderBuffer {
    #[inline]
    unsafe fn get_depth_unchecked(&self, coord: Coordinate) -> f32 {
        debug_assert!(self.in_bounds(coord));
        self.buffer.get_unchecked(coord.into_index(self.dimensions)).1
    }

    #[inline]
    unsafe fn set_depth_unchecked(&mut self, coord: Coordinate, depth: f32) {
        debug_assert!(self.in_bounds(coord));
        let index = coord.into_index(self.dimensions);
        self.buffer.get_unchecked_mut(index).1 = depth;
    }

    fn clear(&mut self, color: Color) {
        for a in &mut self.buffer {
            *a = (color, FAR_DEPTH);
        }
    }

    #[inline]
    fn background(&self) -> Color { self.background }
}
