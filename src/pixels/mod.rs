//! Pixel access traits

use crate::color::Color;
use crate::error::{RenderError, RenderResult};
use crate::geometry::{Coordinate, HasDimensions};

/// Defines methods for reading pixel colors.
pub trait PixelRead: HasDimensions {
    /// Unsafely read a pixel at the given coordinate without checking bounds.
    ///
    /// This is meant for internal use by the rasterizer, which clamps every coordinate first.
    /// Please use `pixel` to access pixel values safely.
    unsafe fn get_pixel_unchecked(&self, coord: Coordinate) -> Color;

    /// Get the pixel at the given coordinate.
    ///
    /// Throws `RenderError::InvalidPixelCoordinate` on invalid pixel coordinates.
    fn pixel(&self, coord: Coordinate) -> RenderResult<Color> {
        if self.in_bounds(coord) {
            Ok(unsafe { self.get_pixel_unchecked(coord) })
        } else {
            Err(RenderError::InvalidPixelCoordinate)
        }
    }
}

/// Defines methods for writing pixel colors.
pub trait PixelWrite: PixelRead {
    /// Unsafely write a pixel at the given coordinate without checking bounds.
    unsafe fn set_pixel_unchecked(&mut self, coord: Coordinate, color: Color);

    /// Set the pixel at the given coordinate.
    ///
    /// Throws `RenderError::InvalidPixelCoordinate` on invalid pixel coordinates.
    fn set_pixel(&mut self, coord: Coordinate, color: Color) -> RenderResult<()> {
        if self.in_bounds(coord) {
            unsafe { self.set_pixel_unchecked(coord, color) }
            Ok(())
        } else {
            Err(RenderError::InvalidPixelCoordinate)
        }
    }
}
