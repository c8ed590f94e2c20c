//! Framebuffers and viewports the pipeline renders into

use crate::color::Color;
use crate::geometry::Coordinate;
use crate::pixels::PixelWrite;

pub mod renderbuffer;
pub mod viewport;

pub use self::renderbuffer::RenderBuffer;
pub use self::viewport::ViewportMut;

/// Depth value of an empty pixel. Larger depths are nearer to the camera.
pub const FAR_DEPTH: f32 = f32::NEG_INFINITY;

/// The narrow capability surface the pipeline needs from a render target:
/// fixed dimensions, color read and write, a depth channel and a clear operation.
pub trait Framebuffer: PixelWrite {
    /// Unsafely read the depth at the given coordinate without checking bounds.
    unsafe fn get_depth_unchecked(&self, coord: Coordinate) -> f32;

    /// Unsafely write the depth at the given coordinate without checking bounds.
    unsafe fn set_depth_unchecked(&mut self, coord: Coordinate, depth: f32);

    /// Fill every pixel with the given color and reset the depth to `FAR_DEPTH`
    fn clear(&mut self, color: Color);

    /// The color `clear_to_background` fills with
    fn background(&self) -> Color;

    fn clear_to_background(&mut self) {
        let background = self.background();
        self.clear(background);
    }
}
