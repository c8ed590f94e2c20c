//! Textures and texture coordinates

use num_traits::Float;

use crate::color::Color;
use crate::error::{RenderError, RenderResult};
use crate::geometry::{Coordinate, Dimensions, HasDimensions};
use crate::interpolate::Interpolate;

/// Texture coordinate, with `(0, 0)` at the bottom-left and `(1, 1)` at the top-right of the texture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TexCoord {
    pub u: f64,
    pub v: f64,
}

impl TexCoord {
    #[inline]
    pub fn new(u: f64, v: f64) -> TexCoord {
        TexCoord { u, v }
    }
}

impl Interpolate for TexCoord {
    #[inline]
    fn barycentric_interpolate<R: Float>(u: R, x1: &Self, v: R, x2: &Self, w: R, x3: &Self) -> Self {
        TexCoord {
            u: Interpolate::barycentric_interpolate(u, &x1.u, v, &x2.u, w, &x3.u),
            v: Interpolate::barycentric_interpolate(u, &x1.v, v, &x2.v, w, &x3.v),
        }
    }

    #[inline]
    fn linear_interpolate<R: Float>(t: R, x1: &Self, x2: &Self) -> Self {
        TexCoord {
            u: Interpolate::linear_interpolate(t, &x1.u, &x2.u),
            v: Interpolate::linear_interpolate(t, &x1.v, &x2.v),
        }
    }
}

/// An in-memory RGBA image, stored in rows from top to bottom.
///
/// Loading textures from files is left to the caller, who fills in the texels.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    dimensions: Dimensions,
    texels: Vec<Color>,
}

impl Texture {
    pub fn new(width: u32, height: u32, texels: Vec<Color>) -> RenderResult<Texture> {
        let dimensions = Dimensions::new(width, height);

        if dimensions.area() != texels.len() || texels.is_empty() {
            return Err(RenderError::InvalidTextureSize(width, height, texels.len()));
        }

        Ok(Texture { dimensions, texels })
    }

    /// Creates a texture by evaluating `f` at every texel coordinate
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> RenderResult<Texture> where F: FnMut(Coordinate) -> Color {
        let mut texels = Vec::with_capacity(Dimensions::new(width, height).area());

        for y in 0..height {
            for x in 0..width {
                texels.push(f(Coordinate::new(x, y)));
            }
        }

        Texture::new(width, height, texels)
    }

    #[inline]
    pub fn texel(&self, coord: Coordinate) -> Option<Color> {
        if self.dimensions.in_bounds(coord) {
            Some(self.texels[coord.into_index(self.dimensions)])
        } else {
            None
        }
    }

    /// Nearest-texel lookup. Coordinates are clamped into `[0, 1]`.
    pub fn sample_nearest(&self, tc: TexCoord) -> Color {
        let Dimensions { width, height } = self.dimensions;

        let u = tc.u.max(0.0).min(1.0);
        let v = tc.v.max(0.0).min(1.0);

        let x = ((u * width as f64) as u32).min(width - 1);
        // row 0 is the top of the image
        let y = (((1.0 - v) * height as f64) as u32).min(height - 1);

        self.texels[Coordinate::new(x, y).into_index(self.dimensions)]
    }
}

impl HasDimensions for Texture {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.dimensions }
}
