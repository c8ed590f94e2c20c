//! Conversions between framebuffers, textures and the `image` crate

use image::{Rgba, RgbaImage};

use crate::color::Color;
use crate::error::RenderResult;
use crate::framebuffer::RenderBuffer;
use crate::geometry::{Dimensions, HasDimensions};
use crate::scene::Texture;

/// Copy a framebuffer's colors out into an image
pub trait ImageFramebuffer {
    fn copy_to_image(&self) -> Option<RgbaImage>;
}

#[inline]
fn to_u8(c: f32) -> u8 {
    (c.max(0.0).min(1.0) * 255.0).round() as u8
}

impl ImageFramebuffer for RenderBuffer {
    fn copy_to_image(&self) -> Option<RgbaImage> {
        let Dimensions { width, height } = self.dimensions();

        let mut res = Vec::with_capacity(self.dimensions().area() * 4);

        for pixel in self.iter() {
            let color = pixel.color();

            res.extend_from_slice(&[to_u8(color.r), to_u8(color.g), to_u8(color.b), to_u8(color.a)]);
        }

        RgbaImage::from_raw(width, height, res)
    }
}

/// Build a texture from an image, with the image's top row as the top of the texture
pub fn texture_from_image(image: &RgbaImage) -> RenderResult<Texture> {
    let texels = image.pixels().map(|&Rgba([r, g, b, a])| {
        Color::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }).collect();

    Texture::new(image.width(), image.height(), texels)
}
