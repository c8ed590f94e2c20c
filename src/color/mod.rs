//! Color type definitions, for both vertex attributes and framebuffer pixels

use num_traits::Float;

use crate::interpolate::Interpolate;

pub mod blend;
pub mod predefined;

pub use self::blend::{Blend, CoverageBlend};

/// Linear RGBA color with `f32` channels, nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Creates an opaque color
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    /// Copy the color, but with the given alpha channel value
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Color {
        Color { a: alpha, ..self }
    }

    /// Copy the color, but multiply the alpha channel with the given value
    #[inline]
    pub fn mul_alpha(self, alpha: f32) -> Color {
        Color { a: self.a * alpha, ..self }
    }

    /// Clamp every channel into `[0, 1]`
    #[inline]
    pub fn clamped(self) -> Color {
        Color {
            r: self.r.max(0.0).min(1.0),
            g: self.g.max(0.0).min(1.0),
            b: self.b.max(0.0).min(1.0),
            a: self.a.max(0.0).min(1.0),
        }
    }

    /// Gamma-encode the color channels with `c^(1/gamma)`. Alpha is left linear.
    pub fn encode_gamma(self, gamma: f32) -> Color {
        let exponent = 1.0 / gamma;
        let c = self.clamped();

        Color::rgba(c.r.powf(exponent), c.g.powf(exponent), c.b.powf(exponent), c.a)
    }

    /// Inverse of `encode_gamma`
    pub fn decode_gamma(self, gamma: f32) -> Color {
        let c = self.clamped();

        Color::rgba(c.r.powf(gamma), c.g.powf(gamma), c.b.powf(gamma), c.a)
    }

    /// Approximate equality of all four channels
    pub fn approx_eq(&self, other: &Color, epsilon: f32) -> bool {
        (self.r - other.r).abs() <= epsilon &&
            (self.g - other.g).abs() <= epsilon &&
            (self.b - other.b).abs() <= epsilon &&
            (self.a - other.a).abs() <= epsilon
    }
}

impl Interpolate for Color {
    #[inline]
    fn barycentric_interpolate<R: Float>(u: R, x1: &Self, v: R, x2: &Self, w: R, x3: &Self) -> Self {
        Color {
            r: Interpolate::barycentric_interpolate(u, &x1.r, v, &x2.r, w, &x3.r),
            g: Interpolate::barycentric_interpolate(u, &x1.g, v, &x2.g, w, &x3.g),
            b: Interpolate::barycentric_interpolate(u, &x1.b, v, &x2.b, w, &x3.b),
            a: Interpolate::barycentric_interpolate(u, &x1.a, v, &x2.a, w, &x3.a),
        }
    }

    #[inline]
    fn linear_interpolate<R: Float>(t: R, x1: &Self, x2: &Self) -> Self {
        Color {
            r: Interpolate::linear_interpolate(t, &x1.r, &x2.r),
            g: Interpolate::linear_interpolate(t, &x1.g, &x2.g),
            b: Interpolate::linear_interpolate(t, &x1.b, &x2.b),
            a: Interpolate::linear_interpolate(t, &x1.a, &x2.a),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::predefined::{RED, BLUE};

    #[test]
    fn test_interpolate_midpoint() {
        let mid: Color = Interpolate::linear_interpolate(0.5f64, &RED, &BLUE);

        assert!(mid.approx_eq(&Color::rgb(0.5, 0.0, 0.5), 1e-6));
    }

    #[test]
    fn test_gamma_round_trip() {
        let c = Color::rgb(0.25, 0.5, 1.0);
        let encoded = c.encode_gamma(2.2);

        assert!(encoded.r > c.r);
        assert!(encoded.decode_gamma(2.2).approx_eq(&c, 1e-5));
    }
}
