//! Defines color blending trait and the blend functions used by the rasterizer

use super::Color;

/// Defines some kind of color blending function
pub trait Blend {
    /// The first parameter passed to the blend function is the new fragment color, the source color.
    ///
    /// The second parameter passed to the blend function is the existing value in the framebuffer to blend over.
    ///
    /// For a generic alpha-over blend function, check the Wikipedia article [Here](https://en.wikipedia.org/wiki/Alpha_compositing)
    /// for the *over* color function.
    fn blend(&self, a: Color, b: Color) -> Color;
}

/// Mixes the source over the destination by the source alpha, which the rasterizer sets to the pixel coverage
/// when anti-aliasing. The result is opaque wherever either input was.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageBlend;

impl Blend for CoverageBlend {
    #[inline]
    fn blend(&self, a: Color, b: Color) -> Color {
        let coverage = a.a.max(0.0).min(1.0);

        Color {
            r: a.r * coverage + b.r * (1.0 - coverage),
            g: a.g * coverage + b.g * (1.0 - coverage),
            b: a.b * coverage + b.b * (1.0 - coverage),
            a: coverage + b.a * (1.0 - coverage),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::predefined::{BLACK, WHITE};

    #[test]
    fn test_coverage_blend() {
        let half = CoverageBlend.blend(WHITE.with_alpha(0.5), BLACK);

        assert!(half.approx_eq(&Color::rgba(0.5, 0.5, 0.5, 1.0), 1e-6));
        assert_eq!(CoverageBlend.blend(WHITE, BLACK), WHITE);
    }
}
