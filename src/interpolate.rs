//! Interpolation utilities

use num_traits::{Float, NumCast};

use nalgebra::Vector4;

/// Describes a type that can be interpolated linearly and with barycentric coordinates.
///
/// Clipping uses the linear form to synthesize new vertex attributes at the crossing point of an edge,
/// while triangle rasterization uses the barycentric form to shade every covered pixel.
///
/// See [This document](https://classes.soe.ucsc.edu/cmps160/Fall10/resources/barycentricInterpolation.pdf) for more information.
pub trait Interpolate {
    /// Interpolate the three values with their corresponding barycentric coordinate weight.
    ///
    /// The weights must sum to one.
    fn barycentric_interpolate<R: Float>(u: R, x1: &Self, v: R, x2: &Self, w: R, x3: &Self) -> Self;

    /// Simple linear interpolation, where `t = 0` yields `x1` and `t = 1` yields `x2`
    fn linear_interpolate<R: Float>(t: R, x1: &Self, x2: &Self) -> Self;
}

macro_rules! impl_float_interpolate {
    ($($t:ty),+) => {
        $(
            impl Interpolate for $t {
                #[inline(always)]
                fn barycentric_interpolate<R: Float>(u: R, ux: &$t, v: R, vx: &$t, w: R, wx: &$t) -> $t {
                    let _ = w;
                    let (u, v) = (cast_weight::<R, $t>(u), cast_weight::<R, $t>(v));

                    // equal inputs come out exactly unchanged in this form
                    *wx + (*ux - *wx) * u + (*vx - *wx) * v
                }

                #[inline(always)]
                fn linear_interpolate<R: Float>(t: R, x1: &$t, x2: &$t) -> $t {
                    let t = cast_weight::<R, $t>(t);

                    *x1 + (*x2 - *x1) * t
                }
            }
        )+
    }
}

impl_float_interpolate!(f32, f64);

/// Interpolation weights are always finite floats, so the cast cannot fail in practice.
/// A NaN weight stays NaN rather than panicking.
#[inline(always)]
fn cast_weight<R: Float, T: Float>(r: R) -> T {
    <T as NumCast>::from(r).unwrap_or_else(T::nan)
}

impl Interpolate for Vector4<f64> {
    #[inline]
    fn barycentric_interpolate<R: Float>(u: R, ux: &Self, v: R, vx: &Self, _: R, wx: &Self) -> Self {
        let (u, v) = (cast_weight::<R, f64>(u), cast_weight::<R, f64>(v));

        wx + (ux - wx) * u + (vx - wx) * v
    }

    #[inline]
    fn linear_interpolate<R: Float>(t: R, x1: &Self, x2: &Self) -> Self {
        let t = cast_weight::<R, f64>(t);

        x1 + (x2 - x1) * t
    }
}
