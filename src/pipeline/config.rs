//! Render settings

/// Settings that apply to a whole render call.
///
/// Every option defaults to off, which renders aliased primitives in painter's order with linear colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Smooth line and triangle edges by pixel coverage
    pub antialiasing: bool,
    /// Gamma-encode colors with `c^(1/gamma)` as they are written to the framebuffer
    pub gamma: Option<f32>,
    /// Only draw pixels at least as near as what the framebuffer already holds there
    pub depth_test: bool,
    /// Points are drawn as squares of `2 * point_radius + 1` pixels on a side
    pub point_radius: u32,
    /// Trace every pipeline stage of every model to the log
    pub debug: bool,
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig {
            antialiasing: false,
            gamma: None,
            depth_test: false,
            point_radius: 0,
            debug: false,
        }
    }
}

impl RenderConfig {
    #[inline]
    pub fn with_antialiasing(self, antialiasing: bool) -> RenderConfig {
        RenderConfig { antialiasing, ..self }
    }

    #[inline]
    pub fn with_gamma(self, gamma: Option<f32>) -> RenderConfig {
        if let Some(gamma) = gamma {
            assert!(gamma > 0.0, "Gamma must be positive");
        }

        RenderConfig { gamma, ..self }
    }

    #[inline]
    pub fn with_depth_test(self, depth_test: bool) -> RenderConfig {
        RenderConfig { depth_test, ..self }
    }

    #[inline]
    pub fn with_point_radius(self, point_radius: u32) -> RenderConfig {
        RenderConfig { point_radius, ..self }
    }

    #[inline]
    pub fn with_debug(self, debug: bool) -> RenderConfig {
        RenderConfig { debug, ..self }
    }
}
