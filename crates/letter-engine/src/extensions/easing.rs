// extensions/easing.rs
//
// Easing curves for view and wisp animation.
// Pure math, no dependency on the controller.

use std::f32::consts::PI;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow end. Close to CSS `ease-out` for short moves.
    QuadOut,
    /// Stronger slow end. Used for the page-load entrance.
    CubicOut,
    /// Slow start and end. Close to CSS `ease-in-out`.
    SineInOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t` in [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec2 values.
#[inline]
fn lerp_vec2(a: glam::Vec2, b: glam::Vec2, t: f32) -> glam::Vec2 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

/// Interpolate Vec2 with easing.
#[inline]
pub fn ease_vec2(a: glam::Vec2, b: glam::Vec2, t: f32, easing: Easing) -> glam::Vec2 {
    lerp_vec2(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::QuadOut, Easing::CubicOut, Easing::SineInOut] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", easing);
        }
    }

    #[test]
    fn out_curves_lead_linear() {
        assert!(Easing::QuadOut.apply(0.5) > 0.5);
        assert!(Easing::CubicOut.apply(0.5) > Easing::QuadOut.apply(0.5));
    }

    #[test]
    fn sine_in_out_is_symmetric() {
        let mid = Easing::SineInOut.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-6, "got {}", mid);
        assert!(Easing::SineInOut.apply(0.2) < 0.2);
    }

    #[test]
    fn ease_vec2_interpolates() {
        let v = ease_vec2(glam::Vec2::ZERO, glam::Vec2::new(0.0, -200.0), 0.5, Easing::Linear);
        assert!((v.y + 100.0).abs() < 0.001);
    }
}
