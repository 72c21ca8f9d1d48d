//! Animation timing for indicator transitions.
//!
//! State changes in [`PagingWindow`](crate::window::PagingWindow) are
//! instantaneous. The presentation layer interpolates between snapshots using
//! the eased progress returned by [`Animation::progress`].
//!
//! Curves are cubic polynomials so no float math library is needed.

/// Easing curve applied to transition progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Curve {
    /// Constant speed.
    Linear,
    /// Starts slow, ends fast.
    EaseIn,
    /// Starts fast, ends slow.
    EaseOut,
    /// Slow at both ends.
    #[default]
    EaseInOut,
}

impl Curve {
    /// Map linear progress `t` in `[0, 1]` through the curve.
    ///
    /// Input outside `[0, 1]` is clamped first.
    // Cubic terms on a value clamped to [0, 1] cannot overflow.
    #[allow(clippy::arithmetic_side_effects)]
    #[must_use]
    pub fn ease(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 - 2.0 * t;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Curve plus duration for one indicator transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animation {
    /// Easing curve.
    pub curve: Curve,
    /// Total duration in milliseconds. Zero disables interpolation.
    pub duration_ms: u32,
}

impl Animation {
    /// Default transition duration in milliseconds.
    pub const DEFAULT_DURATION_MS: u32 = 350;

    /// Create an animation from a curve and duration.
    #[must_use]
    pub const fn new(curve: Curve, duration_ms: u32) -> Self {
        Self { curve, duration_ms }
    }

    /// Constant-speed animation.
    #[must_use]
    pub const fn linear(duration_ms: u32) -> Self {
        Self::new(Curve::Linear, duration_ms)
    }

    /// Ease-in animation.
    #[must_use]
    pub const fn ease_in(duration_ms: u32) -> Self {
        Self::new(Curve::EaseIn, duration_ms)
    }

    /// Ease-out animation.
    #[must_use]
    pub const fn ease_out(duration_ms: u32) -> Self {
        Self::new(Curve::EaseOut, duration_ms)
    }

    /// Ease-in-out animation.
    #[must_use]
    pub const fn ease_in_out(duration_ms: u32) -> Self {
        Self::new(Curve::EaseInOut, duration_ms)
    }

    /// Transitions that snap straight to the new state.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(Curve::Linear, 0)
    }

    /// Eased progress in `[0, 1]` after `elapsed_ms`.
    #[allow(clippy::cast_precision_loss, clippy::arithmetic_side_effects)]
    #[must_use]
    pub fn progress(&self, elapsed_ms: u32) -> f32 {
        if self.is_finished(elapsed_ms) {
            return 1.0;
        }
        // duration_ms > elapsed_ms >= 0 here, so the division is finite.
        self.curve
            .ease(elapsed_ms as f32 / self.duration_ms as f32)
    }

    /// Whether `elapsed_ms` has reached the end of the animation.
    #[must_use]
    pub const fn is_finished(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::ease_in_out(Self::DEFAULT_DURATION_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::{Animation, Curve};

    const CURVES: [Curve; 4] = [Curve::Linear, Curve::EaseIn, Curve::EaseOut, Curve::EaseInOut];

    #[test]
    fn test_curves_hit_endpoints() {
        for curve in CURVES {
            assert_eq!(curve.ease(0.0), 0.0, "{curve:?} at 0");
            assert!((curve.ease(1.0) - 1.0).abs() < 1e-6, "{curve:?} at 1");
        }
    }

    #[test]
    fn test_curves_clamp_out_of_range_input() {
        for curve in CURVES {
            assert_eq!(curve.ease(-3.0), 0.0);
            assert!((curve.ease(7.5) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric_at_midpoint() {
        assert!((Curve::EaseInOut.ease(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ease_in_lags_and_ease_out_leads_linear() {
        assert!(Curve::EaseIn.ease(0.3) < 0.3);
        assert!(Curve::EaseOut.ease(0.3) > 0.3);
    }

    #[test]
    fn test_curves_are_monotone() {
        for curve in CURVES {
            let mut prev = 0.0_f32;
            for step in 1..=100u8 {
                let v = curve.ease(f32::from(step) / 100.0);
                assert!(v >= prev, "{curve:?} decreased at step {step}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_progress_completes_at_duration() {
        let anim = Animation::linear(200);
        assert_eq!(anim.progress(0), 0.0);
        assert!((anim.progress(100) - 0.5).abs() < 1e-6);
        assert_eq!(anim.progress(200), 1.0);
        assert_eq!(anim.progress(10_000), 1.0);
        assert!(anim.is_finished(200));
        assert!(!anim.is_finished(199));
    }

    #[test]
    fn test_zero_duration_is_always_complete() {
        let anim = Animation::none();
        assert_eq!(anim.progress(0), 1.0);
        assert!(anim.is_finished(0));
    }

    #[test]
    fn test_default_is_ease_in_out() {
        let anim = Animation::default();
        assert_eq!(anim.curve, Curve::EaseInOut);
        assert_eq!(anim.duration_ms, Animation::DEFAULT_DURATION_MS);
    }
}
