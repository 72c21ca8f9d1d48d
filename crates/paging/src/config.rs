//! Indicator configuration.
//!
//! Colors live with the renderer (`paging-indicator`); everything that
//! affects window geometry or timing lives here.

use crate::animation::Animation;
use crate::capacity::WindowCapacity;
use crate::error::PagingError;

/// Geometry, window capacity, visibility policy, and transition timing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagingConfig {
    /// Diameter of a full-size dot, in pixels.
    pub indicator_size: f32,
    /// Gap between neighbouring dots, in pixels.
    pub spacing: f32,
    /// Number of full-size dots in the window.
    pub capacity: WindowCapacity,
    /// Hide the whole indicator when there is exactly one page.
    pub hides_for_single_page: bool,
    /// Timing of visual transitions.
    pub animation: Animation,
}

impl PagingConfig {
    /// Default dot diameter in pixels.
    pub const DEFAULT_INDICATOR_SIZE: f32 = 8.0;
    /// Default spacing in pixels.
    pub const DEFAULT_SPACING: f32 = 8.0;

    /// Set the dot diameter.
    #[must_use]
    pub fn with_indicator_size(mut self, size: f32) -> Self {
        self.indicator_size = size;
        self
    }

    /// Set the spacing between dots.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the window capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: WindowCapacity) -> Self {
        self.capacity = capacity;
        self
    }

    /// Hide the indicator when there is only one page.
    #[must_use]
    pub fn hides_for_single_page(mut self, hides: bool) -> Self {
        self.hides_for_single_page = hides;
        self
    }

    /// Set the transition animation.
    #[must_use]
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    /// Width of one slot: dot diameter plus spacing.
    #[allow(clippy::arithmetic_side_effects)]
    #[must_use]
    pub fn slot_size(&self) -> f32 {
        self.indicator_size + self.spacing
    }

    /// Check that the metrics describe a drawable strip.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::InvalidMetrics`] if either value is negative or
    /// not finite, or if the slot size is zero.
    pub fn validate(&self) -> Result<(), PagingError> {
        let finite = self.indicator_size.is_finite() && self.spacing.is_finite();
        let non_negative = self.indicator_size >= 0.0 && self.spacing >= 0.0;
        if finite && non_negative && self.slot_size() > 0.0 {
            Ok(())
        } else {
            Err(PagingError::InvalidMetrics {
                size: self.indicator_size,
                spacing: self.spacing,
            })
        }
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            indicator_size: Self::DEFAULT_INDICATOR_SIZE,
            spacing: Self::DEFAULT_SPACING,
            capacity: WindowCapacity::default(),
            hides_for_single_page: false,
            animation: Animation::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PagingConfig;
    use crate::animation::Animation;
    use crate::capacity::WindowCapacity;
    use crate::error::PagingError;

    #[test]
    fn test_defaults() {
        let config = PagingConfig::default();
        assert_eq!(config.indicator_size, 8.0);
        assert_eq!(config.spacing, 8.0);
        assert_eq!(config.capacity, WindowCapacity::Three);
        assert!(!config.hides_for_single_page);
        assert_eq!(config.animation, Animation::default());
        assert_eq!(config.slot_size(), 16.0);
    }

    #[test]
    fn test_builders_chain() {
        let config = PagingConfig::default()
            .with_indicator_size(10.0)
            .with_spacing(4.0)
            .with_capacity(WindowCapacity::Five)
            .hides_for_single_page(true)
            .with_animation(Animation::none());
        assert_eq!(config.slot_size(), 14.0);
        assert_eq!(config.capacity, WindowCapacity::Five);
        assert!(config.hides_for_single_page);
        assert_eq!(config.animation.duration_ms, 0);
    }

    #[test]
    fn test_validate_accepts_defaults_and_zero_spacing() {
        assert!(PagingConfig::default().validate().is_ok());
        assert!(PagingConfig::default().with_spacing(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_metrics() {
        let negative = PagingConfig::default().with_indicator_size(-1.0);
        assert_eq!(
            negative.validate(),
            Err(PagingError::InvalidMetrics {
                size: -1.0,
                spacing: 8.0
            })
        );
        let zero = PagingConfig::default()
            .with_indicator_size(0.0)
            .with_spacing(0.0);
        assert!(zero.validate().is_err());
        let nan = PagingConfig::default().with_spacing(f32::NAN);
        assert!(nan.validate().is_err());
        let inf = PagingConfig::default().with_indicator_size(f32::INFINITY);
        assert!(inf.validate().is_err());
    }
}
