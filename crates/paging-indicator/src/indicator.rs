//! Page indicator component
//!
//! Draws one circle per page into any `Gray4` draw target. The strip is laid
//! out as a row of slots (`indicator_size + spacing` wide) centered in the
//! indicator frame and translated by the window offset; whatever falls outside
//! the frame is clipped.

use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{Circle, ContainsPoint, PrimitiveStyle, Rectangle},
};
use paging::{PageInput, PagingConfig, RenderSnapshot, WindowMode};

use crate::style::IndicatorStyle;

/// Dots on each side of the window that can still render at reduced size,
/// plus the half slot of padding at each end of the frame.
const FRAME_EXTRA_SLOTS: usize = 5;

/// Something the indicator can draw: a snapshot at rest or an in-flight
/// transition.
pub trait StripFrame {
    /// Target state (page count, mode, active page, visibility).
    fn snapshot(&self) -> &RenderSnapshot;

    /// Strip translation in pixels.
    fn offset(&self) -> f32 {
        self.snapshot().adjusted_offset
    }

    /// Fraction of the full diameter for `page`.
    fn dot_factor(&self, page: usize) -> f32 {
        self.snapshot().dot_scale(page).factor()
    }
}

impl StripFrame for RenderSnapshot {
    fn snapshot(&self) -> &RenderSnapshot {
        self
    }
}

/// Dot-strip page indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageIndicator {
    config: PagingConfig,
    style: IndicatorStyle,
}

impl PageIndicator {
    /// Create an indicator with the default light style
    pub fn new(config: PagingConfig) -> Self {
        Self {
            config,
            style: IndicatorStyle::default(),
        }
    }

    /// Set colors
    pub fn style(mut self, style: IndicatorStyle) -> Self {
        self.style = style;
        self
    }

    /// Geometry and timing
    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    /// Colors
    pub fn indicator_style(&self) -> &IndicatorStyle {
        &self.style
    }

    /// Frame width in pixels (unrounded).
    ///
    /// Sliding strips get the window plus two shrinking dots and half a slot
    /// of padding on each side; static strips are exactly as wide as their
    /// dots plus half a slot of padding.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn frame_width(&self, snapshot: &RenderSnapshot) -> f32 {
        let slot = self.config.slot_size();
        match snapshot.mode {
            WindowMode::Sliding => {
                (snapshot.capacity.slots() + FRAME_EXTRA_SLOTS) as f32 * slot
            }
            WindowMode::Static => {
                let dots = snapshot.page_count as f32 * slot - self.config.spacing;
                (dots + slot).max(0.0)
            }
        }
    }

    /// Frame height in pixels (unrounded): one diameter plus half a diameter
    /// of padding above and below.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn frame_height(&self) -> f32 {
        self.config.indicator_size * 2.0
    }

    /// Frame size in whole pixels
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn size(&self, snapshot: &RenderSnapshot) -> Size {
        Size::new(
            libm::ceilf(self.frame_width(snapshot)) as u32,
            libm::ceilf(self.frame_height()) as u32,
        )
    }

    /// Horizontal center of `page`'s dot, relative to the frame's left edge.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn dot_center_x<F: StripFrame + ?Sized>(&self, frame: &F, page: usize) -> f32 {
        let snapshot = frame.snapshot();
        let from_middle = page as f32 - (snapshot.page_count as f32 - 1.0) / 2.0;
        let offset = match snapshot.mode {
            WindowMode::Sliding => frame.offset(),
            WindowMode::Static => 0.0,
        };
        self.frame_width(snapshot) / 2.0 + offset + from_middle * self.config.slot_size()
    }

    /// Render the strip with its top-left corner at `position`
    #[allow(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn render<D, F>(&self, display: &mut D, position: Point, frame: &F) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
        F: StripFrame + ?Sized,
    {
        let snapshot = frame.snapshot();
        if !snapshot.visible {
            return Ok(());
        }

        let area = Rectangle::new(position, self.size(snapshot));
        let mut clipped = display.clipped(&area);

        if let Some(background) = self.style.background {
            area.into_styled(PrimitiveStyle::with_fill(background))
                .draw(&mut clipped)?;
        }

        let center_y = position.y + libm::roundf(self.frame_height() / 2.0) as i32;
        for page in 0..snapshot.page_count {
            let diameter = libm::roundf(self.config.indicator_size * frame.dot_factor(page));
            if diameter < 1.0 {
                continue;
            }
            let center_x = position.x + libm::roundf(self.dot_center_x(frame, page)) as i32;
            let color = self.style.dot_color(snapshot.is_active(page));

            Circle::with_center(Point::new(center_x, center_y), diameter as u32)
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(&mut clipped)?;
        }

        Ok(())
    }

    /// Map a tap at `tap` to a page input, the way a system page control does:
    /// taps left of the active dot go back, taps at or right of it go forward.
    ///
    /// Returns `None` for taps outside the frame and for hidden or empty
    /// indicators.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn input_at<F: StripFrame + ?Sized>(
        &self,
        position: Point,
        frame: &F,
        tap: Point,
    ) -> Option<PageInput> {
        let snapshot = frame.snapshot();
        if !snapshot.visible || snapshot.page_count == 0 {
            return None;
        }
        let area = Rectangle::new(position, self.size(snapshot));
        if !area.contains(tap) {
            return None;
        }

        let active_x = position.x as f32 + self.dot_center_x(frame, snapshot.active_page);
        if (tap.x as f32) < active_x {
            Some(PageInput::Previous)
        } else {
            Some(PageInput::Next)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use paging::{PagingWindow, WindowCapacity};

    fn snapshot(pages: usize, active: usize, capacity: WindowCapacity) -> RenderSnapshot {
        let config = PagingConfig::default().with_capacity(capacity);
        PagingWindow::new(pages, active, &config).unwrap().snapshot()
    }

    #[test]
    fn test_sliding_frame_size() {
        let indicator = PageIndicator::new(PagingConfig::default());
        // (3 + 5) slots * 16 px, 2 * 8 px tall
        let snap = snapshot(10, 0, WindowCapacity::Three);
        assert_eq!(indicator.size(&snap), Size::new(128, 16));

        let snap = snapshot(10, 0, WindowCapacity::Five);
        assert_eq!(indicator.size(&snap), Size::new(160, 16));
    }

    #[test]
    fn test_static_frame_size() {
        let indicator = PageIndicator::new(PagingConfig::default());
        // 3 * 16 - 8 + 16
        let snap = snapshot(3, 0, WindowCapacity::Three);
        assert_eq!(indicator.size(&snap), Size::new(56, 16));
    }

    #[test]
    fn test_window_center_dot_sits_mid_frame() {
        let indicator = PageIndicator::new(PagingConfig::default());
        for active in 0..10 {
            let snap = snapshot(10, active, WindowCapacity::Three);
            let center = usize::try_from(snap.window_center()).unwrap();
            assert_eq!(indicator.dot_center_x(&snap, center), 64.0, "active {active}");
        }
    }

    #[test]
    fn test_static_dots_are_evenly_spaced() {
        let indicator = PageIndicator::new(PagingConfig::default());
        let snap = snapshot(3, 1, WindowCapacity::Three);
        assert_eq!(indicator.dot_center_x(&snap, 0), 12.0);
        assert_eq!(indicator.dot_center_x(&snap, 1), 28.0);
        assert_eq!(indicator.dot_center_x(&snap, 2), 44.0);
    }

    #[test]
    fn test_input_left_and_right_of_active_dot() {
        let indicator = PageIndicator::new(PagingConfig::default());
        let snap = snapshot(10, 5, WindowCapacity::Three);
        let origin = Point::new(10, 10);
        // Active dot (center of window) is at x = 10 + 64.
        assert_eq!(
            indicator.input_at(origin, &snap, Point::new(40, 18)),
            Some(PageInput::Previous)
        );
        assert_eq!(
            indicator.input_at(origin, &snap, Point::new(100, 18)),
            Some(PageInput::Next)
        );
        assert_eq!(indicator.input_at(origin, &snap, Point::new(5, 18)), None);
        assert_eq!(indicator.input_at(origin, &snap, Point::new(40, 40)), None);
    }

    #[test]
    fn test_input_ignored_when_hidden() {
        let indicator = PageIndicator::new(PagingConfig::default());
        let snap = snapshot(10, 5, WindowCapacity::Three).with_visibility(false);
        assert_eq!(indicator.input_at(Point::zero(), &snap, Point::new(100, 8)), None);
    }
}
