//! Indicator colors

use embedded_graphics::pixelcolor::{Gray4, GrayColor};

/// Color presets for the dot strip
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IndicatorStyle {
    /// Fill of the active page's dot
    pub current: Gray4,
    /// Fill of every other dot
    pub inactive: Gray4,
    /// Fill behind the strip (None leaves the display untouched)
    pub background: Option<Gray4>,
}

impl IndicatorStyle {
    /// Dark dots on a light page, no background fill
    pub fn light() -> Self {
        Self {
            current: Gray4::BLACK,
            inactive: Gray4::new(0xA),
            background: None,
        }
    }

    /// Light dots on a filled dark strip
    pub fn dark() -> Self {
        Self {
            current: Gray4::WHITE,
            inactive: Gray4::new(0x6),
            background: Some(Gray4::BLACK),
        }
    }

    /// Set dot colors
    pub fn colors(mut self, current: Gray4, inactive: Gray4) -> Self {
        self.current = current;
        self.inactive = inactive;
        self
    }

    /// Set background fill (None for transparent)
    pub fn background(mut self, background: Option<Gray4>) -> Self {
        self.background = background;
        self
    }

    /// Fill for a dot
    pub fn dot_color(&self, active: bool) -> Gray4 {
        if active {
            self.current
        } else {
            self.inactive
        }
    }
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self::light()
    }
}
