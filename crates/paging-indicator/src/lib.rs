//! Page Indicator Rendering
//!
//! Draws the sliding dot strip computed by the `paging` core with
//! embedded-graphics primitives.
//!
//! # Components
//!
//! - `PageIndicator` - Dot strip renderer and tap mapping
//! - `IndicatorStyle` - Dot and background colors
//! - `IndicatorAnimator` - Interpolates offset and dot sizes between snapshots
//!
//! # Example
//!
//! ```no_run
//! use paging::prelude::*;
//! use paging_indicator::prelude::*;
//! # use embedded_graphics::{pixelcolor::Gray4, prelude::*};
//! # fn draw<D: DrawTarget<Color = Gray4>>(display: &mut D) -> Result<(), D::Error> {
//!
//! let config = PagingConfig::default();
//! let control = PagingControl::new(12, 0, config).unwrap();
//! let indicator = PageIndicator::new(config).style(IndicatorStyle::light());
//! indicator.render(display, Point::new(20, 200), &control.snapshot())?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod animator;
pub mod indicator;
pub mod style;

/// Re-exports for `use paging_indicator::prelude::*`.
pub mod prelude {
    pub use crate::animator::*;
    pub use crate::indicator::*;
    pub use crate::style::*;
}
