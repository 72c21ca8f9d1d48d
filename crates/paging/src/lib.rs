//! Sliding-window core for dot-style page indicators.
//!
//! Given a page count, a window capacity of three or five full-size dots, and
//! a stream of page changes, [`PagingWindow`] decides which page renders as
//! active, how large every dot is, and how far the dot strip is translated.
//! [`PagingControl`] owns the canonical page index on behalf of the host and
//! reports user-driven changes through a [`PageObserver`].
//!
//! This crate is `no_std` and allocation-free; drawing lives in
//! `paging-indicator`.
//!
//! # Example
//!
//! ```
//! use paging::prelude::*;
//!
//! let config = PagingConfig::default().with_capacity(WindowCapacity::Three);
//! let mut control = PagingControl::new(10, 0, config)?;
//! assert_eq!(control.window().displayed_position(), -1);
//!
//! control.set_current_page(1)?;
//! assert_eq!(control.snapshot().dot_scale(3), DotScale::TwoThirds);
//! # Ok::<(), PagingError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod animation;
pub mod capacity;
pub mod config;
pub mod control;
pub mod error;
pub mod scale;
pub mod window;

pub use animation::{Animation, Curve};
pub use capacity::WindowCapacity;
pub use config::PagingConfig;
pub use control::{Dot, NoopObserver, PageInput, PageObserver, PagingControl};
pub use error::PagingError;
pub use scale::DotScale;
pub use window::{Direction, PagingWindow, RenderSnapshot, StepKind, Transition, WindowMode};

pub mod prelude {
    //! Everything a host needs to drive an indicator.
    pub use crate::animation::{Animation, Curve};
    pub use crate::capacity::WindowCapacity;
    pub use crate::config::PagingConfig;
    pub use crate::control::{Dot, NoopObserver, PageInput, PageObserver, PagingControl};
    pub use crate::error::PagingError;
    pub use crate::scale::DotScale;
    pub use crate::window::{
        Direction, PagingWindow, RenderSnapshot, StepKind, Transition, WindowMode,
    };
}
