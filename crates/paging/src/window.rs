//! Sliding-window state machine.
//!
//! `PagingWindow` decides which page renders as active, where that page sits
//! relative to the window center, and how far the whole dot strip is
//! translated. It has no I/O and no notion of time: every step updates the
//! state synchronously and the presentation layer animates between
//! [`RenderSnapshot`]s.
//!
//! # Stepping rules
//!
//! Moving forward, the active dot walks toward the trailing edge of the
//! window. Once it sits on the edge slot the next step slides the strip one
//! slot instead, keeping the active dot pinned to that edge. Moving backward
//! is symmetric. Because a slide does not move the active dot, stepping back
//! right after a slide moves the dot inside the slid window rather than
//! sliding the strip back.
//!
//! # Invariant
//!
//! With `center = active_page - displayed_position`:
//!
//! ```text
//! adjusted_offset == base_offset - (center - half) * slot_size
//! -half <= displayed_position <= half
//! ```

use crate::capacity::WindowCapacity;
use crate::config::PagingConfig;
use crate::error::PagingError;
use crate::scale::DotScale;

/// Whether the strip needs to slide at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowMode {
    /// More pages than full-size slots: dots compress and the strip slides.
    Sliding,
    /// Every page fits: all dots full size, no position/offset bookkeeping.
    Static,
}

/// Direction of a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward higher page indices.
    Forward,
    /// Toward lower page indices.
    Backward,
}

/// What a single step did to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepKind {
    /// The active dot moved one slot inside the window.
    Moved,
    /// The active dot stayed on the edge slot and the strip slid one slot.
    Slid,
}

/// Summary of one page-change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Direction of travel.
    pub direction: Direction,
    /// Single steps applied.
    pub steps: usize,
    /// How many of those steps slid the strip.
    pub slides: usize,
}

/// Read-only view of the window for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderSnapshot {
    /// Total number of pages.
    pub page_count: usize,
    /// Window capacity.
    pub capacity: WindowCapacity,
    /// Sliding or static.
    pub mode: WindowMode,
    /// Page rendered in the active color.
    pub active_page: usize,
    /// Active page's slot relative to the window center.
    pub displayed_position: i32,
    /// Horizontal translation of the strip, in pixels.
    pub adjusted_offset: f32,
    /// Whether the indicator is shown at all.
    pub visible: bool,
}

impl RenderSnapshot {
    /// Page sitting in the window's center slot.
    ///
    /// Signed because the first page can start left of center.
    #[must_use]
    pub fn window_center(&self) -> i64 {
        to_i64(self.active_page).saturating_sub(i64::from(self.displayed_position))
    }

    /// Size class for `page`.
    #[must_use]
    pub fn dot_scale(&self, page: usize) -> DotScale {
        match self.mode {
            WindowMode::Static => DotScale::Full,
            WindowMode::Sliding => {
                let distance = self.window_center().abs_diff(to_i64(page));
                DotScale::for_distance(distance, self.capacity.half().unsigned_abs())
            }
        }
    }

    /// Whether `page` renders in the active color.
    #[must_use]
    pub fn is_active(&self, page: usize) -> bool {
        page == self.active_page
    }

    /// Opacity for the whole indicator: `0.0` when hidden, `1.0` otherwise.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }

    /// Copy of this snapshot with the visibility flag replaced.
    #[must_use]
    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Sliding-window controller for one indicator.
///
/// The page count is fixed for the lifetime of a window; build a new one
/// when it changes.
#[derive(Debug, Clone, PartialEq)]
pub struct PagingWindow {
    page_count: usize,
    capacity: WindowCapacity,
    slot_size: f32,
    active_page: usize,
    displayed_position: i32,
    adjusted_offset: f32,
}

impl PagingWindow {
    /// Build a window with `initial_page` active.
    ///
    /// In sliding mode the initial position is biased toward the nearer edge
    /// (see [`WindowCapacity::initial_position`]) and the offset centers the
    /// strip on that position. In static mode both are zero.
    ///
    /// # Errors
    ///
    /// - [`PagingError::InvalidMetrics`] if `config` fails validation.
    /// - [`PagingError::PageOutOfRange`] if `initial_page >= page_count`
    ///   (page 0 is accepted when `page_count` is 0).
    pub fn new(
        page_count: usize,
        initial_page: usize,
        config: &PagingConfig,
    ) -> Result<Self, PagingError> {
        config.validate()?;
        check_page(initial_page, page_count)?;

        let capacity = config.capacity;
        let mut window = Self {
            page_count,
            capacity,
            slot_size: config.slot_size(),
            active_page: initial_page,
            displayed_position: 0,
            adjusted_offset: 0.0,
        };

        if window.mode() == WindowMode::Sliding {
            window.displayed_position = capacity.initial_position(initial_page, page_count);
            window.adjusted_offset = window.offset_for_center(window.window_center());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            page_count,
            initial_page,
            slots = capacity.slots(),
            position = window.displayed_position,
            offset = window.adjusted_offset,
            "paging window created"
        );

        Ok(window)
    }

    /// Sliding or static, decided once from page count and capacity.
    #[must_use]
    pub fn mode(&self) -> WindowMode {
        if self.page_count > self.capacity.slots() {
            WindowMode::Sliding
        } else {
            WindowMode::Static
        }
    }

    /// Total number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Window capacity.
    #[must_use]
    pub fn capacity(&self) -> WindowCapacity {
        self.capacity
    }

    /// Width of one slot in pixels.
    #[must_use]
    pub fn slot_size(&self) -> f32 {
        self.slot_size
    }

    /// Page rendered as active.
    #[must_use]
    pub fn active_page(&self) -> usize {
        self.active_page
    }

    /// Active page's slot relative to the window center.
    #[must_use]
    pub fn displayed_position(&self) -> i32 {
        self.displayed_position
    }

    /// Strip translation in pixels.
    #[must_use]
    pub fn adjusted_offset(&self) -> f32 {
        self.adjusted_offset
    }

    /// Page in the center slot of the window.
    #[must_use]
    pub fn window_center(&self) -> i64 {
        to_i64(self.active_page).saturating_sub(i64::from(self.displayed_position))
    }

    /// Offset that centers a strip of `page_count` dots in the window.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    #[must_use]
    pub fn base_offset(&self) -> f32 {
        let surplus = self.page_count as f32 - self.capacity.slots() as f32;
        surplus * self.slot_size / 2.0
    }

    /// Offset that places `center` in the window's center slot.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn offset_for_center(&self, center: i64) -> f32 {
        let shift = center.saturating_sub(i64::from(self.capacity.half()));
        self.base_offset() - shift as f32 * self.slot_size
    }

    /// Apply one step in `direction`.
    ///
    /// Returns `None` when the active page is already at the boundary in
    /// that direction.
    pub fn step(&mut self, direction: Direction) -> Option<StepKind> {
        match direction {
            Direction::Forward => self.step_forward(),
            Direction::Backward => self.step_backward(),
        }
    }

    /// Move the active page forward by one.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn step_forward(&mut self) -> Option<StepKind> {
        let next = self.active_page.checked_add(1).filter(|p| *p < self.page_count)?;
        self.active_page = next;

        if self.mode() == WindowMode::Static {
            return Some(StepKind::Moved);
        }

        // displayed_position is bounded by half (<= 2), so +1/-1 cannot
        // overflow; adjusted_offset moves by exactly one slot.
        if self.displayed_position + 1 > self.capacity.half() {
            self.adjusted_offset -= self.slot_size;
            #[cfg(feature = "tracing")]
            tracing::trace!(
                active = self.active_page,
                offset = self.adjusted_offset,
                "window slid forward"
            );
            Some(StepKind::Slid)
        } else {
            self.displayed_position += 1;
            Some(StepKind::Moved)
        }
    }

    /// Move the active page backward by one.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn step_backward(&mut self) -> Option<StepKind> {
        let prev = self.active_page.checked_sub(1)?;
        self.active_page = prev;

        if self.mode() == WindowMode::Static {
            return Some(StepKind::Moved);
        }

        if self.displayed_position - 1 < -self.capacity.half() {
            self.adjusted_offset += self.slot_size;
            #[cfg(feature = "tracing")]
            tracing::trace!(
                active = self.active_page,
                offset = self.adjusted_offset,
                "window slid backward"
            );
            Some(StepKind::Slid)
        } else {
            self.displayed_position -= 1;
            Some(StepKind::Moved)
        }
    }

    /// React to the external page index changing from `previous` to `next`.
    ///
    /// Only the sign and size of `next - previous` are used: the window
    /// always steps from its own active page. Callers that keep the page
    /// index elsewhere (like [`PagingControl`](crate::PagingControl)) pass
    /// their index, which matches the active page; use
    /// [`move_to`](Self::move_to) to target a page directly.
    ///
    /// Equal pages are not a transition and return `Ok(None)`. A jump of more
    /// than one page applies the single-step rule once per page crossed, so
    /// the window ends up exactly where stepping one page at a time would
    /// have left it. Steps stop at the first or last page.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::PageOutOfRange`] if either page is outside
    /// `0..page_count` (page 0 is accepted when `page_count` is 0). The
    /// window is left untouched.
    pub fn transition(
        &mut self,
        previous: usize,
        next: usize,
    ) -> Result<Option<Transition>, PagingError> {
        check_page(previous, self.page_count)?;
        check_page(next, self.page_count)?;
        if previous == next {
            return Ok(None);
        }

        let direction = if next > previous {
            Direction::Forward
        } else {
            Direction::Backward
        };

        let mut steps = 0_usize;
        let mut slides = 0_usize;
        for _ in 0..previous.abs_diff(next) {
            match self.step(direction) {
                Some(StepKind::Moved) => steps = steps.saturating_add(1),
                Some(StepKind::Slid) => {
                    steps = steps.saturating_add(1);
                    slides = slides.saturating_add(1);
                }
                None => break,
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            previous,
            next,
            steps,
            slides,
            active = self.active_page,
            position = self.displayed_position,
            "paging transition applied"
        );

        Ok(Some(Transition {
            direction,
            steps,
            slides,
        }))
    }

    /// Move the active page to `target`, starting from the current active page.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::PageOutOfRange`] if `target` is outside
    /// `0..page_count`.
    pub fn move_to(&mut self, target: usize) -> Result<Option<Transition>, PagingError> {
        self.transition(self.active_page, target)
    }

    /// Size class for `page` under the current state.
    #[must_use]
    pub fn dot_scale(&self, page: usize) -> DotScale {
        self.snapshot().dot_scale(page)
    }

    /// Read-only copy of the state for a render pass.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            page_count: self.page_count,
            capacity: self.capacity,
            mode: self.mode(),
            active_page: self.active_page,
            displayed_position: self.displayed_position,
            adjusted_offset: self.adjusted_offset,
            visible: true,
        }
    }
}

/// `page` must index a page, except that page 0 stands for the empty strip.
fn check_page(page: usize, page_count: usize) -> Result<(), PagingError> {
    if page < page_count || (page_count == 0 && page == 0) {
        Ok(())
    } else {
        Err(PagingError::PageOutOfRange { page, page_count })
    }
}

fn to_i64(page: usize) -> i64 {
    i64::try_from(page).unwrap_or(i64::MAX)
}
