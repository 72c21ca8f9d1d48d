//! Transition interpolation between two window snapshots.
//!
//! The core applies page changes instantly. `IndicatorAnimator` keeps what
//! was on screen when the last change arrived and the new [`RenderSnapshot`],
//! and blends the strip offset and every dot's diameter using the configured
//! [`Animation`]. The host loop calls
//! [`advance`](IndicatorAnimator::advance) with its frame delta and renders
//! the animator like any other [`StripFrame`].

use core::ops::Range;

use paging::{Animation, RenderSnapshot, WindowMode};

use crate::indicator::StripFrame;

/// Visible dots remembered across a retarget. A window shows at most
/// `5 + 2 * 2` dots; rapid retargets mid-flight can add another window's
/// worth each time, after which the smallest dots are dropped.
const TRACKED_DOTS: usize = 32;

/// Sparse page -> diameter factor map. Absent pages have factor 0.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DotFactors {
    pages: [usize; TRACKED_DOTS],
    factors: [f32; TRACKED_DOTS],
    len: usize,
}

impl DotFactors {
    fn empty() -> Self {
        Self {
            pages: [0; TRACKED_DOTS],
            factors: [0.0; TRACKED_DOTS],
            len: 0,
        }
    }

    fn of(snapshot: &RenderSnapshot) -> Self {
        let mut dots = Self::empty();
        for page in visible_pages(snapshot) {
            dots.insert(page, snapshot.dot_scale(page).factor());
        }
        dots
    }

    fn entries(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.pages
            .iter()
            .copied()
            .zip(self.factors.iter().copied())
            .take(self.len)
    }

    fn get(&self, page: usize) -> f32 {
        self.entries()
            .find(|(p, _)| *p == page)
            .map_or(0.0, |(_, factor)| factor)
    }

    fn insert(&mut self, page: usize, factor: f32) {
        if factor <= 0.0 || self.entries().any(|(p, _)| p == page) {
            return;
        }
        let slot = if self.len < TRACKED_DOTS {
            let slot = self.len;
            self.len = self.len.saturating_add(1);
            slot
        } else {
            let smallest = self
                .entries()
                .enumerate()
                .min_by(|(_, a), (_, b)| a.1.total_cmp(&b.1));
            match smallest {
                Some((slot, (_, min))) if min < factor => slot,
                _ => return,
            }
        };
        if let (Some(p), Some(f)) = (self.pages.get_mut(slot), self.factors.get_mut(slot)) {
            *p = page;
            *f = factor;
        }
    }
}

/// Pages with a non-zero diameter in `snapshot`.
fn visible_pages(snapshot: &RenderSnapshot) -> Range<usize> {
    let n = snapshot.page_count;
    if snapshot.mode == WindowMode::Static {
        return 0..n;
    }
    let reach = i64::from(snapshot.capacity.half()).saturating_add(2);
    let center = snapshot.window_center();
    let clamp = |page: i64| usize::try_from(page.max(0)).unwrap_or(usize::MAX).min(n);
    clamp(center.saturating_sub(reach))..clamp(center.saturating_add(reach).saturating_add(1))
}

/// Blends strip offset and dot sizes between consecutive snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorAnimator {
    animation: Animation,
    from_factors: DotFactors,
    to: RenderSnapshot,
    from_offset: f32,
    elapsed_ms: u32,
}

impl IndicatorAnimator {
    /// Start at rest on `snapshot`.
    pub fn new(animation: Animation, snapshot: RenderSnapshot) -> Self {
        Self {
            animation,
            from_factors: DotFactors::of(&snapshot),
            to: snapshot,
            from_offset: snapshot.adjusted_offset,
            elapsed_ms: animation.duration_ms,
        }
    }

    /// Animate toward `snapshot`.
    ///
    /// The offset and every dot size continue from whatever is on screen
    /// right now, so a retarget mid-flight does not jump. A snapshot equal
    /// to the current target is ignored.
    pub fn retarget(&mut self, snapshot: RenderSnapshot) {
        if snapshot == self.to {
            return;
        }
        // Anything drawn now is either still fading out from the last start
        // or inside the last target's window.
        let mut shown = DotFactors::empty();
        let fading = self.from_factors.entries().map(|(page, _)| page);
        for page in fading.chain(visible_pages(&self.to)) {
            shown.insert(page, self.dot_factor(page));
        }

        self.from_offset = self.offset();
        self.from_factors = shown;
        self.to = snapshot;
        self.elapsed_ms = 0;
    }

    /// Move time forward by `dt_ms`.
    pub fn advance(&mut self, dt_ms: u32) {
        self.elapsed_ms = self
            .elapsed_ms
            .saturating_add(dt_ms)
            .min(self.animation.duration_ms);
    }

    /// Jump to the end of the current transition.
    pub fn finish(&mut self) {
        self.elapsed_ms = self.animation.duration_ms;
    }

    /// Whether a transition is still in flight.
    pub fn is_animating(&self) -> bool {
        !self.animation.is_finished(self.elapsed_ms)
    }

    /// Eased progress of the current transition in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.animation.progress(self.elapsed_ms)
    }

    /// Snapshot being animated toward.
    pub fn target(&self) -> &RenderSnapshot {
        &self.to
    }

    /// Animation timing in use.
    pub fn animation(&self) -> Animation {
        self.animation
    }
}

impl StripFrame for IndicatorAnimator {
    fn snapshot(&self) -> &RenderSnapshot {
        &self.to
    }

    fn offset(&self) -> f32 {
        lerp(self.from_offset, self.to.adjusted_offset, self.progress())
    }

    fn dot_factor(&self, page: usize) -> f32 {
        lerp(
            self.from_factors.get(page),
            self.to.dot_scale(page).factor(),
            self.progress(),
        )
    }
}

#[allow(clippy::arithmetic_side_effects)]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use paging::{PagingConfig, PagingWindow, WindowCapacity};

    fn window() -> PagingWindow {
        let config = PagingConfig::default().with_capacity(WindowCapacity::Three);
        PagingWindow::new(10, 2, &config).unwrap()
    }

    #[test]
    fn test_starts_at_rest() {
        let w = window();
        let anim = IndicatorAnimator::new(Animation::linear(100), w.snapshot());
        assert!(!anim.is_animating());
        assert_eq!(anim.offset(), w.adjusted_offset());
    }

    #[test]
    fn test_slide_interpolates_offset() {
        let mut w = window();
        let mut anim = IndicatorAnimator::new(Animation::linear(100), w.snapshot());
        let start = w.adjusted_offset();

        // Page 2 sits at position 0 with a 3-dot window; two steps reach the
        // edge and slide once.
        w.step_forward();
        w.step_forward();
        anim.retarget(w.snapshot());
        assert!(anim.is_animating());
        assert_eq!(anim.offset(), start);

        anim.advance(50);
        assert!((anim.offset() - (start - 8.0)).abs() < 1e-4);

        anim.advance(1_000);
        assert!(!anim.is_animating());
        assert_eq!(anim.offset(), start - 16.0);
    }

    #[test]
    fn test_dot_factor_blends_scales() {
        let mut w = window();
        let mut anim = IndicatorAnimator::new(Animation::linear(100), w.snapshot());
        // Center 2: page 5 is one-third. After a slide center 3: page 5 is two-thirds.
        w.step_forward();
        w.step_forward();
        anim.retarget(w.snapshot());
        anim.advance(50);
        let expected = (1.0 / 3.0 + 2.0 / 3.0) / 2.0;
        assert!((anim.dot_factor(5) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_retarget_mid_flight_continues_from_screen() {
        let mut w = window();
        let mut anim = IndicatorAnimator::new(Animation::linear(100), w.snapshot());
        w.step_forward();
        w.step_forward();
        anim.retarget(w.snapshot());
        anim.advance(50);
        let on_screen = anim.offset();

        w.step_forward();
        anim.retarget(w.snapshot());
        assert_eq!(anim.offset(), on_screen);
    }

    fn factors(anim: &IndicatorAnimator, pages: usize) -> Vec<f32> {
        (0..pages).map(|page| anim.dot_factor(page)).collect()
    }

    #[test]
    fn test_retarget_mid_flight_keeps_dot_sizes() {
        let mut w = window();
        let mut anim = IndicatorAnimator::new(Animation::linear(100), w.snapshot());
        w.step_forward();
        w.step_forward();
        anim.retarget(w.snapshot());
        anim.advance(50);
        let on_screen = factors(&anim, 10);

        w.step_forward();
        anim.retarget(w.snapshot());
        let after = factors(&anim, 10);
        for (page, (before, now)) in on_screen.iter().zip(&after).enumerate() {
            assert!((before - now).abs() < 1e-6, "page {page}: {before} -> {now}");
        }

        anim.finish();
        for page in 0..10 {
            let expected = w.dot_scale(page).factor();
            assert!((anim.dot_factor(page) - expected).abs() < 1e-6, "page {page}");
        }
    }

    #[test]
    fn test_rapid_retargets_settle_on_target() {
        let config = PagingConfig::default().with_capacity(WindowCapacity::Five);
        let mut w = PagingWindow::new(60, 0, &config).unwrap();
        let mut anim = IndicatorAnimator::new(Animation::linear(1_000), w.snapshot());
        // Far more pages in flight than the tracked set holds.
        for _ in 0..59 {
            w.step_forward();
            anim.retarget(w.snapshot());
            anim.advance(1);
        }
        let mid = factors(&anim, 60);
        assert!(mid.iter().all(|f| (-1e-6..=1.0 + 1e-6).contains(f)));

        anim.finish();
        for page in 0..60 {
            let expected = w.dot_scale(page).factor();
            assert!((anim.dot_factor(page) - expected).abs() < 1e-6, "page {page}");
        }
    }

    #[test]
    fn test_retarget_after_finish_starts_from_target_sizes() {
        let mut w = window();
        let mut anim = IndicatorAnimator::new(Animation::linear(100), w.snapshot());
        w.step_forward();
        w.step_forward();
        anim.retarget(w.snapshot());
        anim.finish();
        let settled = factors(&anim, 10);

        w.step_backward();
        anim.retarget(w.snapshot());
        assert_eq!(factors(&anim, 10), settled);
    }

    #[test]
    fn test_same_target_is_ignored() {
        let w = window();
        let mut anim = IndicatorAnimator::new(Animation::linear(100), w.snapshot());
        anim.retarget(w.snapshot());
        assert!(!anim.is_animating());
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut w = window();
        let mut anim = IndicatorAnimator::new(Animation::none(), w.snapshot());
        w.step_forward();
        w.step_forward();
        anim.retarget(w.snapshot());
        assert!(!anim.is_animating());
        assert_eq!(anim.offset(), w.adjusted_offset());
    }

    #[test]
    fn test_finish_jumps_to_target() {
        let mut w = window();
        let mut anim = IndicatorAnimator::new(Animation::ease_in_out(300), w.snapshot());
        w.step_forward();
        w.step_forward();
        anim.retarget(w.snapshot());
        anim.finish();
        assert_eq!(anim.offset(), w.adjusted_offset());
        assert_eq!(anim.target().active_page, 4);
    }
}
