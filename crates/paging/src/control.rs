//! Host-facing control: the explicit owner of the canonical page index.
//!
//! The host tells the control about page changes it made itself
//! ([`PagingControl::set_current_page`]); user input goes through
//! [`PagingControl::select_page`] or [`PagingControl::handle_input`], which
//! also report the new page to the [`PageObserver`]. Renderers read a
//! [`RenderSnapshot`] and never touch the state directly.

use crate::config::PagingConfig;
use crate::error::PagingError;
use crate::scale::DotScale;
use crate::window::{PagingWindow, RenderSnapshot, Transition};

/// Receives page changes that originate from user input.
pub trait PageObserver {
    /// The user selected `page`.
    fn on_page_selected(&mut self, page: usize);
}

impl<F: FnMut(usize)> PageObserver for F {
    fn on_page_selected(&mut self, page: usize) {
        self(page);
    }
}

/// Observer that ignores every selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl PageObserver for NoopObserver {
    fn on_page_selected(&mut self, _page: usize) {}
}

/// User input aimed at the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageInput {
    /// Advance one page (tap trailing side, next button).
    Next,
    /// Go back one page (tap leading side, previous button).
    Previous,
    /// Jump to a specific page.
    Select(usize),
}

/// One dot as the renderer should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dot {
    /// Page index.
    pub page: usize,
    /// Size class.
    pub scale: DotScale,
    /// Drawn in the active color.
    pub active: bool,
}

/// Page indicator state plus the observer notified of user selections.
pub struct PagingControl<O: PageObserver = NoopObserver> {
    config: PagingConfig,
    window: PagingWindow,
    current_page: usize,
    observer: O,
}

impl PagingControl<NoopObserver> {
    /// Build a control with no observer.
    ///
    /// # Errors
    ///
    /// See [`PagingWindow::new`].
    pub fn new(
        page_count: usize,
        current_page: usize,
        config: PagingConfig,
    ) -> Result<Self, PagingError> {
        Self::with_observer(page_count, current_page, config, NoopObserver)
    }
}

impl<O: PageObserver> PagingControl<O> {
    /// Build a control that reports user selections to `observer`.
    ///
    /// # Errors
    ///
    /// See [`PagingWindow::new`].
    pub fn with_observer(
        page_count: usize,
        current_page: usize,
        config: PagingConfig,
        observer: O,
    ) -> Result<Self, PagingError> {
        let window = PagingWindow::new(page_count, current_page, &config)?;
        Ok(Self {
            config,
            window,
            current_page,
            observer,
        })
    }

    /// Canonical current page.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.window.page_count()
    }

    /// Configuration the control was built with.
    #[must_use]
    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    /// Underlying window state machine.
    #[must_use]
    pub fn window(&self) -> &PagingWindow {
        &self.window
    }

    /// The observer, e.g. to inspect a recording observer in tests.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Host-driven page change. Does not call the observer.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::PageOutOfRange`] if `page` is not a valid
    /// page. The state is unchanged.
    pub fn set_current_page(&mut self, page: usize) -> Result<Option<Transition>, PagingError> {
        let transition = self.window.transition(self.current_page, page)?;
        self.current_page = page;
        Ok(transition)
    }

    /// User-driven page change. Reports `page` to the observer when it
    /// differs from the current page.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::PageOutOfRange`] if `page` is not a valid
    /// page. The observer is not called.
    pub fn select_page(&mut self, page: usize) -> Result<Option<Transition>, PagingError> {
        let transition = self.set_current_page(page)?;
        if transition.is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!(page, "page selected by user");
            self.observer.on_page_selected(page);
        }
        Ok(transition)
    }

    /// Apply one user input.
    ///
    /// `Next` on the last page and `Previous` on the first page do nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::PageOutOfRange`] for `Select` of an invalid
    /// page.
    pub fn handle_input(&mut self, input: PageInput) -> Result<Option<Transition>, PagingError> {
        let target = match input {
            PageInput::Next => self
                .current_page
                .checked_add(1)
                .filter(|p| *p < self.page_count()),
            PageInput::Previous => self.current_page.checked_sub(1),
            PageInput::Select(page) => Some(page),
        };
        match target {
            Some(page) => self.select_page(page),
            None => Ok(None),
        }
    }

    /// Whether the indicator is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !(self.config.hides_for_single_page && self.page_count() == 1)
    }

    /// `0.0` when hidden, `1.0` when shown.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.snapshot().opacity()
    }

    /// Read-only state for one render pass.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        self.window.snapshot().with_visibility(self.is_visible())
    }

    /// Every dot, in page order.
    #[must_use]
    pub fn dots(&self) -> impl Iterator<Item = Dot> {
        let snapshot = self.snapshot();
        (0..snapshot.page_count).map(move |page| Dot {
            page,
            scale: snapshot.dot_scale(page),
            active: snapshot.is_active(page),
        })
    }
}

impl<O: PageObserver> core::fmt::Debug for PagingControl<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagingControl")
            .field("config", &self.config)
            .field("window", &self.window)
            .field("current_page", &self.current_page)
            .finish_non_exhaustive()
    }
}
