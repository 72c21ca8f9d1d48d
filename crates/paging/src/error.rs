//! Error type shared by the window, the config, and the host control.

use thiserror::Error;

/// Errors returned when a caller hands the paging core an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PagingError {
    /// A page index outside `0..page_count`.
    ///
    /// Page 0 is accepted for an empty pager so that an empty indicator can
    /// still be constructed.
    #[error("page {page} is out of range for {page_count} pages")]
    PageOutOfRange {
        /// The rejected page index.
        page: usize,
        /// Total number of pages.
        page_count: usize,
    },

    /// Dot diameter or spacing is negative or not finite, or both are zero.
    #[error("invalid indicator metrics (size {size}, spacing {spacing})")]
    InvalidMetrics {
        /// Requested dot diameter.
        size: f32,
        /// Requested spacing between dots.
        spacing: f32,
    },

    /// A window capacity other than 3 or 5.
    #[error("unsupported window capacity {0}, expected 3 or 5")]
    UnsupportedCapacity(u8),
}
