//! Per-dot scale: how large a dot renders given its distance from the
//! window center.

/// Rendered size class of one dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DotScale {
    /// Inside the window.
    Full,
    /// One slot past the window edge.
    TwoThirds,
    /// Two slots past the window edge.
    OneThird,
    /// Further out. Still occupies its layout slot.
    Hidden,
}

impl DotScale {
    /// Classify a dot `distance` slots from the window center, for a window
    /// with `half` full-size slots on each side.
    #[must_use]
    pub fn for_distance(distance: u64, half: u32) -> Self {
        let half = u64::from(half);
        if distance <= half {
            Self::Full
        } else if distance == half.saturating_add(1) {
            Self::TwoThirds
        } else if distance == half.saturating_add(2) {
            Self::OneThird
        } else {
            Self::Hidden
        }
    }

    /// Fraction of the full diameter.
    #[must_use]
    pub fn factor(self) -> f32 {
        match self {
            Self::Full => 1.0,
            Self::TwoThirds => 2.0 / 3.0,
            Self::OneThird => 1.0 / 3.0,
            Self::Hidden => 0.0,
        }
    }

    /// Rendered diameter for a full-size diameter of `full`.
    #[allow(clippy::arithmetic_side_effects)]
    #[must_use]
    pub fn diameter(self, full: f32) -> f32 {
        match self {
            Self::Full => full,
            Self::TwoThirds => full * 2.0 / 3.0,
            Self::OneThird => full / 3.0,
            Self::Hidden => 0.0,
        }
    }

    /// Whether the dot draws anything.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }
}
