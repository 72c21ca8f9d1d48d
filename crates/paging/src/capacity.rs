//! Window capacity: how many dots render at full size.

use crate::error::PagingError;

/// Number of full-size dots in the visible window.
///
/// Always odd, so the window has a well-defined center slot with
/// [`half`](WindowCapacity::half) full-size slots on each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum WindowCapacity {
    /// Three full-size dots (one on each side of center).
    #[default]
    Three,
    /// Five full-size dots (two on each side of center).
    Five,
}

impl WindowCapacity {
    /// Number of full-size slots.
    #[must_use]
    pub const fn slots(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Five => 5,
        }
    }

    /// Full-size slots on each side of the center slot.
    #[must_use]
    pub const fn half(self) -> i32 {
        match self {
            Self::Three => 1,
            Self::Five => 2,
        }
    }

    /// Where `page` starts relative to the window center.
    ///
    /// Pages near either edge cannot have a full window of neighbours on both
    /// sides, so they start biased toward that edge. Arms are matched in
    /// order: for tiny page counts the leading edge wins.
    #[must_use]
    pub fn initial_position(self, page: usize, page_count: usize) -> i32 {
        let last = page_count.checked_sub(1);
        let second_last = page_count.checked_sub(2);

        match self {
            Self::Three => {
                if page == 0 {
                    -1
                } else if Some(page) == last {
                    1
                } else {
                    0
                }
            }
            Self::Five => {
                if page == 0 {
                    -2
                } else if page == 1 {
                    -1
                } else if Some(page) == second_last {
                    1
                } else if Some(page) == last {
                    2
                } else {
                    0
                }
            }
        }
    }
}

impl TryFrom<u8> for WindowCapacity {
    type Error = PagingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            5 => Ok(Self::Five),
            other => Err(PagingError::UnsupportedCapacity(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WindowCapacity;
    use crate::error::PagingError;

    #[test]
    fn test_half_is_slots_over_two() {
        assert_eq!(WindowCapacity::Three.half(), 1);
        assert_eq!(WindowCapacity::Five.half(), 2);
        assert_eq!(WindowCapacity::Three.slots(), 3);
        assert_eq!(WindowCapacity::Five.slots(), 5);
    }

    #[test]
    fn test_three_initial_positions() {
        let cap = WindowCapacity::Three;
        assert_eq!(cap.initial_position(0, 10), -1);
        assert_eq!(cap.initial_position(1, 10), 0);
        assert_eq!(cap.initial_position(5, 10), 0);
        assert_eq!(cap.initial_position(8, 10), 0);
        assert_eq!(cap.initial_position(9, 10), 1);
    }

    #[test]
    fn test_five_initial_positions() {
        let cap = WindowCapacity::Five;
        assert_eq!(cap.initial_position(0, 10), -2);
        assert_eq!(cap.initial_position(1, 10), -1);
        assert_eq!(cap.initial_position(2, 10), 0);
        assert_eq!(cap.initial_position(7, 10), 0);
        assert_eq!(cap.initial_position(8, 10), 1);
        assert_eq!(cap.initial_position(9, 10), 2);
    }

    #[test]
    fn test_leading_edge_wins_for_tiny_counts() {
        // Page 1 of 3 is both "page 1" and "second last"; the leading arm wins.
        assert_eq!(WindowCapacity::Five.initial_position(1, 3), -1);
        // Page 0 of 1 is both first and last.
        assert_eq!(WindowCapacity::Three.initial_position(0, 1), -1);
    }

    #[test]
    fn test_empty_page_count_does_not_underflow() {
        assert_eq!(WindowCapacity::Three.initial_position(0, 0), -1);
        assert_eq!(WindowCapacity::Five.initial_position(3, 0), 0);
    }

    #[test]
    fn test_try_from_accepts_three_and_five() {
        assert_eq!(WindowCapacity::try_from(3), Ok(WindowCapacity::Three));
        assert_eq!(WindowCapacity::try_from(5), Ok(WindowCapacity::Five));
        assert_eq!(
            WindowCapacity::try_from(4),
            Err(PagingError::UnsupportedCapacity(4))
        );
    }

    #[test]
    fn test_default_is_three() {
        assert_eq!(WindowCapacity::default(), WindowCapacity::Three);
    }
}
