use serde::{Deserialize, Serialize};

use super::{CATEGORY_COUNT, TIER_COUNT};

/// Position of a clue cell on a round board.
///
/// Both indices are 0-based: `category` counts columns left to right and
/// `tier` counts rows top to bottom (lowest value first).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({category}, {tier})")]
pub struct Coord {
    pub category: usize,
    pub tier: usize,
}

impl Coord {
    /// The top cell of the leftmost category.
    pub const FIRST: Self = Self::new(0, 0);
    /// The bottom cell of the rightmost category.
    pub const LAST: Self = Self::new(CATEGORY_COUNT - 1, TIER_COUNT - 1);

    #[must_use]
    pub const fn new(category: usize, tier: usize) -> Self {
        Self { category, tier }
    }

    #[must_use]
    pub const fn is_in_range(self) -> bool {
        self.category < CATEGORY_COUNT && self.tier < TIER_COUNT
    }

    /// Returns the next cell in traversal order.
    ///
    /// Tiers are visited top to bottom within a category, then the walk moves
    /// to the top of the next category, wrapping from the last category back
    /// to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.tier + 1 < TIER_COUNT {
            Self::new(self.category, self.tier + 1)
        } else {
            Self::new((self.category + 1) % CATEGORY_COUNT, 0)
        }
    }

    /// Iterates over every cell of a board in traversal order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CATEGORY_COUNT).flat_map(|category| (0..TIER_COUNT).map(move |tier| Self::new(category, tier)))
    }
}
