//! Round data structures and the content boundary.

pub use self::{board::*, content::*, coord::*, normalize::*, round::*};

pub(crate) mod board;
pub(crate) mod content;
pub(crate) mod coord;
pub(crate) mod normalize;
pub(crate) mod round;

/// Number of categories on a round board.
pub const CATEGORY_COUNT: usize = 6;
/// Number of point tiers in each category.
pub const TIER_COUNT: usize = 5;
/// Number of clue cells on a full round board.
pub const CELL_COUNT: usize = CATEGORY_COUNT * TIER_COUNT;
