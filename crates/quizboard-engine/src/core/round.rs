use serde::{Deserialize, Serialize};

use super::TIER_COUNT;

/// A round played on a full category board.
///
/// The Final round has a single clue and no board, so it is not a [`Round`];
/// see [`GamePhase`](crate::GamePhase) for the full progression of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Round {
    #[display("Jeopardy!")]
    Jeopardy,
    #[display("Double Jeopardy!")]
    DoubleJeopardy,
}

impl Round {
    pub const ALL: [Self; 2] = [Self::Jeopardy, Self::DoubleJeopardy];

    /// Returns the point value of each tier, top to bottom.
    #[must_use]
    pub const fn tier_values(self) -> [i64; TIER_COUNT] {
        match self {
            Self::Jeopardy => [200, 400, 600, 800, 1000],
            Self::DoubleJeopardy => [400, 800, 1200, 1600, 2000],
        }
    }
}
