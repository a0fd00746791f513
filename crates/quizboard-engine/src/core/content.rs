use serde::{Deserialize, Serialize};

use super::{Coord, Round};

/// Identifier of an archived game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct GameId(u32);

impl GameId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// A single clue and the response that is judged correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub text: String,
    pub response: String,
}

/// One category column as supplied by a [`ContentProvider`].
///
/// `clues` is ordered top to bottom. A `None` entry is a clue that was never
/// revealed in the archived game; its cell starts out unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryContent {
    pub name: String,
    pub clues: Vec<Option<Clue>>,
}

/// Structured content for one board round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundContent {
    pub categories: Vec<CategoryContent>,
    pub daily_double: Option<Coord>,
}

/// Content for the Final round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalClue {
    pub category: String,
    pub text: String,
    pub response: String,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ContentError {
    #[display("game {game_id} was not found in the archive")]
    GameNotFound { game_id: GameId },
    #[display("content for game {game_id} is unavailable: {reason}")]
    Unavailable { game_id: GameId, reason: String },
}

/// Source of archived game content.
///
/// Implementations must report a missing game as
/// [`ContentError::GameNotFound`] and any retrieval or parsing failure as
/// [`ContentError::Unavailable`].
pub trait ContentProvider {
    fn round(&self, game_id: GameId, round: Round) -> Result<RoundContent, ContentError>;

    fn final_clue(&self, game_id: GameId) -> Result<FinalClue, ContentError>;
}

impl<P> ContentProvider for &P
where
    P: ContentProvider + ?Sized,
{
    fn round(&self, game_id: GameId, round: Round) -> Result<RoundContent, ContentError> {
        (**self).round(game_id, round)
    }

    fn final_clue(&self, game_id: GameId) -> Result<FinalClue, ContentError> {
        (**self).final_clue(game_id)
    }
}
