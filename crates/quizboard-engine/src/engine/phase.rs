use serde::{Deserialize, Serialize};

use crate::core::Round;

/// Stage of a game, in play order.
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
pub enum GamePhase {
    #[display("Jeopardy!")]
    JeopardyRound,
    #[display("Double Jeopardy!")]
    DoubleJeopardyRound,
    #[display("Final Jeopardy!")]
    FinalRound,
    #[display("complete")]
    Complete,
}

impl GamePhase {
    /// Returns the board round played in this phase.
    #[must_use]
    pub const fn round(self) -> Option<Round> {
        match self {
            Self::JeopardyRound => Some(Round::Jeopardy),
            Self::DoubleJeopardyRound => Some(Round::DoubleJeopardy),
            Self::FinalRound | Self::Complete => None,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::JeopardyRound => Self::DoubleJeopardyRound,
            Self::DoubleJeopardyRound => Self::FinalRound,
            Self::FinalRound | Self::Complete => Self::Complete,
        }
    }
}

impl From<Round> for GamePhase {
    fn from(round: Round) -> Self {
        match round {
            Round::Jeopardy => Self::JeopardyRound,
            Round::DoubleJeopardy => Self::DoubleJeopardyRound,
        }
    }
}

/// How clues are picked during the board rounds. Fixed for a whole game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SelectionMode {
    /// The player picks any open clue, or presses enter to take the next one.
    #[default]
    #[display("manual")]
    Manual,
    /// Every clue is taken in board order.
    #[display("automatic")]
    Automatic,
}

/// How a call to [`GameController::run`](crate::GameController::run) ended.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum GameOutcome {
    /// The Final round was played and the ledger is complete.
    #[display("completed")]
    Completed,
    /// The player quit before the Final round.
    #[display("abandoned")]
    Abandoned,
}
