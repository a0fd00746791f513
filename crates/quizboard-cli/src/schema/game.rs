use quizboard_engine::{CategoryContent, Clue, Coord, FinalClue, RoundContent};
use serde::{Deserialize, Serialize};

/// One archived game, as stored in `<archive>/games/<id>.json`.
///
/// Rounds that were never reached on the show may be omitted; asking for
/// them reports the content as unavailable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedGame {
    pub jeopardy: ArchivedRound,
    #[serde(default)]
    pub double_jeopardy: Option<ArchivedRound>,
    #[serde(default)]
    pub final_jeopardy: Option<ArchivedFinal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedRound {
    pub categories: Vec<ArchivedCategory>,
    /// 0-based position of the Daily Double, if the round had one.
    #[serde(default)]
    pub daily_double: Option<Coord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedCategory {
    pub name: String,
    /// Clues from the lowest value down; `null` for clues left unrevealed.
    pub clues: Vec<Option<ArchivedClue>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedClue {
    pub clue: String,
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedFinal {
    pub category: String,
    pub clue: String,
    pub response: String,
}

impl From<ArchivedRound> for RoundContent {
    fn from(round: ArchivedRound) -> Self {
        Self {
            categories: round
                .categories
                .into_iter()
                .map(|category| CategoryContent {
                    name: category.name,
                    clues: category
                        .clues
                        .into_iter()
                        .map(|clue| clue.map(Clue::from))
                        .collect(),
                })
                .collect(),
            daily_double: round.daily_double,
        }
    }
}

impl From<ArchivedClue> for Clue {
    fn from(clue: ArchivedClue) -> Self {
        Self {
            text: clue.clue,
            response: clue.response,
        }
    }
}

impl From<ArchivedFinal> for FinalClue {
    fn from(clue: ArchivedFinal) -> Self {
        Self {
            category: clue.category,
            text: clue.clue,
            response: clue.response,
        }
    }
}
