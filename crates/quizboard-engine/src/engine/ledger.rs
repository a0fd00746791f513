use serde::{Deserialize, Serialize};

use crate::core::Coord;

use super::GamePhase;

/// Outcome of judging a response.
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
pub enum Verdict {
    #[display("correct")]
    Correct,
    #[display("incorrect")]
    Incorrect,
    #[display("pass")]
    Pass,
}

/// What happened on a single clue, in play order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    pub phase: GamePhase,
    /// Board position; `None` for the Final clue.
    pub coord: Option<Coord>,
    pub category: String,
    /// Points at stake: the tier value or the wager.
    pub points: i64,
    pub daily_double: bool,
    pub response: String,
    pub correct_response: String,
    pub verdict: Verdict,
    /// Whether the player overrode a pass or incorrect judgment.
    pub overridden: bool,
    pub score_after: i64,
}

impl ClueRecord {
    /// Returns whether the clue ended up credited as correct.
    #[must_use]
    pub fn is_credited(&self) -> bool {
        self.verdict.is_correct() || self.overridden
    }
}

/// A score change that would overflow the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("score {total} cannot absorb {delta:+} points")]
pub struct ScoreOverflowError {
    pub total: i64,
    pub delta: i64,
}

/// Running score and correctness counters for one game.
///
/// The counters only ever grow within a game. `game_complete` is set once the
/// Final round resolves; until then the ledger describes a partial game.
///
/// # Example
///
/// ```
/// use quizboard_engine::ScoreLedger;
///
/// let mut ledger = ScoreLedger::new();
/// ledger.adjust(400).unwrap();
/// ledger.record_correct(false);
/// ledger.adjust(-1000).unwrap();
///
/// assert_eq!(ledger.total(), -600);
/// assert_eq!(ledger.correct_count(), 1);
/// assert!(!ledger.is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    total: i64,
    correct_count: u32,
    correct_daily_double_count: u32,
    final_round_correct: bool,
    game_complete: bool,
    history: Vec<ClueRecord>,
}

impl ScoreLedger {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            correct_count: 0,
            correct_daily_double_count: 0,
            final_round_correct: false,
            game_complete: false,
            history: Vec::new(),
        }
    }

    /// Current score; may be negative.
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.total
    }

    /// Clues answered (or overridden) correctly in the board rounds.
    #[must_use]
    pub const fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub const fn correct_daily_double_count(&self) -> u32 {
        self.correct_daily_double_count
    }

    #[must_use]
    pub const fn final_round_correct(&self) -> bool {
        self.final_round_correct
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.game_complete
    }

    #[must_use]
    pub fn history(&self) -> &[ClueRecord] {
        &self.history
    }

    /// Adds `delta` points to the score.
    ///
    /// Fails without changing the score if the result does not fit in an
    /// `i64`.
    pub const fn adjust(&mut self, delta: i64) -> Result<(), ScoreOverflowError> {
        match self.total.checked_add(delta) {
            Some(total) => {
                self.total = total;
                Ok(())
            }
            None => Err(ScoreOverflowError {
                total: self.total,
                delta,
            }),
        }
    }

    /// Counts a correct board-round response.
    pub const fn record_correct(&mut self, daily_double: bool) {
        self.correct_count += 1;
        if daily_double {
            self.correct_daily_double_count += 1;
        }
    }

    pub fn record_final_correct(&mut self) {
        if self.final_round_correct {
            log::warn!("Final round already credited as correct");
        }
        self.final_round_correct = true;
    }

    pub const fn mark_complete(&mut self) {
        self.game_complete = true;
    }

    pub fn push_record(&mut self, record: ClueRecord) {
        self.history.push(record);
    }
}
