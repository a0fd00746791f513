use quizboard_engine::{CELL_COUNT, ScoreLedger};
use serde::{Deserialize, Serialize};

/// Clues offered per game across the Jeopardy and Double Jeopardy rounds.
#[allow(clippy::cast_possible_truncation)]
pub const CLUES_PER_GAME: u32 = 2 * CELL_COUNT as u32;

/// Daily Double opportunities counted per game.
pub const DAILY_DOUBLES_PER_GAME: u32 = 3;

/// Running totals over every completed game.
///
/// The four totals are authoritative; the averages and percentages are
/// derived from them and recomputed on every fold so the persisted snapshot
/// is self-describing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CumulativeStats {
    games_played: u32,
    correct_response_total: u32,
    correct_daily_double_total: u32,
    correct_final_jeopardy_total: u32,
    avg_correct_responses: f64,
    avg_correct_response_pct: f64,
    correct_daily_double_pct: f64,
    correct_final_jeopardy_pct: f64,
}

impl CumulativeStats {
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub fn correct_response_total(&self) -> u32 {
        self.correct_response_total
    }

    #[must_use]
    pub fn correct_daily_double_total(&self) -> u32 {
        self.correct_daily_double_total
    }

    #[must_use]
    pub fn correct_final_jeopardy_total(&self) -> u32 {
        self.correct_final_jeopardy_total
    }

    #[must_use]
    pub fn avg_correct_responses(&self) -> f64 {
        self.avg_correct_responses
    }

    #[must_use]
    pub fn avg_correct_response_pct(&self) -> f64 {
        self.avg_correct_response_pct
    }

    #[must_use]
    pub fn correct_daily_double_pct(&self) -> f64 {
        self.correct_daily_double_pct
    }

    #[must_use]
    pub fn correct_final_jeopardy_pct(&self) -> f64 {
        self.correct_final_jeopardy_pct
    }

    /// Adds a finished game to the totals.
    ///
    /// Returns `false`, leaving the record untouched, when the ledger belongs
    /// to a game that was abandoned before the Final round was played.
    pub fn fold_game(&mut self, ledger: &ScoreLedger) -> bool {
        if !ledger.is_complete() {
            log::debug!("skipping incomplete game in stats");
            return false;
        }

        self.games_played += 1;
        self.correct_response_total += ledger.correct_count();
        self.correct_daily_double_total += ledger.correct_daily_double_count();
        if ledger.final_round_correct() {
            self.correct_final_jeopardy_total += 1;
        }
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        if self.games_played == 0 {
            self.avg_correct_responses = 0.0;
            self.avg_correct_response_pct = 0.0;
            self.correct_daily_double_pct = 0.0;
            self.correct_final_jeopardy_pct = 0.0;
            return;
        }
        let games = f64::from(self.games_played);
        self.avg_correct_responses = f64::from(self.correct_response_total) / games;
        self.avg_correct_response_pct = self.avg_correct_responses / f64::from(CLUES_PER_GAME);
        self.correct_daily_double_pct = f64::from(self.correct_daily_double_total)
            / (f64::from(DAILY_DOUBLES_PER_GAME) * games);
        self.correct_final_jeopardy_pct = f64::from(self.correct_final_jeopardy_total) / games;
    }
}
