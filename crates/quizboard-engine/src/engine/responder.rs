use std::io;

use crate::core::{Board, Coord, Round};

use super::{ScoreLedger, SelectionError, Verdict};

/// Which wager is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum WagerKind {
    DailyDouble,
    Final,
}

#[derive(Debug, Clone, Copy)]
pub struct WagerRequest<'a> {
    pub kind: WagerKind,
    pub category: &'a str,
    /// Score before the wager.
    pub total: i64,
    /// Largest accepted wager, if capped.
    pub max: Option<i64>,
}

#[derive(Debug, Clone, Copy)]
pub struct CluePrompt<'a> {
    pub category: &'a str,
    pub text: &'a str,
    pub points: i64,
    pub daily_double: bool,
}

/// Something the player should be told about.
#[derive(Debug, Clone, Copy)]
pub enum GameEvent<'a> {
    RoundStarted {
        round: Round,
        board: &'a Board,
    },
    ClueSelected {
        coord: Coord,
        category: &'a str,
        value: i64,
    },
    DailyDouble {
        category: &'a str,
    },
    InvalidInput(&'a SelectionError),
    Judged {
        verdict: Verdict,
        correct_response: &'a str,
        delta: i64,
        total: i64,
    },
    Overridden {
        delta: i64,
        total: i64,
    },
    FinalRound {
        category: &'a str,
    },
    GameComplete {
        ledger: &'a ScoreLedger,
    },
}

/// The player side of a game.
///
/// Prompts return the raw text the player typed; parsing and validation
/// happen in the engine, which reports rejected input through
/// [`GameEvent::InvalidInput`] and asks again. An I/O error aborts the game.
pub trait Responder {
    /// Asks which clue to play next. Only called in manual selection mode.
    fn select_clue(&mut self, board: &Board, ledger: &ScoreLedger) -> io::Result<String>;

    fn wager(&mut self, request: &WagerRequest<'_>) -> io::Result<String>;

    /// Shows a clue and returns the response. An empty string is a pass.
    fn answer(&mut self, prompt: &CluePrompt<'_>) -> io::Result<String>;

    /// Offers to count the last response as correct after all.
    fn confirm_override(&mut self, correct_response: &str) -> io::Result<bool>;

    fn notify(&mut self, event: &GameEvent<'_>);
}
