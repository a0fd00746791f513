//! Game board state machine for replaying archived quiz-show games.
//!
//! The crate is split in two layers, mirroring how a game is played:
//!
//! - [`core`] - Round data: boards, clues, coordinates, the response normalizer,
//!   and the [`ContentProvider`] boundary that supplies archived games
//! - [`engine`] - Play logic: the [`ScoreLedger`], clue presentation and
//!   judging, the Final round, and the [`GameController`] that sequences rounds
//!
//! All user interaction goes through the [`Responder`] trait, so a game can be
//! driven by a terminal, a script, or a test harness.

use std::io;

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[cfg(test)]
mod fixtures;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    #[display("{_0}")]
    Content(ContentError),
    #[display("failed to read player input: {_0}")]
    Input(io::Error),
    #[display("{_0}")]
    Resolve(ResolveError),
    #[display("{_0}")]
    Score(ScoreOverflowError),
}
