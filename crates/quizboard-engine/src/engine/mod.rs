//! Play logic that drives a game over the round boards.
//!
//! - [`ScoreLedger`] - Running score, correctness counters and clue history
//! - [`ClueSession`] - Presents one clue: wager, answer, judgment, override
//! - [`GameController`] - Sequences the Jeopardy, Double Jeopardy and Final rounds
//! - [`Responder`] - Boundary through which the player is prompted
//!
//! # Game Flow
//!
//! 1. [`GameController::start`] loads the Jeopardy board from a [`ContentProvider`](crate::ContentProvider)
//! 2. Each turn selects a clue (manually or by the board cursor) and presents it
//! 3. When a board is cleared the next round is loaded
//! 4. The Final round is a single wagered clue, after which the ledger is complete
//! 5. [`GameController::end_game`] hands the ledger back for aggregation

pub use self::{clue_session::*, controller::*, input::*, ledger::*, phase::*, responder::*};

mod clue_session;
mod controller;
mod final_round;
mod input;
mod ledger;
mod phase;
mod responder;
