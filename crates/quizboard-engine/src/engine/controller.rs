use crate::{
    GameError,
    core::{Board, ContentError, ContentProvider, Coord, FinalClue, GameId, Round},
};

use super::{
    ClueSession, GameEvent, GameOutcome, GamePhase, Responder, ScoreLedger, Selection,
    SelectionMode, parse_selection,
};

/// Runs one game from the Jeopardy round through the Final round.
///
/// The controller owns the current [`Board`] and the game's [`ScoreLedger`].
/// Each round's board is loaded from the [`ContentProvider`] when the previous
/// board is cleared; the Final clue is loaded when Double Jeopardy ends.
///
/// Nothing is persisted here. Callers finish a game with [`end_game`], which
/// returns the ledger whether or not the game was completed.
///
/// [`end_game`]: Self::end_game
#[derive(Debug, Clone)]
pub struct GameController {
    game_id: GameId,
    mode: SelectionMode,
    phase: GamePhase,
    board: Board,
    final_clue: Option<FinalClue>,
    ledger: ScoreLedger,
    round_announced: bool,
    abandoned: bool,
}

impl GameController {
    /// Loads the Jeopardy board and returns a controller ready to play.
    ///
    /// Fails without creating any game state if the provider cannot supply
    /// the game.
    pub fn start<P>(game_id: GameId, mode: SelectionMode, provider: &P) -> Result<Self, ContentError>
    where
        P: ContentProvider + ?Sized,
    {
        let board = Board::load(Round::Jeopardy, game_id, provider)?;
        let mut controller = Self {
            game_id,
            mode,
            phase: GamePhase::JeopardyRound,
            board,
            final_clue: None,
            ledger: ScoreLedger::new(),
            round_announced: false,
            abandoned: false,
        };
        if controller.board.is_cleared() {
            controller.enter_next_phase(provider)?;
        }
        log::debug!("started game {game_id} in {mode} mode");
        Ok(controller)
    }

    #[must_use]
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The board of the current round, or of the last round once the board
    /// rounds are over.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        self.abandoned
    }

    /// Plays until the game is complete or the player quits.
    pub fn run<P, R>(&mut self, provider: &P, responder: &mut R) -> Result<GameOutcome, GameError>
    where
        P: ContentProvider + ?Sized,
        R: Responder + ?Sized,
    {
        while !self.phase.is_complete() {
            self.play_turn(provider, responder)?;
            if self.abandoned {
                return Ok(GameOutcome::Abandoned);
            }
        }
        Ok(GameOutcome::Completed)
    }

    /// Plays a single clue of the current phase, loading the next round when
    /// the board is cleared.
    pub fn play_turn<P, R>(&mut self, provider: &P, responder: &mut R) -> Result<(), GameError>
    where
        P: ContentProvider + ?Sized,
        R: Responder + ?Sized,
    {
        if self.abandoned {
            return Ok(());
        }
        match self.phase {
            GamePhase::JeopardyRound | GamePhase::DoubleJeopardyRound => {
                self.play_board_turn(provider, responder)
            }
            GamePhase::FinalRound => self.play_final(responder),
            GamePhase::Complete => Ok(()),
        }
    }

    /// Finishes the game and hands back its ledger.
    ///
    /// The ledger is complete only if the Final round was played.
    #[must_use]
    pub fn end_game(self) -> ScoreLedger {
        log::debug!(
            "game {} ended in phase {} with score {}",
            self.game_id,
            self.phase,
            self.ledger.total()
        );
        self.ledger
    }

    fn play_board_turn<P, R>(&mut self, provider: &P, responder: &mut R) -> Result<(), GameError>
    where
        P: ContentProvider + ?Sized,
        R: Responder + ?Sized,
    {
        if !self.round_announced {
            responder.notify(&GameEvent::RoundStarted {
                round: self.board.round(),
                board: &self.board,
            });
            self.round_announced = true;
        }

        let Some(coord) = self.choose_clue(responder)? else {
            log::debug!("player quit game {} during {}", self.game_id, self.phase);
            self.abandoned = true;
            return Ok(());
        };
        ClueSession::new(responder).present(&mut self.board, &mut self.ledger, coord)?;

        if self.board.is_cleared() {
            self.enter_next_phase(provider)?;
        }
        Ok(())
    }

    /// Picks the next clue; `None` when the player quits.
    fn choose_clue<R>(&mut self, responder: &mut R) -> Result<Option<Coord>, GameError>
    where
        R: Responder + ?Sized,
    {
        if self.mode.is_automatic() {
            return Ok(self.board.advance_cursor());
        }
        loop {
            let input = responder.select_clue(&self.board, &self.ledger)?;
            match parse_selection(&input, &self.board) {
                Ok(Selection::Clue(coord)) => return Ok(Some(coord)),
                Ok(Selection::Advance) => return Ok(self.board.advance_cursor()),
                Ok(Selection::Quit) => return Ok(None),
                Err(err) => responder.notify(&GameEvent::InvalidInput(&err)),
            }
        }
    }

    fn play_final<R>(&mut self, responder: &mut R) -> Result<(), GameError>
    where
        R: Responder + ?Sized,
    {
        let clue = self
            .final_clue
            .as_ref()
            .ok_or_else(|| ContentError::Unavailable {
                game_id: self.game_id,
                reason: "Final clue was not loaded".to_owned(),
            })?;
        ClueSession::new(&mut *responder).present_final(&mut self.ledger, clue)?;

        self.ledger.mark_complete();
        self.phase = GamePhase::Complete;
        responder.notify(&GameEvent::GameComplete {
            ledger: &self.ledger,
        });
        Ok(())
    }

    fn enter_next_phase<P>(&mut self, provider: &P) -> Result<(), ContentError>
    where
        P: ContentProvider + ?Sized,
    {
        loop {
            let next = self.phase.next();
            log::debug!("game {}: {} -> {next}", self.game_id, self.phase);
            match next.round() {
                Some(round) => {
                    self.board = Board::load(round, self.game_id, provider)?;
                    self.phase = next;
                    self.round_announced = false;
                    if !self.board.is_cleared() {
                        return Ok(());
                    }
                }
                None => {
                    if next.is_final_round() {
                        self.final_clue = Some(provider.final_clue(self.game_id)?);
                    }
                    self.phase = next;
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        SelectionError, Verdict,
        fixtures::{self, FixtureProvider, GAME_ID, ScriptedResponder},
    };

    fn correct_answers(round: Round) -> Vec<String> {
        Coord::all().map(|c| fixtures::response_for(round, c)).collect()
    }

    #[test]
    fn test_start_unknown_game_fails() {
        let provider = FixtureProvider::new();
        let err = GameController::start(GameId::new(9999), SelectionMode::Manual, &provider)
            .unwrap_err();
        assert!(matches!(err, ContentError::GameNotFound { game_id } if game_id.get() == 9999));
    }

    #[test]
    fn test_start_loads_jeopardy_board() {
        let provider = FixtureProvider::new();
        let controller = GameController::start(GAME_ID, SelectionMode::Manual, &provider).unwrap();
        assert_eq!(controller.phase(), GamePhase::JeopardyRound);
        assert_eq!(controller.board().round(), Round::Jeopardy);
        assert_eq!(controller.board().remaining(), 30);
        assert_eq!(controller.ledger(), &ScoreLedger::new());
    }

    #[test]
    fn test_automatic_game_runs_to_completion() {
        let provider = FixtureProvider::new();
        let mut controller =
            GameController::start(GAME_ID, SelectionMode::Automatic, &provider).unwrap();
        let mut answers = correct_answers(Round::Jeopardy);
        answers.extend(correct_answers(Round::DoubleJeopardy));
        answers.push("Washington D.C.".to_owned());
        let mut responder = ScriptedResponder::new()
            .wagers(["1000", "2000", "0"])
            .answers(answers);

        let outcome = controller.run(&provider, &mut responder).unwrap();

        assert_eq!(outcome, GameOutcome::Completed);
        assert_eq!(controller.phase(), GamePhase::Complete);
        let ledger = controller.end_game();
        assert!(ledger.is_complete());
        assert!(ledger.final_round_correct());
        assert_eq!(ledger.correct_count(), 60);
        assert_eq!(ledger.correct_daily_double_count(), 2);
        // Each board is worth its full value, with the Daily Double tier
        // replaced by the wager.
        assert_eq!(ledger.total(), 18_000 - 800 + 1000 + 36_000 - 1200 + 2000);
        assert_eq!(ledger.history().len(), 61);
        assert_eq!(responder.rounds_started(), &[Round::Jeopardy, Round::DoubleJeopardy]);
        assert_eq!(responder.selections_requested(), 0);
    }

    #[test]
    fn test_round_transition_when_board_cleared() {
        let provider = FixtureProvider::new();
        let mut controller =
            GameController::start(GAME_ID, SelectionMode::Automatic, &provider).unwrap();
        let mut responder = ScriptedResponder::new()
            .wagers(["0"])
            .answers(vec![String::new(); 30])
            .overrides(vec![false; 30]);

        for played in 1..30 {
            controller.play_turn(&provider, &mut responder).unwrap();
            assert_eq!(controller.phase(), GamePhase::JeopardyRound);
            assert_eq!(controller.board().remaining(), 30 - played);
        }
        controller.play_turn(&provider, &mut responder).unwrap();

        assert_eq!(controller.phase(), GamePhase::DoubleJeopardyRound);
        assert_eq!(controller.board().round(), Round::DoubleJeopardy);
        assert_eq!(controller.board().remaining(), 30);
        assert_eq!(controller.board().daily_double(), Some(fixtures::DOUBLE_JEOPARDY_DAILY_DOUBLE));
        assert_eq!(controller.ledger().total(), 0);
    }

    #[test]
    fn test_manual_selection_reprompts_invalid_input() {
        let provider = FixtureProvider::new();
        let mut controller =
            GameController::start(GAME_ID, SelectionMode::Manual, &provider).unwrap();
        let coord = Coord::new(2, 0);
        let mut responder = ScriptedResponder::new()
            .selections(["9 200", "3 300", "banana", "3 200"])
            .answers([fixtures::response(coord)]);

        controller.play_turn(&provider, &mut responder).unwrap();

        assert_eq!(controller.ledger().total(), 200);
        assert_eq!(controller.ledger().correct_count(), 1);
        assert_eq!(controller.board().remaining(), 29);
        assert!(!controller.board().is_selectable(coord));
        assert_eq!(
            responder.invalid_inputs(),
            &[
                SelectionError::CategoryOutOfRange(9),
                SelectionError::TierOutOfRange(300),
                SelectionError::Malformed,
            ]
        );
    }

    #[test]
    fn test_manual_selection_rejects_played_clue() {
        let provider = FixtureProvider::new();
        let mut controller =
            GameController::start(GAME_ID, SelectionMode::Manual, &provider).unwrap();
        let mut responder = ScriptedResponder::new()
            .selections(["2 1", "2 1", "2 2"])
            .answers(["", ""])
            .overrides([false, false]);

        controller.play_turn(&provider, &mut responder).unwrap();
        controller.play_turn(&provider, &mut responder).unwrap();

        assert_eq!(controller.board().remaining(), 28);
        assert_eq!(
            responder.invalid_inputs(),
            &[SelectionError::AlreadyPlayed {
                category: 2,
                value: 200
            }]
        );
    }

    #[test]
    fn test_manual_empty_input_advances_cursor() {
        let provider = FixtureProvider::new();
        let mut controller =
            GameController::start(GAME_ID, SelectionMode::Manual, &provider).unwrap();
        let mut responder = ScriptedResponder::new()
            .selections(["1 1", ""])
            .answers(["", ""])
            .overrides([false, false]);

        controller.play_turn(&provider, &mut responder).unwrap();
        controller.play_turn(&provider, &mut responder).unwrap();

        let played = controller
            .ledger()
            .history()
            .iter()
            .map(|r| r.coord)
            .collect::<Vec<_>>();
        assert_eq!(played, [Some(Coord::new(0, 0)), Some(Coord::new(0, 1))]);
    }

    #[test]
    fn test_quit_abandons_incomplete_game() {
        let provider = FixtureProvider::new();
        let mut controller =
            GameController::start(GAME_ID, SelectionMode::Manual, &provider).unwrap();
        let coord = Coord::new(5, 4);
        let mut responder = ScriptedResponder::new()
            .selections(["6 1000", "q"])
            .answers([fixtures::response(coord)]);

        let outcome = controller.run(&provider, &mut responder).unwrap();

        assert_eq!(outcome, GameOutcome::Abandoned);
        assert!(controller.is_abandoned());
        assert_eq!(controller.phase(), GamePhase::JeopardyRound);
        let ledger = controller.end_game();
        assert!(!ledger.is_complete());
        assert_eq!(ledger.total(), 1000);
    }

    #[test]
    fn test_final_round_zero_wager_wrong_answer() {
        let provider = FixtureProvider::new();
        let mut controller =
            GameController::start(GAME_ID, SelectionMode::Automatic, &provider).unwrap();
        let mut responder = ScriptedResponder::new()
            .wagers(["0", "0", "0"])
            .answers(vec![String::new(); 60].into_iter().chain(["Boston".to_owned()]))
            .overrides(vec![false; 61]);

        controller.run(&provider, &mut responder).unwrap();

        let ledger = controller.end_game();
        assert!(ledger.is_complete());
        assert_eq!(ledger.total(), 0);
        assert!(!ledger.final_round_correct());
        let last = ledger.history().last().unwrap();
        assert_eq!(last.phase, GamePhase::FinalRound);
        assert_eq!(last.verdict, Verdict::Incorrect);
    }

    #[test]
    fn test_missing_round_content_is_fatal() {
        let provider = FixtureProvider::new().without_double_jeopardy();
        let mut controller =
            GameController::start(GAME_ID, SelectionMode::Automatic, &provider).unwrap();
        let mut responder = ScriptedResponder::new()
            .wagers(["0"])
            .answers(vec![String::new(); 30])
            .overrides(vec![false; 30]);

        let err = controller.run(&provider, &mut responder).unwrap_err();

        assert!(matches!(
            err,
            GameError::Content(ContentError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_empty_board_is_skipped() {
        let provider = FixtureProvider::new().with_empty_jeopardy();
        let controller =
            GameController::start(GAME_ID, SelectionMode::Automatic, &provider).unwrap();
        assert_eq!(controller.phase(), GamePhase::DoubleJeopardyRound);
        assert_eq!(controller.board().remaining(), 30);
    }
}
