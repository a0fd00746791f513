//! Test doubles shared by the unit tests.

use std::{collections::VecDeque, io};

use crate::{
    Board, CategoryContent, Clue, CluePrompt, ContentError, ContentProvider, Coord, FinalClue,
    GameEvent, GameId, Responder, Round, RoundContent, ScoreLedger, SelectionError, WagerRequest,
};

pub(crate) const GAME_ID: GameId = GameId::new(1);
pub(crate) const JEOPARDY_DAILY_DOUBLE: Coord = Coord::new(0, 3);
pub(crate) const DOUBLE_JEOPARDY_DAILY_DOUBLE: Coord = Coord::new(2, 2);

pub(crate) fn response_for(round: Round, coord: Coord) -> String {
    let prefix = match round {
        Round::Jeopardy => "J",
        Round::DoubleJeopardy => "DJ",
    };
    format!("The {prefix}-{}{}", coord.category, coord.tier)
}

pub(crate) fn response(coord: Coord) -> String {
    response_for(Round::Jeopardy, coord)
}

fn round_content_for(round: Round, daily_double: Option<Coord>) -> RoundContent {
    let categories = (0..crate::CATEGORY_COUNT)
        .map(|category| CategoryContent {
            name: format!("{round} category {}", category + 1),
            clues: (0..crate::TIER_COUNT)
                .map(|tier| {
                    let coord = Coord::new(category, tier);
                    Some(Clue {
                        text: format!("{round} clue {coord}"),
                        response: response_for(round, coord),
                    })
                })
                .collect(),
        })
        .collect();
    RoundContent {
        categories,
        daily_double,
    }
}

pub(crate) fn round_content(daily_double: Option<Coord>) -> RoundContent {
    round_content_for(Round::Jeopardy, daily_double)
}

pub(crate) fn final_clue() -> FinalClue {
    FinalClue {
        category: "U.S. Capitals".to_owned(),
        text: "Its streets were laid out by Pierre L'Enfant".to_owned(),
        response: "Washington, D.C.".to_owned(),
    }
}

/// Serves a single game, [`GAME_ID`].
#[derive(Debug)]
pub(crate) struct FixtureProvider {
    jeopardy: RoundContent,
    double_jeopardy: Option<RoundContent>,
}

impl FixtureProvider {
    pub(crate) fn new() -> Self {
        Self {
            jeopardy: round_content_for(Round::Jeopardy, Some(JEOPARDY_DAILY_DOUBLE)),
            double_jeopardy: Some(round_content_for(
                Round::DoubleJeopardy,
                Some(DOUBLE_JEOPARDY_DAILY_DOUBLE),
            )),
        }
    }

    pub(crate) fn without_double_jeopardy(mut self) -> Self {
        self.double_jeopardy = None;
        self
    }

    pub(crate) fn with_empty_jeopardy(mut self) -> Self {
        for category in &mut self.jeopardy.categories {
            category.clues.fill(None);
        }
        self
    }

    fn check(game_id: GameId) -> Result<(), ContentError> {
        if game_id == GAME_ID {
            Ok(())
        } else {
            Err(ContentError::GameNotFound { game_id })
        }
    }
}

impl ContentProvider for FixtureProvider {
    fn round(&self, game_id: GameId, round: Round) -> Result<RoundContent, ContentError> {
        Self::check(game_id)?;
        match round {
            Round::Jeopardy => Ok(self.jeopardy.clone()),
            Round::DoubleJeopardy => {
                self.double_jeopardy
                    .clone()
                    .ok_or_else(|| ContentError::Unavailable {
                        game_id,
                        reason: "no Double Jeopardy round".to_owned(),
                    })
            }
        }
    }

    fn final_clue(&self, game_id: GameId) -> Result<FinalClue, ContentError> {
        Self::check(game_id)?;
        Ok(final_clue())
    }
}

/// Replays queued inputs; an empty queue reads as end of input.
#[derive(Debug, Default)]
pub(crate) struct ScriptedResponder {
    selections: VecDeque<String>,
    wagers: VecDeque<String>,
    answers: VecDeque<String>,
    overrides: VecDeque<bool>,
    selections_requested: usize,
    overrides_offered: usize,
    invalid_inputs: Vec<SelectionError>,
    rounds_started: Vec<Round>,
}

fn exhausted(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, format!("no scripted {what}"))
}

impl ScriptedResponder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn selections<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selections.extend(inputs.into_iter().map(Into::into));
        self
    }

    pub(crate) fn wagers<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.wagers.extend(inputs.into_iter().map(Into::into));
        self
    }

    pub(crate) fn answers<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers.extend(inputs.into_iter().map(Into::into));
        self
    }

    pub(crate) fn overrides<I>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        self.overrides.extend(inputs);
        self
    }

    pub(crate) fn selections_requested(&self) -> usize {
        self.selections_requested
    }

    pub(crate) fn overrides_offered(&self) -> usize {
        self.overrides_offered
    }

    pub(crate) fn invalid_inputs(&self) -> &[SelectionError] {
        &self.invalid_inputs
    }

    pub(crate) fn rounds_started(&self) -> &[Round] {
        &self.rounds_started
    }
}

impl Responder for ScriptedResponder {
    fn select_clue(&mut self, _board: &Board, _ledger: &ScoreLedger) -> io::Result<String> {
        self.selections_requested += 1;
        self.selections
            .pop_front()
            .ok_or_else(|| exhausted("selection"))
    }

    fn wager(&mut self, _request: &WagerRequest<'_>) -> io::Result<String> {
        self.wagers.pop_front().ok_or_else(|| exhausted("wager"))
    }

    fn answer(&mut self, _prompt: &CluePrompt<'_>) -> io::Result<String> {
        self.answers.pop_front().ok_or_else(|| exhausted("answer"))
    }

    fn confirm_override(&mut self, _correct_response: &str) -> io::Result<bool> {
        self.overrides_offered += 1;
        self.overrides.pop_front().ok_or_else(|| exhausted("override"))
    }

    fn notify(&mut self, event: &GameEvent<'_>) {
        match event {
            GameEvent::InvalidInput(err) => self.invalid_inputs.push((*err).clone()),
            GameEvent::RoundStarted { round, .. } => self.rounds_started.push(*round),
            _ => {}
        }
    }
}
