use crate::{
    GameError,
    core::{Board, Coord, ResolveError, normalize},
};

use super::{
    ClueRecord, CluePrompt, GameEvent, GamePhase, Responder, ScoreLedger, Verdict, WagerKind,
    WagerRequest, check_wager_headroom, parse_wager,
};

/// Lowest Daily Double ceiling; a larger score raises it.
pub const DAILY_DOUBLE_MIN_CEILING: i64 = 1000;

/// Largest Daily Double wager allowed with `total` points.
#[must_use]
pub fn daily_double_max(total: i64) -> i64 {
    total.max(DAILY_DOUBLE_MIN_CEILING)
}

/// Judges `response` against `correct_response`.
///
/// Blank input is a pass. Otherwise the canonical forms produced by
/// [`normalize`] must match exactly.
#[must_use]
pub fn judge(response: &str, correct_response: &str) -> Verdict {
    if response.trim().is_empty() {
        Verdict::Pass
    } else if normalize(response) == normalize(correct_response) {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

/// Presents clues to a [`Responder`] and settles them on the ledger.
///
/// # Scoring
///
/// | Judgment                 | Score change        | Override credit       |
/// |--------------------------|---------------------|-----------------------|
/// | Correct                  | `+points`           | not offered           |
/// | Incorrect                | `-points`           | `+2 × points`         |
/// | Pass                     | none                | `+points`             |
/// | Pass on a Daily Double   | `-points`           | `+2 × points`         |
///
/// `points` is the tier value, or the wager on a Daily Double. An accepted
/// override undoes the penalty, adds the reward, and counts the clue as
/// correct. A plain pass has no penalty to undo, so its override is worth
/// `+points` rather than `+2 × points`.
#[derive(Debug)]
pub struct ClueSession<'r, R: ?Sized> {
    responder: &'r mut R,
}

impl<'r, R> ClueSession<'r, R>
where
    R: Responder + ?Sized,
{
    pub fn new(responder: &'r mut R) -> Self {
        Self { responder }
    }

    /// Plays the clue at `coord` and resolves it on `board`.
    ///
    /// Fails with [`GameError::Resolve`] before prompting if `coord` is not
    /// selectable; the board and ledger are then untouched.
    pub fn present(
        &mut self,
        board: &mut Board,
        ledger: &mut ScoreLedger,
        coord: Coord,
    ) -> Result<ClueRecord, GameError> {
        let (Some(clue), Some(value)) = (board.clue(coord), board.tier_value(coord.tier)) else {
            return Err(ResolveError { coord }.into());
        };
        if !board.is_selectable(coord) {
            return Err(ResolveError { coord }.into());
        }
        let clue = clue.clone();
        let category = board.category(coord.category).unwrap_or_default().to_owned();
        let daily_double = board.is_daily_double(coord);

        self.responder.notify(&GameEvent::ClueSelected {
            coord,
            category: &category,
            value,
        });

        let points = if daily_double {
            self.responder.notify(&GameEvent::DailyDouble {
                category: &category,
            });
            self.read_wager(&WagerRequest {
                kind: WagerKind::DailyDouble,
                category: &category,
                total: ledger.total(),
                max: Some(daily_double_max(ledger.total())),
            })?
        } else {
            value
        };

        let response = self.responder.answer(&CluePrompt {
            category: &category,
            text: &clue.text,
            points,
            daily_double,
        })?;
        let verdict = judge(&response, &clue.response);
        let penalty = match verdict {
            Verdict::Correct => 0,
            Verdict::Incorrect => points,
            Verdict::Pass if daily_double => points,
            Verdict::Pass => 0,
        };

        let delta = if verdict.is_correct() {
            ledger.record_correct(daily_double);
            points
        } else {
            -penalty
        };
        ledger.adjust(delta)?;
        log::debug!("{coord} judged {verdict} ({delta:+}), score {}", ledger.total());
        self.responder.notify(&GameEvent::Judged {
            verdict,
            correct_response: &clue.response,
            delta,
            total: ledger.total(),
        });

        let overridden = !verdict.is_correct() && self.offer_override(&clue.response)?;
        if overridden {
            let credit = penalty + points;
            ledger.adjust(credit)?;
            ledger.record_correct(daily_double);
            self.responder.notify(&GameEvent::Overridden {
                delta: credit,
                total: ledger.total(),
            });
        }

        board.resolve(coord)?;

        let record = ClueRecord {
            phase: GamePhase::from(board.round()),
            coord: Some(coord),
            category,
            points,
            daily_double,
            response,
            correct_response: clue.response,
            verdict,
            overridden,
            score_after: ledger.total(),
        };
        ledger.push_record(record.clone());
        Ok(record)
    }

    /// Prompts until a valid wager is entered.
    pub(super) fn read_wager(&mut self, request: &WagerRequest<'_>) -> Result<i64, GameError> {
        loop {
            let input = self.responder.wager(request)?;
            match parse_wager(&input, request.max)
                .and_then(|wager| check_wager_headroom(request.total, wager))
            {
                Ok(wager) => return Ok(wager),
                Err(err) => self.responder.notify(&GameEvent::InvalidInput(&err)),
            }
        }
    }

    pub(super) fn offer_override(&mut self, correct_response: &str) -> Result<bool, GameError> {
        Ok(self.responder.confirm_override(correct_response)?)
    }

    pub(super) fn responder(&mut self) -> &mut R {
        &mut *self.responder
    }
}
