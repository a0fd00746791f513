use crate::{GameError, core::FinalClue};

use super::{
    ClueRecord, CluePrompt, ClueSession, GameEvent, GamePhase, Responder, ScoreLedger, WagerKind,
    WagerRequest, judge,
};

impl<R> ClueSession<'_, R>
where
    R: Responder + ?Sized,
{
    /// Plays the Final clue.
    ///
    /// The category is revealed before the wager is taken. Any non-negative
    /// wager is accepted, whatever the current score. A pass counts as an
    /// incorrect response. After a miss the player may override once for
    /// `+2 × wager`.
    pub fn present_final(
        &mut self,
        ledger: &mut ScoreLedger,
        clue: &FinalClue,
    ) -> Result<ClueRecord, GameError> {
        self.responder().notify(&GameEvent::FinalRound {
            category: &clue.category,
        });
        let wager = self.read_wager(&WagerRequest {
            kind: WagerKind::Final,
            category: &clue.category,
            total: ledger.total(),
            max: None,
        })?;

        let response = self.responder().answer(&CluePrompt {
            category: &clue.category,
            text: &clue.text,
            points: wager,
            daily_double: false,
        })?;
        let verdict = judge(&response, &clue.response);
        let delta = if verdict.is_correct() {
            ledger.record_final_correct();
            wager
        } else {
            -wager
        };
        ledger.adjust(delta)?;
        log::debug!("Final judged {verdict} ({delta:+}), score {}", ledger.total());
        self.responder().notify(&GameEvent::Judged {
            verdict,
            correct_response: &clue.response,
            delta,
            total: ledger.total(),
        });

        let overridden = !verdict.is_correct() && self.offer_override(&clue.response)?;
        if overridden {
            let credit = 2 * wager;
            ledger.adjust(credit)?;
            ledger.record_final_correct();
            self.responder().notify(&GameEvent::Overridden {
                delta: credit,
                total: ledger.total(),
            });
        }

        let record = ClueRecord {
            phase: GamePhase::FinalRound,
            coord: None,
            category: clue.category.clone(),
            points: wager,
            daily_double: false,
            response,
            correct_response: clue.response.clone(),
            verdict,
            overridden,
            score_after: ledger.total(),
        };
        ledger.push_record(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        GameError, ScoreLedger, SelectionError, Verdict,
        engine::ClueSession,
        fixtures::{self, ScriptedResponder},
    };

    #[test]
    fn test_zero_wager_wrong_answer_leaves_score() {
        let mut ledger = ScoreLedger::new();
        ledger.adjust(3000).unwrap();
        let mut responder = ScriptedResponder::new()
            .wagers(["0"])
            .answers(["Lisbon"])
            .overrides([false]);

        let record = ClueSession::new(&mut responder)
            .present_final(&mut ledger, &fixtures::final_clue())
            .unwrap();

        assert_eq!(record.verdict, Verdict::Incorrect);
        assert_eq!(ledger.total(), 3000);
        assert!(!ledger.final_round_correct());
        assert_eq!(ledger.correct_count(), 0);
    }

    #[test]
    fn test_correct_answer_adds_wager() {
        let mut ledger = ScoreLedger::new();
        ledger.adjust(3000).unwrap();
        let mut responder = ScriptedResponder::new()
            .wagers(["2500"])
            .answers(["Washington DC"]);

        ClueSession::new(&mut responder)
            .present_final(&mut ledger, &fixtures::final_clue())
            .unwrap();

        assert_eq!(ledger.total(), 5500);
        assert!(ledger.final_round_correct());
        assert_eq!(responder.overrides_offered(), 0);
    }

    #[test]
    fn test_wager_has_no_ceiling() {
        let mut ledger = ScoreLedger::new();
        ledger.adjust(1000).unwrap();
        let mut responder = ScriptedResponder::new()
            .wagers(["-10", "50000"])
            .answers(["washington, d.c."]);

        ClueSession::new(&mut responder)
            .present_final(&mut ledger, &fixtures::final_clue())
            .unwrap();

        assert_eq!(ledger.total(), 51000);
        assert_eq!(responder.invalid_inputs(), &[SelectionError::NegativeWager]);
    }

    #[test]
    fn test_unrepresentable_wager_is_reprompted() {
        let mut ledger = ScoreLedger::new();
        ledger.adjust(1000).unwrap();
        let mut responder = ScriptedResponder::new()
            .wagers(["9223372036854775807", "2000"])
            .answers(["Washington DC"]);

        ClueSession::new(&mut responder)
            .present_final(&mut ledger, &fixtures::final_clue())
            .unwrap();

        assert_eq!(ledger.total(), 3000);
        assert_eq!(
            responder.invalid_inputs(),
            &[SelectionError::WagerOverflow {
                wager: i64::MAX,
                total: 1000,
            }]
        );
    }

    #[test]
    fn test_wager_too_large_to_double_is_reprompted() {
        let mut ledger = ScoreLedger::new();
        ledger.adjust(1000).unwrap();
        let mut responder = ScriptedResponder::new()
            .wagers(["5000000000000000000", "500"])
            .answers(["Lisbon"])
            .overrides([true]);

        let record = ClueSession::new(&mut responder)
            .present_final(&mut ledger, &fixtures::final_clue())
            .unwrap();

        assert!(record.overridden);
        assert_eq!(record.points, 500);
        assert_eq!(ledger.total(), 1000 - 500 + 1000);
        assert_eq!(responder.invalid_inputs().len(), 1);
    }

    #[test]
    fn test_pass_loses_wager_and_override_nets_double() {
        let mut ledger = ScoreLedger::new();
        ledger.adjust(4000).unwrap();
        let mut responder = ScriptedResponder::new()
            .wagers(["1000"])
            .answers([""])
            .overrides([true]);

        let record = ClueSession::new(&mut responder)
            .present_final(&mut ledger, &fixtures::final_clue())
            .unwrap();

        assert_eq!(record.verdict, Verdict::Pass);
        assert!(record.overridden);
        assert_eq!(ledger.total(), 4000 - 1000 + 2000);
        assert!(ledger.final_round_correct());
    }

    #[test]
    fn test_missing_wager_aborts() {
        let mut ledger = ScoreLedger::new();
        let mut responder = ScriptedResponder::new();

        let err = ClueSession::new(&mut responder)
            .present_final(&mut ledger, &fixtures::final_clue())
            .unwrap_err();

        assert!(matches!(err, GameError::Input(_)));
        assert!(ledger.history().is_empty());
    }
}
