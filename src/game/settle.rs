use alloc::vec::Vec;

use crate::error::SettleError;
use crate::question::QuestionSource;
use crate::result::{Payout, Settlement, SettlementKind};

use super::{Game, Phase, RoundState};

/// Distance of a guess from the answer. A missing guess is infinitely far.
fn distance(guess: Option<f64>, correct_answer: f64) -> f64 {
    guess.map_or(f64::INFINITY, |g| (g - correct_answer).abs())
}

impl Game {
    /// Awards the pot for the current question.
    ///
    /// If only one player has not folded, they take the whole pot. Otherwise
    /// every non-folded player whose guess is closest to `correct_answer`
    /// receives an equal share. Players without a guess are never closer
    /// than players with one. The pot is emptied; phase, guesses, and folds
    /// are left for [`Game::start_new_question`] to clear.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase is not `Answer`, the answer is not a
    /// finite number, or every player has folded.
    pub fn award_winner(&self, correct_answer: f64) -> Result<Settlement, SettleError> {
        let mut state = self.state.lock();
        Self::settle_locked(&mut state, correct_answer)
    }

    /// Awards the pot using the answer of the current question in `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase is not `Answer`, `source` has no
    /// question for the current ordinal, or settlement itself is rejected.
    pub fn award_from<S>(&self, source: &S) -> Result<Settlement, SettleError>
    where
        S: QuestionSource + ?Sized,
    {
        let mut state = self.state.lock();
        if state.phase != Phase::Answer {
            return Err(SettleError::InvalidState);
        }

        let ordinal = state.question_index;
        let question = source
            .question(ordinal)
            .ok_or(SettleError::QuestionNotFound(ordinal))?;

        Self::settle_locked(&mut state, question.correct_answer)
    }

    #[expect(
        clippy::float_cmp,
        reason = "winners are exactly those at the minimum distance"
    )]
    fn settle_locked(state: &mut RoundState, correct_answer: f64) -> Result<Settlement, SettleError> {
        if state.phase != Phase::Answer {
            return Err(SettleError::InvalidState);
        }
        if !correct_answer.is_finite() {
            return Err(SettleError::InvalidAnswer);
        }

        let active: Vec<usize> = state
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_folded())
            .map(|(seat, _)| seat)
            .collect();

        if active.is_empty() {
            log::warn!(
                "question {} has no players left, pot of {} stays unresolved",
                state.question_index,
                state.pot
            );
            return Err(SettleError::NoActivePlayers);
        }

        let (kind, winners) = if active.len() == 1 {
            (SettlementKind::LastStanding, active)
        } else {
            let closest = active
                .iter()
                .map(|&seat| distance(state.players[seat].guess(), correct_answer))
                .fold(f64::INFINITY, f64::min);
            let winners = active
                .into_iter()
                .filter(|&seat| distance(state.players[seat].guess(), correct_answer) == closest)
                .collect();
            (SettlementKind::Closest, winners)
        };

        let pot = state.pot;
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for player counts"
        )]
        let share = pot / winners.len() as f64;

        let payouts: Vec<Payout> = winners
            .into_iter()
            .map(|seat| {
                let player = &mut state.players[seat];
                player.credit(share);
                Payout {
                    player_id: player.id(),
                    guess: player.guess(),
                    distance: distance(player.guess(), correct_answer),
                    amount: share,
                }
            })
            .collect();
        state.pot = 0.0;

        log::info!(
            "question {} settled: pot of {pot} paid to {} winner(s)",
            state.question_index,
            payouts.len()
        );

        Ok(Settlement {
            correct_answer,
            pot,
            kind,
            payouts,
        })
    }
}
