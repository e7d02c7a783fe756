use crate::error::PhaseError;

use super::{Game, Phase, RoundState};

impl Game {
    /// Moves the question to the next phase.
    ///
    /// Entering `Bet1` clears the pot, the live bet, and the check count.
    /// Entering `Bet2` or `Bet3` clears the check count. Returns the phase
    /// entered.
    ///
    /// # Errors
    ///
    /// Returns an error if the question is already in the answer phase.
    pub fn advance_phase(&self) -> Result<Phase, PhaseError> {
        let mut state = self.state.lock();
        self.advance_locked(&mut state)
    }

    /// Advances under a lock the caller already holds.
    pub(super) fn advance_locked(&self, state: &mut RoundState) -> Result<Phase, PhaseError> {
        let next = state.phase.next().ok_or(PhaseError::QuestionOver)?;
        self.enter_phase(state, next);
        Ok(next)
    }

    /// Starts the next question.
    ///
    /// The dealer button moves one seat and the player after the new dealer
    /// acts first. Every player's guess and fold are cleared, and the pot,
    /// live bet, and check count return to zero. Returns the new question
    /// ordinal.
    ///
    /// # Errors
    ///
    /// Returns an error if nobody is seated.
    pub fn start_new_question(&self) -> Result<usize, PhaseError> {
        let mut state = self.state.lock();
        if state.players.is_empty() {
            return Err(PhaseError::NoPlayers);
        }

        let dealer = state.seat_after(state.dealer_index);
        let first_to_act = state.seat_after(dealer);

        state.question_index += 1;
        state.dealer_index = dealer;
        state.action_index = first_to_act;
        state.phase = Phase::Guessing;
        state.pot = 0.0;
        state.current_bet = 0.0;
        state.check_count = 0;
        for player in &mut state.players {
            player.reset_for_question();
        }

        log::info!(
            "question {} started, dealer seat {dealer}, seat {first_to_act} to act",
            state.question_index
        );

        Ok(state.question_index)
    }
}
