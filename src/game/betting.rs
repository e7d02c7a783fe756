use crate::error::ActionError;
use crate::options::BettingRotation;
use crate::player::Chips;

use super::{ActionOutcome, Game, Phase, RoundState};

impl Game {
    fn ensure_betting(state: &RoundState) -> Result<(), ActionError> {
        if !state.phase.is_betting() {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Hands the betting turn to the seat after `seat` according to the
    /// configured rotation.
    fn pass_betting_turn(&self, state: &mut RoundState, seat: usize) -> ActionOutcome {
        let next = match self.options.betting_rotation {
            BettingRotation::Sequential => state.seat_after(seat),
            BettingRotation::SkipFolded => state
                .next_seat_where(seat, |p| !p.is_folded())
                .unwrap_or(seat),
        };
        state.action_index = next;
        ActionOutcome::NextTurn(next)
    }

    /// Closes the live betting sub-round and moves to the following phase.
    ///
    /// Betting sub-rounds always have a successor, so the advance succeeds.
    fn close_betting_round(&self, state: &mut RoundState) -> ActionOutcome {
        let next = self.advance_locked(state).unwrap_or(state.phase);
        ActionOutcome::PhaseChanged(next)
    }

    /// Player action: Check (pass without wagering).
    ///
    /// Once every player still in the question has checked in a row, the
    /// betting sub-round ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase is not a betting sub-round, nobody is
    /// seated, the acting player has folded, or a live bet stands.
    pub fn check(&self) -> Result<ActionOutcome, ActionError> {
        let mut state = self.state.lock();
        Self::ensure_betting(&state)?;

        let seat = state.action_index;
        let player = state.acting_player().ok_or(ActionError::NoPlayers)?;
        if player.is_folded() {
            return Err(ActionError::Folded);
        }
        let player_id = player.id();

        if state.current_bet > 0.0 {
            log::debug!(
                "player {player_id} cannot check against a live bet of {}",
                state.current_bet
            );
            return Err(ActionError::BetOutstanding);
        }

        state.check_count += 1;
        log::debug!("player {player_id} checked ({} in a row)", state.check_count);

        if state.check_count >= state.active_count() {
            return Ok(self.close_betting_round(&mut state));
        }

        Ok(self.pass_betting_turn(&mut state, seat))
    }

    /// Player action: Bet (move chips from the balance into the pot).
    ///
    /// The live bet becomes the larger of itself and `amount`, and the run of
    /// checks starts over. A zero bet moves no chips but still restarts the
    /// checks and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative or not finite, the
    /// phase is not a betting sub-round, nobody is seated, the acting player
    /// has folded, or the amount exceeds their balance.
    pub fn bet(&self, amount: Chips) -> Result<ActionOutcome, ActionError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ActionError::InvalidAmount);
        }

        let mut state = self.state.lock();
        Self::ensure_betting(&state)?;

        let seat = state.action_index;
        let player = state.acting_player_mut().ok_or(ActionError::NoPlayers)?;
        if player.is_folded() {
            return Err(ActionError::Folded);
        }
        if player.balance() < amount {
            log::debug!(
                "player {} cannot bet {amount} with a balance of {}",
                player.id(),
                player.balance()
            );
            return Err(ActionError::InsufficientFunds);
        }

        player.debit(amount);
        let player_id = player.id();

        state.pot += amount;
        state.current_bet = state.current_bet.max(amount);
        state.check_count = 0;
        log::debug!("player {player_id} bet {amount}, pot is {}", state.pot);

        Ok(self.pass_betting_turn(&mut state, seat))
    }

    /// Player action: Fold (drop out of the current question).
    ///
    /// When a single player remains, the question jumps straight to the
    /// answer phase. A fold during guessing passes the turn the way a guess
    /// does.
    ///
    /// # Errors
    ///
    /// Returns an error if the question is in the answer phase, nobody is
    /// seated, or the acting player has already folded.
    pub fn fold(&self) -> Result<ActionOutcome, ActionError> {
        let mut state = self.state.lock();
        if state.phase == Phase::Answer {
            return Err(ActionError::InvalidState);
        }

        let seat = state.action_index;
        let player = state.acting_player_mut().ok_or(ActionError::NoPlayers)?;
        if player.is_folded() {
            return Err(ActionError::Folded);
        }

        player.fold();
        log::debug!("player {} folded", player.id());

        if state.active_count() <= 1 {
            self.enter_phase(&mut state, Phase::Answer);
            return Ok(ActionOutcome::PhaseChanged(Phase::Answer));
        }

        if state.phase == Phase::Guessing {
            return Ok(self.pass_guessing_turn(&mut state, seat));
        }

        Ok(self.pass_betting_turn(&mut state, seat))
    }
}
