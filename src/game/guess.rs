use crate::error::GuessError;
use crate::player::Player;

use super::{ActionOutcome, Game, Phase, RoundState};

impl Game {
    /// Records the acting player's guess for the current question.
    ///
    /// Action then passes to the next player who has neither folded nor
    /// guessed. Once nobody is left to guess, the round enters `Bet1` on its
    /// own.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase is not `Guessing`, nobody is seated, the
    /// acting player has folded or already guessed, or the guess is not a
    /// finite number.
    pub fn submit_guess(&self, value: f64) -> Result<ActionOutcome, GuessError> {
        if !value.is_finite() {
            return Err(GuessError::NotFinite);
        }

        let mut state = self.state.lock();
        if state.phase != Phase::Guessing {
            return Err(GuessError::InvalidState);
        }

        let seat = state.action_index;
        let player = state.acting_player_mut().ok_or(GuessError::NoPlayers)?;

        if player.is_folded() {
            return Err(GuessError::Folded);
        }
        if player.has_guessed() {
            return Err(GuessError::AlreadyGuessed);
        }

        player.record_guess(value);
        log::debug!("player {} locked in a guess", player.id());

        Ok(self.pass_guessing_turn(&mut state, seat))
    }

    /// Hands the guessing turn to the next eligible seat after `seat`, or
    /// closes guessing when there is none.
    pub(super) fn pass_guessing_turn(&self, state: &mut RoundState, seat: usize) -> ActionOutcome {
        if let Some(next) = state.next_seat_where(seat, Player::awaiting_guess) {
            state.action_index = next;
            ActionOutcome::NextTurn(next)
        } else {
            self.enter_phase(state, Phase::Bet1);
            ActionOutcome::PhaseChanged(Phase::Bet1)
        }
    }
}
