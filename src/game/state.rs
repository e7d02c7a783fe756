//! Round state types.

extern crate alloc;

use alloc::vec::Vec;

use crate::player::{Chips, Player};

/// Phase of the current question.
///
/// Phases run in a fixed order: `Guessing`, `Bet1`, `Hint1`, `Bet2`, `Hint2`,
/// `Bet3`, `Answer`. `Answer` is terminal until a new question starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Players privately commit their guesses.
    Guessing,
    /// First betting sub-round, no hints shown.
    Bet1,
    /// First hint revealed.
    Hint1,
    /// Second betting sub-round.
    Bet2,
    /// Second hint revealed.
    Hint2,
    /// Final betting sub-round.
    Bet3,
    /// The answer is revealed and the pot can be settled.
    Answer,
}

impl Phase {
    /// Returns the phase that follows this one, or `None` for `Answer`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Guessing => Some(Self::Bet1),
            Self::Bet1 => Some(Self::Hint1),
            Self::Hint1 => Some(Self::Bet2),
            Self::Bet2 => Some(Self::Hint2),
            Self::Hint2 => Some(Self::Bet3),
            Self::Bet3 => Some(Self::Answer),
            Self::Answer => None,
        }
    }

    /// Returns whether this is one of the three betting sub-rounds.
    #[must_use]
    pub const fn is_betting(self) -> bool {
        matches!(self, Self::Bet1 | Self::Bet2 | Self::Bet3)
    }

    /// Returns how many hints are visible in this phase.
    #[must_use]
    pub const fn hints_revealed(self) -> usize {
        match self {
            Self::Guessing | Self::Bet1 => 0,
            Self::Hint1 | Self::Bet2 => 1,
            Self::Hint2 | Self::Bet3 | Self::Answer => 2,
        }
    }
}

/// What an accepted intent did to the turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Action passed to the player at this seat index.
    NextTurn(usize),
    /// The intent closed the phase and the round entered this phase.
    PhaseChanged(Phase),
}

/// Snapshot of the whole round.
///
/// The seat order of `players` is the turn order. Indices are always valid
/// seat indices whenever the roster is non-empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    /// Seated players in turn order.
    pub players: Vec<Player>,
    /// Seat index of the dealer.
    pub dealer_index: usize,
    /// Seat index of the player whose intent is expected.
    pub action_index: usize,
    /// Ordinal of the current question.
    pub question_index: usize,
    /// Current phase.
    pub phase: Phase,
    /// Chips contributed since the last settlement.
    pub pot: Chips,
    /// Highest single contribution in the live betting sub-round.
    pub current_bet: Chips,
    /// Consecutive checks accepted in the live betting sub-round.
    pub check_count: usize,
}

impl RoundState {
    pub(crate) const fn new() -> Self {
        Self {
            players: Vec::new(),
            dealer_index: 0,
            action_index: 0,
            question_index: 0,
            phase: Phase::Guessing,
            pot: 0.0,
            current_bet: 0.0,
            check_count: 0,
        }
    }

    /// Returns the number of players who have not folded.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded()).count()
    }

    /// Returns the acting player, if any.
    #[must_use]
    pub fn acting_player(&self) -> Option<&Player> {
        self.players.get(self.action_index)
    }

    pub(crate) fn acting_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.action_index)
    }

    /// Seat after `index`, wrapping.
    pub(crate) fn seat_after(&self, index: usize) -> usize {
        (index + 1) % self.players.len()
    }

    /// First seat after `index` satisfying `eligible`, looking at every seat at
    /// most once and ending with `index` itself.
    pub(crate) fn next_seat_where(
        &self,
        index: usize,
        eligible: impl Fn(&Player) -> bool,
    ) -> Option<usize> {
        let len = self.players.len();
        (1..=len)
            .map(|offset| (index + offset) % len)
            .find(|&seat| eligible(&self.players[seat]))
    }

    /// Moves to `phase`, applying the per-phase resets.
    pub(crate) fn enter_phase(&mut self, phase: Phase, reset_bet_each_round: bool) {
        match phase {
            Phase::Bet1 => {
                self.current_bet = 0.0;
                self.pot = 0.0;
                self.check_count = 0;
            }
            Phase::Bet2 | Phase::Bet3 => {
                self.check_count = 0;
                if reset_bet_each_round {
                    self.current_bet = 0.0;
                }
            }
            Phase::Guessing | Phase::Hint1 | Phase::Hint2 | Phase::Answer => {}
        }
        self.phase = phase;
    }
}
