//! Settlement result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::player::{Chips, PlayerId};

/// How the pot was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettlementKind {
    /// Everyone else folded; the last player standing takes the pot.
    LastStanding,
    /// The closest guesses share the pot.
    Closest,
}

/// Amount credited to a single winner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Payout {
    /// The winning player.
    pub player_id: PlayerId,
    /// The player's guess, if they submitted one.
    pub guess: Option<f64>,
    /// Distance from the correct answer (infinite without a guess).
    pub distance: f64,
    /// Amount added to the player's balance.
    pub amount: Chips,
}

/// Result of settling one question.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    /// The answer guesses were measured against.
    pub correct_answer: f64,
    /// The pot that was distributed.
    pub pot: Chips,
    /// How the pot was resolved.
    pub kind: SettlementKind,
    /// One entry per winner, in seat order.
    pub payouts: Vec<Payout>,
}

impl Settlement {
    /// Returns the IDs of the winners in seat order.
    pub fn winners(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.payouts.iter().map(|payout| payout.player_id)
    }

    /// Returns whether the pot was split between several winners.
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.payouts.len() > 1
    }
}
