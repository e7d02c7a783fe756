//! Player representation.

extern crate alloc;

use alloc::string::String;

/// Unique player identifier, assigned in join order starting at 1.
pub type PlayerId = u32;

/// Currency amount. Fractional values are allowed.
pub type Chips = f64;

/// A seated player and their state for the current question.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: PlayerId,
    name: String,
    balance: Chips,
    /// Guess for the current question, if submitted.
    guess: Option<f64>,
    has_guessed: bool,
    folded: bool,
}

impl Player {
    pub(crate) const fn new(id: PlayerId, name: String, balance: Chips) -> Self {
        Self {
            id,
            name,
            balance,
            guess: None,
            has_guessed: false,
            folded: false,
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> Chips {
        self.balance
    }

    /// Returns the guess for the current question.
    #[must_use]
    pub const fn guess(&self) -> Option<f64> {
        self.guess
    }

    /// Returns whether the player has guessed this question.
    #[must_use]
    pub const fn has_guessed(&self) -> bool {
        self.has_guessed
    }

    /// Returns whether the player has folded this question.
    #[must_use]
    pub const fn is_folded(&self) -> bool {
        self.folded
    }

    /// Returns whether the player can still be given a guessing turn.
    #[must_use]
    pub const fn awaiting_guess(&self) -> bool {
        !self.folded && !self.has_guessed
    }

    pub(crate) const fn record_guess(&mut self, value: f64) {
        self.guess = Some(value);
        self.has_guessed = true;
    }

    pub(crate) const fn fold(&mut self) {
        self.folded = true;
    }

    pub(crate) fn debit(&mut self, amount: Chips) {
        self.balance -= amount;
    }

    pub(crate) fn credit(&mut self, amount: Chips) {
        self.balance += amount;
    }

    /// Clears the per-question fields.
    pub(crate) const fn reset_for_question(&mut self) {
        self.guess = None;
        self.has_guessed = false;
        self.folded = false;
    }
}
