//! Round configuration options.

/// How the action passes between players during a betting sub-round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum BettingRotation {
    /// Action moves to the next seat in sequence order, folded or not.
    ///
    /// A folded player reached this way rejects every intent until the
    /// rotation passes them again.
    #[default]
    Sequential,
    /// Action moves to the next seat whose player has not folded.
    SkipFolded,
}

/// Configuration options for a quiz betting session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hintbet::{BettingRotation, GameOptions};
///
/// let options = GameOptions::default()
///     .with_betting_rotation(BettingRotation::SkipFolded)
///     .with_reset_bet_each_round(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Turn order policy for betting sub-rounds.
    pub betting_rotation: BettingRotation,
    /// Whether entering `bet2` and `bet3` also clears the live bet.
    ///
    /// When `false`, a bet placed in an earlier sub-round keeps blocking
    /// checks for the rest of the question.
    pub reset_bet_each_round: bool,
}

impl GameOptions {
    /// Sets the betting rotation policy.
    ///
    /// # Example
    ///
    /// ```
    /// use hintbet::{BettingRotation, GameOptions};
    ///
    /// let options = GameOptions::default().with_betting_rotation(BettingRotation::SkipFolded);
    /// assert_eq!(options.betting_rotation, BettingRotation::SkipFolded);
    /// ```
    #[must_use]
    pub const fn with_betting_rotation(mut self, rotation: BettingRotation) -> Self {
        self.betting_rotation = rotation;
        self
    }

    /// Sets whether each betting sub-round starts without a live bet.
    ///
    /// # Example
    ///
    /// ```
    /// use hintbet::GameOptions;
    ///
    /// let options = GameOptions::default().with_reset_bet_each_round(true);
    /// assert!(options.reset_bet_each_round);
    /// ```
    #[must_use]
    pub const fn with_reset_bet_each_round(mut self, reset: bool) -> Self {
        self.reset_bet_each_round = reset;
        self
    }
}
