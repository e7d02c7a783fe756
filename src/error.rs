//! Error types for round operations.
//!
//! Every error is a policy rejection: the engine leaves the round state exactly
//! as it was before the rejected call.

use thiserror::Error;

/// Errors that can occur when moving between phases or questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhaseError {
    /// The question is already in the answer phase.
    #[error("question is over, start a new question to continue")]
    QuestionOver,
    /// The roster is empty.
    #[error("no players have joined")]
    NoPlayers,
}

/// Errors that can occur while collecting guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Invalid phase for guessing.
    #[error("invalid phase for guessing")]
    InvalidState,
    /// The roster is empty.
    #[error("no players have joined")]
    NoPlayers,
    /// The acting player has folded.
    #[error("player has folded")]
    Folded,
    /// The acting player has already guessed this question.
    #[error("player has already guessed")]
    AlreadyGuessed,
    /// The guess is NaN or infinite.
    #[error("guess must be a finite number")]
    NotFinite,
}

/// Errors that can occur during betting actions (check, bet, fold).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid phase for this action.
    #[error("invalid phase for this action")]
    InvalidState,
    /// The roster is empty.
    #[error("no players have joined")]
    NoPlayers,
    /// The acting player has folded.
    #[error("player has folded")]
    Folded,
    /// A live bet stands, so the player cannot check.
    #[error("cannot check while a bet stands")]
    BetOutstanding,
    /// Insufficient funds for this bet.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Bet amount is negative or not finite.
    #[error("bet amount must be a non-negative finite number")]
    InvalidAmount,
}

/// Errors that can occur while settling the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid phase for settlement.
    #[error("invalid phase for settlement")]
    InvalidState,
    /// The correct answer is NaN or infinite.
    #[error("correct answer must be a finite number")]
    InvalidAnswer,
    /// Every player has folded, the pot is left unresolved.
    #[error("no players remain to receive the pot")]
    NoActivePlayers,
    /// The question source has no record for this ordinal.
    #[error("question {0} not found")]
    QuestionNotFound(usize),
}
