//! A guess-then-bet quiz round engine with optional `no_std` support.
//!
//! Players privately commit a numeric guess, then bet across three sub-rounds
//! while two hints are revealed. The pot goes to whoever guessed closest to
//! the answer, split on ties. The crate provides a [`Game`] type that owns
//! the roster, turn order, phase, and pot, and a [`QuestionSource`] seam for
//! supplying questions.
//!
//! # Example
//!
//! ```
//! use hintbet::{Game, GameOptions, Phase};
//!
//! let game = Game::new(GameOptions::default());
//! let alice = game.add_player("Alice", 100.0);
//! let bob = game.add_player("Bob", 100.0);
//!
//! game.submit_guess(3.0).unwrap();
//! game.submit_guess(9.0).unwrap();
//! assert_eq!(game.phase(), Phase::Bet1);
//!
//! game.bet(10.0).unwrap();
//! game.bet(10.0).unwrap();
//! while game.phase() != Phase::Answer {
//!     game.advance_phase().unwrap();
//! }
//!
//! let settlement = game.award_winner(4.0).unwrap();
//! assert_eq!(settlement.winners().collect::<Vec<_>>(), [alice]);
//! assert_eq!(game.get_player(alice).unwrap().balance(), 110.0);
//! assert_eq!(game.get_player(bob).unwrap().balance(), 90.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod question;
pub mod result;
mod sync;

// Re-export main types
pub use error::{ActionError, GuessError, PhaseError, SettleError};
pub use game::{ActionOutcome, Game, Phase, RoundState};
pub use options::{BettingRotation, GameOptions};
pub use player::{Chips, Player, PlayerId};
pub use question::{HINT_COUNT, Question, QuestionDeck, QuestionSource};
pub use result::{Payout, Settlement, SettlementKind};
