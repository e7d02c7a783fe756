//! Round engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::string::String;
use alloc::vec::Vec;

use crate::sync::Mutex;

use crate::options::GameOptions;
use crate::player::{Chips, Player, PlayerId};
use crate::question::{Question, QuestionSource};

mod betting;
mod guess;
mod phase;
mod settle;
pub mod state;

pub use state::{ActionOutcome, Phase, RoundState};

/// A guess-then-bet quiz engine that owns the roster, turn order, and pot.
///
/// All intents act on the player at the current action index. Each call locks
/// the round state once and either applies the whole change or rejects it
/// without touching anything.
pub struct Game {
    /// Session options.
    pub options: GameOptions,
    /// The round state.
    state: Mutex<RoundState>,
    /// Next player ID to assign.
    next_id: AtomicU32,
}

impl Game {
    /// Creates a new session with an empty roster.
    ///
    /// # Example
    ///
    /// ```
    /// use hintbet::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default());
    /// assert_eq!(game.phase(), Phase::Guessing);
    /// assert_eq!(game.player_count(), 0);
    /// ```
    #[must_use]
    pub const fn new(options: GameOptions) -> Self {
        Self {
            options,
            state: Mutex::new(RoundState::new()),
            next_id: AtomicU32::new(1),
        }
    }

    /// Seats a new player at the end of the turn order.
    ///
    /// Neither the name nor the balance is validated. Returns the assigned
    /// player ID.
    pub fn add_player(&self, name: impl Into<String>, balance: Chips) -> PlayerId {
        let mut state = self.state.lock();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let name = name.into();
        log::debug!("player {id} ({name}) seated with balance {balance}");
        state.players.push(Player::new(id, name, balance));
        id
    }

    /// Returns a copy of the full round state.
    pub fn snapshot(&self) -> RoundState {
        self.state.lock().clone()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    /// Returns the chips in the pot.
    pub fn pot(&self) -> Chips {
        self.state.lock().pot
    }

    /// Returns the live bet of the current betting sub-round.
    pub fn current_bet(&self) -> Chips {
        self.state.lock().current_bet
    }

    /// Returns the number of consecutive checks in the current sub-round.
    pub fn check_count(&self) -> usize {
        self.state.lock().check_count
    }

    /// Returns the dealer's seat index.
    pub fn dealer_index(&self) -> usize {
        self.state.lock().dealer_index
    }

    /// Returns the acting player's seat index.
    pub fn action_index(&self) -> usize {
        self.state.lock().action_index
    }

    /// Returns the ordinal of the current question.
    pub fn question_index(&self) -> usize {
        self.state.lock().question_index
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.state.lock().players.len()
    }

    /// Returns the number of players who have not folded this question.
    pub fn active_player_count(&self) -> usize {
        self.state.lock().active_count()
    }

    /// Returns all players in turn order.
    pub fn players(&self) -> Vec<Player> {
        self.state.lock().players.clone()
    }

    /// Returns the player with the given ID.
    pub fn get_player(&self, player_id: PlayerId) -> Option<Player> {
        self.state
            .lock()
            .players
            .iter()
            .find(|p| p.id() == player_id)
            .cloned()
    }

    /// Returns the player whose intent is expected.
    ///
    /// Returns `None` if nobody is seated.
    pub fn current_player(&self) -> Option<Player> {
        self.state.lock().acting_player().cloned()
    }

    /// Returns the question for the current ordinal.
    pub fn current_question<'a, S>(&self, source: &'a S) -> Option<&'a Question>
    where
        S: QuestionSource + ?Sized,
    {
        source.question(self.question_index())
    }

    /// Returns whether the source has a question after the current one.
    pub fn has_next_question<S>(&self, source: &S) -> bool
    where
        S: QuestionSource + ?Sized,
    {
        self.question_index() + 1 < source.len()
    }

    /// Enters `phase`, applying its resets.
    fn enter_phase(&self, state: &mut RoundState, phase: Phase) {
        state.enter_phase(phase, self.options.reset_bet_each_round);
        log::info!("question {} entered {phase:?}", state.question_index);
    }
}
