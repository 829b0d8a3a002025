//! Game controller.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::sync::Mutex;

use crate::card::Card;
use crate::options::GameOptions;
use crate::round::{Guess, LastRound, Round};
use crate::source::{CardSource, RandomCards, draw_card};

pub mod state;

pub use state::{GameState, Status};

/// A higher-or-lower game that owns the current state and the card source.
///
/// Every action replaces the stored [`GameState`] with the value returned by
/// the corresponding transition.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: Mutex<GameState>,
    /// Card source used for every draw.
    source: Mutex<Box<dyn CardSource + Send>>,
}

impl Game {
    /// Creates an idle game that draws from a seeded random source.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{Game, GameOptions, Status};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.status(), Status::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_source(options, RandomCards::seeded(seed))
    }

    /// Creates an idle game that draws from the given source.
    #[must_use]
    pub fn with_source<S>(options: GameOptions, source: S) -> Self
    where
        S: CardSource + Send + 'static,
    {
        Self {
            options,
            state: Mutex::new(GameState::idle()),
            source: Mutex::new(Box::new(source)),
        }
    }

    /// Replaces the card source. The current state is kept.
    pub fn set_source<S>(&self, source: S)
    where
        S: CardSource + Send + 'static,
    {
        *self.source.lock() = Box::new(source);
    }

    /// Starts a new game, discarding any previous one, and returns the
    /// first card.
    pub fn start(&self) -> Card {
        let card = draw_card(&mut **self.source.lock());
        *self.state.lock() = GameState::showing(card);
        card
    }

    /// Guesses the rank of the next card.
    ///
    /// Returns the recorded round, or `None` when no game is in progress.
    pub fn guess(&self, guess: Guess) -> Option<Round> {
        let mut state = self.state.lock();
        if !state.accepts_guess() {
            return None;
        }

        let mut source = self.source.lock();
        let previous = core::mem::take(&mut *state);
        *state = previous.guess(guess, &mut **source, &self.options);
        drop(source);

        state.last_round().map(|last| last.round)
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> GameState {
        self.state.lock().clone()
    }

    /// Returns the current status.
    pub fn status(&self) -> Status {
        self.state.lock().status()
    }

    /// Returns the card on display, if any.
    pub fn current_card(&self) -> Option<Card> {
        self.state.lock().current_card()
    }

    /// Returns the current score.
    pub fn score(&self) -> usize {
        self.state.lock().score()
    }

    /// Returns every round of the current game.
    pub fn history(&self) -> Vec<Round> {
        self.state.lock().history().to_vec()
    }

    /// Returns the most recently completed round.
    pub fn last_round(&self) -> Option<LastRound> {
        self.state.lock().last_round()
    }
}
