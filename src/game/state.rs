//! Game state and its transitions.

use alloc::vec::Vec;

use crate::card::Card;
use crate::options::GameOptions;
use crate::round::{Guess, LastRound, Round};
use crate::source::{CardSource, draw_card, draw_different_card};

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// No game has been started yet.
    #[default]
    Idle,
    /// A card is showing and the player may guess.
    Guessing,
    /// The last guess was wrong.
    Finished,
}

impl Status {
    /// Returns the status as a lowercase word.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Guessing => "guessing",
            Self::Finished => "finished",
        }
    }
}

/// A snapshot of one game.
///
/// Transitions consume the previous state and return the next one, so a
/// state value is never observed half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    status: Status,
    current: Option<Card>,
    score: usize,
    history: Vec<Round>,
    last_round: Option<LastRound>,
}

impl GameState {
    /// Returns the state shown before the first game.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            status: Status::Idle,
            current: None,
            score: 0,
            history: Vec::new(),
            last_round: None,
        }
    }

    /// Starts a fresh game showing a newly drawn card.
    #[must_use]
    pub fn start<S: CardSource + ?Sized>(source: &mut S) -> Self {
        Self::showing(draw_card(source))
    }

    /// Starts a fresh game showing `card`.
    #[must_use]
    pub fn showing(card: Card) -> Self {
        tracing::debug!(%card, "game started");
        Self {
            status: Status::Guessing,
            current: Some(card),
            score: 0,
            history: Vec::new(),
            last_round: None,
        }
    }

    /// Applies a guess and returns the resulting state.
    ///
    /// Returns `self` unchanged unless a card is showing and the game is in
    /// [`Status::Guessing`]. A wrong guess finishes the game and leaves the
    /// current card where it was.
    #[must_use]
    pub fn guess<S: CardSource + ?Sized>(
        mut self,
        guess: Guess,
        source: &mut S,
        options: &GameOptions,
    ) -> Self {
        let Some(current) = self.current.filter(|_| self.status == Status::Guessing) else {
            tracing::debug!(status = self.status.as_str(), "guess ignored");
            return self;
        };

        let next = if options.distinct_draws {
            draw_different_card(&current, source)
        } else {
            draw_card(source)
        };
        let success = guess.is_correct(&current, &next);

        let round = Round {
            index: self.history.len() + 1,
            guess,
            starting_card: current,
            next_card: next,
            success,
        };
        self.history.push(round);
        self.last_round = Some(LastRound::from(round));

        if success {
            self.current = Some(next);
            self.score += 1;
        } else {
            self.status = Status::Finished;
        }

        tracing::debug!(
            round = round.index,
            guess = guess.as_str(),
            %current,
            %next,
            success,
            "guess settled"
        );
        self
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the card on display, if any.
    #[must_use]
    pub const fn current_card(&self) -> Option<Card> {
        self.current
    }

    /// Returns the number of correct guesses in this game.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns every round played in this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Returns the most recently completed round.
    #[must_use]
    pub const fn last_round(&self) -> Option<LastRound> {
        self.last_round
    }

    /// Returns whether a guess would currently be applied.
    #[must_use]
    pub const fn accepts_guess(&self) -> bool {
        matches!(self.status, Status::Guessing) && self.current.is_some()
    }
}
