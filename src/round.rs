//! Guess and round record types.

use crate::card::Card;

/// The player's prediction for the next card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guess {
    /// The next card ranks higher.
    Higher,
    /// The next card ranks lower.
    Lower,
}

impl Guess {
    /// Evaluates the guess against the starting and drawn cards.
    ///
    /// Comparisons are inclusive: a tie counts as a correct guess in either
    /// direction.
    #[must_use]
    pub const fn is_correct(self, start: &Card, next: &Card) -> bool {
        let (start, next) = (start.rank.value(), next.rank.value());
        match self {
            Self::Higher => next >= start,
            Self::Lower => next <= start,
        }
    }

    /// Returns the direction as a lowercase word.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Higher => "higher",
            Self::Lower => "lower",
        }
    }

    /// Returns the arrow shown on the scoreboard.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Higher => "↑",
            Self::Lower => "↓",
        }
    }
}

/// A completed guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// 1-based position within the current game.
    pub index: usize,
    /// The guessed direction.
    pub guess: Guess,
    /// The card shown when the guess was made.
    pub starting_card: Card,
    /// The card drawn to settle the guess.
    pub next_card: Card,
    /// Whether the guess was correct.
    pub success: bool,
}

/// Outcome of the most recent round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The guess was correct and the game continues.
    Correct,
    /// The guess was wrong and the game is over.
    Failed,
}

impl RoundOutcome {
    /// Returns the outcome as a lowercase word.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Failed => "failed",
        }
    }
}

/// The most recently completed round together with its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastRound {
    /// The outcome.
    pub outcome: RoundOutcome,
    /// The round.
    pub round: Round,
}

impl From<Round> for LastRound {
    fn from(round: Round) -> Self {
        let outcome = if round.success {
            RoundOutcome::Correct
        } else {
            RoundOutcome::Failed
        };
        Self { outcome, round }
    }
}
